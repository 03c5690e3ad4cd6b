use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use roster::logging::init_logging;
use roster::menu::{seeded, Session};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Keep an employee roster in a binary search tree")]
struct Args {
    /// How many random employees to start with
    #[arg(long, default_value = "25")]
    seed: usize,

    /// Write the roster here as CSV on quit
    #[arg(long)]
    save: Option<PathBuf>,

    /// Log level used when ROSTER_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn run(args: Args) -> roster::Result<()> {
    init_logging(&args.log_level)?;

    let tree = seeded(args.seed, &mut rand::rng());
    let mut session = Session::new(tree, io::stdin().lock(), io::stdout().lock());
    if let Some(path) = args.save {
        session = session.with_save_path(path);
    }
    session.run()
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("roster: {}", e);
            ExitCode::FAILURE
        }
    }
}
