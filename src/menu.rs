//! The interactive console session: a menu of one-letter commands driving a [`Tree`].
//!
//! The session is generic over its input and output so it can run against stdin/stdout or
//! against in-memory buffers.
//!
//! # Examples
//!
//! ```
//! use roster::menu::Session;
//! use roster::tree::Tree;
//!
//! let input: &[u8] = b"i\n7\nAda\n36\nf\n7\nq\n";
//! let mut output = Vec::new();
//!
//! let mut session = Session::new(Tree::new(), input, &mut output);
//! session.run().unwrap();
//! assert!(session.tree().contains(7));
//!
//! drop(session);
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("Found. Name: Ada, Age:36"));
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::Employee;
use crate::report;
use crate::tree::Tree;

/// Printed before every command prompt.
pub const MENU: &str = "Choose one of the following options:\n\
Q: QUIT: Exits the program and saves the tree in specified file name\n\
I: INSERT: Inserts a given record in the tree\n\
R: REMOVE: Deletes record with the given key (id)\n\
F: FIND: Search for a record with a given key and if found, print the name, and age\n\
FMIN: FIND MIN: Find and print the record with the smallest key\n\
FMAX: FIND MAX: Find and print the record with the largest key\n\
E: MAKE EMPTY: Clears the binary search tree of all records\n\
P: REPORT: Gives a listing of all records in the tree in ascending order of ID numbers\n\n";

/// A menu choice. Parsing ignores case and surrounding whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `Q`: stop, saving the tree if a save path is set.
    Quit,
    /// `I`: prompt for an id, name and age and insert them.
    Insert,
    /// `R`: prompt for an id and remove it.
    Remove,
    /// `F`: prompt for an id and print its name and age.
    Find,
    /// `FMIN`: print the employee with the smallest id.
    FindMin,
    /// `FMAX`: print the employee with the largest id.
    FindMax,
    /// `E`: remove every employee.
    Empty,
    /// `P`: print the in-order id/level listing.
    Report,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "q" => Ok(Self::Quit),
            "i" => Ok(Self::Insert),
            "r" => Ok(Self::Remove),
            "f" => Ok(Self::Find),
            "fmin" => Ok(Self::FindMin),
            "fmax" => Ok(Self::FindMax),
            "e" => Ok(Self::Empty),
            "p" => Ok(Self::Report),
            _ => Err(Error::InvalidCommand(s.trim().to_string())),
        }
    }
}

/// Whether the session should keep reading commands.
enum Flow {
    Continue,
    Quit,
}

/// A console session over a [`Tree`].
pub struct Session<R, W> {
    tree: Tree,
    input: R,
    output: W,
    save_path: Option<PathBuf>,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Start a session editing `tree`.
    pub fn new(tree: Tree, input: R, output: W) -> Self {
        Self {
            tree,
            input,
            output,
            save_path: None,
        }
    }

    /// Write the tree to `path` as CSV (see [`report::to_csv`]) when the session quits.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    /// The tree being edited.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Ends the session, handing back the tree.
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    /// Reads and runs commands until `Q` or the end of input, then saves.
    ///
    /// Bad input (an unknown command, a non-numeric id or age, a missing or duplicate id) is
    /// reported on the output and the session carries on.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the console or the save file can't be read or written.
    pub fn run(&mut self) -> Result<()> {
        write!(self.output, "This program implements a binary search tree.")?;

        loop {
            write!(self.output, "\n\n\n\n{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("input ended");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let outcome = line.parse::<Command>().and_then(|command| {
                debug!(?command, "running command");
                self.execute(command)
            });
            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => {
                    debug!(error = %e, "command failed");
                    write!(self.output, "{}", Self::describe(&e))?;
                }
            }
        }

        self.save()
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Insert => {
                writeln!(self.output, "Add Record")?;
                let Some(id) = self.prompt_number("ID")? else {
                    return Ok(Flow::Quit);
                };
                let Some(name) = self.prompt("Name")? else {
                    return Ok(Flow::Quit);
                };
                let Some(age) = self.prompt_number("Age")? else {
                    return Ok(Flow::Quit);
                };

                self.tree.insert(Employee::new(id, age, name))?;
                write!(self.output, "Record Added")?;
            }
            Command::Remove => {
                writeln!(self.output, "Remove Record")?;
                let Some(id) = self.prompt_number("ID")? else {
                    return Ok(Flow::Quit);
                };

                self.tree.remove(id).ok_or(Error::NotFound(id))?;
                write!(self.output, "Record Removed")?;
            }
            Command::Find => {
                writeln!(self.output, "Find Record")?;
                let Some(id) = self.prompt_number("ID")? else {
                    return Ok(Flow::Quit);
                };

                let employee = self.tree.find(id).ok_or(Error::NotFound(id))?;
                write!(
                    self.output,
                    "Found. Name: {}, Age:{}",
                    employee.name, employee.age
                )?;
            }
            Command::FindMin => {
                let employee = self.tree.min().ok_or(Error::EmptyTree)?;
                writeln!(self.output, "The First Record is")?;
                Self::write_record(&mut self.output, employee)?;
            }
            Command::FindMax => {
                let employee = self.tree.max().ok_or(Error::EmptyTree)?;
                writeln!(self.output, "The Last Record is")?;
                Self::write_record(&mut self.output, employee)?;
            }
            Command::Empty => {
                self.tree.clear();
                write!(self.output, "Tree is Empty")?;
            }
            Command::Report => {
                write!(
                    self.output,
                    "Employee Report:\n{}",
                    report::report(&self.tree)
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn write_record(output: &mut W, employee: &Employee) -> Result<()> {
        write!(
            output,
            "ID: {}\nName: {}\nAge: {}",
            employee.id, employee.name, employee.age
        )?;
        Ok(())
    }

    /// The user-facing message for a failed command.
    fn describe(error: &Error) -> &'static str {
        match error {
            Error::NotFound(_) => "ID not found",
            Error::EmptyTree => report::EMPTY_REPORT,
            Error::DuplicateId(_) => "ID already exists",
            _ => "Invalid Input",
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(path) = &self.save_path {
            std::fs::write(path, report::to_csv(&self.tree))?;
            info!(path = %path.display(), employees = self.tree.len(), "saved tree");
        }
        Ok(())
    }

    /// One line of input without its line ending, or `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_number(&mut self, field: &'static str) -> Result<Option<i32>> {
        let Some(input) = self.prompt(field)? else {
            return Ok(None);
        };
        match input.trim().parse() {
            Ok(number) => Ok(Some(number)),
            Err(_) => Err(Error::InvalidNumber { field, input }),
        }
    }
}

/// Builds a tree of `count` employees with random ids in `1000..2000`. Employee `i` (counting
/// from 1) is named `Employee<i>` and is `20 + i` years old. Ids that come up twice are skipped,
/// so the tree can end up with fewer than `count` employees.
pub fn seeded<G: Rng>(count: usize, rng: &mut G) -> Tree {
    let mut tree = Tree::new();
    for i in 1..=count {
        let id = rng.random_range(1000..2000);
        let age = i32::try_from(i).map_or(i32::MAX, |i| i.saturating_add(20));
        if let Err(e) = tree.insert(Employee::new(id, age, format!("Employee{}", i))) {
            debug!(error = %e, "skipping seed employee");
        }
    }
    info!(requested = count, seeded = tree.len(), "seeded tree");
    tree
}
