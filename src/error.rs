//! Error types for the roster.

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while maintaining or driving a roster.
///
/// Lookups on the tree itself return `Option`s. These variants exist for
/// callers that need to turn an absent record into a reportable failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An employee with this id is already stored.
    #[error("employee {0} is already in the tree")]
    DuplicateId(i32),

    /// No employee has this id.
    #[error("employee {0} not found")]
    NotFound(i32),

    /// The operation needs at least one employee.
    #[error("tree is empty")]
    EmptyTree,

    /// A menu token that isn't one of the known commands.
    #[error("invalid command: {0:?}")]
    InvalidCommand(String),

    /// A numeric field couldn't be parsed.
    #[error("invalid {field}: {input:?}")]
    InvalidNumber {
        /// Which prompt the input answered, e.g. `"ID"`.
        field: &'static str,
        /// What the user actually typed.
        input: String,
    },

    /// Reading from or writing to the console or a save file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing subscriber couldn't be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}
