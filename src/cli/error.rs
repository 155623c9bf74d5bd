//! CLI-level errors (wraps tree errors)

use thiserror::Error;

use crate::errors::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("serialization failed: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Render(_) => crate::exitcode::SOFTWARE,
            CliError::Tree(e) => match e {
                TreeError::Config(_) | TreeError::InvalidConfig { .. } => crate::exitcode::CONFIG,
                TreeError::Io(_) => crate::exitcode::IOERR,
                _ => crate::exitcode::SOFTWARE,
            },
        }
    }
}
