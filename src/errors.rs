use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("operation `{0}` is not supported on a leaf node")]
    UnsupportedOperation(&'static str),

    #[error("cycle detected: {0}")]
    CycleDetected(String),

    #[error("node is already attached to a parent")]
    AlreadyAttached,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid config file {path}: {reason}")]
    InvalidConfig { path: std::path::PathBuf, reason: String },

    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
