use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unable to resolve absolute path for '{}': {source}", path.display())]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Relink threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
