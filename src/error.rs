use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File {} does not exist", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Why a single source row was left out of the output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("missing field '{0}'")]
    MissingField(String),
}
