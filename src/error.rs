use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("person listed twice: {0}")]
    DuplicatePerson(String),

    #[error("unknown person: {0}")]
    UnknownPerson(String),

    #[error("{0} cannot be friends with themselves")]
    SelfFriendship(String),

    #[error("person name is empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, GraphError>;
