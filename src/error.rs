//! Error types for the event file store.
//!
//! The calendar engine itself has no failure modes; only reading and writing
//! the event file can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unable to read event file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to write event file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON at line {line}, column {column}: {source}")]
    Json {
        line: usize,
        column: usize,
        source: serde_json::Error,
    },

    #[error("unable to serialize events: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("duplicate event id found: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
