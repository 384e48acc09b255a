//! Error types for Seathub Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate event id: {0}")]
    DuplicateId(String),

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(i64),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Buffer already initialized")]
    AlreadyInitialized,

    #[error("No buffer to release")]
    NothingToRelease,

    #[error("Insufficient seats: requested {requested}, reachable {reachable}")]
    InsufficientSeats { requested: u32, reachable: u32 },

    #[error("No contiguous block of {0} seats")]
    NoContiguousBlock(u32),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
