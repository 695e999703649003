//! Persistence error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Complaint not found: {0}")]
    ComplaintNotFound(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
