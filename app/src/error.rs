//! FILENAME: app/src/error.rs

use persistence::PersistenceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No sheet loaded")]
    NotLoaded,

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Load task failed: {0}")]
    LoadTask(String),
}
