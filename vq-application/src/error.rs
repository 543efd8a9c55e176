use std::io;

use thiserror::Error;
use vq_core::usecases::Error as ParameterError;

pub use vq_core::repositories;

impl From<repositories::Error> for AppError {
    fn from(err: repositories::Error) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<vq_core::usecases::Error> for AppError {
    fn from(err: vq_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}
