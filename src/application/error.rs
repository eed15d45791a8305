//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{MenuError, MenuErrorKind};

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] MenuError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("no menu entry at \"{path}\"")]
    NotFound { path: String },
}

impl ApplicationError {
    /// Whether the error stems from bad configuration rather than a bug.
    pub fn is_configuration(&self) -> bool {
        match self {
            ApplicationError::Config { .. } => true,
            ApplicationError::NotFound { .. } => false,
            ApplicationError::Domain(e) => e.kind() == MenuErrorKind::Configuration,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
