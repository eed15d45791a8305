//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Broad classification of a [`MenuError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuErrorKind {
    /// Malformed menu configuration, to be reported to the operator.
    Configuration,
    /// A caller broke an invariant of the tree API.
    Programming,
}

/// Domain errors raised while building a menu tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu got invalid property \"{key}\"")]
    UnknownProperty { key: String },

    #[error("menu property \"{key}\" has invalid value \"{value}\"")]
    InvalidPropertyValue { key: String, value: String },

    #[error("tried to get invalid sub menu \"{id}\"")]
    MissingSubMenu { id: String },
}

impl MenuError {
    pub fn kind(&self) -> MenuErrorKind {
        match self {
            MenuError::UnknownProperty { .. } | MenuError::InvalidPropertyValue { .. } => {
                MenuErrorKind::Configuration
            }
            MenuError::MissingSubMenu { .. } => MenuErrorKind::Programming,
        }
    }
}

/// Result type for menu tree operations.
pub type MenuResult<T> = Result<T, MenuError>;
