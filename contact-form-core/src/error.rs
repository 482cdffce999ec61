//! Unified error type definition

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export library error type
pub use contact_form_transport::TransportError;

use crate::types::FieldName;

/// One or more required fields were left empty.
///
/// The user-facing message is static and names no field; `missing` is kept
/// for logs and for views that want to highlight inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Please fill in all fields")]
pub struct ValidationError {
    pub missing: Vec<FieldName>,
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Field key is not one of `name`, `email`, `message`
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Configuration rejected by `FormConfig::validate`
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Transport error (converting from library)
    #[error("{0}")]
    Transport(#[from] TransportError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, configuration), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UnknownField(_) | Self::InvalidConfig(_) | Self::Validation(_) => true,
            Self::Transport(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
