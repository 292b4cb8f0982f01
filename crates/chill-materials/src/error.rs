//! Material property errors.

use chill_core::ChillError;
use thiserror::Error;

/// Result type for material lookups.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors that can occur while resolving material properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// No material with that identifier or alias.
    #[error("Material not found: {material}")]
    NotFound { material: String },

    /// Material exists but not in a usable state at the given conditions
    /// (e.g. aluminium above its melting point).
    #[error("Invalid state for {material}: {reason}")]
    InvalidState { material: String, reason: String },

    /// Non-physical input or output value.
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<MaterialError> for ChillError {
    fn from(err: MaterialError) -> Self {
        match err {
            MaterialError::NotFound { .. } | MaterialError::InvalidArg { .. } => {
                ChillError::InvalidArg {
                    what: err.to_string(),
                }
            }
            MaterialError::InvalidState { .. } | MaterialError::NonPhysical { .. } => {
                ChillError::Invariant {
                    what: err.to_string(),
                }
            }
        }
    }
}
