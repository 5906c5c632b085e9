//! Error handling for voxctl
//!
//! Interpretation itself never fails: malformed commands surface as data
//! (empty action lists, failed validation). These errors cover catalog
//! construction, configuration loading and the automation boundary.

use crate::interpreter::Intent;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ==================== Catalog Errors ====================

    #[error("Invalid pattern for {intent}: {pattern}: {message}")]
    InvalidPattern {
        intent: Intent,
        pattern: String,
        message: String,
    },

    #[error("Slot count mismatch for {intent}: {pattern} declares {slots} slot(s) but has {groups} group(s)")]
    SlotMismatch {
        intent: Intent,
        pattern: String,
        slots: usize,
        groups: usize,
    },

    #[error("Confidence {confidence} out of range for {intent}")]
    InvalidConfidence { intent: Intent, confidence: f64 },

    #[error("No pattern rule for intent {intent}")]
    MissingRules { intent: Intent },

    #[error("Invalid connective '{connective}': {message}")]
    InvalidConnective { connective: String, message: String },

    // ==================== Configuration Errors ====================

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    // ==================== Execution Errors ====================

    #[error("Action rejected: {0}")]
    Rejected(String),

    #[error("Missing parameter '{name}' for {intent}")]
    MissingParameter { intent: Intent, name: &'static str },

    #[error("Automation back end error: {0}")]
    Backend(String),
}

impl Error {
    /// Whether the error comes from building the pattern catalog
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. }
                | Self::SlotMismatch { .. }
                | Self::InvalidConfidence { .. }
                | Self::MissingRules { .. }
                | Self::InvalidConnective { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
