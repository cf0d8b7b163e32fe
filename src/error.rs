//! Error types for the payroll document engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing salaries and
//! rendering documents. Missing or unreadable image assets are deliberately
//! absent from this list: they never fail a render.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll document engine.
///
/// # Example
///
/// ```
/// use payroll_docs::error::EngineError;
///
/// let error = EngineError::InvalidDocumentType {
///     document_type: "bonus".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid document type: bonus");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested document type is outside the supported set.
    #[error("Invalid document type: {document_type}")]
    InvalidDocumentType {
        /// The tag supplied by the caller.
        document_type: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The identifier that could not be resolved.
        employee_id: Uuid,
    },

    /// A request field held a value the engine cannot work with.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The layout engine failed to produce a document.
    #[error("Rendering failed: {message}")]
    RenderError {
        /// A description of the rendering failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<lopdf::Error> for EngineError {
    fn from(error: lopdf::Error) -> Self {
        EngineError::RenderError {
            message: error.to_string(),
        }
    }
}
