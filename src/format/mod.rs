//! This module defines the serializable boundary shapes consumed by the HTTP
//! facade and the data seeder, together with coded errors surfaced to callers.

extern crate serde_json;

pub mod problem;
pub mod solution;

mod validation;
pub use self::validation::{validate_edge, validate_node, validate_weights};

use serde::Serialize;

/// No path exists between the requested nodes.
pub const NO_ROUTE_FOUND: &str = "NO_ROUTE_FOUND";
/// A required field is missing or malformed.
pub const INVALID_INPUT: &str = "INVALID_INPUT";
/// An unknown scenario name was requested.
pub const INVALID_SCENARIO: &str = "INVALID_SCENARIO";
/// An unexpected internal state was reached.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// A coded error returned across the kernel boundary.
#[derive(Clone, Debug, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` with details.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Creates an invalid input error with given cause.
    pub fn invalid_input(cause: String) -> Self {
        Self::new(INVALID_INPUT.to_string(), cause, "correct the request payload and resubmit".to_string())
    }

    /// Formats multiple errors into string.
    pub fn format_many(errors: &[Self], separator: &str) -> String {
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}
