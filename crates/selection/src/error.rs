//! Error types for the selection crate.
//!
//! The engine itself is total and never fails; errors exist only at the
//! string boundary, where CLI flags or JSON documents are parsed into the
//! closed enumerations.

use thiserror::Error;

/// Errors that can occur while parsing questionnaire values.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// A string did not match any variant of the target enumeration.
    #[error("unknown value for {field}: {value:?}")]
    UnknownValue { field: &'static str, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SelectionError>;
