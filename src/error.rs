//! Error types for the roster validation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only structural failures live here: a missing staff record, a malformed
//! time string, an inconsistent requirement. Rule violations (day-off
//! conflicts, exceeded hour caps, missing breaks) are business-expected
//! outcomes and are returned as data in a
//! [`ValidationResult`](crate::models::ValidationResult), never as errors.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the roster validation engine.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::StaffNotFound {
///     staff_id: "stf_042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Staff member not found: stf_042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced staff member does not exist. Aborts the check.
    #[error("Staff member not found: {staff_id}")]
    StaffNotFound {
        /// The staff id that could not be resolved.
        staff_id: String,
    },

    /// A time value could not be parsed as a 24-hour `HH:MM` string.
    #[error("Invalid time value '{value}': {message}")]
    InvalidTime {
        /// The offending input.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// An assignment carried inconsistent timing data.
    #[error("Invalid assignment for staff '{staff_id}' on {date}: {message}")]
    InvalidAssignment {
        /// The staff member the assignment belongs to.
        staff_id: String,
        /// The assignment date.
        date: NaiveDate,
        /// What made the assignment invalid.
        message: String,
    },

    /// A staffing requirement was structurally invalid.
    #[error("Invalid staffing requirement: {message}")]
    InvalidRequirement {
        /// What made the requirement invalid.
        message: String,
    },

    /// Rule settings file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rule settings file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persistence collaborator failed to serve a read.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
