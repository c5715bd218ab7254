//! Validation outcome models.
//!
//! Rule violations are business-expected outcomes, returned as structured
//! data so the caller can decide to block, warn, or offer an override. They
//! are never surfaced as `Err` values; only structural failures are (see
//! [`crate::error`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of rule a violation relates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The date is an approved day off.
    DayOffConflict,
    /// A pending day-off request exists for the date.
    PendingDayOff,
    /// The staff member marked the weekday as unavailable.
    UnavailableDay,
    /// The assignment falls outside the staff member's preferred window.
    PreferenceMismatch,
    /// The assignment exceeds the daily hours limit.
    DailyHoursExceeded,
    /// Projected monthly hours exceed the monthly limit.
    MonthlyHoursExceeded,
    /// Projected monthly hours fall below the monthly minimum.
    MonthlyHoursBelowMinimum,
    /// The run of consecutive working days exceeds the limit.
    ConsecutiveDaysExceeded,
    /// The shift lacks the statutory break for its length.
    BreakRequirementViolated,
}

/// One rule violation: a kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The violated rule.
    pub kind: ViolationKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    /// Creates a violation from a kind and message.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The outcome of checking a single assignment.
///
/// Errors mean the assignment must not be persisted unless the caller
/// explicitly forces it; warnings are advisory and never block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Blocking violations.
    pub errors: Vec<Violation>,
    /// Advisory violations.
    pub warnings: Vec<Violation>,
}

impl ValidationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a blocking violation.
    pub fn push_error(&mut self, kind: ViolationKind, message: impl Into<String>) {
        self.errors.push(Violation::new(kind, message));
    }

    /// Records an advisory violation.
    pub fn push_warning(&mut self, kind: ViolationKind, message: impl Into<String>) {
        self.warnings.push(Violation::new(kind, message));
    }

    /// Returns true if no blocking violations were recorded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A merged, contiguous time range during which assigned staffing falls
/// below the requirement by a constant amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortageWarning {
    /// The date the shortage occurs on.
    pub date: NaiveDate,
    /// The shortage range as `HH:MM-HH:MM`.
    pub time_range: String,
    /// Staff required throughout the range.
    pub required: u32,
    /// Staff actually assigned throughout the range.
    pub assigned: u32,
    /// Human-readable description of the shortage.
    pub message: String,
}

/// The outcome of analyzing a month's coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// True when no shortage was found.
    pub is_valid: bool,
    /// All shortage intervals, in date-then-time order.
    pub warnings: Vec<ShortageWarning>,
}
