//! Core data models for the roster validation engine.

mod assignment;
mod boundary;
mod day_off;
mod preference;
mod report;
mod requirement;
mod staff;

pub use assignment::ShiftAssignment;
pub use boundary::{format_hhmm, parse_hhmm, weekday_from_index, weekday_index};
pub use day_off::{DayOffRequest, DayOffStatus};
pub use preference::DayPreference;
pub use report::{CoverageReport, ShortageWarning, ValidationResult, Violation, ViolationKind};
pub use requirement::{RequirementWindow, StaffingRequirement};
pub use staff::StaffProfile;

pub(crate) use boundary::{hhmm, hhmm_opt};
