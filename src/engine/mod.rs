//! The validation engine: time arithmetic, the single-assignment
//! constraint checker, rolling aggregates, the staffing coverage analyzer,
//! and the orchestrator that composes them.

mod aggregate;
mod checker;
mod coverage;
mod minutes;
mod orchestrator;

pub use aggregate::{consecutive_work_days, monthly_hours};
pub use checker::{check_assignment, AssignmentDraft};
pub use coverage::{analyze_coverage, DaySchedule};
pub use minutes::{break_minutes, minutes_to_hours, worked_minutes};
pub use orchestrator::{AssignmentReview, Decision, ValidationEngine};
