//! Read contract against the persistence collaborator.

use chrono::{NaiveDate, Weekday};

use crate::error::EngineResult;
use crate::models::{
    DayOffRequest, DayPreference, ShiftAssignment, StaffProfile, StaffingRequirement,
};

/// The reads the validation engine performs against persisted roster data.
///
/// The engine treats each call's results as a consistent snapshot and never
/// writes through this trait. Assignment lookups are deliberately keyed by
/// staff id alone: hour caps and streaks are per-staff-member limits across
/// every store they work at, so implementations must not scope these queries
/// to a store.
pub trait RosterRepository: Send + Sync {
    /// Looks up a staff profile by id.
    fn staff_profile(&self, staff_id: &str) -> EngineResult<Option<StaffProfile>>;

    /// Looks up the staff member's preference for a weekday, if any.
    fn day_preference(
        &self,
        staff_id: &str,
        weekday: Weekday,
    ) -> EngineResult<Option<DayPreference>>;

    /// Returns all day-off requests for the staff member on a date.
    fn day_off_requests(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<DayOffRequest>>;

    /// Returns the staff member's assignments on a date, at any store.
    fn assignments_on(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<ShiftAssignment>>;

    /// Returns the staff member's assignments in a calendar month, at any
    /// store.
    fn assignments_in_month(
        &self,
        staff_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<ShiftAssignment>>;

    /// Returns all staffing requirements declared by a store.
    fn staffing_requirements(&self, store_id: &str) -> EngineResult<Vec<StaffingRequirement>>;
}
