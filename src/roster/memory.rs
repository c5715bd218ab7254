//! In-memory roster storage.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use uuid::Uuid;

use super::repository::RosterRepository;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DayOffRequest, DayPreference, ShiftAssignment, StaffProfile, StaffingRequirement,
};

/// An in-memory [`RosterRepository`] implementation.
///
/// Used by the test suites and by embedders that assemble roster data from
/// elsewhere. Insertion enforces the boundary invariants (assignment time
/// ordering, one preference per (staff, weekday), one assignment per
/// (store, staff, date), one day-off request per (staff, date, status)) so
/// the engine can assume clean snapshots.
#[derive(Debug, Default)]
pub struct MemoryRoster {
    staff: HashMap<String, StaffProfile>,
    preferences: HashMap<String, Vec<DayPreference>>,
    day_offs: Vec<DayOffRequest>,
    assignments: Vec<ShiftAssignment>,
    requirements: Vec<StaffingRequirement>,
}

impl MemoryRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a staff profile.
    pub fn insert_staff(&mut self, profile: StaffProfile) {
        self.staff.insert(profile.id.clone(), profile);
    }

    /// Adds a weekday preference, replacing any existing entry for the same
    /// (staff, weekday).
    pub fn insert_preference(&mut self, preference: DayPreference) {
        let entries = self
            .preferences
            .entry(preference.staff_id.clone())
            .or_default();
        entries.retain(|existing| existing.weekday != preference.weekday);
        entries.push(preference);
    }

    /// Adds a day-off request, replacing any existing entry for the same
    /// (staff, date, status).
    pub fn insert_day_off(&mut self, request: DayOffRequest) {
        self.day_offs.retain(|existing| {
            !(existing.staff_id == request.staff_id
                && existing.date == request.date
                && existing.status == request.status)
        });
        self.day_offs.push(request);
    }

    /// Adds an assignment after validating its structural invariants.
    ///
    /// A second assignment for the same (store, staff, date) with a
    /// different id is a conflict; the caller should update the existing
    /// one instead. Re-inserting the same id replaces it.
    pub fn insert_assignment(&mut self, assignment: ShiftAssignment) -> EngineResult<()> {
        assignment.validate()?;
        let conflict = self.assignments.iter().any(|existing| {
            existing.id != assignment.id
                && existing.store_id == assignment.store_id
                && existing.staff_id == assignment.staff_id
                && existing.date == assignment.date
        });
        if conflict {
            return Err(EngineError::StorageError {
                message: format!(
                    "assignment already exists for staff '{}' at store '{}' on {}, use update",
                    assignment.staff_id, assignment.store_id, assignment.date
                ),
            });
        }
        self.assignments.retain(|existing| existing.id != assignment.id);
        self.assignments.push(assignment);
        Ok(())
    }

    /// Removes an assignment by id. Returns true if one was removed.
    pub fn remove_assignment(&mut self, id: Uuid) -> bool {
        let before = self.assignments.len();
        self.assignments.retain(|existing| existing.id != id);
        self.assignments.len() != before
    }

    /// Adds a staffing requirement after checking its window is ordered
    /// and its headcount is positive.
    pub fn insert_requirement(&mut self, requirement: StaffingRequirement) -> EngineResult<()> {
        if requirement.start_time >= requirement.end_time {
            return Err(EngineError::InvalidRequirement {
                message: format!(
                    "window end {} must be after start {}",
                    crate::models::format_hhmm(requirement.end_time),
                    crate::models::format_hhmm(requirement.start_time)
                ),
            });
        }
        if requirement.required_count == 0 {
            return Err(EngineError::InvalidRequirement {
                message: "required_count must be at least 1".to_string(),
            });
        }
        self.requirements.push(requirement);
        Ok(())
    }
}

impl RosterRepository for MemoryRoster {
    fn staff_profile(&self, staff_id: &str) -> EngineResult<Option<StaffProfile>> {
        Ok(self.staff.get(staff_id).cloned())
    }

    fn day_preference(
        &self,
        staff_id: &str,
        weekday: Weekday,
    ) -> EngineResult<Option<DayPreference>> {
        Ok(self
            .preferences
            .get(staff_id)
            .and_then(|entries| entries.iter().find(|p| p.weekday == weekday))
            .cloned())
    }

    fn day_off_requests(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<DayOffRequest>> {
        Ok(self
            .day_offs
            .iter()
            .filter(|r| r.staff_id == staff_id && r.date == date)
            .cloned()
            .collect())
    }

    fn assignments_on(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Vec<ShiftAssignment>> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.staff_id == staff_id && a.date == date)
            .cloned()
            .collect())
    }

    fn assignments_in_month(
        &self,
        staff_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<ShiftAssignment>> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| {
                a.staff_id == staff_id && a.date.year() == year && a.date.month() == month
            })
            .cloned()
            .collect())
    }

    fn staffing_requirements(&self, store_id: &str) -> EngineResult<Vec<StaffingRequirement>> {
        Ok(self
            .requirements
            .iter()
            .filter(|r| r.store_id == store_id)
            .cloned()
            .collect())
    }
}
