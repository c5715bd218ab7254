//! Single-assignment constraint checking.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use uuid::Uuid;

use super::{aggregate, minutes};
use crate::config::RuleSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    format_hhmm, DayOffStatus, ShiftAssignment, ValidationResult, ViolationKind,
};
use crate::roster::RosterRepository;

/// A proposed assignment to validate, before anything is persisted.
///
/// When an existing assignment is being edited, set
/// `exclude_assignment_id` to its id so the stored row is not counted a
/// second time by the monthly-hours and streak aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentDraft {
    /// The staff member to assign.
    pub staff_id: String,
    /// The date of the proposed shift.
    pub date: NaiveDate,
    /// Proposed start time.
    pub start_time: NaiveTime,
    /// Proposed end time.
    pub end_time: NaiveTime,
    /// Proposed break start, if any.
    pub break_start_time: Option<NaiveTime>,
    /// Proposed break end, if any.
    pub break_end_time: Option<NaiveTime>,
    /// Stored assignment to ignore while aggregating (edit flow).
    pub exclude_assignment_id: Option<Uuid>,
}

impl AssignmentDraft {
    /// Creates a draft without a break.
    pub fn new(
        staff_id: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
            start_time,
            end_time,
            break_start_time: None,
            break_end_time: None,
            exclude_assignment_id: None,
        }
    }

    /// Sets the break window.
    pub fn with_break(mut self, break_start: NaiveTime, break_end: NaiveTime) -> Self {
        self.break_start_time = Some(break_start);
        self.break_end_time = Some(break_end);
        self
    }

    /// Marks a stored assignment to exclude from aggregation.
    pub fn excluding(mut self, assignment_id: Uuid) -> Self {
        self.exclude_assignment_id = Some(assignment_id);
        self
    }

    /// Builds a draft that re-validates a stored assignment, excluding the
    /// stored row itself.
    pub fn from_assignment(assignment: &ShiftAssignment) -> Self {
        Self {
            staff_id: assignment.staff_id.clone(),
            date: assignment.date,
            start_time: assignment.start_time,
            end_time: assignment.end_time,
            break_start_time: assignment.break_start_time,
            break_end_time: assignment.break_end_time,
            exclude_assignment_id: Some(assignment.id),
        }
    }
}

/// Validates one proposed assignment against every staff rule.
///
/// All rules run; nothing short-circuits, so the caller sees the full
/// picture in one pass. Errors block persistence unless the caller forces;
/// warnings never block. A missing staff profile is a structural failure
/// and aborts with [`EngineError::StaffNotFound`].
pub fn check_assignment<R: RosterRepository>(
    roster: &R,
    rules: &RuleSettings,
    draft: &AssignmentDraft,
) -> EngineResult<ValidationResult> {
    let profile = roster
        .staff_profile(&draft.staff_id)?
        .ok_or_else(|| EngineError::StaffNotFound {
            staff_id: draft.staff_id.clone(),
        })?;

    let mut result = ValidationResult::new();

    // Day-off requests: approved is binding, pending is advisory.
    for request in roster.day_off_requests(&draft.staff_id, draft.date)? {
        match request.status {
            DayOffStatus::Approved => result.push_error(
                ViolationKind::DayOffConflict,
                format!("{} is an approved day off for {}", draft.date, profile.name),
            ),
            DayOffStatus::Pending => result.push_warning(
                ViolationKind::PendingDayOff,
                format!(
                    "{} has a pending day-off request for {}",
                    profile.name, draft.date
                ),
            ),
            DayOffStatus::Rejected => {}
        }
    }

    // Weekday availability and preferred window.
    let weekday = draft.date.weekday();
    if let Some(preference) = roster.day_preference(&draft.staff_id, weekday)? {
        if !preference.available {
            result.push_error(
                ViolationKind::UnavailableDay,
                format!("{} is not available on {}", profile.name, weekday_name(weekday)),
            );
        } else if let Some((preferred_start, preferred_end)) = preference.preferred_window() {
            if draft.start_time < preferred_start || draft.end_time > preferred_end {
                result.push_warning(
                    ViolationKind::PreferenceMismatch,
                    format!(
                        "requested {}-{} falls outside the preferred window {}-{}",
                        format_hhmm(draft.start_time),
                        format_hhmm(draft.end_time),
                        format_hhmm(preferred_start),
                        format_hhmm(preferred_end),
                    ),
                );
            }
        }
    }

    // Daily hours cap.
    let worked = minutes::worked_minutes(
        draft.start_time,
        draft.end_time,
        draft.break_start_time,
        draft.break_end_time,
    );
    let work_hours = minutes::minutes_to_hours(worked);
    if let Some(limit) = profile.max_hours_per_day {
        if work_hours > limit {
            result.push_error(
                ViolationKind::DailyHoursExceeded,
                format!(
                    "{} worked hours exceed the daily limit of {}",
                    work_hours.normalize(),
                    limit.normalize()
                ),
            );
        }
    }

    // Monthly hours cap and floor, projected with this assignment included.
    let projected = aggregate::monthly_hours(
        roster,
        &draft.staff_id,
        draft.date,
        worked,
        draft.exclude_assignment_id,
    )?;
    if let Some(limit) = profile.max_hours_per_month {
        if projected > limit {
            result.push_error(
                ViolationKind::MonthlyHoursExceeded,
                format!(
                    "projected {} monthly hours exceed the limit of {}",
                    projected.normalize(),
                    limit.normalize()
                ),
            );
        }
    }
    if let Some(minimum) = profile.min_hours_per_month {
        if projected < minimum {
            result.push_warning(
                ViolationKind::MonthlyHoursBelowMinimum,
                format!(
                    "projected {} monthly hours fall below the minimum of {}",
                    projected.normalize(),
                    minimum.normalize()
                ),
            );
        }
    }

    // Consecutive working days.
    let scan_cap = profile
        .max_consecutive_days
        .map(|limit| limit.saturating_add(1))
        .unwrap_or(rules.streak_scan_cap);
    let streak = aggregate::consecutive_work_days(
        roster,
        &draft.staff_id,
        draft.date,
        draft.exclude_assignment_id,
        scan_cap,
    )?;
    if let Some(limit) = profile.max_consecutive_days {
        if streak > limit {
            result.push_error(
                ViolationKind::ConsecutiveDaysExceeded,
                format!(
                    "{} consecutive working days exceed the limit of {}",
                    streak, limit
                ),
            );
        }
    }

    // Statutory break for the shift length.
    if let Some(required) = rules.required_break_minutes(work_hours) {
        match (draft.break_start_time, draft.break_end_time) {
            (Some(break_start), Some(break_end)) => {
                let actual = minutes::break_minutes(break_start, break_end);
                if actual < required {
                    result.push_error(
                        ViolationKind::BreakRequirementViolated,
                        format!(
                            "break of {} minutes is shorter than the required {} minutes",
                            actual, required
                        ),
                    );
                }
            }
            _ => result.push_error(
                ViolationKind::BreakRequirementViolated,
                format!(
                    "a shift of {} hours requires a break of at least {} minutes",
                    work_hours.normalize(),
                    required
                ),
            ),
        }
    }

    Ok(result)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
