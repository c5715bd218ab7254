//! Staffing coverage analysis over a month of assignments.
//!
//! Each requirement window is discretized into fixed-width slots (15
//! minutes by default). Runs of slots short by the same amount are merged
//! into a single [`ShortageWarning`]; a change in the degree of shortage
//! mid-run splits the range.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::config::RuleSettings;
use crate::models::{
    CoverageReport, ShiftAssignment, ShortageWarning, StaffingRequirement,
};

/// One date's worth of assignments in a month schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    /// The calendar date.
    pub date: NaiveDate,
    /// All assignments scheduled on that date.
    pub assignments: Vec<ShiftAssignment>,
}

/// Analyzes a month of assignments against a store's staffing requirements.
///
/// For each date, specific-date requirements replace the recurring weekday
/// requirements when any exist; dates with no applicable requirement are
/// skipped. A slot counts an assignment when the assignment's work interval
/// covers the whole slot and the slot is not inside the assignment's break.
///
/// The analysis is a pure function of its inputs: re-running it on the same
/// schedule yields the same report.
pub fn analyze_coverage(
    schedule: &[DaySchedule],
    requirements: &[StaffingRequirement],
    rules: &RuleSettings,
) -> CoverageReport {
    let slot_minutes = i64::from(rules.slot_minutes.max(1));
    let mut warnings = Vec::new();

    for day in schedule {
        let specific: Vec<&StaffingRequirement> = requirements
            .iter()
            .filter(|r| r.is_specific_to(day.date))
            .collect();
        let applicable = if specific.is_empty() {
            requirements
                .iter()
                .filter(|r| r.recurs_on(day.date))
                .collect()
        } else {
            specific
        };

        for requirement in applicable {
            scan_requirement(day, requirement, slot_minutes, &mut warnings);
        }
    }

    CoverageReport {
        is_valid: warnings.is_empty(),
        warnings,
    }
}

/// Walks one requirement's slots in order, merging equal-shortage runs.
fn scan_requirement(
    day: &DaySchedule,
    requirement: &StaffingRequirement,
    slot_minutes: i64,
    warnings: &mut Vec<ShortageWarning>,
) {
    let window_start = minute_of_day(requirement.start_time);
    let window_end = minute_of_day(requirement.end_time);
    let required = i64::from(requirement.required_count);

    // Open shortage interval: (start minute, shortage level > 0).
    let mut open: Option<(i64, i64)> = None;

    let mut cursor = window_start;
    while cursor < window_end {
        let slot_end = (cursor + slot_minutes).min(window_end);
        let coverage = day
            .assignments
            .iter()
            .filter(|a| covers_slot(a, cursor, slot_end))
            .count() as i64;
        let shortage = required - coverage;

        match open {
            Some((opened_at, level)) if shortage != level => {
                emit(day.date, requirement, opened_at, cursor, level, warnings);
                open = (shortage > 0).then_some((cursor, shortage));
            }
            None if shortage > 0 => open = Some((cursor, shortage)),
            _ => {}
        }

        cursor = slot_end;
    }

    if let Some((opened_at, level)) = open {
        emit(day.date, requirement, opened_at, window_end, level, warnings);
    }
}

/// True when the assignment staffs the whole slot.
///
/// The work interval must cover the slot, and the slot must not lie inside
/// the assignment's break window.
fn covers_slot(assignment: &ShiftAssignment, slot_start: i64, slot_end: i64) -> bool {
    let work_start = minute_of_day(assignment.start_time);
    let work_end = minute_of_day(assignment.end_time);
    if !(work_start <= slot_start && slot_end <= work_end) {
        return false;
    }
    if let Some((break_start, break_end)) = assignment.break_window() {
        let break_start = minute_of_day(break_start);
        let break_end = minute_of_day(break_end);
        if break_start <= slot_start && slot_end <= break_end {
            return false;
        }
    }
    true
}

fn emit(
    date: NaiveDate,
    requirement: &StaffingRequirement,
    start_minute: i64,
    end_minute: i64,
    level: i64,
    warnings: &mut Vec<ShortageWarning>,
) {
    let required = requirement.required_count;
    let assigned = (i64::from(required) - level).max(0) as u32;
    let time_range = format!("{}-{}", label(start_minute), label(end_minute));
    warnings.push(ShortageWarning {
        date,
        time_range: time_range.clone(),
        required,
        assigned,
        message: format!(
            "{} {}: {} staff required, {} assigned",
            date, time_range, required, assigned
        ),
    });
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) / 60
}

fn label(minute: i64) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
