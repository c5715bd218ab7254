//! Rolling aggregation over a staff member's assignment history.
//!
//! Both aggregates read assignments by staff id alone: hour caps and
//! consecutive-day limits are per-staff-member limits across every store
//! they work at.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::minutes;
use crate::error::EngineResult;
use crate::roster::RosterRepository;

/// Total worked hours for the calendar month containing `reference_date`.
///
/// Sums the worked minutes of every stored assignment in the month
/// (skipping `exclude_assignment_id`, so an assignment being edited is not
/// double-counted), adds `additional_minutes` for the assignment under
/// consideration, and converts to hours.
pub fn monthly_hours<R: RosterRepository>(
    roster: &R,
    staff_id: &str,
    reference_date: NaiveDate,
    additional_minutes: i64,
    exclude_assignment_id: Option<Uuid>,
) -> EngineResult<Decimal> {
    use chrono::Datelike;

    let assignments =
        roster.assignments_in_month(staff_id, reference_date.year(), reference_date.month())?;

    let mut total = additional_minutes;
    for assignment in assignments {
        if Some(assignment.id) == exclude_assignment_id {
            continue;
        }
        total += minutes::worked_minutes(
            assignment.start_time,
            assignment.end_time,
            assignment.break_start_time,
            assignment.break_end_time,
        );
    }

    Ok(minutes::minutes_to_hours(total))
}

/// Length of the consecutive-working-day run through `reference_date`.
///
/// The reference date itself counts as a working day. The scan walks
/// backward, then forward, one day at a time while an assignment exists on
/// the neighboring date (at any store, skipping `exclude_assignment_id`),
/// and stops at the first gap. Each direction scans at most `scan_cap`
/// days; callers pass the staff limit plus one, since anything beyond that
/// is already a violation.
pub fn consecutive_work_days<R: RosterRepository>(
    roster: &R,
    staff_id: &str,
    reference_date: NaiveDate,
    exclude_assignment_id: Option<Uuid>,
    scan_cap: u32,
) -> EngineResult<u32> {
    let mut streak = 1u32;

    let mut cursor = reference_date;
    for _ in 0..scan_cap {
        let Some(previous) = cursor.pred_opt() else {
            break;
        };
        if !works_on(roster, staff_id, previous, exclude_assignment_id)? {
            break;
        }
        streak += 1;
        cursor = previous;
    }

    let mut cursor = reference_date;
    for _ in 0..scan_cap {
        let Some(next) = cursor.succ_opt() else {
            break;
        };
        if !works_on(roster, staff_id, next, exclude_assignment_id)? {
            break;
        }
        streak += 1;
        cursor = next;
    }

    Ok(streak)
}

/// True when the staff member has at least one assignment on `date`, not
/// counting the excluded one.
fn works_on<R: RosterRepository>(
    roster: &R,
    staff_id: &str,
    date: NaiveDate,
    exclude_assignment_id: Option<Uuid>,
) -> EngineResult<bool> {
    Ok(roster
        .assignments_on(staff_id, date)?
        .iter()
        .any(|a| Some(a.id) != exclude_assignment_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_hhmm, ShiftAssignment};
    use crate::roster::MemoryRoster;
    use std::str::FromStr;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn shift(staff_id: &str, store_id: &str, day: &str, start: &str, end: &str) -> ShiftAssignment {
        ShiftAssignment {
            id: Uuid::new_v4(),
            store_id: store_id.to_string(),
            staff_id: staff_id.to_string(),
            date: date(day),
            start_time: parse_hhmm(start).unwrap(),
            end_time: parse_hhmm(end).unwrap(),
            break_start_time: None,
            break_end_time: None,
            notes: None,
        }
    }

    // ==========================================================================
    // AGG-001: monthly hours sum across stores
    // ==========================================================================
    #[test]
    fn test_agg_001_monthly_hours_span_stores() {
        let mut roster = MemoryRoster::new();
        roster
            .insert_assignment(shift("stf_001", "store_01", "2025-06-02", "09:00", "17:00"))
            .unwrap();
        roster
            .insert_assignment(shift("stf_001", "store_02", "2025-06-03", "09:00", "13:00"))
            .unwrap();
        // Different month, ignored.
        roster
            .insert_assignment(shift("stf_001", "store_01", "2025-07-01", "09:00", "17:00"))
            .unwrap();

        let hours = monthly_hours(&roster, "stf_001", date("2025-06-15"), 0, None).unwrap();
        assert_eq!(hours, dec("12"));
    }

    // ==========================================================================
    // AGG-002: additional minutes are added on top
    // ==========================================================================
    #[test]
    fn test_agg_002_additional_minutes_added() {
        let mut roster = MemoryRoster::new();
        roster
            .insert_assignment(shift("stf_001", "store_01", "2025-06-02", "09:00", "17:00"))
            .unwrap();

        let hours = monthly_hours(&roster, "stf_001", date("2025-06-10"), 240, None).unwrap();
        assert_eq!(hours, dec("12"));
    }

    // ==========================================================================
    // AGG-003: excluded assignment is skipped exactly once
    // ==========================================================================
    #[test]
    fn test_agg_003_exclusion_skips_one_assignment() {
        let mut roster = MemoryRoster::new();
        let edited = shift("stf_001", "store_01", "2025-06-02", "09:00", "17:00");
        let edited_id = edited.id;
        roster.insert_assignment(edited).unwrap();
        roster
            .insert_assignment(shift("stf_001", "store_01", "2025-06-03", "09:00", "17:00"))
            .unwrap();

        // Editing the first shift from 8h to 6h: exclude the stored row and
        // pass the new duration as the addend.
        let hours =
            monthly_hours(&roster, "stf_001", date("2025-06-02"), 360, Some(edited_id)).unwrap();
        assert_eq!(hours, dec("14"));
    }

    #[test]
    fn test_monthly_hours_subtract_breaks() {
        let mut roster = MemoryRoster::new();
        let mut entry = shift("stf_001", "store_01", "2025-06-02", "09:00", "18:00");
        entry.break_start_time = Some(parse_hhmm("12:00").unwrap());
        entry.break_end_time = Some(parse_hhmm("13:00").unwrap());
        roster.insert_assignment(entry).unwrap();

        let hours = monthly_hours(&roster, "stf_001", date("2025-06-02"), 0, None).unwrap();
        assert_eq!(hours, dec("8"));
    }

    #[test]
    fn test_monthly_hours_empty_month() {
        let roster = MemoryRoster::new();
        let hours = monthly_hours(&roster, "stf_001", date("2025-06-15"), 0, None).unwrap();
        assert_eq!(hours, Decimal::ZERO);
    }

    // ==========================================================================
    // AGG-004: streak counts both directions from any queried date
    // ==========================================================================
    #[test]
    fn test_agg_004_streak_symmetric_around_reference() {
        let mut roster = MemoryRoster::new();
        for day in ["2025-06-08", "2025-06-09", "2025-06-10", "2025-06-11", "2025-06-12"] {
            roster
                .insert_assignment(shift("stf_001", "store_01", day, "09:00", "17:00"))
                .unwrap();
        }

        for day in ["2025-06-08", "2025-06-09", "2025-06-10", "2025-06-11", "2025-06-12"] {
            let streak =
                consecutive_work_days(&roster, "stf_001", date(day), None, 31).unwrap();
            assert_eq!(streak, 5, "queried from {}", day);
        }
    }

    #[test]
    fn test_streak_isolated_day_is_one() {
        let roster = MemoryRoster::new();
        let streak = consecutive_work_days(&roster, "stf_001", date("2025-06-10"), None, 31).unwrap();
        assert_eq!(streak, 1);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let mut roster = MemoryRoster::new();
        for day in ["2025-06-08", "2025-06-09", "2025-06-12"] {
            roster
                .insert_assignment(shift("stf_001", "store_01", day, "09:00", "17:00"))
                .unwrap();
        }

        let streak = consecutive_work_days(&roster, "stf_001", date("2025-06-09"), None, 31).unwrap();
        assert_eq!(streak, 2);
    }

    #[test]
    fn test_streak_spans_stores() {
        let mut roster = MemoryRoster::new();
        roster
            .insert_assignment(shift("stf_001", "store_01", "2025-06-09", "09:00", "13:00"))
            .unwrap();
        roster
            .insert_assignment(shift("stf_001", "store_02", "2025-06-10", "14:00", "18:00"))
            .unwrap();

        let streak = consecutive_work_days(&roster, "stf_001", date("2025-06-10"), None, 31).unwrap();
        assert_eq!(streak, 2);
    }

    #[test]
    fn test_streak_excluded_assignment_leaves_gap() {
        let mut roster = MemoryRoster::new();
        let edited = shift("stf_001", "store_01", "2025-06-09", "09:00", "17:00");
        let edited_id = edited.id;
        roster.insert_assignment(edited).unwrap();
        roster
            .insert_assignment(shift("stf_001", "store_01", "2025-06-10", "09:00", "17:00"))
            .unwrap();

        // With the 06-09 row excluded, the day no longer counts as worked.
        let streak = consecutive_work_days(
            &roster,
            "stf_001",
            date("2025-06-10"),
            Some(edited_id),
            31,
        )
        .unwrap();
        assert_eq!(streak, 1);
    }

    #[test]
    fn test_streak_respects_scan_cap() {
        let mut roster = MemoryRoster::new();
        for offset in 1..=10 {
            let day = date("2025-06-10") + chrono::Duration::days(offset);
            roster
                .insert_assignment(shift(
                    "stf_001",
                    "store_01",
                    &day.to_string(),
                    "09:00",
                    "17:00",
                ))
                .unwrap();
        }

        // Cap of 3 per direction: 1 (reference) + 3 forward.
        let streak = consecutive_work_days(&roster, "stf_001", date("2025-06-10"), None, 3).unwrap();
        assert_eq!(streak, 4);
    }
}
