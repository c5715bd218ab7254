//! Shift assignment model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::boundary;
use crate::error::{EngineError, EngineResult};

/// One staff member's scheduled work interval on one date, with an optional
/// break.
///
/// Invariants: `start_time < end_time`; if a break is set, it lies inside
/// the shift and is correctly ordered. The engine only evaluates
/// assignments, it never mutates them; [`ShiftAssignment::validate`] is the
/// check callers run before persisting.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftAssignment;
///
/// let json = r#"{
///     "id": "5f8b3a44-9c1d-4e6f-8a2b-0d7c9e1f3a5b",
///     "store_id": "store_01",
///     "staff_id": "stf_001",
///     "date": "2025-06-10",
///     "start_time": "09:00",
///     "end_time": "18:00",
///     "break_start_time": "12:00",
///     "break_end_time": "13:00"
/// }"#;
/// let assignment: ShiftAssignment = serde_json::from_str(json).unwrap();
/// assert!(assignment.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Unique identifier for the assignment.
    pub id: Uuid,
    /// The store the shift is worked at.
    pub store_id: String,
    /// The staff member assigned.
    pub staff_id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// The start of the work interval.
    #[serde(with = "boundary::hhmm")]
    pub start_time: NaiveTime,
    /// The end of the work interval.
    #[serde(with = "boundary::hhmm")]
    pub end_time: NaiveTime,
    /// The start of the break, if one is scheduled.
    #[serde(default, with = "boundary::hhmm_opt")]
    pub break_start_time: Option<NaiveTime>,
    /// The end of the break, if one is scheduled.
    #[serde(default, with = "boundary::hhmm_opt")]
    pub break_end_time: Option<NaiveTime>,
    /// Optional free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShiftAssignment {
    /// Returns the break window when both bounds are set.
    pub fn break_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.break_start_time, self.break_end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Checks the structural invariants of the assignment.
    ///
    /// Returns an error if the end does not follow the start, or if a break
    /// is set but falls outside the shift or is inverted.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_time >= self.end_time {
            return Err(self.invalid("end time must be after start time"));
        }
        if let Some((break_start, break_end)) = self.break_window() {
            if break_start >= break_end {
                return Err(self.invalid("break end must be after break start"));
            }
            if break_start < self.start_time || break_end > self.end_time {
                return Err(self.invalid("break must fall inside the shift"));
            }
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidAssignment {
            staff_id: self.staff_id.clone(),
            date: self.date,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(value: &str) -> NaiveTime {
        boundary::parse_hhmm(value).unwrap()
    }

    fn make_assignment(start: &str, end: &str, brk: Option<(&str, &str)>) -> ShiftAssignment {
        ShiftAssignment {
            id: Uuid::new_v4(),
            store_id: "store_01".to_string(),
            staff_id: "stf_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            start_time: time(start),
            end_time: time(end),
            break_start_time: brk.map(|(s, _)| time(s)),
            break_end_time: brk.map(|(_, e)| time(e)),
            notes: None,
        }
    }

    #[test]
    fn test_validate_accepts_ordered_shift() {
        assert!(make_assignment("09:00", "17:00", None).validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_break_inside_shift() {
        let assignment = make_assignment("09:00", "18:00", Some(("12:00", "13:00")));
        assert!(assignment.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_shift() {
        let assignment = make_assignment("17:00", "09:00", None);
        let error = assignment.validate().unwrap_err();
        assert!(error.to_string().contains("end time must be after"));
    }

    #[test]
    fn test_validate_rejects_zero_length_shift() {
        assert!(make_assignment("09:00", "09:00", None).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_break_outside_shift() {
        let assignment = make_assignment("09:00", "17:00", Some(("08:00", "09:30")));
        assert!(assignment.validate().is_err());

        let assignment = make_assignment("09:00", "17:00", Some(("16:30", "17:30")));
        assert!(assignment.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_break() {
        let assignment = make_assignment("09:00", "17:00", Some(("13:00", "12:00")));
        assert!(assignment.validate().is_err());
    }

    #[test]
    fn test_break_window_requires_both_bounds() {
        let mut assignment = make_assignment("09:00", "17:00", Some(("12:00", "13:00")));
        assert!(assignment.break_window().is_some());

        assignment.break_end_time = None;
        assert!(assignment.break_window().is_none());
    }

    #[test]
    fn test_times_serialize_as_hhmm() {
        let assignment = make_assignment("09:00", "17:30", None);
        let json = serde_json::to_string(&assignment).unwrap();
        assert!(json.contains("\"start_time\":\"09:00\""));
        assert!(json.contains("\"end_time\":\"17:30\""));
    }

    #[test]
    fn test_serialization_round_trip() {
        let assignment = make_assignment("07:15", "15:45", Some(("11:00", "11:45")));
        let json = serde_json::to_string(&assignment).unwrap();
        let deserialized: ShiftAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(assignment, deserialized);
    }
}
