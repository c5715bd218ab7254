//! Weekday availability preferences.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::boundary;

/// A staff member's standing preference for one weekday.
///
/// At most one entry exists per (staff, weekday). The weekday travels over
/// the wire as a 0–6 index (0 = Sunday) and the availability flag may arrive
/// as a boolean, a number, or a string; both are normalized during
/// deserialization.
///
/// # Example
///
/// ```
/// use roster_engine::models::DayPreference;
/// use chrono::Weekday;
///
/// let json = r#"{
///     "staff_id": "stf_001",
///     "weekday": 1,
///     "available": "true",
///     "preferred_start_time": "09:00",
///     "preferred_end_time": "17:00"
/// }"#;
/// let preference: DayPreference = serde_json::from_str(json).unwrap();
/// assert_eq!(preference.weekday, Weekday::Mon);
/// assert!(preference.available);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPreference {
    /// The staff member this preference belongs to.
    pub staff_id: String,
    /// The weekday the preference applies to.
    #[serde(with = "boundary::weekday_as_index")]
    pub weekday: Weekday,
    /// Whether the staff member is available to work this weekday.
    #[serde(with = "boundary::loose_bool")]
    pub available: bool,
    /// Preferred earliest start time, if any.
    #[serde(default, with = "boundary::hhmm_opt")]
    pub preferred_start_time: Option<NaiveTime>,
    /// Preferred latest end time, if any.
    #[serde(default, with = "boundary::hhmm_opt")]
    pub preferred_end_time: Option<NaiveTime>,
}

impl DayPreference {
    /// Returns the preferred window as a (start, end) pair when both bounds
    /// are set.
    pub fn preferred_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.preferred_start_time, self.preferred_end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_json(available: &str) -> String {
        format!(
            r#"{{"staff_id": "stf_001", "weekday": 3, "available": {}}}"#,
            available
        )
    }

    #[test]
    fn test_available_accepts_boolean() {
        let preference: DayPreference = serde_json::from_str(&base_json("true")).unwrap();
        assert!(preference.available);

        let preference: DayPreference = serde_json::from_str(&base_json("false")).unwrap();
        assert!(!preference.available);
    }

    #[test]
    fn test_available_accepts_number() {
        let preference: DayPreference = serde_json::from_str(&base_json("1")).unwrap();
        assert!(preference.available);

        let preference: DayPreference = serde_json::from_str(&base_json("0")).unwrap();
        assert!(!preference.available);
    }

    #[test]
    fn test_available_accepts_string() {
        let preference: DayPreference = serde_json::from_str(&base_json("\"true\"")).unwrap();
        assert!(preference.available);

        let preference: DayPreference = serde_json::from_str(&base_json("\"0\"")).unwrap();
        assert!(!preference.available);
    }

    #[test]
    fn test_available_rejects_garbage_string() {
        assert!(serde_json::from_str::<DayPreference>(&base_json("\"maybe\"")).is_err());
    }

    #[test]
    fn test_available_serializes_as_plain_boolean() {
        let preference: DayPreference = serde_json::from_str(&base_json("\"1\"")).unwrap();
        let json = serde_json::to_string(&preference).unwrap();
        assert!(json.contains("\"available\":true"));
    }

    #[test]
    fn test_weekday_index_maps_sunday_zero() {
        let json = r#"{"staff_id": "stf_001", "weekday": 0, "available": true}"#;
        let preference: DayPreference = serde_json::from_str(json).unwrap();
        assert_eq!(preference.weekday, Weekday::Sun);
    }

    #[test]
    fn test_weekday_index_out_of_range_rejected() {
        let json = r#"{"staff_id": "stf_001", "weekday": 9, "available": true}"#;
        assert!(serde_json::from_str::<DayPreference>(json).is_err());
    }

    #[test]
    fn test_preferred_window_requires_both_bounds() {
        let json = r#"{
            "staff_id": "stf_001",
            "weekday": 2,
            "available": true,
            "preferred_start_time": "10:00"
        }"#;
        let preference: DayPreference = serde_json::from_str(json).unwrap();
        assert!(preference.preferred_window().is_none());

        let json = r#"{
            "staff_id": "stf_001",
            "weekday": 2,
            "available": true,
            "preferred_start_time": "10:00",
            "preferred_end_time": "18:00"
        }"#;
        let preference: DayPreference = serde_json::from_str(json).unwrap();
        let (start, end) = preference.preferred_window().unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }
}
