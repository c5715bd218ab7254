//! Staffing requirements.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::boundary;

/// When a staffing requirement applies.
///
/// A requirement either recurs on a weekday or overrides a specific date,
/// never both. The wire format carries two nullable fields (`day_of_week`
/// as a 0–6 index, `specific_date`); the serde boundary rejects rows with
/// both or neither set, so an invalid state cannot be constructed.
///
/// # Example
///
/// ```
/// use roster_engine::models::RequirementWindow;
/// use chrono::Weekday;
///
/// let window: RequirementWindow =
///     serde_json::from_str(r#"{"day_of_week": 1}"#).unwrap();
/// assert_eq!(window, RequirementWindow::Recurring(Weekday::Mon));
///
/// assert!(serde_json::from_str::<RequirementWindow>(
///     r#"{"day_of_week": 1, "specific_date": "2025-06-10"}"#
/// ).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow", into = "RawWindow")]
pub enum RequirementWindow {
    /// Applies every week on the given weekday.
    Recurring(Weekday),
    /// Applies on one calendar date only, replacing any recurring
    /// requirements for that date.
    Specific(NaiveDate),
}

/// Wire shape of a requirement window: two nullable keys.
#[derive(Serialize, Deserialize)]
struct RawWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_of_week: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    specific_date: Option<NaiveDate>,
}

impl TryFrom<RawWindow> for RequirementWindow {
    type Error = String;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        match (raw.day_of_week, raw.specific_date) {
            (Some(index), None) => boundary::weekday_from_index(index)
                .map(RequirementWindow::Recurring)
                .ok_or_else(|| format!("weekday index {} out of range 0-6", index)),
            (None, Some(date)) => Ok(RequirementWindow::Specific(date)),
            (Some(_), Some(_)) => {
                Err("requirement must not set both day_of_week and specific_date".to_string())
            }
            (None, None) => {
                Err("requirement must set one of day_of_week or specific_date".to_string())
            }
        }
    }
}

impl From<RequirementWindow> for RawWindow {
    fn from(window: RequirementWindow) -> Self {
        match window {
            RequirementWindow::Recurring(weekday) => RawWindow {
                day_of_week: Some(boundary::weekday_index(weekday)),
                specific_date: None,
            },
            RequirementWindow::Specific(date) => RawWindow {
                day_of_week: None,
                specific_date: Some(date),
            },
        }
    }
}

/// A store's declared minimum staffing count for a time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRequirement {
    /// The store the requirement belongs to.
    pub store_id: String,
    /// When the requirement applies.
    #[serde(flatten)]
    pub window: RequirementWindow,
    /// Start of the required coverage window.
    #[serde(with = "boundary::hhmm")]
    pub start_time: NaiveTime,
    /// End of the required coverage window.
    #[serde(with = "boundary::hhmm")]
    pub end_time: NaiveTime,
    /// Minimum number of staff that must be on shift throughout the window.
    pub required_count: u32,
}

impl StaffingRequirement {
    /// Returns true if this requirement targets the given date exactly.
    pub fn is_specific_to(&self, date: NaiveDate) -> bool {
        self.window == RequirementWindow::Specific(date)
    }

    /// Returns true if this requirement recurs on the given date's weekday.
    pub fn recurs_on(&self, date: NaiveDate) -> bool {
        self.window == RequirementWindow::Recurring(date.weekday())
    }
}
