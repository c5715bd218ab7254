//! Day-off requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a day-off request.
///
/// An approved request is binding; a pending one is advisory; a rejected
/// one has no effect on scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOffStatus {
    /// Submitted but not yet decided.
    Pending,
    /// Granted; the staff member must not be scheduled.
    Approved,
    /// Declined; scheduling proceeds as normal.
    Rejected,
}

/// A staff member's request not to work on a specific date.
///
/// Multiple requests may exist for the same date only with different
/// statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOffRequest {
    /// The staff member who made the request.
    pub staff_id: String,
    /// The date requested off.
    pub date: NaiveDate,
    /// Current status of the request.
    pub status: DayOffStatus,
    /// Optional free-form reason supplied by the staff member.
    #[serde(default)]
    pub reason: Option<String>,
}
