//! Staff profile model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A staff member's identity and working limits.
///
/// All limits are optional; an absent limit means "no limit". Hour limits
/// apply across every store the staff member works at, which is why none of
/// them is scoped to a store.
///
/// # Example
///
/// ```
/// use roster_engine::models::StaffProfile;
/// use rust_decimal::Decimal;
///
/// let profile = StaffProfile {
///     id: "stf_001".to_string(),
///     name: "Aiko Tanaka".to_string(),
///     max_hours_per_day: Some(Decimal::from(8)),
///     max_hours_per_month: Some(Decimal::from(160)),
///     min_hours_per_month: None,
///     max_consecutive_days: Some(5),
/// };
/// assert_eq!(profile.max_consecutive_days, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffProfile {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Maximum worked hours allowed in a single day.
    #[serde(default)]
    pub max_hours_per_day: Option<Decimal>,
    /// Maximum worked hours allowed in a calendar month.
    #[serde(default)]
    pub max_hours_per_month: Option<Decimal>,
    /// Minimum worked hours expected in a calendar month.
    #[serde(default)]
    pub min_hours_per_month: Option<Decimal>,
    /// Maximum allowed run of consecutive working days.
    #[serde(default)]
    pub max_consecutive_days: Option<u32>,
}
