//! Rule settings and their YAML loader.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One break-law tier: shifts longer than `min_work_hours` require at least
/// `required_break_minutes` of break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRule {
    /// Worked-hours threshold (exclusive) above which the rule applies.
    pub min_work_hours: Decimal,
    /// Minimum break length in minutes once the threshold is exceeded.
    pub required_break_minutes: i64,
}

/// Tunable parameters of the validation engine.
///
/// [`RuleSettings::default`] supplies the statutory values, so embedders
/// only need a file when a deployment overrides them.
///
/// # File format
///
/// ```yaml
/// break_rules:
///   - min_work_hours: "8"
///     required_break_minutes: 60
///   - min_work_hours: "6"
///     required_break_minutes: 45
/// slot_minutes: 15
/// streak_scan_cap: 62
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Break-law tiers. The tier with the highest exceeded threshold wins.
    pub break_rules: Vec<BreakRule>,
    /// Width of a coverage slot in minutes.
    pub slot_minutes: u32,
    /// Per-direction bound on the consecutive-day scan, used when a staff
    /// profile sets no consecutive-day limit of its own.
    pub streak_scan_cap: u32,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            break_rules: vec![
                BreakRule {
                    min_work_hours: Decimal::from(8),
                    required_break_minutes: 60,
                },
                BreakRule {
                    min_work_hours: Decimal::from(6),
                    required_break_minutes: 45,
                },
            ],
            slot_minutes: 15,
            streak_scan_cap: 62,
        }
    }
}

impl RuleSettings {
    /// Loads settings from a YAML file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_engine::config::RuleSettings;
    ///
    /// let settings = RuleSettings::load("./config/rules.yaml")?;
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the break length required for a shift of `work_hours`, or
    /// `None` when no tier applies.
    ///
    /// With the default tiers, a 9-hour shift requires 60 minutes, a 7-hour
    /// shift 45 minutes, and a 6-hour shift nothing (thresholds are
    /// exclusive).
    pub fn required_break_minutes(&self, work_hours: Decimal) -> Option<i64> {
        self.break_rules
            .iter()
            .filter(|rule| work_hours > rule.min_work_hours)
            .max_by_key(|rule| rule.min_work_hours)
            .map(|rule| rule.required_break_minutes)
    }
}
