//! Validation orchestration and override policy.
//!
//! This is the one place policy is enforced: the single-assignment flow
//! blocks on errors unless the caller forces, while the bulk month flow is
//! always advisory and never blocks persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::checker::{check_assignment, AssignmentDraft};
use super::coverage::{analyze_coverage, DaySchedule};
use crate::config::RuleSettings;
use crate::error::EngineResult;
use crate::models::{CoverageReport, StaffingRequirement, ValidationResult};
use crate::proposer::CandidateMonth;
use crate::roster::RosterRepository;

/// The verdict of a single-assignment review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Decision {
    /// The assignment may be persisted.
    Approved {
        /// True when errors were present and the caller forced through.
        forced: bool,
    },
    /// The assignment must not be persisted.
    Rejected {
        /// The caller may retry with the force flag set.
        can_force: bool,
    },
}

impl Decision {
    /// Returns true when the assignment may be persisted.
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved { .. })
    }
}

/// A stamped single-assignment review: the full rule outcome plus the
/// policy verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentReview {
    /// Unique identifier for this review.
    pub review_id: Uuid,
    /// When the review was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the review.
    pub engine_version: String,
    /// Errors and warnings from every rule, in check order.
    pub result: ValidationResult,
    /// The policy verdict.
    pub decision: Decision,
}

/// Composes the constraint checker, the aggregates, and the coverage
/// analyzer behind one entry point per flow.
///
/// Every operation is synchronous read-then-compute with no internal
/// mutable state; a shared engine can serve concurrent calls.
///
/// # Example
///
/// ```
/// use roster_engine::engine::ValidationEngine;
/// use roster_engine::roster::MemoryRoster;
///
/// let engine = ValidationEngine::new(MemoryRoster::new());
/// assert_eq!(engine.rules().slot_minutes, 15);
/// ```
#[derive(Debug)]
pub struct ValidationEngine<R> {
    roster: R,
    rules: RuleSettings,
}

impl<R: RosterRepository> ValidationEngine<R> {
    /// Creates an engine with the default rule settings.
    pub fn new(roster: R) -> Self {
        Self::with_rules(roster, RuleSettings::default())
    }

    /// Creates an engine with explicit rule settings.
    pub fn with_rules(roster: R, rules: RuleSettings) -> Self {
        Self { roster, rules }
    }

    /// Returns the underlying roster.
    pub fn roster(&self) -> &R {
        &self.roster
    }

    /// Returns the active rule settings.
    pub fn rules(&self) -> &RuleSettings {
        &self.rules
    }

    /// Runs every rule against a proposed assignment without applying any
    /// policy.
    pub fn check_assignment(&self, draft: &AssignmentDraft) -> EngineResult<ValidationResult> {
        check_assignment(&self.roster, &self.rules, draft)
    }

    /// Reviews a proposed assignment and applies the override policy.
    ///
    /// With errors present and `force` unset, the review is rejected and
    /// flagged retryable (`can_force`). With `force` set, errors are
    /// overridden and the approval is marked `forced`. Warnings never
    /// influence the verdict.
    pub fn review_assignment(
        &self,
        draft: &AssignmentDraft,
        force: bool,
    ) -> EngineResult<AssignmentReview> {
        let result = self.check_assignment(draft)?;

        let decision = if result.is_clean() {
            Decision::Approved { forced: false }
        } else if force {
            Decision::Approved { forced: true }
        } else {
            Decision::Rejected { can_force: true }
        };

        match decision {
            Decision::Approved { forced } => info!(
                staff_id = %draft.staff_id,
                date = %draft.date,
                warnings = result.warnings.len(),
                forced,
                "Assignment approved"
            ),
            Decision::Rejected { .. } => warn!(
                staff_id = %draft.staff_id,
                date = %draft.date,
                errors = result.errors.len(),
                "Assignment rejected"
            ),
        }

        Ok(AssignmentReview {
            review_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result,
            decision,
        })
    }

    /// Analyzes a month of assignments against explicit requirements.
    ///
    /// Coverage only: per-staff rules are not re-run here, on the premise
    /// that whatever produced the schedule already respected them.
    pub fn validate_month(
        &self,
        schedule: &[DaySchedule],
        requirements: &[StaffingRequirement],
    ) -> CoverageReport {
        let report = analyze_coverage(schedule, requirements, &self.rules);
        if report.is_valid {
            info!(days = schedule.len(), "Month schedule fully staffed");
        } else {
            warn!(
                days = schedule.len(),
                shortages = report.warnings.len(),
                "Month schedule has staffing shortages"
            );
        }
        report
    }

    /// Analyzes a month of assignments against a store's persisted
    /// requirements.
    pub fn validate_store_month(
        &self,
        store_id: &str,
        schedule: &[DaySchedule],
    ) -> EngineResult<CoverageReport> {
        let requirements = self.roster.staffing_requirements(store_id)?;
        Ok(self.validate_month(schedule, &requirements))
    }

    /// Analyzes a proposer-produced candidate month for a store.
    pub fn validate_candidate(
        &self,
        store_id: &str,
        candidate: CandidateMonth,
    ) -> EngineResult<CoverageReport> {
        let schedule = candidate.into_day_schedules(store_id);
        self.validate_store_month(store_id, &schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_hhmm, DayOffRequest, DayOffStatus, StaffProfile, ViolationKind};
    use crate::roster::MemoryRoster;
    use chrono::NaiveDate;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn engine_with_day_off() -> ValidationEngine<MemoryRoster> {
        let mut roster = MemoryRoster::new();
        roster.insert_staff(StaffProfile {
            id: "stf_001".to_string(),
            name: "Aiko Tanaka".to_string(),
            max_hours_per_day: None,
            max_hours_per_month: None,
            min_hours_per_month: None,
            max_consecutive_days: None,
        });
        roster.insert_day_off(DayOffRequest {
            staff_id: "stf_001".to_string(),
            date: date("2025-06-10"),
            status: DayOffStatus::Approved,
            reason: None,
        });
        ValidationEngine::new(roster)
    }

    fn day_off_draft() -> AssignmentDraft {
        AssignmentDraft::new(
            "stf_001",
            date("2025-06-10"),
            parse_hhmm("09:00").unwrap(),
            parse_hhmm("12:00").unwrap(),
        )
    }

    // ==========================================================================
    // ORC-001: errors block unless forced
    // ==========================================================================
    #[test]
    fn test_orc_001_errors_reject_without_force() {
        let engine = engine_with_day_off();

        let review = engine.review_assignment(&day_off_draft(), false).unwrap();
        assert_eq!(review.decision, Decision::Rejected { can_force: true });
        assert!(!review.decision.is_approved());
        assert_eq!(review.result.errors[0].kind, ViolationKind::DayOffConflict);
    }

    // ==========================================================================
    // ORC-002: force overrides errors and is recorded
    // ==========================================================================
    #[test]
    fn test_orc_002_force_overrides_errors() {
        let engine = engine_with_day_off();

        let review = engine.review_assignment(&day_off_draft(), true).unwrap();
        assert_eq!(review.decision, Decision::Approved { forced: true });
        // The violations are still reported alongside the forced approval.
        assert!(!review.result.is_clean());
    }

    // ==========================================================================
    // ORC-003: a clean check is approved and not marked forced
    // ==========================================================================
    #[test]
    fn test_orc_003_clean_check_not_marked_forced() {
        let mut roster = MemoryRoster::new();
        roster.insert_staff(StaffProfile {
            id: "stf_001".to_string(),
            name: "Aiko Tanaka".to_string(),
            max_hours_per_day: None,
            max_hours_per_month: None,
            min_hours_per_month: None,
            max_consecutive_days: None,
        });
        let engine = ValidationEngine::new(roster);

        // Force flag set, but with nothing to override the approval is
        // an ordinary one.
        let review = engine.review_assignment(&day_off_draft(), true).unwrap();
        assert_eq!(review.decision, Decision::Approved { forced: false });
    }

    #[test]
    fn test_review_is_stamped() {
        let engine = engine_with_day_off();
        let review = engine.review_assignment(&day_off_draft(), false).unwrap();

        assert_eq!(review.engine_version, env!("CARGO_PKG_VERSION"));
        let other = engine.review_assignment(&day_off_draft(), false).unwrap();
        assert_ne!(review.review_id, other.review_id);
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_string(&Decision::Rejected { can_force: true }).unwrap();
        assert_eq!(json, r#"{"status":"rejected","can_force":true}"#);

        let json = serde_json::to_string(&Decision::Approved { forced: false }).unwrap();
        assert_eq!(json, r#"{"status":"approved","forced":false}"#);
    }

    #[test]
    fn test_validate_store_month_uses_persisted_requirements() {
        use crate::models::{RequirementWindow, StaffingRequirement};
        use chrono::Weekday;

        let mut roster = MemoryRoster::new();
        roster.insert_requirement(StaffingRequirement {
            store_id: "store_01".to_string(),
            window: RequirementWindow::Recurring(Weekday::Tue),
            start_time: parse_hhmm("10:00").unwrap(),
            end_time: parse_hhmm("12:00").unwrap(),
            required_count: 1,
        }).unwrap();
        let engine = ValidationEngine::new(roster);

        let schedule = vec![DaySchedule {
            date: date("2025-06-10"),
            assignments: vec![],
        }];
        let report = engine.validate_store_month("store_01", &schedule).unwrap();
        assert!(!report.is_valid);

        // A store with no requirements has nothing to violate.
        let report = engine.validate_store_month("store_99", &schedule).unwrap();
        assert!(report.is_valid);
    }
}
