//! The pluggable schedule proposer boundary.
//!
//! The AI-backed generator (or any other heuristic) sits behind
//! [`ScheduleProposer`]: it receives the store's roster context and returns
//! a candidate month in a fixed wire shape. The engine only consumes that
//! shape; prompt construction and response parsing belong to the
//! collaborator implementing the trait.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::DaySchedule;
use crate::error::EngineResult;
use crate::models::{
    DayOffRequest, DayPreference, ShiftAssignment, StaffProfile, StaffingRequirement,
};

/// Everything a proposer needs to draft a month: store identity, the
/// calendar month, the roster, standing preferences, day-off requests, and
/// the staffing requirements to satisfy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalContext {
    /// The store to schedule.
    pub store_id: String,
    /// Calendar year of the month to draft.
    pub year: i32,
    /// Calendar month (1–12) to draft.
    pub month: u32,
    /// Staff available for scheduling.
    pub staff: Vec<StaffProfile>,
    /// Standing weekday preferences for the staff.
    pub preferences: Vec<DayPreference>,
    /// Day-off requests falling in the month.
    pub day_off_requests: Vec<DayOffRequest>,
    /// Requirements the draft should satisfy.
    pub requirements: Vec<StaffingRequirement>,
}

/// A source of candidate month schedules.
///
/// Implementations may call an LLM service, run a heuristic, or replay a
/// fixture; the engine treats them all the same and validates whatever
/// comes back.
pub trait ScheduleProposer {
    /// Drafts a candidate month for the given context.
    fn propose_schedule(&self, context: &ProposalContext) -> EngineResult<CandidateMonth>;
}

/// One proposed assignment within a candidate day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAssignment {
    /// The staff member to assign.
    pub staff_id: String,
    /// Proposed start time.
    #[serde(with = "crate::models::hhmm")]
    pub start_time: NaiveTime,
    /// Proposed end time.
    #[serde(with = "crate::models::hhmm")]
    pub end_time: NaiveTime,
    /// Proposed break start, if any.
    #[serde(default, with = "crate::models::hhmm_opt")]
    pub break_start_time: Option<NaiveTime>,
    /// Proposed break end, if any.
    #[serde(default, with = "crate::models::hhmm_opt")]
    pub break_end_time: Option<NaiveTime>,
}

/// One day of a candidate month.
///
/// A day arriving without an `assignments` key deserializes to an empty
/// day rather than failing the whole month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Proposed assignments for the date.
    #[serde(default)]
    pub assignments: Vec<CandidateAssignment>,
}

/// A proposer's candidate month: `{shifts: [{date, assignments: [...]}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMonth {
    /// The proposed days, one entry per date.
    pub shifts: Vec<CandidateDay>,
}

impl CandidateMonth {
    /// Converts the candidate into per-day schedules for the given store,
    /// minting fresh assignment ids: the shape the bulk validation flow
    /// and the persistence collaborator consume.
    pub fn into_day_schedules(self, store_id: &str) -> Vec<DaySchedule> {
        self.shifts
            .into_iter()
            .map(|day| DaySchedule {
                date: day.date,
                assignments: day
                    .assignments
                    .into_iter()
                    .map(|candidate| ShiftAssignment {
                        id: Uuid::new_v4(),
                        store_id: store_id.to_string(),
                        staff_id: candidate.staff_id,
                        date: day.date,
                        start_time: candidate.start_time,
                        end_time: candidate.end_time,
                        break_start_time: candidate.break_start_time,
                        break_end_time: candidate.break_end_time,
                        notes: None,
                    })
                    .collect(),
            })
            .collect()
    }
}
