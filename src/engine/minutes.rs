//! Time arithmetic over same-day `HH:MM` intervals.
//!
//! All arithmetic is same-day; shifts never cross midnight. Results are
//! clamped to zero so inverted inputs degrade to "no time worked" instead
//! of producing negative durations.

use chrono::NaiveTime;
use rust_decimal::Decimal;

/// Minutes worked between `start` and `end`, minus the break when both
/// break bounds are given, clamped to ≥ 0.
///
/// # Example
///
/// ```
/// use roster_engine::engine::worked_minutes;
/// use roster_engine::models::parse_hhmm;
///
/// let start = parse_hhmm("09:00").unwrap();
/// let end = parse_hhmm("18:00").unwrap();
/// let break_start = parse_hhmm("12:00").unwrap();
/// let break_end = parse_hhmm("13:00").unwrap();
///
/// assert_eq!(worked_minutes(start, end, None, None), 540);
/// assert_eq!(
///     worked_minutes(start, end, Some(break_start), Some(break_end)),
///     480
/// );
/// ```
pub fn worked_minutes(
    start: NaiveTime,
    end: NaiveTime,
    break_start: Option<NaiveTime>,
    break_end: Option<NaiveTime>,
) -> i64 {
    let total = (end - start).num_minutes().max(0);
    let break_length = match (break_start, break_end) {
        (Some(break_start), Some(break_end)) => break_minutes(break_start, break_end),
        _ => 0,
    };
    (total - break_length).max(0)
}

/// Minutes between the break bounds, clamped to ≥ 0.
pub fn break_minutes(break_start: NaiveTime, break_end: NaiveTime) -> i64 {
    (break_end - break_start).num_minutes().max(0)
}

/// Converts minutes into hours as an exact decimal.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
