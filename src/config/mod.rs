//! Configuration for the roster validation engine.
//!
//! Break-law tiers, the coverage slot width, and the streak scan bound are
//! deployment-tunable and load from a YAML file; [`RuleSettings::default`]
//! carries the statutory values.

mod settings;

pub use settings::{BreakRule, RuleSettings};
