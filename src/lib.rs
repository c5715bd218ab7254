//! Shift Constraint & Staffing-Coverage Validation Engine.
//!
//! This crate decides whether a single proposed work assignment is legal for
//! a staff member (availability, day-off requests, hour caps, consecutive-day
//! limits, statutory breaks) and whether a full month of assignments meets a
//! store's per-time-slot staffing requirements. It evaluates schedules that
//! are supplied to it; it never chooses one and never persists anything.

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod proposer;
pub mod roster;
