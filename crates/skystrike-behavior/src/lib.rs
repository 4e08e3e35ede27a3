//! Behavior state machines for SKYSTRIKE.
//!
//! Pure functions that compute target steering and the drone's descend
//! transitions. No ECS dependency — operates on plain data.

pub mod descend;
pub mod steering;
