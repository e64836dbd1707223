//! Shift resolution.
//!
//! This module contains the [`ShiftResolver`], which merges templates,
//! overrides, leaves, and holidays by precedence into one authoritative
//! resolved shift per employee-day.

mod resolver;

pub use resolver::{ShiftResolver, ShiftStore};
