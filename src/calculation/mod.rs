//! Calculation logic for the shift engine.
//!
//! This module contains the pure functions of the engine: business-day
//! assignment and time-of-day parsing, the tiered overtime formula,
//! overtime formatting helpers, and attendance event pairing.

mod business_day;
mod formatting;
mod overtime;
mod pairing;

pub use business_day::{OrgTimezone, business_day_of, parse_time_of_day, shift_bounds};
pub use formatting::{format_ot, ot_in_hours};
pub use overtime::{OvertimeBreakdown, OvertimeTiers, calculate_ot};
pub use pairing::pair_events;
