//! Data models for the shift engine.
//!
//! This module defines the document types the engine reads (templates,
//! overrides, leaves, holidays, attendance events) and the one document it
//! writes (the resolved shift projection).

mod attendance;
mod calendar;
mod resolved;
mod shift_override;
mod template;

pub use attendance::{AttendanceEvent, AttendanceSession, AttendanceStatus};
pub use calendar::{Holiday, Leave, LeaveStatus};
pub use resolved::{ResolvedShift, ShiftSource};
pub use shift_override::{OverrideType, ShiftOverride};
pub use template::{ShiftTemplate, ShiftType};
