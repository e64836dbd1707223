//! Store interfaces for the shift source collections.
//!
//! Templates, overrides, leaves, and holidays are owned by scheduling/HR
//! workflows external to this crate; the engine only reads them, each
//! queried by (employee, date). The resolved-shift projection is the one
//! collection the engine writes, and the resolver owns those writes
//! exclusively.
//!
//! The traits are the seam real persistence plugs into; [`MemoryStore`]
//! implements all of them for tests and in-process use.

mod memory;

use chrono::NaiveDate;

use crate::models::{Holiday, Leave, ResolvedShift, ShiftOverride, ShiftTemplate};

pub use memory::MemoryStore;

/// Read access to recurring shift templates.
pub trait TemplateStore: Send + Sync {
    /// All active templates for the employee whose effective range
    /// contains `date`.
    fn templates_for(&self, employee_id: &str, date: NaiveDate) -> Vec<ShiftTemplate>;
}

/// Read access to single-day shift overrides.
pub trait OverrideStore: Send + Sync {
    /// All overrides for (employee, date). The uniqueness constraint means
    /// this should hold at most one element; the resolver treats more as a
    /// conflict.
    fn overrides_for(&self, employee_id: &str, date: NaiveDate) -> Vec<ShiftOverride>;
}

/// Read access to employee leave records.
pub trait LeaveStore: Send + Sync {
    /// The approved leave covering (employee, date), if any.
    fn leave_covering(&self, employee_id: &str, date: NaiveDate) -> Option<Leave>;
}

/// Read access to company-wide holidays.
pub trait HolidayStore: Send + Sync {
    /// The holiday covering `date`, if any.
    fn holiday_on(&self, date: NaiveDate) -> Option<Holiday>;
}

/// Read/write access to the resolved-shift projection.
///
/// Rows are keyed by (employee, shift_date); `upsert` is last-writer-wins,
/// which is safe because resolution is a pure function of the source data
/// at that moment and redundant recomputation is cheap.
pub trait ResolvedShiftStore: Send + Sync {
    /// The cached resolution for (employee, date), if present.
    fn get(&self, employee_id: &str, date: NaiveDate) -> Option<ResolvedShift>;
    /// Inserts or replaces the row for the resolution's (employee, date) key.
    fn upsert(&self, resolved: ResolvedShift);
    /// Drops the cached row; returns true if one existed.
    fn invalidate(&self, employee_id: &str, date: NaiveDate) -> bool;
}
