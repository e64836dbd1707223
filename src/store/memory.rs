//! In-memory store implementation.
//!
//! Backs all five store traits with `RwLock`ed collections. Used by tests
//! and by deployments where the surrounding portal feeds the engine its
//! working set directly.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::models::{Holiday, Leave, ResolvedShift, ShiftOverride, ShiftTemplate};

use super::{HolidayStore, LeaveStore, OverrideStore, ResolvedShiftStore, TemplateStore};

/// An in-memory implementation of every store trait.
///
/// # Example
///
/// ```
/// use shift_engine::store::{MemoryStore, HolidayStore};
/// use shift_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let store = MemoryStore::new();
/// store.add_holiday(Holiday {
///     id: "hol_001".to_string(),
///     name: "Victory Day".to_string(),
///     from_date: NaiveDate::from_ymd_opt(2026, 12, 16).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2026, 12, 16).unwrap(),
/// });
/// assert!(store.holiday_on(NaiveDate::from_ymd_opt(2026, 12, 16).unwrap()).is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    templates: RwLock<Vec<ShiftTemplate>>,
    overrides: RwLock<Vec<ShiftOverride>>,
    leaves: RwLock<Vec<Leave>>,
    holidays: RwLock<Vec<Holiday>>,
    resolved: RwLock<HashMap<(String, NaiveDate), ResolvedShift>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shift template to the working set.
    pub fn add_template(&self, template: ShiftTemplate) {
        self.templates.write().expect("templates lock").push(template);
    }

    /// Adds a shift override to the working set.
    pub fn add_override(&self, shift_override: ShiftOverride) {
        self.overrides
            .write()
            .expect("overrides lock")
            .push(shift_override);
    }

    /// Adds a leave record to the working set.
    pub fn add_leave(&self, leave: Leave) {
        self.leaves.write().expect("leaves lock").push(leave);
    }

    /// Adds a holiday record to the working set.
    pub fn add_holiday(&self, holiday: Holiday) {
        self.holidays.write().expect("holidays lock").push(holiday);
    }

    /// Number of materialized resolved rows (test/diagnostic helper).
    pub fn resolved_len(&self) -> usize {
        self.resolved.read().expect("resolved lock").len()
    }
}

impl TemplateStore for MemoryStore {
    fn templates_for(&self, employee_id: &str, date: NaiveDate) -> Vec<ShiftTemplate> {
        self.templates
            .read()
            .expect("templates lock")
            .iter()
            .filter(|t| t.active && t.employee_id == employee_id && t.covers(date))
            .cloned()
            .collect()
    }
}

impl OverrideStore for MemoryStore {
    fn overrides_for(&self, employee_id: &str, date: NaiveDate) -> Vec<ShiftOverride> {
        self.overrides
            .read()
            .expect("overrides lock")
            .iter()
            .filter(|o| o.employee_id == employee_id && o.shift_date == date)
            .cloned()
            .collect()
    }
}

impl LeaveStore for MemoryStore {
    fn leave_covering(&self, employee_id: &str, date: NaiveDate) -> Option<Leave> {
        self.leaves
            .read()
            .expect("leaves lock")
            .iter()
            .find(|l| l.employee_id == employee_id && l.covers(date))
            .cloned()
    }
}

impl HolidayStore for MemoryStore {
    fn holiday_on(&self, date: NaiveDate) -> Option<Holiday> {
        self.holidays
            .read()
            .expect("holidays lock")
            .iter()
            .find(|h| h.covers(date))
            .cloned()
    }
}

impl ResolvedShiftStore for MemoryStore {
    fn get(&self, employee_id: &str, date: NaiveDate) -> Option<ResolvedShift> {
        self.resolved
            .read()
            .expect("resolved lock")
            .get(&(employee_id.to_string(), date))
            .cloned()
    }

    fn upsert(&self, resolved: ResolvedShift) {
        self.resolved
            .write()
            .expect("resolved lock")
            .insert((resolved.employee_id.clone(), resolved.shift_date), resolved);
    }

    fn invalidate(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.resolved
            .write()
            .expect("resolved lock")
            .remove(&(employee_id.to_string(), date))
            .is_some()
    }
}
