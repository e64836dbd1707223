//! Shift template model.
//!
//! A shift template is a recurring shift assignment for one employee over
//! an inclusive date range. Templates are created and edited by scheduling
//! workflows outside this crate; the engine only reads them.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of shift an employee is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Standard morning shift.
    Morning,
    /// Evening shift.
    Evening,
    /// Night shift, typically crossing midnight.
    Night,
    /// Ad hoc hours that fit none of the standard patterns.
    Custom,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Morning => write!(f, "morning"),
            ShiftType::Evening => write!(f, "evening"),
            ShiftType::Night => write!(f, "night"),
            ShiftType::Custom => write!(f, "custom"),
        }
    }
}

/// A recurring shift assignment for one employee over a date range.
///
/// Templates are never physically merged; scheduling staff supersede one by
/// setting `active = false` or bounding its range.
///
/// # Example
///
/// ```
/// use shift_engine::models::{ShiftTemplate, ShiftType};
/// use chrono::{NaiveDate, NaiveTime, Utc};
///
/// let template = ShiftTemplate {
///     id: "tpl_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     effective_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     effective_to: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
///     shift_type: ShiftType::Morning,
///     shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     crosses_midnight: false,
///     active: true,
///     updated_by: "scheduler_01".to_string(),
///     change_reason: None,
///     updated_at: Utc::now(),
/// };
/// assert!(template.covers(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Unique identifier for the template.
    pub id: String,
    /// The employee this template applies to.
    pub employee_id: String,
    /// First date the template is effective (inclusive).
    pub effective_from: NaiveDate,
    /// Last date the template is effective (inclusive).
    pub effective_to: NaiveDate,
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// Local time-of-day the shift starts.
    pub shift_start: NaiveTime,
    /// Local time-of-day the shift ends.
    pub shift_end: NaiveTime,
    /// Whether the shift ends on the following calendar day.
    pub crosses_midnight: bool,
    /// Inactive templates are ignored by resolution.
    pub active: bool,
    /// Who last edited this template.
    pub updated_by: String,
    /// Why the template was last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_reason: Option<String>,
    /// When the template was last edited. Used as the resolution tie-break
    /// when multiple active templates cover the same date.
    pub updated_at: DateTime<Utc>,
}

impl ShiftTemplate {
    /// Returns true if `date` falls within the effective range (inclusive).
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.effective_from && date <= self.effective_to
    }

    /// Validates the template's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] if `effective_from` is
    /// after `effective_to`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.effective_from > self.effective_to {
            return Err(EngineError::InvalidDateRange {
                from: self.effective_from,
                to: self.effective_to,
            });
        }
        Ok(())
    }
}
