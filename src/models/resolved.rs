//! Resolved shift model.
//!
//! A [`ResolvedShift`] is the materialized, authoritative answer for one
//! (employee, shift_date) pair after merging templates, overrides, leaves,
//! and holidays by precedence. It is a cache/projection, never a second
//! source of truth: it must be recomputable from the source collections at
//! any time.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ShiftType;

/// Which source collection won the precedence merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftSource {
    /// A recurring shift template covered the date.
    Template,
    /// A single-day override covered the date.
    Override,
    /// An approved leave covered the date.
    Leave,
    /// A company-wide holiday covered the date.
    Holiday,
}

impl std::fmt::Display for ShiftSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftSource::Template => write!(f, "template"),
            ShiftSource::Override => write!(f, "override"),
            ShiftSource::Leave => write!(f, "leave"),
            ShiftSource::Holiday => write!(f, "holiday"),
        }
    }
}

/// The single authoritative shift for one employee on one date.
///
/// When `is_off_day_overtime` is set the employee is not expected to work
/// that day and the shift fields are absent; any recorded work is wholly
/// overtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedShift {
    /// The employee the resolution belongs to.
    pub employee_id: String,
    /// The business day the resolution answers for.
    pub shift_date: NaiveDate,
    /// Which source collection produced this resolution.
    pub source: ShiftSource,
    /// The resolved shift type; absent on off days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<ShiftType>,
    /// Local start time; absent on off days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_start: Option<NaiveTime>,
    /// Local end time; absent on off days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_end: Option<NaiveTime>,
    /// Whether the resolved shift ends on the following calendar day.
    #[serde(default)]
    pub crosses_midnight: bool,
    /// Any work on this day is entirely overtime.
    pub is_off_day_overtime: bool,
    /// Back-reference to the template used, when `source` is `Template`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Back-reference to the override used, when `source` is `Override`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_id: Option<String>,
    /// When this row was materialized.
    pub resolved_at: DateTime<Utc>,
}

impl ResolvedShift {
    /// Builds an off-day resolution (holiday, leave, or cancelled shift).
    pub fn off_day(
        employee_id: impl Into<String>,
        shift_date: NaiveDate,
        source: ShiftSource,
        override_id: Option<String>,
        resolved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            shift_date,
            source,
            shift_type: None,
            shift_start: None,
            shift_end: None,
            crosses_midnight: false,
            is_off_day_overtime: true,
            template_id: None,
            override_id,
            resolved_at,
        }
    }

    /// Returns true when the day carries expected working hours.
    pub fn has_working_hours(&self) -> bool {
        self.shift_start.is_some() && self.shift_end.is_some()
    }
}
