//! Shift override model.
//!
//! An override is a single-day exception for one employee (e.g. "Eid
//! special hours"). At most one override may exist per (employee, date);
//! the resolver treats a violation of that constraint as a conflict.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftType;

/// What an override does to the day's template-derived shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideType {
    /// Replace the day's shift with the override's own shift fields.
    Replace,
    /// Cancel the day's shift; the day becomes non-working.
    Cancel,
    /// Mark the day as an off day; any work is wholly overtime.
    OffDay,
}

/// A single-day exception for one employee, one calendar date.
///
/// For [`OverrideType::Replace`] the override carries its own shift fields;
/// for `Cancel` and `OffDay` the shift fields are absent and the day is
/// treated as non-working (off-day overtime semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftOverride {
    /// Unique identifier for the override.
    pub id: String,
    /// The employee this override applies to.
    pub employee_id: String,
    /// The single date the override applies to.
    pub shift_date: NaiveDate,
    /// What the override does to that day.
    pub override_type: OverrideType,
    /// Replacement shift type; required for `Replace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<ShiftType>,
    /// Replacement start time; required for `Replace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_start: Option<NaiveTime>,
    /// Replacement end time; required for `Replace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_end: Option<NaiveTime>,
    /// Whether the replacement shift ends on the following day.
    #[serde(default)]
    pub crosses_midnight: bool,
    /// Who created or last edited this override.
    pub updated_by: String,
    /// Why the override exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_reason: Option<String>,
    /// When the override was last edited.
    pub updated_at: DateTime<Utc>,
}

impl ShiftOverride {
    /// Validates the override's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] when a `Replace` override is
    /// missing its replacement shift fields.
    pub fn validate(&self) -> EngineResult<()> {
        if self.override_type == OverrideType::Replace
            && (self.shift_start.is_none() || self.shift_end.is_none() || self.shift_type.is_none())
        {
            return Err(EngineError::InvalidShift {
                employee_id: self.employee_id.clone(),
                message: format!(
                    "replace override '{}' is missing shift_type/shift_start/shift_end",
                    self.id
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_override(override_type: OverrideType) -> ShiftOverride {
        ShiftOverride {
            id: "ovr_001".to_string(),
            employee_id: "emp_001".to_string(),
            shift_date: make_date("2026-03-20"),
            override_type,
            shift_type: Some(ShiftType::Custom),
            shift_start: Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
            shift_end: Some(NaiveTime::from_hms_opt(14, 0, 0).unwrap()),
            crosses_midnight: false,
            updated_by: "scheduler_01".to_string(),
            change_reason: Some("Eid special hours".to_string()),
            updated_at: Utc.with_ymd_and_hms(2026, 3, 18, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_validate_replace_with_fields_is_ok() {
        let ovr = make_override(OverrideType::Replace);
        assert!(ovr.validate().is_ok());
    }

    #[test]
    fn test_validate_replace_without_fields_fails() {
        let mut ovr = make_override(OverrideType::Replace);
        ovr.shift_start = None;
        ovr.shift_end = None;
        let err = ovr.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidShift { .. }));
    }

    #[test]
    fn test_validate_cancel_without_fields_is_ok() {
        let mut ovr = make_override(OverrideType::Cancel);
        ovr.shift_type = None;
        ovr.shift_start = None;
        ovr.shift_end = None;
        assert!(ovr.validate().is_ok());
    }

    #[test]
    fn test_override_type_serialization() {
        assert_eq!(
            serde_json::to_string(&OverrideType::OffDay).unwrap(),
            "\"off_day\""
        );
        let deserialized: OverrideType = serde_json::from_str("\"cancel\"").unwrap();
        assert_eq!(deserialized, OverrideType::Cancel);
    }

    #[test]
    fn test_deserialize_cancel_override_without_shift_fields() {
        let json = r#"{
            "id": "ovr_002",
            "employee_id": "emp_003",
            "shift_date": "2026-03-21",
            "override_type": "cancel",
            "updated_by": "scheduler_02",
            "updated_at": "2026-03-19T12:00:00Z"
        }"#;

        let ovr: ShiftOverride = serde_json::from_str(json).unwrap();
        assert_eq!(ovr.override_type, OverrideType::Cancel);
        assert_eq!(ovr.shift_start, None);
        assert!(!ovr.crosses_midnight);
    }

    #[test]
    fn test_serialization_round_trip() {
        let ovr = make_override(OverrideType::Replace);
        let json = serde_json::to_string(&ovr).unwrap();
        let deserialized: ShiftOverride = serde_json::from_str(&json).unwrap();
        assert_eq!(ovr, deserialized);
    }
}
