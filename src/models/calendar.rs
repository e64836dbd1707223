//! Leave and holiday models.
//!
//! Both are date-ranged records that pre-empt template/override resolution
//! for the dates they cover. Leave is scoped to one employee; a holiday is
//! company-wide.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting approval; does not affect resolution.
    Pending,
    /// Approved; covered dates resolve as off-day overtime.
    Approved,
    /// Rejected; does not affect resolution.
    Rejected,
}

/// An employee-scoped leave record over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    /// Unique identifier for the leave record.
    pub id: String,
    /// The employee on leave.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub from_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub to_date: NaiveDate,
    /// The category of leave (e.g. "annual", "sick").
    pub leave_type: String,
    /// Approval state; only approved leave affects resolution.
    pub status: LeaveStatus,
}

impl Leave {
    /// Returns true if this leave is approved and covers `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.status == LeaveStatus::Approved && date >= self.from_date && date <= self.to_date
    }
}

/// A company-wide holiday over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier for the holiday record.
    pub id: String,
    /// The name of the holiday (e.g. "Eid-ul-Fitr").
    pub name: String,
    /// First day of the holiday (inclusive).
    pub from_date: NaiveDate,
    /// Last day of the holiday (inclusive).
    pub to_date: NaiveDate,
}

impl Holiday {
    /// Returns true if this holiday covers `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.from_date && date <= self.to_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_leave(status: LeaveStatus) -> Leave {
        Leave {
            id: "lv_001".to_string(),
            employee_id: "emp_001".to_string(),
            from_date: make_date("2026-04-01"),
            to_date: make_date("2026-04-05"),
            leave_type: "annual".to_string(),
            status,
        }
    }

    #[test]
    fn test_approved_leave_covers_inclusive_range() {
        let leave = make_leave(LeaveStatus::Approved);
        assert!(leave.covers(make_date("2026-04-01")));
        assert!(leave.covers(make_date("2026-04-03")));
        assert!(leave.covers(make_date("2026-04-05")));
        assert!(!leave.covers(make_date("2026-03-31")));
        assert!(!leave.covers(make_date("2026-04-06")));
    }

    #[test]
    fn test_pending_leave_does_not_cover() {
        let leave = make_leave(LeaveStatus::Pending);
        assert!(!leave.covers(make_date("2026-04-03")));
    }

    #[test]
    fn test_rejected_leave_does_not_cover() {
        let leave = make_leave(LeaveStatus::Rejected);
        assert!(!leave.covers(make_date("2026-04-03")));
    }

    #[test]
    fn test_holiday_covers_inclusive_range() {
        let holiday = Holiday {
            id: "hol_001".to_string(),
            name: "Eid-ul-Fitr".to_string(),
            from_date: make_date("2026-03-26"),
            to_date: make_date("2026-03-28"),
        };
        assert!(holiday.covers(make_date("2026-03-26")));
        assert!(holiday.covers(make_date("2026-03-28")));
        assert!(!holiday.covers(make_date("2026-03-29")));
    }

    #[test]
    fn test_single_day_holiday() {
        let holiday = Holiday {
            id: "hol_002".to_string(),
            name: "Victory Day".to_string(),
            from_date: make_date("2026-12-16"),
            to_date: make_date("2026-12-16"),
        };
        assert!(holiday.covers(make_date("2026-12-16")));
        assert!(!holiday.covers(make_date("2026-12-15")));
    }

    #[test]
    fn test_leave_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"approved\""
        );
        let deserialized: LeaveStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(deserialized, LeaveStatus::Pending);
    }
}
