//! Attendance event and session models.
//!
//! Attendance events arrive from an external device feed as an append-only
//! stream; this crate consumes them as timestamps plus metadata and never
//! mutates stored events. Events are paired into sessions by
//! [`crate::calculation::pair_events`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// The punch type reported by the attendance device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Start of a work session.
    CheckIn,
    /// End of a work session.
    CheckOut,
    /// Start of a break.
    BreakIn,
    /// End of a break.
    BreakOut,
    /// Start of an explicitly flagged overtime session.
    OvertimeIn,
    /// End of an explicitly flagged overtime session.
    OvertimeOut,
    /// Device did not report a punch type.
    Unspecified,
}

/// One raw check-in or check-out record from the device feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// The employee the punch belongs to.
    pub employee_id: String,
    /// The device that recorded the punch.
    pub device_id: String,
    /// When the punch happened.
    pub timestamp: DateTime<Utc>,
    /// How the device verified the employee (e.g. fingerprint code).
    pub verify_mode: u8,
    /// The punch type.
    pub status: AttendanceStatus,
    /// Source IP of the device feed; kept for audit only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
}

/// A paired work session derived from the event stream.
///
/// `out_time` is absent while the session is still open (the employee has
/// checked in but not yet out); open sessions yield zero overtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSession {
    /// The employee the session belongs to.
    pub employee_id: String,
    /// The business day the session is attributed to.
    pub business_day: NaiveDate,
    /// Org-local check-in time.
    pub in_time: NaiveDateTime,
    /// Org-local check-out time; `None` while the session is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_time: Option<NaiveDateTime>,
}

impl AttendanceSession {
    /// Returns true while the session has no check-out yet.
    pub fn is_open(&self) -> bool {
        self.out_time.is_none()
    }

    /// Worked minutes for a closed session; `None` while open.
    pub fn worked_minutes(&self) -> Option<i64> {
        self.out_time.map(|out| (out - self.in_time).num_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_local(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_open_session_has_no_worked_minutes() {
        let session = AttendanceSession {
            employee_id: "emp_001".to_string(),
            business_day: make_local("2026-03-14 09:02:00").date(),
            in_time: make_local("2026-03-14 09:02:00"),
            out_time: None,
        };
        assert!(session.is_open());
        assert_eq!(session.worked_minutes(), None);
    }

    #[test]
    fn test_closed_session_worked_minutes() {
        let session = AttendanceSession {
            employee_id: "emp_001".to_string(),
            business_day: make_local("2026-03-14 09:00:00").date(),
            in_time: make_local("2026-03-14 09:00:00"),
            out_time: Some(make_local("2026-03-14 17:30:00")),
        };
        assert!(!session.is_open());
        assert_eq!(session.worked_minutes(), Some(510));
    }

    #[test]
    fn test_session_spanning_midnight_worked_minutes() {
        let session = AttendanceSession {
            employee_id: "emp_001".to_string(),
            business_day: make_local("2026-03-14 15:00:00").date(),
            in_time: make_local("2026-03-14 15:00:00"),
            out_time: Some(make_local("2026-03-15 01:00:00")),
        };
        assert_eq!(session.worked_minutes(), Some(600));
    }

    #[test]
    fn test_attendance_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::CheckIn).unwrap(),
            "\"check_in\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::OvertimeOut).unwrap(),
            "\"overtime_out\""
        );
        let deserialized: AttendanceStatus = serde_json::from_str("\"unspecified\"").unwrap();
        assert_eq!(deserialized, AttendanceStatus::Unspecified);
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let event = AttendanceEvent {
            employee_id: "emp_001".to_string(),
            device_id: "dev_07".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 3, 2, 11).unwrap(),
            verify_mode: 1,
            status: AttendanceStatus::CheckIn,
            source_ip: Some("10.0.4.21".to_string()),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: AttendanceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_event_without_source_ip_omits_field() {
        let event = AttendanceEvent {
            employee_id: "emp_001".to_string(),
            device_id: "dev_07".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 3, 2, 11).unwrap(),
            verify_mode: 0,
            status: AttendanceStatus::Unspecified,
            source_ip: None,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("source_ip"));
    }
}
