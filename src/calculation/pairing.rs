//! Attendance event pairing.
//!
//! Pairs the raw device event stream into work sessions. Events for a
//! given employee are processed in timestamp order; no cross-employee
//! ordering is required, so callers may partition by employee and pair in
//! parallel.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::warn;

use crate::calculation::business_day::{OrgTimezone, business_day_of};
use crate::models::{AttendanceEvent, AttendanceSession, AttendanceStatus};

/// Pairs attendance events into sessions.
///
/// The most recent unmatched check-in pairs with the next check-out for
/// the same employee. Trailing check-ins with no following check-out stay
/// open (`out_time = None`) and yield zero overtime until closed. Orphan
/// check-outs and break punches are skipped.
///
/// `shift_start_hour`/`crosses_midnight` carry the shift metadata used to
/// assign each session to its business day, so a session straddling
/// midnight lands on the shift's own calendar day.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{pair_events, OrgTimezone};
/// use shift_engine::models::{AttendanceEvent, AttendanceStatus};
/// use chrono::{TimeZone, Utc};
///
/// let tz = OrgTimezone::from_offset_minutes(0);
/// let events = vec![
///     AttendanceEvent {
///         employee_id: "emp_001".to_string(),
///         device_id: "dev_01".to_string(),
///         timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
///         verify_mode: 1,
///         status: AttendanceStatus::CheckIn,
///         source_ip: None,
///     },
///     AttendanceEvent {
///         employee_id: "emp_001".to_string(),
///         device_id: "dev_01".to_string(),
///         timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 17, 0, 0).unwrap(),
///         verify_mode: 1,
///         status: AttendanceStatus::CheckOut,
///         source_ip: None,
///     },
/// ];
///
/// let sessions = pair_events(&events, &tz, Some(9), false);
/// assert_eq!(sessions.len(), 1);
/// assert!(!sessions[0].is_open());
/// ```
pub fn pair_events(
    events: &[AttendanceEvent],
    tz: &OrgTimezone,
    shift_start_hour: Option<u32>,
    crosses_midnight: bool,
) -> Vec<AttendanceSession> {
    // Group per employee; BTreeMap keeps the output order stable.
    let mut by_employee: BTreeMap<&str, Vec<&AttendanceEvent>> = BTreeMap::new();
    for event in events {
        by_employee
            .entry(event.employee_id.as_str())
            .or_default()
            .push(event);
    }

    let mut sessions = Vec::new();
    for (employee_id, mut employee_events) in by_employee {
        employee_events.sort_by_key(|e| e.timestamp);

        let mut open_in: Option<NaiveDateTime> = None;
        for event in employee_events {
            let local = tz.localize(event.timestamp);
            match event.status {
                AttendanceStatus::CheckIn | AttendanceStatus::OvertimeIn => {
                    if let Some(previous) = open_in.replace(local) {
                        warn!(
                            employee_id,
                            previous = %previous,
                            superseded_by = %local,
                            "duplicate check-in; keeping the most recent"
                        );
                    }
                }
                AttendanceStatus::CheckOut | AttendanceStatus::OvertimeOut => {
                    match open_in.take() {
                        Some(in_time) => sessions.push(AttendanceSession {
                            employee_id: employee_id.to_string(),
                            business_day: business_day_of(
                                in_time,
                                shift_start_hour,
                                crosses_midnight,
                            ),
                            in_time,
                            out_time: Some(local),
                        }),
                        None => {
                            warn!(employee_id, at = %local, "check-out without a matching check-in");
                        }
                    }
                }
                AttendanceStatus::BreakIn
                | AttendanceStatus::BreakOut
                | AttendanceStatus::Unspecified => {}
            }
        }

        // Trailing check-in stays open until the device reports a check-out.
        if let Some(in_time) = open_in {
            sessions.push(AttendanceSession {
                employee_id: employee_id.to_string(),
                business_day: business_day_of(in_time, shift_start_hour, crosses_midnight),
                in_time,
                out_time: None,
            });
        }
    }

    sessions
}
