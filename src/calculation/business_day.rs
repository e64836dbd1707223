//! Business-day assignment and time-of-day utilities.
//!
//! All local-time computation uses one fixed organizational timezone; the
//! conversion from UTC happens once at the engine boundary via
//! [`OrgTimezone`], and everything past that point works in org-local
//! naive time.

use chrono::{Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::error::{EngineError, EngineResult};

/// The fixed organizational timezone, expressed as a UTC offset.
///
/// Built from configuration, never from the requesting user. All attendance
/// timestamps are localized through this before any day or duration
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrgTimezone {
    offset: FixedOffset,
}

impl OrgTimezone {
    /// Creates an organizational timezone from an offset in minutes east
    /// of UTC (e.g. 360 for +06:00).
    pub fn from_offset_minutes(minutes: i32) -> Self {
        Self {
            // Offsets are config-supplied and bounded well inside ±24h.
            offset: FixedOffset::east_opt(minutes * 60)
                .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap()),
        }
    }

    /// Converts a UTC instant to org-local naive time.
    pub fn localize(&self, ts: chrono::DateTime<Utc>) -> NaiveDateTime {
        ts.with_timezone(&self.offset).naive_local()
    }

    /// Converts an instant carrying its own offset to org-local naive time.
    pub fn localize_fixed(&self, ts: chrono::DateTime<FixedOffset>) -> NaiveDateTime {
        ts.with_timezone(&self.offset).naive_local()
    }

    /// Current org-local time.
    pub fn now(&self) -> NaiveDateTime {
        self.localize(Utc::now())
    }

    /// The underlying fixed offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// Determines which calendar day a timestamp's work belongs to.
///
/// If the shift crosses midnight and the timestamp's local hour is earlier
/// than the shift's start hour, the event belongs to the **previous**
/// calendar day's shift. Without shift context it is simply the
/// timestamp's own calendar date.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::business_day_of;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// // A 15:00-01:00 night shift: a 00:30 punch belongs to the previous day.
/// let punch = NaiveDateTime::parse_from_str("2026-03-15 00:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(
///     business_day_of(punch, Some(15), true),
///     NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
/// );
///
/// // Without shift context the punch keeps its own date.
/// assert_eq!(
///     business_day_of(punch, None, false),
///     NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
/// );
/// ```
pub fn business_day_of(
    local_ts: NaiveDateTime,
    shift_start_hour: Option<u32>,
    crosses_midnight: bool,
) -> NaiveDate {
    let date = local_ts.date();
    match shift_start_hour {
        Some(start_hour) if crosses_midnight && local_ts.hour() < start_hour => {
            date.pred_opt().unwrap_or(date)
        }
        _ => date,
    }
}

/// Parses a strict `HH:mm` time-of-day string.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeOfDay`] for anything that is not a
/// zero-padded 24-hour `HH:mm` value.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_time_of_day("15:00").unwrap(),
///     NaiveTime::from_hms_opt(15, 0, 0).unwrap()
/// );
/// assert!(parse_time_of_day("9:00").is_err());
/// assert!(parse_time_of_day("25:00").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> EngineResult<NaiveTime> {
    let invalid = || EngineError::InvalidTimeOfDay {
        value: value.to_string(),
    };

    // chrono's %H is lenient about padding, so enforce the shape first.
    if value.len() != 5 || value.as_bytes()[2] != b':' {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| invalid())
}

/// Computes the absolute expected start and end of a shift on a given day.
///
/// When `crosses_midnight` is set, the end lands on the following calendar
/// day (start 15:00 / end 01:00 means true end = next-day 01:00).
///
/// # Example
///
/// ```
/// use shift_engine::calculation::shift_bounds;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// let start = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
///
/// let (expected_start, expected_end) = shift_bounds(date, start, end, true);
/// assert_eq!(expected_start.date(), date);
/// assert_eq!(expected_end.date(), NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
/// ```
pub fn shift_bounds(
    shift_date: NaiveDate,
    shift_start: NaiveTime,
    shift_end: NaiveTime,
    crosses_midnight: bool,
) -> (NaiveDateTime, NaiveDateTime) {
    let expected_start = shift_date.and_time(shift_start);
    let mut expected_end = shift_date.and_time(shift_end);
    if crosses_midnight {
        expected_end += Duration::days(1);
    }
    (expected_start, expected_end)
}
