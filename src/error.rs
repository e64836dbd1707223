//! Error types for the shift resolution and overtime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during shift resolution.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::ShiftNotFound {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No shift source applies to employee 'emp_001' on 2026-03-14"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No template, override, leave, or holiday covers the requested day.
    ///
    /// Callers should treat the day as unscheduled and skip overtime
    /// computation; this is not a system fault.
    #[error("No shift source applies to employee '{employee_id}' on {date}")]
    ShiftNotFound {
        /// The employee whose shift was requested.
        employee_id: String,
        /// The date for which no source applied.
        date: NaiveDate,
    },

    /// More than one override exists for the same (employee, date) key.
    ///
    /// The uniqueness constraint on overrides should prevent this; the
    /// resolver detects and reports it rather than silently picking one.
    #[error("{count} conflicting overrides for employee '{employee_id}' on {date}")]
    OverrideConflict {
        /// The employee with conflicting overrides.
        employee_id: String,
        /// The date the overrides collide on.
        date: NaiveDate,
        /// How many overrides were found.
        count: usize,
    },

    /// A time-of-day string did not match the `HH:mm` format.
    #[error("Invalid time of day '{value}': expected HH:mm")]
    InvalidTimeOfDay {
        /// The string that failed to parse.
        value: String,
    },

    /// A template's effective range is inverted.
    #[error("Invalid date range: effective_from {from} is after effective_to {to}")]
    InvalidDateRange {
        /// The start of the range.
        from: NaiveDate,
        /// The end of the range.
        to: NaiveDate,
    },

    /// A shift record was invalid or contained inconsistent data.
    #[error("Invalid shift for employee '{employee_id}': {message}")]
    InvalidShift {
        /// The employee the record belongs to.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_shift_not_found_displays_employee_and_date() {
        let error = EngineError::ShiftNotFound {
            employee_id: "emp_001".to_string(),
            date: date("2026-03-14"),
        };
        assert_eq!(
            error.to_string(),
            "No shift source applies to employee 'emp_001' on 2026-03-14"
        );
    }

    #[test]
    fn test_override_conflict_displays_count() {
        let error = EngineError::OverrideConflict {
            employee_id: "emp_002".to_string(),
            date: date("2026-03-15"),
            count: 2,
        };
        assert_eq!(
            error.to_string(),
            "2 conflicting overrides for employee 'emp_002' on 2026-03-15"
        );
    }

    #[test]
    fn test_invalid_time_of_day_displays_value() {
        let error = EngineError::InvalidTimeOfDay {
            value: "25:99".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time of day '25:99': expected HH:mm"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_bounds() {
        let error = EngineError::InvalidDateRange {
            from: date("2026-04-01"),
            to: date("2026-03-01"),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: effective_from 2026-04-01 is after effective_to 2026-03-01"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::ShiftNotFound {
                employee_id: "emp_001".to_string(),
                date: date("2026-01-01"),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
