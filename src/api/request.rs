//! Request types for the shift engine API.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;

/// Request body for `POST /resolve-shift`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveShiftRequest {
    /// The employee to resolve for.
    pub employee_id: String,
    /// The business day to resolve.
    pub date: NaiveDate,
    /// When true, bypass the cached row and recompute from the sources.
    #[serde(default)]
    pub force_refresh: bool,
}

/// Request body for `POST /compute-overtime`.
///
/// Timestamps are RFC 3339 with offset; the engine normalizes them to the
/// fixed organizational timezone.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeOvertimeRequest {
    /// The employee the attendance pair belongs to.
    pub employee_id: String,
    /// Check-in timestamp.
    pub in_time: DateTime<FixedOffset>,
    /// Check-out timestamp; absent while the session is open.
    #[serde(default)]
    pub out_time: Option<DateTime<FixedOffset>>,
}

/// Request body for `POST /invalidate`.
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidateRequest {
    /// The employee whose cached resolution should be dropped.
    pub employee_id: String,
    /// The business day to invalidate.
    pub date: NaiveDate,
}
