//! The two-operation engine facade.
//!
//! [`ShiftEngine`] is the contract the surrounding portal invokes
//! in-process: resolve the authoritative shift for an employee-day, and
//! compute overtime for an attendance pair. Timestamps cross this boundary
//! in UTC and are localized once to the fixed organizational timezone.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{OrgTimezone, OvertimeBreakdown, calculate_ot};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceSession, ResolvedShift};
use crate::resolution::{ShiftResolver, ShiftStore};

/// The result of an overtime computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeOutcome {
    /// Overtime credit in minutes.
    pub minutes: u32,
    /// The resolved shift the computation ran against.
    pub resolved_shift: ResolvedShift,
    /// Intermediate values for reporting.
    pub breakdown: OvertimeBreakdown,
}

/// The shift resolution and overtime computation engine.
///
/// # Example
///
/// ```
/// use shift_engine::engine::ShiftEngine;
/// use shift_engine::config::EngineConfig;
/// use shift_engine::store::MemoryStore;
/// use std::sync::Arc;
///
/// let engine = ShiftEngine::new(EngineConfig::default(), Arc::new(MemoryStore::new()));
/// // An empty store has no shift sources, so every day is unscheduled.
/// let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// assert!(engine.resolve_shift("emp_001", date).is_err());
/// ```
pub struct ShiftEngine<S: ShiftStore> {
    config: EngineConfig,
    tz: OrgTimezone,
    resolver: ShiftResolver<S>,
}

impl<S: ShiftStore> ShiftEngine<S> {
    /// Creates an engine over the given configuration and store.
    pub fn new(config: EngineConfig, store: Arc<S>) -> Self {
        let tz = config.org_timezone();
        Self {
            config,
            tz,
            resolver: ShiftResolver::new(store),
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The fixed organizational timezone.
    pub fn org_timezone(&self) -> OrgTimezone {
        self.tz
    }

    /// Resolves the authoritative shift for (employee, date).
    ///
    /// # Errors
    ///
    /// [`EngineError::ShiftNotFound`] for unscheduled days,
    /// [`EngineError::OverrideConflict`] for contradictory override data.
    pub fn resolve_shift(&self, employee_id: &str, date: NaiveDate) -> EngineResult<ResolvedShift> {
        self.resolver.resolve(employee_id, date)
    }

    /// Computes overtime for one attendance pair.
    ///
    /// The business day is assigned from the check-in: normally its own
    /// local date, but a punch in the early hours of a midnight-crossing
    /// shift belongs to the previous day's shift.
    ///
    /// # Errors
    ///
    /// [`EngineError::ShiftNotFound`] when no shift covers the punch; an
    /// absent check-out is not an error and yields zero overtime.
    pub fn compute_overtime(
        &self,
        employee_id: &str,
        in_time: DateTime<Utc>,
        out_time: Option<DateTime<Utc>>,
    ) -> EngineResult<OvertimeOutcome> {
        let local_in = self.tz.localize(in_time);
        let local_out = out_time.map(|t| self.tz.localize(t));

        let resolved = self.shift_for_punch(employee_id, local_in)?;
        Ok(self.outcome(local_in, local_out, resolved))
    }

    /// Computes overtime for an already-paired session (org-local times).
    pub fn compute_overtime_for_session(
        &self,
        session: &AttendanceSession,
    ) -> EngineResult<OvertimeOutcome> {
        let resolved = self
            .resolver
            .resolve(&session.employee_id, session.business_day)?;
        Ok(self.outcome(session.in_time, session.out_time, resolved))
    }

    /// Drops the cached resolution for (employee, date).
    ///
    /// The workflows that edit templates, overrides, leaves, or holidays
    /// call this for every affected day; the next resolution recomputes
    /// from the sources.
    pub fn invalidate(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.resolver.invalidate(employee_id, date)
    }

    /// Eagerly recomputes every day in the inclusive range. Idempotent and
    /// restartable; returns the number of days that resolved.
    pub fn recompute_range(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<usize> {
        self.resolver.recompute_range(employee_id, from, to)
    }

    fn outcome(
        &self,
        local_in: NaiveDateTime,
        local_out: Option<NaiveDateTime>,
        resolved: ResolvedShift,
    ) -> OvertimeOutcome {
        let breakdown = calculate_ot(
            local_in,
            local_out,
            &resolved,
            &self.config.overtime,
            self.config.grace_minutes,
        );
        OvertimeOutcome {
            minutes: breakdown.ot_minutes,
            resolved_shift: resolved,
            breakdown,
        }
    }

    /// Resolves the shift a punch belongs to, honoring midnight crossing.
    fn shift_for_punch(
        &self,
        employee_id: &str,
        local_in: NaiveDateTime,
    ) -> EngineResult<ResolvedShift> {
        let own_date = local_in.date();

        match self.resolver.resolve(employee_id, own_date) {
            Ok(own_shift) => {
                if punch_precedes_crossing_shift(&own_shift, local_in) {
                    // The punch falls before today's crossing shift starts;
                    // it belongs to yesterday's shift if one exists.
                    if let Some(prev_date) = own_date.pred_opt() {
                        if let Ok(prev_shift) = self.resolver.resolve(employee_id, prev_date) {
                            debug!(
                                employee_id,
                                punch = %local_in,
                                business_day = %prev_date,
                                "early punch assigned to previous day's shift"
                            );
                            return Ok(prev_shift);
                        }
                    }
                }
                Ok(own_shift)
            }
            Err(EngineError::ShiftNotFound { .. }) => {
                // The punch's own date is unscheduled, but it may still be
                // the tail of yesterday's crossing shift.
                let not_found = EngineError::ShiftNotFound {
                    employee_id: employee_id.to_string(),
                    date: own_date,
                };
                let Some(prev_date) = own_date.pred_opt() else {
                    return Err(not_found);
                };
                match self.resolver.resolve(employee_id, prev_date) {
                    Ok(prev_shift) if punch_precedes_crossing_shift(&prev_shift, local_in) => {
                        Ok(prev_shift)
                    }
                    _ => Err(not_found),
                }
            }
            Err(e) => Err(e),
        }
    }
}

/// True when a punch's local hour is before the start hour of a
/// midnight-crossing shift, meaning it belongs to the previous business day.
fn punch_precedes_crossing_shift(shift: &ResolvedShift, local_in: NaiveDateTime) -> bool {
    match shift.shift_start {
        Some(start) => shift.crosses_midnight && local_in.hour() < start.hour(),
        None => false,
    }
}
