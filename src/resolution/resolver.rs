//! The shift resolver.
//!
//! Merges the four shift source collections into one authoritative
//! [`ResolvedShift`] per (employee, date), with a read-through cache over
//! the resolved-shift projection.

use chrono::{Days, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{OverrideType, ResolvedShift, ShiftOverride, ShiftSource, ShiftTemplate};
use crate::store::{HolidayStore, LeaveStore, OverrideStore, ResolvedShiftStore, TemplateStore};

/// Everything the resolver needs from a backing store.
///
/// Blanket-implemented for any type that implements the five store traits,
/// such as [`crate::store::MemoryStore`].
pub trait ShiftStore:
    TemplateStore + OverrideStore + LeaveStore + HolidayStore + ResolvedShiftStore
{
}

impl<S> ShiftStore for S where
    S: TemplateStore + OverrideStore + LeaveStore + HolidayStore + ResolvedShiftStore
{
}

/// Resolves the authoritative shift for an employee-day.
///
/// Precedence, first match wins: holiday, leave, override, template.
/// The first resolution for a key is materialized into the resolved-shift
/// projection; later calls return the cached row untouched until a caller
/// invalidates it. Invalidation is explicit: the workflows that edit
/// templates/overrides/leaves/holidays are responsible for calling
/// [`ShiftResolver::invalidate`] for the affected days.
pub struct ShiftResolver<S: ShiftStore> {
    store: std::sync::Arc<S>,
}

impl<S: ShiftStore> ShiftResolver<S> {
    /// Creates a resolver over the given store.
    pub fn new(store: std::sync::Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves (employee, date), serving from the cache when possible.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ShiftNotFound`] when no source applies; the caller
    ///   must treat the day as unscheduled.
    /// - [`EngineError::OverrideConflict`] when more than one override
    ///   exists for the key.
    pub fn resolve(&self, employee_id: &str, date: NaiveDate) -> EngineResult<ResolvedShift> {
        if let Some(cached) = self.store.get(employee_id, date) {
            debug!(employee_id, %date, source = %cached.source, "resolution cache hit");
            return Ok(cached);
        }
        self.resolve_fresh(employee_id, date)
    }

    /// Recomputes (employee, date) from the sources, bypassing the cache,
    /// and upserts the result. Last writer wins on the (employee, date)
    /// key: resolution is a pure function of the source data at that
    /// moment, so concurrent recomputation is safe.
    pub fn resolve_fresh(&self, employee_id: &str, date: NaiveDate) -> EngineResult<ResolvedShift> {
        let resolved = self.compute(employee_id, date)?;
        self.store.upsert(resolved.clone());
        debug!(employee_id, %date, source = %resolved.source, "resolved shift materialized");
        Ok(resolved)
    }

    /// Drops the cached row for (employee, date). Returns true if a row
    /// existed. The next `resolve` call recomputes from the sources.
    pub fn invalidate(&self, employee_id: &str, date: NaiveDate) -> bool {
        let existed = self.store.invalidate(employee_id, date);
        debug!(employee_id, %date, existed, "resolution invalidated");
        existed
    }

    /// Recomputes every day in the inclusive range, one independent upsert
    /// per day. Days with no applicable source are skipped (and any stale
    /// cached row for them dropped), so a crashed batch can simply be
    /// rerun. Returns the number of days that resolved.
    pub fn recompute_range(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<usize> {
        if from > to {
            return Err(EngineError::InvalidDateRange { from, to });
        }

        let mut resolved_days = 0;
        let mut date = from;
        while date <= to {
            match self.resolve_fresh(employee_id, date) {
                Ok(_) => resolved_days += 1,
                Err(EngineError::ShiftNotFound { .. }) => {
                    self.store.invalidate(employee_id, date);
                }
                Err(e) => return Err(e),
            }
            date = date
                .checked_add_days(Days::new(1))
                .ok_or(EngineError::InvalidDateRange { from, to })?;
        }
        Ok(resolved_days)
    }

    /// Applies the precedence merge for one employee-day.
    fn compute(&self, employee_id: &str, date: NaiveDate) -> EngineResult<ResolvedShift> {
        let resolved_at = Utc::now();

        // 1. Company-wide holiday: any work that day is wholly overtime.
        if let Some(holiday) = self.store.holiday_on(date) {
            debug!(employee_id, %date, holiday = %holiday.name, "resolved from holiday");
            return Ok(ResolvedShift::off_day(
                employee_id,
                date,
                ShiftSource::Holiday,
                None,
                resolved_at,
            ));
        }

        // 2. Approved leave: same off-day-overtime semantics.
        if self.store.leave_covering(employee_id, date).is_some() {
            return Ok(ResolvedShift::off_day(
                employee_id,
                date,
                ShiftSource::Leave,
                None,
                resolved_at,
            ));
        }

        // 3. Single-day override. More than one for the key is a data
        // fault the uniqueness constraint should have prevented.
        let overrides = self.store.overrides_for(employee_id, date);
        match overrides.as_slice() {
            [] => {}
            [single] => return self.from_override(single, resolved_at),
            many => {
                warn!(employee_id, %date, count = many.len(), "conflicting overrides");
                return Err(EngineError::OverrideConflict {
                    employee_id: employee_id.to_string(),
                    date,
                    count: many.len(),
                });
            }
        }

        // 4. Active template covering the date. Tie-break on overlapping
        // templates: most recently updated wins, with the id as a stable
        // secondary ordering.
        let mut templates = self.store.templates_for(employee_id, date);
        templates.sort_by(|a, b| a.updated_at.cmp(&b.updated_at).then_with(|| a.id.cmp(&b.id)));
        if let Some(template) = templates.pop() {
            if !templates.is_empty() {
                debug!(
                    employee_id,
                    %date,
                    winner = %template.id,
                    losers = templates.len(),
                    "overlapping templates; most recently updated wins"
                );
            }
            return Ok(Self::from_template(&template, employee_id, date, resolved_at));
        }

        // 5. No source applies: the day is unscheduled.
        Err(EngineError::ShiftNotFound {
            employee_id: employee_id.to_string(),
            date,
        })
    }

    fn from_template(
        template: &ShiftTemplate,
        employee_id: &str,
        date: NaiveDate,
        resolved_at: chrono::DateTime<Utc>,
    ) -> ResolvedShift {
        ResolvedShift {
            employee_id: employee_id.to_string(),
            shift_date: date,
            source: ShiftSource::Template,
            shift_type: Some(template.shift_type),
            shift_start: Some(template.shift_start),
            shift_end: Some(template.shift_end),
            crosses_midnight: template.crosses_midnight,
            is_off_day_overtime: false,
            template_id: Some(template.id.clone()),
            override_id: None,
            resolved_at,
        }
    }

    fn from_override(
        &self,
        shift_override: &ShiftOverride,
        resolved_at: chrono::DateTime<Utc>,
    ) -> EngineResult<ResolvedShift> {
        shift_override.validate()?;

        match shift_override.override_type {
            OverrideType::Cancel | OverrideType::OffDay => Ok(ResolvedShift::off_day(
                shift_override.employee_id.clone(),
                shift_override.shift_date,
                ShiftSource::Override,
                Some(shift_override.id.clone()),
                resolved_at,
            )),
            OverrideType::Replace => {
                // validate() guarantees the replacement fields are present.
                let (Some(shift_type), Some(shift_start), Some(shift_end)) = (
                    shift_override.shift_type,
                    shift_override.shift_start,
                    shift_override.shift_end,
                ) else {
                    return Err(EngineError::InvalidShift {
                        employee_id: shift_override.employee_id.clone(),
                        message: format!("replace override '{}' has no shift fields", shift_override.id),
                    });
                };

                Ok(ResolvedShift {
                    employee_id: shift_override.employee_id.clone(),
                    shift_date: shift_override.shift_date,
                    source: ShiftSource::Override,
                    shift_type: Some(shift_type),
                    shift_start: Some(shift_start),
                    shift_end: Some(shift_end),
                    crosses_midnight: shift_override.crosses_midnight,
                    is_off_day_overtime: false,
                    template_id: None,
                    override_id: Some(shift_override.id.clone()),
                    resolved_at,
                })
            }
        }
    }
}
