//! Overtime computation.
//!
//! Given a resolved shift and an attendance pair, derives overtime minutes
//! using a tiered/linear/full-day formula. All intermediate values are
//! integer minutes; the one fractional step (the linear multiplier) rounds
//! half-up. Absent inputs degrade to zero overtime, never to an error,
//! since an open attendance session is a normal state.

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculation::business_day::shift_bounds;
use crate::models::ResolvedShift;

/// The tier table for the overtime formula.
///
/// The defaults implement the production formula: extra work under 25
/// minutes earns nothing, 25-54 minutes earns a half hour, 55-59 minutes
/// earns a full hour, 1-8 hours earns `max(60, round(extra * 13/16))`,
/// and every full 8-hour block beyond that credits 390 minutes with the
/// shorter rules applied to the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeTiers {
    /// Extra work below this earns nothing (minutes).
    pub half_hour_threshold: u32,
    /// Extra work from `half_hour_threshold` up to here earns `half_hour_credit`.
    pub full_hour_threshold: u32,
    /// Extra work from `full_hour_threshold` up to one hour earns `full_hour_credit`.
    pub linear_threshold: u32,
    /// The linear rule applies up to this many minutes (one full block).
    pub block_minutes: u32,
    /// Credit for the 25-54 minute band.
    pub half_hour_credit: u32,
    /// Credit for the 55-59 minute band, and the floor of the linear rule.
    pub full_hour_credit: u32,
    /// Credit for each full block of `block_minutes`.
    pub block_credit: u32,
    /// Multiplier for the linear band (13/16 in production).
    pub linear_multiplier: Decimal,
}

impl Default for OvertimeTiers {
    fn default() -> Self {
        Self {
            half_hour_threshold: 25,
            full_hour_threshold: 55,
            linear_threshold: 60,
            block_minutes: 480,
            half_hour_credit: 30,
            full_hour_credit: 60,
            block_credit: 390,
            // 0.8125 == 13/16
            linear_multiplier: Decimal::new(8125, 4),
        }
    }
}

impl OvertimeTiers {
    /// Applies the tiered formula to a number of extra-work minutes.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::calculation::OvertimeTiers;
    ///
    /// let tiers = OvertimeTiers::default();
    /// assert_eq!(tiers.tiered_minutes(20), 0);
    /// assert_eq!(tiers.tiered_minutes(40), 30);
    /// assert_eq!(tiers.tiered_minutes(58), 60);
    /// assert_eq!(tiers.tiered_minutes(120), 98);
    /// assert_eq!(tiers.tiered_minutes(500), 390);
    /// ```
    pub fn tiered_minutes(&self, extra_work: i64) -> u32 {
        if extra_work <= 0 {
            return 0;
        }
        let extra = extra_work as u32;

        if extra > self.block_minutes {
            let blocks = extra / self.block_minutes;
            let remainder = extra % self.block_minutes;
            let remainder_credit = if remainder >= self.linear_threshold {
                self.linear_minutes(remainder)
            } else {
                self.sub_hour_minutes(remainder)
            };
            return blocks * self.block_credit + remainder_credit;
        }

        if extra >= self.linear_threshold {
            self.linear_minutes(extra)
        } else {
            self.sub_hour_minutes(extra)
        }
    }

    /// The `[60, 480]` band: `max(full_hour_credit, round(extra * multiplier))`.
    fn linear_minutes(&self, extra: u32) -> u32 {
        let scaled = Decimal::from(extra) * self.linear_multiplier;
        let rounded = scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0);
        rounded.max(self.full_hour_credit)
    }

    /// The sub-hour bands.
    fn sub_hour_minutes(&self, extra: u32) -> u32 {
        if extra < self.half_hour_threshold {
            0
        } else if extra < self.full_hour_threshold {
            self.half_hour_credit
        } else {
            self.full_hour_credit
        }
    }
}

/// The computed overtime for one attendance pair, with its inputs.
///
/// `ot_minutes` is the authoritative answer; the remaining fields expose
/// the intermediate values for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeBreakdown {
    /// Minutes late past the expected start; negative when early.
    pub late_minutes: i64,
    /// Minutes past the expected end; negative when leaving early.
    pub extra_out_minutes: i64,
    /// Net extra work: `extra_out_minutes - late_minutes`.
    pub extra_work_minutes: i64,
    /// The overtime credit in minutes. Never negative.
    pub ot_minutes: u32,
    /// True when the whole worked duration counted as overtime (off day).
    pub off_day: bool,
    /// True when the check-in was late beyond the configured grace period.
    /// Reporting only; it does not change `ot_minutes`.
    pub late_beyond_grace: bool,
}

impl OvertimeBreakdown {
    fn zero() -> Self {
        Self {
            late_minutes: 0,
            extra_out_minutes: 0,
            extra_work_minutes: 0,
            ot_minutes: 0,
            off_day: false,
            late_beyond_grace: false,
        }
    }
}

/// Computes overtime minutes for one attendance pair against a resolved shift.
///
/// - No check-out yet: the session is open, overtime is zero.
/// - Off-day resolution (holiday, leave, cancelled shift): the entire
///   worked duration is overtime; the tiered formula does not apply.
/// - Otherwise: arriving early counts toward extra work, arriving late
///   reduces it, and the net extra work goes through the tier table.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{calculate_ot, OvertimeTiers};
/// use shift_engine::models::{ResolvedShift, ShiftSource, ShiftType};
/// use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
///
/// let shift = ResolvedShift {
///     employee_id: "emp_001".to_string(),
///     shift_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
///     source: ShiftSource::Template,
///     shift_type: Some(ShiftType::Morning),
///     shift_start: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
///     shift_end: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
///     crosses_midnight: false,
///     is_off_day_overtime: false,
///     template_id: None,
///     override_id: None,
///     resolved_at: Utc::now(),
/// };
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let breakdown = calculate_ot(
///     parse("2026-03-14 09:00:00"),
///     Some(parse("2026-03-14 19:00:00")),
///     &shift,
///     &OvertimeTiers::default(),
///     10,
/// );
/// assert_eq!(breakdown.extra_work_minutes, 120);
/// assert_eq!(breakdown.ot_minutes, 98);
/// ```
pub fn calculate_ot(
    in_time: NaiveDateTime,
    out_time: Option<NaiveDateTime>,
    shift: &ResolvedShift,
    tiers: &OvertimeTiers,
    grace_minutes: u32,
) -> OvertimeBreakdown {
    // Open session: nothing to compute yet.
    let Some(out_time) = out_time else {
        return OvertimeBreakdown {
            off_day: shift.is_off_day_overtime,
            ..OvertimeBreakdown::zero()
        };
    };

    let worked = (out_time - in_time).num_minutes();

    if shift.is_off_day_overtime {
        // Off-day work has no expected baseline; the whole duration is OT.
        return OvertimeBreakdown {
            extra_work_minutes: worked.max(0),
            ot_minutes: worked.max(0) as u32,
            off_day: true,
            ..OvertimeBreakdown::zero()
        };
    }

    let (Some(shift_start), Some(shift_end)) = (shift.shift_start, shift.shift_end) else {
        // A working-day resolution without hours cannot be measured.
        return OvertimeBreakdown::zero();
    };

    let (expected_start, expected_end) =
        shift_bounds(shift.shift_date, shift_start, shift_end, shift.crosses_midnight);

    let late_minutes = (in_time - expected_start).num_minutes();
    let extra_out_minutes = (out_time - expected_end).num_minutes();
    let extra_work_minutes = extra_out_minutes - late_minutes;

    OvertimeBreakdown {
        late_minutes,
        extra_out_minutes,
        extra_work_minutes,
        ot_minutes: tiers.tiered_minutes(extra_work_minutes),
        off_day: false,
        late_beyond_grace: late_minutes > i64::from(grace_minutes),
    }
}
