//! Configuration types for the shift engine.
//!
//! Fixed organizational settings (timezone, grace period, the overtime
//! tier table) are explicit configuration passed into the engine at
//! construction, not ambient global state.

use serde::Deserialize;

use crate::calculation::{OrgTimezone, OvertimeTiers};

fn default_utc_offset_minutes() -> i32 {
    360 // +06:00
}

fn default_grace_minutes() -> u32 {
    10
}

/// Engine configuration.
///
/// All fields have production defaults, so `EngineConfig::default()` is a
/// complete working configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// The organizational UTC offset in minutes east (360 = +06:00).
    /// There is no per-user timezone.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    /// Tolerated late check-in minutes before a session is flagged late.
    /// Reporting only; it does not alter the overtime formula.
    #[serde(default = "default_grace_minutes")]
    pub grace_minutes: u32,
    /// The overtime tier table.
    #[serde(default)]
    pub overtime: OvertimeTiers,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
            grace_minutes: default_grace_minutes(),
            overtime: OvertimeTiers::default(),
        }
    }
}

impl EngineConfig {
    /// The organizational timezone derived from the configured offset.
    pub fn org_timezone(&self) -> OrgTimezone {
        OrgTimezone::from_offset_minutes(self.utc_offset_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.utc_offset_minutes, 360);
        assert_eq!(config.grace_minutes, 10);
        assert_eq!(config.overtime, OvertimeTiers::default());
    }

    #[test]
    fn test_deserialize_partial_yaml_uses_defaults() {
        let config: EngineConfig = serde_yaml::from_str("utc_offset_minutes: 330\n").unwrap();
        assert_eq!(config.utc_offset_minutes, 330);
        assert_eq!(config.grace_minutes, 10);
        assert_eq!(config.overtime, OvertimeTiers::default());
    }

    #[test]
    fn test_deserialize_overtime_table() {
        let yaml = r#"
grace_minutes: 15
overtime:
  half_hour_threshold: 25
  full_hour_threshold: 55
  linear_threshold: 60
  block_minutes: 480
  half_hour_credit: 30
  full_hour_credit: 60
  block_credit: 390
  linear_multiplier: "0.8125"
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.grace_minutes, 15);
        assert_eq!(config.overtime.block_credit, 390);
    }

    #[test]
    fn test_org_timezone_from_config() {
        let config = EngineConfig::default();
        let tz = config.org_timezone();
        let utc = chrono::NaiveDateTime::parse_from_str("2026-03-14 18:30:00", "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc();
        assert_eq!(
            tz.localize(utc),
            chrono::NaiveDateTime::parse_from_str("2026-03-15 00:30:00", "%Y-%m-%d %H:%M:%S")
                .unwrap()
        );
    }
}
