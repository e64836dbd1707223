//! Engine configuration.
//!
//! This module provides [`EngineConfig`], the explicit configuration value
//! (organizational timezone, grace period, overtime tier table) passed
//! into the engine at construction, plus its YAML loader.

mod loader;
mod types;

pub use types::EngineConfig;
