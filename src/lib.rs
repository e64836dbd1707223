//! Shift resolution and overtime computation engine
//!
//! This crate resolves the authoritative shift for any employee-day from
//! layered sources (templates, per-day overrides, approved leaves, and
//! holidays) and computes tiered overtime credit for attendance pairs.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod resolution;
pub mod store;
