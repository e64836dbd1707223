//! Application state for the shift engine API.

use std::sync::Arc;

use crate::engine::ShiftEngine;
use crate::resolution::ShiftStore;

/// Shared application state.
///
/// Wraps the engine so all request handlers operate on the same store and
/// configuration.
pub struct AppState<S: ShiftStore> {
    engine: Arc<ShiftEngine<S>>,
}

impl<S: ShiftStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<S: ShiftStore> AppState<S> {
    /// Creates a new application state around the given engine.
    pub fn new(engine: ShiftEngine<S>) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &ShiftEngine<S> {
        &self.engine
    }
}
