//! HTTP API for the shift engine.
//!
//! A thin axum layer over [`crate::engine::ShiftEngine`]: one endpoint per
//! engine operation, with JSON request/response bodies and structured error
//! mapping.

pub mod handlers;
pub mod request;
pub mod response;
pub mod state;

pub use handlers::create_router;
pub use request::{ComputeOvertimeRequest, InvalidateRequest, ResolveShiftRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
