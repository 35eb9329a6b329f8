//! HTTP API module for the Attendance Grid Engine.
//!
//! This module provides the REST API endpoints the payroll update flow
//! uses to compute monthly attendance grids.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{GridInputs, GridRequest};
pub use response::{ApiError, ApiErrorResponse, GridResponse};
pub use state::AppState;
