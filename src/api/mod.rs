//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST endpoints that hand the attendance report
//! model to remote rendering collaborators as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidaySelection, ReportRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
