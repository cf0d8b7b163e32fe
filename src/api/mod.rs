//! HTTP API module for the payroll document service.
//!
//! This module provides the REST endpoints for managing employees,
//! generating their documents and previewing salary breakups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, GenerateDocumentRequest, SalaryCalculationRequest};
pub use response::{ApiError, MessageResponse};
pub use state::AppState;
