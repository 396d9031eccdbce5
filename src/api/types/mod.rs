//! API request/response helper types

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
