//! API request/response types

pub mod error;
pub mod json;
pub mod user;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use user::{UpdateBioRequest, UpdateBioResponse};
