// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Response types for REST APIv1
//!
//! These all implement the [`Responder`](actix_web::Responder) trait.

mod error;
mod ok;

pub use error::{json_error_handler, ApiError, AuthenticationError, ValidationErrorEntry};
pub use ok::ApiResponse;

/// The default API Result
pub type DefaultApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Machine readable codes for field level validation errors
pub const CODE_INVALID_LENGTH: &str = "invalid_length";
pub const CODE_OUT_OF_RANGE: &str = "out_of_range";
pub const CODE_INVALID_VALUE: &str = "invalid_value";
