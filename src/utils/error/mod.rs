//! Error handling for the service
//!
//! This module defines the error type used throughout the crate and how it is
//! rendered as an HTTP response.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AppError, Result};
