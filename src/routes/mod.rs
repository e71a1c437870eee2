//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the NLP Suite
//! server. Routes are organized by functionality:
//!
//! - `index`: HTML landing page
//! - `process`: text processing with the full validation envelope
//! - `analytics`: simulated analytics payload
//! - `upload`: multipart upload acknowledgment
//! - `status`: service status probe

pub mod analytics;
pub mod index;
pub mod process;
pub mod status;
pub mod upload;

use crate::error::ApiError;

/// 404 Not Found handler
///
/// Returns the standardized error envelope for undefined routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
