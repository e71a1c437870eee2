//! NLP Suite Server - HTTP backend for the Natural Language Processing Suite
//!
//! This crate provides the demonstration HTTP server backing the NLP Suite
//! frontend. Every endpoint is a stateless placeholder: the text "processing"
//! route uppercases its input behind a full validation envelope, analytics
//! returns a simulated payload, and the upload route acknowledges multipart
//! requests without persisting anything.
//!
//! What the crate does provide in earnest:
//!
//! - **Validation envelope**: strict JSON body validation with a typed error
//!   taxonomy mapped to HTTP status codes
//! - **Uniform errors**: every failure serializes as `{"error": "<message>"}`
//! - **Middleware**: compression, CORS, request ID tracking, structured
//!   logging, request timeouts, and a global body-size limit
//! - **Configuration**: environment variable and file-based configuration
//! - **Graceful Shutdown**: proper signal handling for deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - HTML landing page
//! - `POST /api/process` - Validate and "process" a text payload
//! - `GET /api/analytics` - Simulated analytics payload
//! - `POST /api/upload` - Multipart upload acknowledgment
//! - `GET /api/status` - Service status probe

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{AnalyticsConfig, AppConfig};
pub use error::{ApiError, ApiResult};
pub use server::{build_router, start_server};
pub use state::AppState;
