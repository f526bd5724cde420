//! HTTP service and command-line front end for GenFrames.
//!
//! # Endpoints
//!
//! | Method | Path      | Body                                   |
//! |--------|-----------|----------------------------------------|
//! | GET    | `/health` | none                                   |
//! | GET    | `/usage`  | none                                   |
//! | POST   | `/parse`  | `{"script": "...", "style": "noir"}`   |
//! | POST   | `/frame`  | `{"shotDescription": "...", "camera": "Wide shot", ...}` |
//!
//! Every failure is reported as `{"success": false, "error": ...}` with an
//! optional `details` list or `code`.
//!
//! # Example
//!
//! ```rust,no_run
//! use genframes_server::{AppState, GenFramesConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GenFramesConfig::load()?;
//!     let state = AppState::from_config(&config)?;
//!     serve(&config.server.bind_addr(), state).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod observability;
mod server;
mod usage;

pub use api::{
    ApiError, AppState, CONTENT_POLICY_MESSAGE, INVALID_REQUEST_MESSAGE, QUOTA_MESSAGE,
    SharedParser, SharedRenderer, create_router,
};
pub use config::{
    API_KEY_ENV, DEFAULT_CONFIG, GenFramesConfig, LimitsConfig, PacingConfig, ProviderConfig,
    ServerConfig,
};
pub use observability::{LoggingConfig, init_logging};
pub use server::serve;
pub use usage::{Reservation, UsageTracker};
