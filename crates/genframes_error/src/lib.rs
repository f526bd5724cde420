//! Error types for the GenFrames storyboard service.
//!
//! Every crate in the workspace reports failures through the types defined here.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums name the specific failure condition
//! - `*Error` structs wrap the kind with the source location that raised it
//! - Constructors use `#[track_caller]` so the location is captured automatically
//!
//! The top-level [`GenFramesError`] boxes a [`GenFramesErrorKind`] and converts
//! from every leaf error, so `?` works across crate boundaries.
//!
//! # Examples
//!
//! ```
//! use genframes_error::{GenFramesResult, ProviderError, ProviderErrorKind};
//!
//! fn render() -> GenFramesResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::MissingImage))?
//! }
//!
//! assert!(render().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod provider;
mod server;
mod validation;

pub use config::ConfigError;
pub use error::{GenFramesError, GenFramesErrorKind, GenFramesResult};
pub use json::JsonError;
pub use provider::{ProviderError, ProviderErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use validation::{FieldIssue, ValidationError};
