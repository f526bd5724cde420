//! Test utilities for API tests.
//!
//! In-memory stand-ins for the text and image models.

pub mod mock_models;

#[allow(unused_imports)]
pub use mock_models::{MockImageGenerator, MockResponse, MockTextGenerator};
