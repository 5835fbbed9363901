//! Test utilities for the PayPal native library.
//!
//! This module provides:
//! - A mock [`ApiClient`](crate::ApiClient) with canned configuration and
//!   responses that records what was posted
//! - JSON fixtures for configuration, hermes and tokenization responses
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paypal_native_lib::test_utils::{MockApiClient, TestFixtures};
//!
//! let api = MockApiClient::with_configuration(TestFixtures::sandbox_configuration());
//! api.set_response(TestFixtures::checkout_hermes_response("some-token"));
//! ```

mod fixtures;
mod mock_api;

pub use fixtures::TestFixtures;
pub use mock_api::MockApiClient;
