//! Mock gateway client for order creation tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::transport::ApiClient;
use crate::{PayPalError, Result};

#[derive(Default)]
struct MockState {
    configuration: Option<Value>,
    configuration_error: Option<PayPalError>,
    response: Option<Value>,
    response_error: Option<PayPalError>,
    last_post_path: Option<String>,
    last_post_parameters: Option<Value>,
    analytics_events: Vec<String>,
}

/// An [`ApiClient`] with canned answers that records every call.
///
/// Without a canned response, POSTs answer with an empty JSON object.
#[derive(Default)]
pub struct MockApiClient {
    state: Mutex<MockState>,
}

impl MockApiClient {
    /// Create a mock with no configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that serves `configuration`.
    pub fn with_configuration(configuration: Value) -> Self {
        let mock = Self::default();
        mock.set_configuration(Some(configuration));
        mock
    }

    /// Replace the canned configuration.
    pub fn set_configuration(&self, configuration: Option<Value>) {
        self.state.lock().unwrap().configuration = configuration;
    }

    /// Fail configuration fetches with `error`.
    pub fn set_configuration_error(&self, error: PayPalError) {
        self.state.lock().unwrap().configuration_error = Some(error);
    }

    /// Replace the canned POST response.
    pub fn set_response(&self, response: Value) {
        self.state.lock().unwrap().response = Some(response);
    }

    /// Fail POSTs with `error`.
    pub fn set_response_error(&self, error: PayPalError) {
        self.state.lock().unwrap().response_error = Some(error);
    }

    /// Path of the most recent POST.
    pub fn last_post_path(&self) -> Option<String> {
        self.state.lock().unwrap().last_post_path.clone()
    }

    /// Parameters of the most recent POST.
    pub fn last_post_parameters(&self) -> Option<Value> {
        self.state.lock().unwrap().last_post_parameters.clone()
    }

    /// Analytics events recorded so far.
    pub fn analytics_events(&self) -> Vec<String> {
        self.state.lock().unwrap().analytics_events.clone()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ApiClient for MockApiClient {
    async fn fetch_configuration(&self) -> Result<Option<Value>> {
        let state = self.state.lock().unwrap();
        match &state.configuration_error {
            Some(err) => Err(err.clone()),
            None => Ok(state.configuration.clone()),
        }
    }

    async fn post(&self, path: &str, parameters: Value) -> Result<Value> {
        let mut state = self.state.lock().unwrap();
        state.last_post_path = Some(path.to_string());
        state.last_post_parameters = Some(parameters);
        if let Some(err) = &state.response_error {
            return Err(err.clone());
        }
        Ok(state
            .response
            .clone()
            .unwrap_or_else(|| Value::Object(Default::default())))
    }

    async fn send_analytics_event(&self, name: &str) {
        self.state
            .lock()
            .unwrap()
            .analytics_events
            .push(name.to_string());
    }
}
