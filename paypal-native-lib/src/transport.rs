use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Gateway access supplied by the host SDK.
///
/// The library never performs network I/O itself; implementations wrap
/// whatever HTTP stack the application already uses.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ApiClient {
    /// Fetch the merchant's remote configuration, possibly from cache.
    ///
    /// Returns `Ok(None)` when no configuration is available.
    async fn fetch_configuration(&self) -> Result<Option<Value>>;

    /// POST `parameters` to a gateway path and return the decoded JSON body.
    async fn post(&self, path: &str, parameters: Value) -> Result<Value>;

    /// Record an analytics event. Failures are the host's concern.
    async fn send_analytics_event(&self, name: &str);
}
