//! REST helpers for the read-only stage data API.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning an error, since the endpoint is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready strings so a failed fetch
//! degrades to an inline field error instead of breaking the form.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use copilot::Level;
use serde::Deserialize;

/// Level list endpoint.
pub const LEVELS_ENDPOINT: &str = "/api/arknights/level";

/// Envelope the level API wraps its payload in.
#[derive(Debug, Deserialize)]
pub struct LevelsResponse {
    #[serde(default)]
    pub data: Vec<Level>,
}

#[cfg(any(test, feature = "csr"))]
fn levels_failed_message(status: u16) -> String {
    format!("关卡列表加载失败: {status}")
}

/// Fetch the stage list from [`LEVELS_ENDPOINT`].
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx status, or an
/// undecodable body.
pub async fn fetch_levels() -> Result<Vec<Level>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(LEVELS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(levels_failed_message(resp.status()));
        }
        let body: LevelsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
