use gloo::net::http::Request;

use crate::domain::{
    dashboard::DashboardApi,
    errors::{FetchError, FetchResult},
    logging::LogComponent,
};
use crate::log_trace;

/// HTTP transport for the dashboard API, built on `gloo-net` (browser `fetch`).
#[derive(Clone, Default)]
pub struct GlooApiClient;

impl GlooApiClient {
    pub fn new() -> Self {
        Self
    }
}

impl DashboardApi for GlooApiClient {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        log_trace!(
            LogComponent::Infrastructure("GlooApiClient"),
            "📡 {} answered with {} bytes",
            url,
            body.len()
        );

        Ok(body)
    }
}
