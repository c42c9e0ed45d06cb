//! Browser HTTP adapter using gloo-net (`fetch` underneath).

use gloo_net::http::Request;

use crate::infrastructure::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawResponse, SubmissionApiPort};

/// fetch-backed implementation of [`SubmissionApiPort`]
#[derive(Clone)]
pub struct ApiAdapter {
    config: ClientConfig,
}

impl ApiAdapter {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl SubmissionApiPort for ApiAdapter {
    async fn post_json(&self, path: &str, body: &str) -> Result<RawResponse, ApiError> {
        let url = self.config.endpoint(path);

        let request = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(body.to_owned())
            .map_err(ApiError::request)?;

        let response = request.send().await.map_err(ApiError::network)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::network)?;

        Ok(RawResponse { status, body })
    }
}
