//! Native HTTP adapter using reqwest.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::infrastructure::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawResponse, SubmissionApiPort};

/// reqwest-backed implementation of [`SubmissionApiPort`]
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    config: ClientConfig,
}

impl ApiAdapter {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }
}

#[async_trait::async_trait]
impl SubmissionApiPort for ApiAdapter {
    async fn post_json(&self, path: &str, body: &str) -> Result<RawResponse, ApiError> {
        let url = self.config.endpoint(path);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    ApiError::request(e)
                } else {
                    ApiError::network(e)
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::network)?;

        Ok(RawResponse { status, body })
    }
}
