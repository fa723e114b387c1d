use std::time::{Duration, Instant};

use reqwest::Client;
use serde_json::Value;

use crate::api::error::ClientError;
use crate::api::payload::UploadPart;
use crate::config::ServiceConfig;
use crate::request::Action;

/// Thin client for the caption and summarize endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the endpoint serving `action`.
    pub fn endpoint_url(&self, action: Action) -> String {
        format!("{}{}", self.base_url, action.path())
    }

    /// POST one file part to the endpoint for `action` and return the
    /// decoded JSON body.
    ///
    /// Any non-2xx status is an error regardless of the body.
    pub async fn upload(&self, action: Action, part: UploadPart) -> Result<Value, ClientError> {
        let url = self.endpoint_url(action);
        let bytes = part.bytes.len();
        let form = part.into_form()?;
        let started = Instant::now();

        tracing::debug!(%url, bytes, "Sending {} request", action.noun());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| ClientError::Connect {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        tracing::info!(
            %url,
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "{} request settled",
            action.noun()
        );

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(ClientError::Decode)
    }
}
