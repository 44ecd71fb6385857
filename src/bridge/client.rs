use super::protocol::{GenerateModelRequest, GenerateModelResponse};
use std::future::Future;
use std::time::Duration;

/// Default upper bound on a single bridge round trip.
pub const DEFAULT_BRIDGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Ways a bridge call can fail.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Connection refused, DNS failure, timeout, or the body could not be read.
    #[error("Bridge service unavailable at {url}: {reason}")]
    Unavailable { url: String, reason: String },
    /// The bridge answered, but not with something usable.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Bridge error (status {0}).")]
    Status(u16),
    #[error("Bridge response was not valid JSON.")]
    InvalidBody(#[source] serde_json::Error),
}

/// Anything that can turn a generation request into a model.
pub trait ModelBridge: Send + Sync + 'static {
    fn generate(
        &self,
        request: &GenerateModelRequest,
    ) -> impl Future<Output = Result<GenerateModelResponse, BridgeError>> + Send;
}

/// HTTP client for the bridge service.
pub struct BridgeClient {
    http_client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl BridgeClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn unavailable(&self, err: reqwest::Error) -> BridgeError {
        BridgeError::Unavailable {
            url: self.url.clone(),
            reason: err.to_string(),
        }
    }
}

impl ModelBridge for BridgeClient {
    async fn generate(
        &self,
        request: &GenerateModelRequest,
    ) -> Result<GenerateModelResponse, BridgeError> {
        tracing::debug!(
            "Forwarding model request for {} to {}",
            request.building_id,
            self.url
        );

        let response = self
            .http_client
            .post(&self.url)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()).into());
        }

        let body = response.bytes().await.map_err(|e| self.unavailable(e))?;
        let payload: GenerateModelResponse =
            serde_json::from_slice(&body).map_err(UpstreamError::InvalidBody)?;

        tracing::info!(
            "Bridge generated model for {} at {}",
            payload.building_id,
            payload.model_url
        );
        Ok(payload)
    }
}
