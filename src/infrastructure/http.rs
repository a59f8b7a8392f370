use crate::domain::ports::{Method, RemoteClient, RemoteRequest, RemoteResponse};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// A reqwest-backed [`RemoteClient`] resolving targets against a base URL.
///
/// The processor itself imposes no deadline on remote calls; the client-level
/// timeout here bounds them at the transport layer.
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| CheckoutError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, target: &str) -> String {
        format!("{}/{}", self.base_url, target)
    }
}

#[async_trait]
impl RemoteClient for HttpRemote {
    async fn execute(&self, request: RemoteRequest) -> Result<RemoteResponse> {
        let url = self.url(&request.target);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CheckoutError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckoutError::Transport(format!(
                "unexpected status {status} from {url}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Transport(e.to_string()))?;
        Ok(RemoteResponse { body })
    }
}
