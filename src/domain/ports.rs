use super::order::{CreatedOrder, OrderTotal, PaymentMethod};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// A transport-agnostic outbound request: method, resource target relative
/// to the remote service root, optional headers and body.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub method: Method,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RemoteRequest {
    pub fn get(target: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            target: target.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A POST request carrying `body` as JSON, with the content type header
    /// already set.
    pub fn post_json<T: Serialize>(target: impl Into<String>, body: &T) -> Result<Self> {
        Ok(Self {
            method: Method::Post,
            target: target.into(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(serde_json::to_string(body)?),
        })
    }
}

/// A response body as delivered by a [`RemoteClient`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteResponse {
    pub body: String,
}

impl RemoteResponse {
    /// Parses the body as JSON. An empty body reads as JSON `null`, which
    /// lets callers deserialize into `Option<T>` to detect "not found".
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let body = if self.body.trim().is_empty() {
            "null"
        } else {
            self.body.as_str()
        };
        serde_json::from_str(body).map_err(CheckoutError::from)
    }
}

/// The remote service boundary: a generic request/response exchange, not
/// tied to any particular HTTP client.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    async fn execute(&self, request: RemoteRequest) -> Result<RemoteResponse>;
}

/// The payment collaborator: builds a payment method descriptor for a total
/// and initiates payment for a created order.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    fn build_payment_method(&self, total: OrderTotal) -> PaymentMethod;
    async fn pay_via_link(&self, order: CreatedOrder) -> Result<()>;
}

pub type RemoteClientBox = Box<dyn RemoteClient>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
