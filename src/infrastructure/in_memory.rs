use crate::domain::order::{CreatedOrder, OrderTotal, PaymentMethod};
use crate::domain::ports::{
    Method, PaymentGateway, RemoteClient, RemoteRequest, RemoteResponse,
};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// A thread-safe in-memory remote service.
///
/// Responses are scripted per `(method, target)` route, and every issued
/// request is recorded for later inspection. Serves tests and the sandbox
/// wiring of the binary, where no real coupon or order service exists.
#[derive(Default, Clone)]
pub struct InMemoryRemote {
    routes: Arc<RwLock<HashMap<(Method, String), String>>>,
    requests: Arc<RwLock<Vec<RemoteRequest>>>,
}

impl InMemoryRemote {
    /// Creates a new remote with no scripted routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the response body for a route.
    pub async fn respond(&self, method: Method, target: impl Into<String>, body: impl Into<String>) {
        let mut routes = self.routes.write().await;
        routes.insert((method, target.into()), body.into());
    }

    /// All requests issued so far, in order.
    pub async fn requests(&self) -> Vec<RemoteRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl RemoteClient for InMemoryRemote {
    async fn execute(&self, request: RemoteRequest) -> Result<RemoteResponse> {
        let key = (request.method, request.target.clone());
        self.requests.write().await.push(request);

        let routes = self.routes.read().await;
        let body = routes.get(&key).cloned().ok_or_else(|| {
            CheckoutError::Transport(format!("no scripted response for {:?} {}", key.0, key.1))
        })?;
        Ok(RemoteResponse { body })
    }
}

/// A thread-safe in-memory payment gateway.
///
/// Builds payment-link descriptors and records every order handed to
/// `pay_via_link`, so callers can assert on (or, in sandbox mode, print)
/// the initiated payments.
#[derive(Default, Clone)]
pub struct InMemoryGateway {
    payments: Arc<RwLock<Vec<CreatedOrder>>>,
}

impl InMemoryGateway {
    /// Creates a new gateway with no recorded payments.
    pub fn new() -> Self {
        Self::default()
    }

    /// All orders handed off for payment so far, in order.
    pub async fn payments(&self) -> Vec<CreatedOrder> {
        self.payments.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryGateway {
    fn build_payment_method(&self, total: OrderTotal) -> PaymentMethod {
        PaymentMethod(json!({ "type": "payment_link", "amount": total }))
    }

    async fn pay_via_link(&self, order: CreatedOrder) -> Result<()> {
        info!("initiating payment link");
        self.payments.write().await.push(order);
        Ok(())
    }
}
