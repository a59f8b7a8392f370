use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckoutError>;

#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Order failed pre-flight validation. The message is the user-facing
    /// reason, e.g. "Order items are required".
    #[error("{0}")]
    Validation(String),
    /// Coupon lookup succeeded but the coupon does not exist.
    #[error("{0}")]
    Coupon(String),
    /// Remote call failed (network, non-success status, missing route).
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
