use crate::domain::order::OrderDraft;
use crate::error::{CheckoutError, Result};
use std::io::Read;

/// Reads an order draft from a JSON source.
///
/// Wraps any `Read` source (e.g. File, Stdin). Missing optional fields fall
/// back to their defaults; semantic validation is left to the processor.
pub struct OrderReader<R: Read> {
    source: R,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read_order(self) -> Result<OrderDraft> {
        serde_json::from_reader(self.source).map_err(CheckoutError::from)
    }
}
