use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cart line item.
///
/// Prices are decimal to avoid floating point drift in money arithmetic.
/// Quantity stays signed so that out-of-range input reaches validation
/// instead of failing at the deserialization boundary.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub price: Decimal,
    pub quantity: i64,
}

/// The caller-supplied order, before any processing.
///
/// Fields are optional on the wire; a missing `items` array deserializes to
/// empty and is rejected by the processor's validation step.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
}

impl OrderDraft {
    /// Sum of price x quantity across all items, before any discount.
    pub fn subtotal(&self) -> OrderTotal {
        let sum = self
            .items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum();
        OrderTotal::new(sum)
    }
}

/// The computed order total.
///
/// Wrapper around `rust_decimal::Decimal` carrying the one domain rule for
/// totals: a discount can never push the total below zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderTotal(Decimal);

impl OrderTotal {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Subtracts a discount, clamping at zero.
    pub fn less_discount(self, discount: Decimal) -> Self {
        let discounted = self.0 - discount;
        if discounted < Decimal::ZERO {
            Self::ZERO
        } else {
            Self(discounted)
        }
    }
}

impl fmt::Display for OrderTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A coupon as returned by the coupon service. Fetched per request, never
/// stored.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Coupon {
    pub discount: Decimal,
}

/// Payment method descriptor produced by the gateway. Opaque to this crate;
/// serialized verbatim into the order payload.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(transparent)]
pub struct PaymentMethod(pub serde_json::Value);

/// The server-assigned order returned by the order service. Opaque; handed
/// verbatim to the payment gateway.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(transparent)]
pub struct CreatedOrder(pub serde_json::Value);

/// The body sent to the order-creation endpoint: the draft's fields plus the
/// computed total and the payment method descriptor.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
    pub total_price: OrderTotal,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn item(id: &str, price: Decimal, quantity: i64) -> OrderItem {
        OrderItem {
            id: id.to_string(),
            product_id: format!("product-{id}"),
            price,
            quantity,
        }
    }

    #[test]
    fn test_subtotal_single_item() {
        let draft = OrderDraft {
            items: vec![item("1", dec!(100), 2)],
            coupon_id: None,
        };
        assert_eq!(draft.subtotal(), OrderTotal::new(dec!(200)));
    }

    #[test]
    fn test_subtotal_multiple_items() {
        let draft = OrderDraft {
            items: vec![
                item("1", dec!(100), 2),
                item("2", dec!(100), 2),
                item("3", dec!(100), 2),
            ],
            coupon_id: None,
        };
        assert_eq!(draft.subtotal(), OrderTotal::new(dec!(600)));
    }

    #[test]
    fn test_subtotal_empty_order_is_zero() {
        assert_eq!(OrderDraft::default().subtotal(), OrderTotal::ZERO);
    }

    #[test]
    fn test_less_discount() {
        let total = OrderTotal::new(dec!(200));
        assert_eq!(total.less_discount(dec!(50)), OrderTotal::new(dec!(150)));
    }

    #[test]
    fn test_less_discount_clamps_at_zero() {
        let total = OrderTotal::new(dec!(200));
        assert_eq!(total.less_discount(dec!(300)), OrderTotal::ZERO);
        assert_eq!(total.less_discount(dec!(200)), OrderTotal::ZERO);
    }

    #[test]
    fn test_draft_deserialization() {
        let data = r#"{
            "items": [{"id": "item1", "productId": "product1", "price": 100, "quantity": 2}],
            "couponId": "spring-sale"
        }"#;
        let draft: OrderDraft = serde_json::from_str(data).unwrap();

        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].product_id, "product1");
        assert_eq!(draft.items[0].price, dec!(100));
        assert_eq!(draft.items[0].quantity, 2);
        assert_eq!(draft.coupon_id.as_deref(), Some("spring-sale"));
    }

    #[test]
    fn test_draft_deserialization_defaults() {
        let draft: OrderDraft = serde_json::from_str("{}").unwrap();
        assert!(draft.items.is_empty());
        assert!(draft.coupon_id.is_none());
    }

    #[test]
    fn test_payload_serialization_skips_absent_coupon() {
        let payload = OrderPayload {
            items: vec![item("1", dec!(100), 2)],
            coupon_id: None,
            total_price: OrderTotal::new(dec!(200)),
            payment_method: PaymentMethod(json!("card")),
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("couponId").is_none());
        assert_eq!(value["totalPrice"], json!("200"));
        assert_eq!(value["paymentMethod"], json!("card"));
        assert_eq!(value["items"][0]["productId"], json!("product-1"));
    }

    #[test]
    fn test_coupon_deserialization_ignores_extra_fields() {
        let coupon: Coupon =
            serde_json::from_str(r#"{"id": "c1", "discount": 50, "code": "SAVE50"}"#).unwrap();
        assert_eq!(coupon.discount, dec!(50));
    }
}
