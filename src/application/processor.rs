use crate::domain::order::{Coupon, CreatedOrder, OrderDraft, OrderPayload, OrderTotal};
use crate::domain::ports::{PaymentGatewayBox, RemoteClientBox, RemoteRequest};
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Resource target for coupon lookups, addressed as `coupons/{coupon_id}`.
pub const COUPONS_RESOURCE: &str = "coupons";
/// Resource target for order creation.
pub const ORDERS_RESOURCE: &str = "orders";

/// The main entry point for order processing.
///
/// `OrderProcessor` takes an order draft through a straight-line pipeline:
/// validation, subtotal, optional coupon discount, payload construction,
/// remote order creation, and payment hand-off. It owns no state beyond its
/// two injected collaborators, so concurrent `process` calls are
/// independent.
pub struct OrderProcessor {
    payments: PaymentGatewayBox,
    remote: RemoteClientBox,
}

impl OrderProcessor {
    /// Creates a new `OrderProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `payments` - The payment gateway handling method descriptors and
    ///   payment initiation.
    /// * `remote` - The client used for coupon lookup and order creation.
    pub fn new(payments: PaymentGatewayBox, remote: RemoteClientBox) -> Self {
        Self { payments, remote }
    }

    /// Processes a single order draft.
    ///
    /// Validation runs before any remote call; a rejected order causes no
    /// network activity. On success the order has been created remotely and
    /// handed to the payment gateway.
    pub async fn process(&self, order: OrderDraft) -> Result<()> {
        Self::validate(&order)?;

        let mut total = order.subtotal();

        if let Some(coupon_id) = order.coupon_id.clone() {
            total = self.apply_coupon(&coupon_id, total).await?;
        }

        let payload = self.build_payload(order, total);

        let created = self.create_order(&payload).await?;
        info!(total = %total, "order created, handing off to payment");

        self.payments.pay_via_link(created).await
    }

    fn validate(order: &OrderDraft) -> Result<()> {
        if order.items.is_empty() {
            return Err(CheckoutError::Validation(
                "Order items are required".to_string(),
            ));
        }

        if order
            .items
            .iter()
            .any(|item| item.price <= Decimal::ZERO || item.quantity <= 0)
        {
            return Err(CheckoutError::Validation(
                "Order items are invalid".to_string(),
            ));
        }

        Ok(())
    }

    async fn apply_coupon(&self, coupon_id: &str, total: OrderTotal) -> Result<OrderTotal> {
        debug!(coupon_id, "looking up coupon");
        let request = RemoteRequest::get(format!("{COUPONS_RESOURCE}/{coupon_id}"));
        let response = self.remote.execute(request).await?;

        // A null (or empty) body is the service's "no such coupon" signal.
        let coupon: Coupon = response
            .json::<Option<Coupon>>()?
            .ok_or_else(|| CheckoutError::Coupon("Invalid coupon".to_string()))?;

        Ok(total.less_discount(coupon.discount))
    }

    fn build_payload(&self, order: OrderDraft, total: OrderTotal) -> OrderPayload {
        let payment_method = self.payments.build_payment_method(total);
        OrderPayload {
            items: order.items,
            coupon_id: order.coupon_id,
            total_price: total,
            payment_method,
        }
    }

    async fn create_order(&self, payload: &OrderPayload) -> Result<CreatedOrder> {
        let request = RemoteRequest::post_json(ORDERS_RESOURCE, payload)?;
        let response = self.remote.execute(request).await?;
        response.json()
    }
}
