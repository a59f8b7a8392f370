use checkout::domain::order::{OrderDraft, OrderItem};
use rust_decimal::Decimal;
use std::io::Error;
use std::path::Path;

pub fn item(id: &str, price: Decimal, quantity: i64) -> OrderItem {
    OrderItem {
        id: id.to_string(),
        product_id: format!("product-{id}"),
        price,
        quantity,
    }
}

pub fn draft(items: Vec<OrderItem>, coupon_id: Option<&str>) -> OrderDraft {
    OrderDraft {
        items,
        coupon_id: coupon_id.map(str::to_string),
    }
}

pub fn write_order_file(path: &Path, draft: &OrderDraft) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(draft)?;
    std::fs::write(path, json)
}
