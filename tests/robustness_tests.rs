use checkout::application::processor::{ORDERS_RESOURCE, OrderProcessor};
use checkout::domain::ports::Method;
use checkout::infrastructure::in_memory::{InMemoryGateway, InMemoryRemote};
use rand::Rng;
use rust_decimal::Decimal;

mod common;
use common::{draft, item};

#[tokio::test]
async fn test_batch_of_generated_orders() {
    let remote = InMemoryRemote::new();
    let gateway = InMemoryGateway::new();
    remote
        .respond(Method::Post, ORDERS_RESOURCE, r#"{"id": "order-1"}"#)
        .await;

    let processor = OrderProcessor::new(Box::new(gateway.clone()), Box::new(remote.clone()));

    let mut rng = rand::thread_rng();
    let orders = 100;
    for i in 0..orders {
        let items = (0..rng.gen_range(1..=5))
            .map(|j| {
                item(
                    &format!("{i}-{j}"),
                    Decimal::from(rng.gen_range(1..=10_000)),
                    rng.gen_range(1..=20),
                )
            })
            .collect();
        processor.process(draft(items, None)).await.unwrap();
    }

    assert_eq!(remote.requests().await.len(), orders);
    assert_eq!(gateway.payments().await.len(), orders);
}

#[tokio::test]
async fn test_generated_invalid_orders_never_reach_the_remote() {
    let remote = InMemoryRemote::new();
    let gateway = InMemoryGateway::new();
    remote
        .respond(Method::Post, ORDERS_RESOURCE, r#"{"id": "order-1"}"#)
        .await;

    let processor = OrderProcessor::new(Box::new(gateway.clone()), Box::new(remote.clone()));

    let mut rng = rand::thread_rng();
    for i in 0..100 {
        // One poisoned item per order: zero/negative price or quantity.
        let mut items = vec![item(&i.to_string(), Decimal::from(100), 2)];
        if rng.gen_bool(0.5) {
            items.push(item("bad", Decimal::from(-rng.gen_range(0..=100)), 1));
        } else {
            items.push(item("bad", Decimal::from(100), -rng.gen_range(0..=5)));
        }

        let err = processor.process(draft(items, None)).await.unwrap_err();
        assert_eq!(err.to_string(), "Order items are invalid");
    }

    assert!(remote.requests().await.is_empty());
    assert!(gateway.payments().await.is_empty());
}
