use checkout::application::processor::{COUPONS_RESOURCE, ORDERS_RESOURCE, OrderProcessor};
use checkout::domain::ports::{Method, PaymentGatewayBox, RemoteClientBox};
use checkout::infrastructure::in_memory::{InMemoryGateway, InMemoryRemote};
use checkout::interfaces::json::order_reader::OrderReader;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input order JSON file
    input: PathBuf,

    /// Base URL of the coupon/order service (requires the transport-http
    /// feature). Without it, a local sandbox serves both calls.
    #[arg(long)]
    base_url: Option<String>,

    /// Discount returned by the sandbox coupon lookup.
    #[arg(long)]
    coupon_discount: Option<Decimal>,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let order = OrderReader::new(file).read_order().into_diagnostic()?;

    // The gateway records every payment hand-off so it can be printed below.
    let gateway = InMemoryGateway::new();
    let payments: PaymentGatewayBox = Box::new(gateway.clone());

    let remote: RemoteClientBox = match cli.base_url {
        #[cfg(feature = "transport-http")]
        Some(base_url) => {
            let remote =
                checkout::infrastructure::http::HttpRemote::new(base_url).into_diagnostic()?;
            Box::new(remote)
        }
        #[cfg(not(feature = "transport-http"))]
        Some(_) => {
            return Err(miette::miette!(
                "this build has no HTTP transport; rebuild with --features transport-http"
            ));
        }
        None => {
            let sandbox = InMemoryRemote::new();
            if let Some(coupon_id) = &order.coupon_id {
                let discount = cli.coupon_discount.unwrap_or_default();
                sandbox
                    .respond(
                        Method::Get,
                        format!("{COUPONS_RESOURCE}/{coupon_id}"),
                        format!(r#"{{"discount": "{discount}"}}"#),
                    )
                    .await;
            }
            sandbox
                .respond(
                    Method::Post,
                    ORDERS_RESOURCE,
                    r#"{"id": "sandbox-order", "status": "created"}"#,
                )
                .await;
            Box::new(sandbox)
        }
    };

    let processor = OrderProcessor::new(payments, remote);
    processor.process(order).await.into_diagnostic()?;

    // Output the orders handed off for payment, one JSON document per line.
    for created in gateway.payments().await {
        println!("{}", serde_json::to_string(&created).into_diagnostic()?);
    }

    Ok(())
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
