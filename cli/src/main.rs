//! `submit-product` -- posts one product to the products API and prints the
//! product the server sent back.
//!
//! See [`config`] for the environment variables it reads.

mod config;

use std::process::ExitCode;

use product_core::{Product, ProductSubmitter, UreqTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_cli=info,product_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let transport = match config.timeout {
        Some(timeout) => UreqTransport::with_timeout(timeout),
        None => UreqTransport::new(),
    };
    let submitter = ProductSubmitter::new(config.api_url, transport);

    let product = Product {
        title: "BMW Pencil".to_string(),
        description: "A luxury pencil by BMW".to_string(),
        price: 1213,
        brand: "BMW".to_string(),
        category: "stationery".to_string(),
    };

    tracing::info!(endpoint = submitter.endpoint(), title = %product.title, "adding product");

    match submitter.submit(product) {
        Ok(added) => {
            println!("Product added successfully: {added:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to add product");
            eprintln!("Failed to add product: {e}");
            ExitCode::FAILURE
        }
    }
}
