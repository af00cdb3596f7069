// demos/pricing_demo.rs

//! Price European options from a request file, or the default contract when none is given.
//!
//! ```text
//! cargo run --example pricing_demo                     # default contract at U = 60
//! cargo run --example pricing_demo -- requests.toml    # [[request]] tables (+ optional [pricer])
//! cargo run --example pricing_demo -- requests.csv
//! RUST_LOG=option_calc=debug cargo run --example pricing_demo
//! ```

use anyhow::Result;
use option_calc::{
    default_configs, is_csv_path, load_requests_from_path, price_batch, ContractParameters,
    OptionKind, PricerConfig, PricingRequest,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("European Option Pricing Demo");
    println!("============================");

    let (requests, config) = match std::env::args().nth(1) {
        Some(path) => load_inputs(Path::new(&path))?,
        None => (default_requests(), default_configs::standard()),
    };

    println!(
        "Pricing {} request(s) with {:?} validation and {:?} CDF\n",
        requests.len(),
        config.validation,
        config.distribution
    );
    println!(
        "{:<6} {:>8} {:>6} {:>7} {:>7} {:>6} {:>8}  {}",
        "Kind", "Strike", "Vol", "Rate", "Carry", "T", "Spot", "Result"
    );
    println!("{}", "-".repeat(70));

    for outcome in price_batch(&requests, &config) {
        let c = outcome.request.contract;
        let spot = outcome.request.underlying_price;
        let shown = match outcome.into_result() {
            Ok(result) => format!("{:.4}", result),
            Err(e) => format!("error: {}", e),
        };
        println!(
            "{:<6} {:>8.2} {:>6.2} {:>7.4} {:>7.4} {:>6.3} {:>8.2}  {}",
            c.option_kind.as_str(),
            c.strike,
            c.volatility,
            c.risk_free_rate,
            c.cost_of_carry,
            c.time_to_expiry,
            spot,
            shown
        );
    }

    Ok(())
}

/// Requests come from the file; any non-CSV file is TOML and may carry a `[pricer]` table.
fn load_inputs(path: &Path) -> Result<(Vec<PricingRequest>, PricerConfig)> {
    let requests = load_requests_from_path(path)?;
    let config = if is_csv_path(path) {
        default_configs::standard()
    } else {
        PricerConfig::from_file(path)?
    };
    Ok((requests, config))
}

fn default_requests() -> Vec<PricingRequest> {
    let contract = ContractParameters::default();
    vec![
        PricingRequest::new(contract, 60.0),
        PricingRequest::new(contract.with_kind(OptionKind::Put), 60.0),
    ]
}
