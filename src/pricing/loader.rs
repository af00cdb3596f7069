//! Reading pricing requests from TOML documents and CSV files.
//!
//! Both formats share one row shape:
//!
//! ```text
//! option_kind,strike,volatility,risk_free_rate,cost_of_carry,time_to_expiry,underlying_price
//! call,65,0.30,0.08,0.08,0.25,60
//! put,65,0.30,0.08,,0.25,60
//! ```
//!
//! `option_kind` accepts anything [`OptionKind`]'s `FromStr` does. A missing
//! `cost_of_carry` means a non-dividend underlying (b = r). Domain checks are left to
//! pricing so that a batch can report bad rows individually.

use crate::pricing::types::{ContractParameters, OptionKind, PricingRequest};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct RequestRow {
    option_kind: OptionKind,
    strike: f64,
    volatility: f64,
    risk_free_rate: f64,
    #[serde(default)]
    cost_of_carry: Option<f64>,
    time_to_expiry: f64,
    underlying_price: f64,
}

impl RequestRow {
    fn into_request(self) -> PricingRequest {
        let contract = ContractParameters::new(
            self.option_kind,
            self.strike,
            self.volatility,
            self.risk_free_rate,
            self.cost_of_carry.unwrap_or(self.risk_free_rate),
            self.time_to_expiry,
        );
        PricingRequest::new(contract, self.underlying_price)
    }
}

#[derive(Debug, Deserialize)]
struct RequestFile {
    #[serde(default)]
    request: Vec<RequestRow>,
}

/// Parse every `[[request]]` table in a TOML document.
pub fn load_requests_toml(s: &str) -> Result<Vec<PricingRequest>> {
    let file: RequestFile = toml::from_str(s).context("Failed to parse request document")?;
    Ok(file.request.into_iter().map(RequestRow::into_request).collect())
}

/// Parse CSV rows with a header line from any reader.
pub fn load_requests_csv<R: Read>(reader: R) -> Result<Vec<PricingRequest>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut requests = Vec::new();

    for (i, result) in reader.deserialize::<RequestRow>().enumerate() {
        // +2: header line plus 1-based numbering
        let line = i + 2;
        let row = result.with_context(|| format!("Failed to read CSV line {}", line))?;
        requests.push(row.into_request());
    }

    Ok(requests)
}

/// Whether [`load_requests_from_path`] reads `path` as CSV. Every other file is TOML.
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Load requests from a file, choosing the format by extension (`.csv`, otherwise TOML).
pub fn load_requests_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PricingRequest>> {
    let path = path.as_ref();
    let requests = if is_csv_path(path) {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        load_requests_csv(file)?
    } else {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        load_requests_toml(&contents)?
    };

    info!(path = %path.display(), count = requests.len(), "loaded pricing requests");
    Ok(requests)
}
