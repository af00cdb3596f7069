use crate::error::PricingError;
use crate::models::bs::BlackScholesPricer;
use crate::models::gauss::{ErfNormal, PolynomialNormal};
use crate::pricing::config::{DistributionKind, PricerConfig, ValidationPolicy};
use crate::pricing::types::{PricingOutcome, PricingRequest};
use tracing::{debug, warn};

/// Price one request under `config`.
pub fn price_request(request: &PricingRequest, config: &PricerConfig) -> Result<f64, PricingError> {
    if config.validation == ValidationPolicy::Strict {
        request.validate()?;
    }

    let price = match config.distribution {
        DistributionKind::Polynomial => BlackScholesPricer::new(PolynomialNormal).price(request),
        DistributionKind::Erf => BlackScholesPricer::new(ErfNormal).price(request),
    };
    Ok(price)
}

/// Price every request independently, keeping input order.
///
/// A rejected request is logged and reported in its outcome; it does not stop the batch.
pub fn price_batch(requests: &[PricingRequest], config: &PricerConfig) -> Vec<PricingOutcome> {
    let outcomes: Vec<PricingOutcome> = requests
        .iter()
        .enumerate()
        .map(|(i, request)| {
            let price = price_request(request, config);
            if let Err(ref e) = price {
                warn!(index = i, error = %e, "rejected pricing request");
            }
            PricingOutcome {
                request: *request,
                price,
            }
        })
        .collect();

    debug!(
        total = outcomes.len(),
        failed = outcomes.iter().filter(|o| o.price.is_err()).count(),
        "batch priced"
    );
    outcomes
}
