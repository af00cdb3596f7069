//! # Option-Calc: Closed-Form European Option Pricing
//!
//! `option-calc` prices European calls and puts with the generalized Black-Scholes-Merton
//! formula, where a cost-of-carry term `b` covers non-dividend stocks (`b = r`), continuous
//! dividend yields (`b = r - q`) and futures (`b = 0`).
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put prices from `d1`/`d2` terms
//! - **Lightweight normal CDF**: three-term polynomial approximation, with an erf-based
//!   alternative when more precision is needed
//! - **Explicit validation**: domain errors name the offending field instead of yielding NaN
//! - **Batch input**: requests from TOML or CSV, priced independently
//!
//! ## Quick Start
//!
//! ```rust
//! use option_calc::{price, ContractParameters, OptionKind, PricingRequest};
//!
//! let contract = ContractParameters::new(OptionKind::Call, 65.0, 0.30, 0.08, 0.08, 0.25);
//! let request = PricingRequest::new(contract, 60.0);
//!
//! let call = price(&request)?;
//! assert!((call - 2.1334).abs() < 1e-3);
//! # Ok::<(), option_calc::PricingError>(())
//! ```
//!
//! ## Accuracy
//!
//! The default cumulative normal has an absolute error below about `1.2e-5`, so prices carry
//! an error of roughly `(U + K) * 1.2e-5`. Use [`default_configs::precise()`] to switch to
//! the erf-based CDF.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{Parameter, PricingError};

pub use models::{
    bs::{parity_value, BlackScholesPricer, DTerms},
    gauss::{cumulative, density, ErfNormal, NormalDistribution, PolynomialNormal},
};

pub use pricing::{
    config::{DistributionKind, PricerConfig, ValidationPolicy},
    loader::{is_csv_path, load_requests_csv, load_requests_from_path, load_requests_toml},
    pipeline::{price_batch, price_request},
    types::{ContractParameters, OptionKind, PricingOutcome, PricingRequest, PricingResult},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricer settings.
///
/// - [`standard()`]: validated inputs, polynomial CDF
/// - [`unchecked()`]: no validation, NaN/Infinity propagate
/// - [`precise()`]: validated inputs, erf-based CDF
pub mod default_configs {
    use crate::pricing::config::PricerConfig;

    /// Validated inputs with the polynomial cumulative normal. This is what [`crate::price`]
    /// uses.
    ///
    /// ```rust
    /// use option_calc::{default_configs, ValidationPolicy};
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.validation, ValidationPolicy::Strict);
    /// ```
    pub fn standard() -> PricerConfig {
        PricerConfig::standard()
    }

    /// No validation. A zero expiry or volatility is evaluated as-is, so callers see NaN or
    /// infinite prices where the formula is undefined.
    pub fn unchecked() -> PricerConfig {
        PricerConfig::unchecked()
    }

    /// Validated inputs with the erf-based cumulative normal.
    pub fn precise() -> PricerConfig {
        PricerConfig::precise()
    }
}

// ================================================================================================
// PRICING API
// ================================================================================================

/// Price a European option with input validation and the polynomial normal CDF.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] if strike, volatility, time to expiry or underlying
/// price is not strictly positive, or any field is not finite.
///
/// # Example
///
/// ```rust
/// use option_calc::{price, ContractParameters, OptionKind, Parameter, PricingRequest};
///
/// let expired = ContractParameters::default().with_time_to_expiry(0.0);
/// let err = price(&PricingRequest::new(expired, 60.0)).unwrap_err();
/// assert_eq!(err.parameter(), Some(Parameter::TimeToExpiry));
/// ```
pub fn price(request: &PricingRequest) -> Result<f64, PricingError> {
    price_request(request, &PricerConfig::standard())
}

/// Price without any validation, mirroring the bare formula.
///
/// Degenerate inputs are not rejected: `T = 0` at the money divides zero by zero and returns
/// NaN, and other out-of-domain inputs give NaN, infinite or meaningless finite values.
pub fn price_unchecked(request: &PricingRequest) -> f64 {
    BlackScholesPricer::new(PolynomialNormal).price(request)
}

/// Price a request and pair the result with it for display.
pub fn price_with_result(
    request: PricingRequest,
    config: &PricerConfig,
) -> Result<PricingResult, PricingError> {
    let price = price_request(&request, config)?;
    Ok(PricingResult { request, price })
}
