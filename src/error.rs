//! Error types returned by the pricing API.

use std::fmt;
use thiserror::Error;

/// Identifies a pricing input field in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Strike,
    Volatility,
    RiskFreeRate,
    CostOfCarry,
    TimeToExpiry,
    UnderlyingPrice,
}

impl Parameter {
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Strike => "strike",
            Parameter::Volatility => "volatility",
            Parameter::RiskFreeRate => "risk_free_rate",
            Parameter::CostOfCarry => "cost_of_carry",
            Parameter::TimeToExpiry => "time_to_expiry",
            Parameter::UnderlyingPrice => "underlying_price",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Failures surfaced by validated pricing and option-kind parsing.
///
/// # Examples
/// ```
/// use option_calc::{Parameter, PricingError};
///
/// let err = PricingError::InvalidParameter { parameter: Parameter::Volatility, value: 0.0 };
/// assert_eq!(err.to_string(), "invalid volatility: 0");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A field is outside the domain where the closed-form price is defined.
    #[error("invalid {parameter}: {value}")]
    InvalidParameter { parameter: Parameter, value: f64 },

    /// An option kind string was neither a call nor a put.
    #[error("unknown option kind: {0:?}")]
    UnknownOptionKind(String),
}

impl PricingError {
    /// The offending field, if this is a parameter error.
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            PricingError::InvalidParameter { parameter, .. } => Some(*parameter),
            PricingError::UnknownOptionKind(_) => None,
        }
    }
}
