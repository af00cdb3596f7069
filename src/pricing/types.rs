use crate::error::{Parameter, PricingError};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Exercise right of a European option.
///
/// Deserializes through [`FromStr`], so request files accept the same spellings as
/// `str::parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<String> for OptionKind {
    type Error = PricingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    /// Accepts `c`/`call` and `p`/`put` in any case. Anything else is rejected rather than
    /// falling through to one of the kinds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionKind::Call),
            "p" | "put" => Ok(OptionKind::Put),
            _ => Err(PricingError::UnknownOptionKind(s.to_string())),
        }
    }
}

/// Contract terms and market rates for a single European option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractParameters {
    pub option_kind: OptionKind,
    /// Strike price (K)
    pub strike: f64,
    /// Annualized volatility (σ, as decimal)
    pub volatility: f64,
    /// Continuously compounded risk-free rate (r)
    pub risk_free_rate: f64,
    /// Cost of carry (b). Equal to r for a non-dividend-paying underlying.
    pub cost_of_carry: f64,
    /// Time to expiry in years (T)
    pub time_to_expiry: f64,
}

impl Default for ContractParameters {
    /// Three-month call struck at 65 with 30% vol and an 8% rate, carry equal to the rate.
    fn default() -> Self {
        Self {
            option_kind: OptionKind::Call,
            strike: 65.0,
            volatility: 0.30,
            risk_free_rate: 0.08,
            cost_of_carry: 0.08,
            time_to_expiry: 0.25,
        }
    }
}

impl ContractParameters {
    pub fn new(
        option_kind: OptionKind,
        strike: f64,
        volatility: f64,
        risk_free_rate: f64,
        cost_of_carry: f64,
        time_to_expiry: f64,
    ) -> Self {
        Self {
            option_kind,
            strike,
            volatility,
            risk_free_rate,
            cost_of_carry,
            time_to_expiry,
        }
    }

    pub fn with_kind(mut self, option_kind: OptionKind) -> Self {
        self.option_kind = option_kind;
        self
    }

    pub fn with_strike(mut self, strike: f64) -> Self {
        self.strike = strike;
        self
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets r only. Call [`with_cost_of_carry`](Self::with_cost_of_carry) as well when the
    /// carry should follow the new rate.
    pub fn with_risk_free_rate(mut self, risk_free_rate: f64) -> Self {
        self.risk_free_rate = risk_free_rate;
        self
    }

    pub fn with_cost_of_carry(mut self, cost_of_carry: f64) -> Self {
        self.cost_of_carry = cost_of_carry;
        self
    }

    pub fn with_time_to_expiry(mut self, time_to_expiry: f64) -> Self {
        self.time_to_expiry = time_to_expiry;
        self
    }
}

/// A contract plus the underlying price (U) at which to evaluate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRequest {
    pub contract: ContractParameters,
    pub underlying_price: f64,
}

impl PricingRequest {
    pub fn new(contract: ContractParameters, underlying_price: f64) -> Self {
        Self {
            contract,
            underlying_price,
        }
    }

    /// Checks the domain of every input the closed form depends on.
    ///
    /// Strike, volatility, expiry and underlying must be strictly positive and finite. Rates
    /// may take any sign but must be finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        let c = &self.contract;
        let positive = [
            (Parameter::Strike, c.strike),
            (Parameter::Volatility, c.volatility),
            (Parameter::TimeToExpiry, c.time_to_expiry),
            (Parameter::UnderlyingPrice, self.underlying_price),
        ];
        for (parameter, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PricingError::InvalidParameter { parameter, value });
            }
        }

        let finite = [
            (Parameter::RiskFreeRate, c.risk_free_rate),
            (Parameter::CostOfCarry, c.cost_of_carry),
        ];
        for (parameter, value) in finite {
            if !value.is_finite() {
                return Err(PricingError::InvalidParameter { parameter, value });
            }
        }

        Ok(())
    }
}

/// A priced request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    pub request: PricingRequest,
    pub price: f64,
}

impl fmt::Display for PricingResult {
    /// Renders as `Price: <value>`, forwarding any precision to the price,
    /// e.g. `format!("{:.4}", result)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Price: ")?;
        fmt::Display::fmt(&self.price, f)
    }
}

/// Outcome of one entry in a batch. Failed entries keep their request for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingOutcome {
    pub request: PricingRequest,
    pub price: Result<f64, PricingError>,
}

impl PricingOutcome {
    pub fn into_result(self) -> Result<PricingResult, PricingError> {
        let request = self.request;
        self.price.map(|price| PricingResult { request, price })
    }
}
