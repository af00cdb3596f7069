// Generalized Black-Scholes-Merton pricing with a cost-of-carry term `b`.
//   b = r      non-dividend stock
//   b = r - q  continuous dividend yield q
//   b = 0      option on a future (Black 76)
// Greeks and implied volatility are out of scope for this crate.

use crate::models::gauss::{NormalDistribution, PolynomialNormal};
use crate::pricing::types::{OptionKind, PricingRequest};
use tracing::debug;

/// Intermediate terms shared by the call and put formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DTerms {
    /// σ·√T
    pub denom: f64,
    pub d1: f64,
    pub d2: f64,
    /// e^((b−r)·T), the carry discount applied to the underlying
    pub carry_factor: f64,
    /// e^(−r·T)
    pub discount_factor: f64,
}

impl DTerms {
    #[allow(non_snake_case)]
    pub fn new(request: &PricingRequest) -> Self {
        let c = &request.contract;
        let U = request.underlying_price;
        let (K, sigma, r, b, T) = (
            c.strike,
            c.volatility,
            c.risk_free_rate,
            c.cost_of_carry,
            c.time_to_expiry,
        );

        let denom = sigma * T.sqrt();
        let d1 = ((U / K).ln() + (b + 0.5 * sigma * sigma) * T) / denom;
        let d2 = d1 - denom;

        Self {
            denom,
            d1,
            d2,
            carry_factor: ((b - r) * T).exp(),
            discount_factor: (-r * T).exp(),
        }
    }
}

/// Closed-form European option pricer, generic over the normal CDF it uses.
///
/// Pricing does no validation: inputs outside the domain flow through IEEE arithmetic and
/// may produce NaN or infinite prices. Validate with [`PricingRequest::validate`] first, or
/// go through [`crate::price`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesPricer<N = PolynomialNormal> {
    normal: N,
}

impl<N: NormalDistribution> BlackScholesPricer<N> {
    pub fn new(normal: N) -> Self {
        Self { normal }
    }

    /// Price of the option described by `request`, dispatched on its kind.
    pub fn price(&self, request: &PricingRequest) -> f64 {
        let terms = DTerms::new(request);
        debug!(
            kind = %request.contract.option_kind,
            d1 = terms.d1,
            d2 = terms.d2,
            denom = terms.denom,
            "evaluating closed form"
        );
        match request.contract.option_kind {
            OptionKind::Call => self.call_from_terms(request, &terms),
            OptionKind::Put => self.put_from_terms(request, &terms),
        }
    }

    /// Call price regardless of the request's option kind.
    pub fn call_price(&self, request: &PricingRequest) -> f64 {
        self.call_from_terms(request, &DTerms::new(request))
    }

    /// Put price regardless of the request's option kind.
    pub fn put_price(&self, request: &PricingRequest) -> f64 {
        self.put_from_terms(request, &DTerms::new(request))
    }

    // U·e^((b−r)T)·N(d1) − K·e^(−rT)·N(d2)
    fn call_from_terms(&self, request: &PricingRequest, t: &DTerms) -> f64 {
        let n = &self.normal;
        request.underlying_price * t.carry_factor * n.cumulative(t.d1)
            - request.contract.strike * t.discount_factor * n.cumulative(t.d2)
    }

    // K·e^(−rT)·N(−d2) − U·e^((b−r)T)·N(−d1)
    fn put_from_terms(&self, request: &PricingRequest, t: &DTerms) -> f64 {
        let n = &self.normal;
        request.contract.strike * t.discount_factor * n.cumulative(-t.d2)
            - request.underlying_price * t.carry_factor * n.cumulative(-t.d1)
    }
}

/// Forward parity value `U·e^((b−r)T) − K·e^(−rT)`, which equals `call − put`.
#[allow(non_snake_case)]
pub fn parity_value(request: &PricingRequest) -> f64 {
    let c = &request.contract;
    let T = c.time_to_expiry;
    request.underlying_price * ((c.cost_of_carry - c.risk_free_rate) * T).exp()
        - c.strike * (-c.risk_free_rate * T).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gauss::ErfNormal;
    use crate::pricing::types::ContractParameters;

    fn reference_request(kind: OptionKind) -> PricingRequest {
        PricingRequest::new(ContractParameters::default().with_kind(kind), 60.0)
    }

    #[test]
    fn test_d_terms() {
        let t = DTerms::new(&reference_request(OptionKind::Call));
        assert!((t.denom - 0.15).abs() < 1e-12);
        // (ln(60/65) + (0.08 + 0.045) * 0.25) / 0.15
        let expected_d1 = ((60.0_f64 / 65.0).ln() + 0.125 * 0.25) / 0.15;
        assert!((t.d1 - expected_d1).abs() < 1e-12);
        assert!((t.d1 - t.d2 - t.denom).abs() < 1e-15);
        assert_eq!(t.carry_factor, 1.0);
        assert!((t.discount_factor - (-0.02_f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_reference_call_price() {
        let pricer = BlackScholesPricer::<PolynomialNormal>::default();
        let call = pricer.price(&reference_request(OptionKind::Call));
        assert!((call - 2.1334).abs() < 1e-3, "call = {}", call);

        let exact = BlackScholesPricer::new(ErfNormal);
        let call_exact = exact.price(&reference_request(OptionKind::Call));
        assert!((call_exact - 2.13337).abs() < 1e-4, "call = {}", call_exact);
    }

    #[test]
    fn test_dispatch_matches_explicit_formulas() {
        let pricer = BlackScholesPricer::<PolynomialNormal>::default();
        let call_req = reference_request(OptionKind::Call);
        let put_req = reference_request(OptionKind::Put);

        assert_eq!(pricer.price(&call_req), pricer.call_price(&put_req));
        assert_eq!(pricer.price(&put_req), pricer.put_price(&call_req));
    }

    #[test]
    fn test_put_call_parity_reference() {
        let pricer = BlackScholesPricer::<PolynomialNormal>::default();
        let req = reference_request(OptionKind::Call);
        let lhs = pricer.call_price(&req) - pricer.put_price(&req);
        assert!((lhs - parity_value(&req)).abs() < 1e-6);
        // K·e^(−rT) − U for b = r
        assert!((parity_value(&req) - (60.0 - 65.0 * (-0.02_f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_cost_of_carry_zero_is_black76() {
        // With b = 0 call and put on an at-the-money forward are equal
        let contract = ContractParameters::default()
            .with_strike(100.0)
            .with_cost_of_carry(0.0);
        let req = PricingRequest::new(contract, 100.0);
        let pricer = BlackScholesPricer::new(ErfNormal);
        assert!((pricer.call_price(&req) - pricer.put_price(&req)).abs() < 1e-12);
    }

    #[test]
    fn test_unvalidated_degenerate_inputs_propagate() {
        let pricer = BlackScholesPricer::<PolynomialNormal>::default();

        // T = 0 at the money: 0/0 in d1
        let at_money = PricingRequest::new(
            ContractParameters::default().with_time_to_expiry(0.0),
            65.0,
        );
        assert!(pricer.price(&at_money).is_nan());

        // σ = 0 at the money forward: 0/0 again
        let zero_vol = PricingRequest::new(
            ContractParameters::default()
                .with_volatility(0.0)
                .with_cost_of_carry(0.0),
            65.0,
        );
        assert!(pricer.price(&zero_vol).is_nan());
    }
}
