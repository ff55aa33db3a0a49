//! Black-Scholes pricing and greeks for European options.
//!
//! At expiry (`time_to_expiry == 0`) prices collapse to intrinsic value,
//! deltas to their limiting step values, and every other greek to 0.0.

use std::f64::consts::{PI, SQRT_2};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::numeric::{validate_finite, validate_non_negative};

/// Inputs to the Black-Scholes model. Rate and volatility are annualized;
/// time is in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    pub spot: f64,
    pub strike: f64,
    pub time_to_expiry: f64,
    pub rate: f64,
    pub volatility: f64,
}

impl OptionParams {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> CoreResult<Self> {
        let params = Self {
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Spot and strike must be positive; volatility must be positive before
    /// expiry.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [("spot", self.spot), ("strike", self.strike)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::invalid(
                    name,
                    format!("must be a finite value > 0, got {value}"),
                ));
            }
        }
        validate_non_negative("time_to_expiry", self.time_to_expiry)?;
        validate_finite("rate", self.rate)?;
        validate_non_negative("volatility", self.volatility)?;
        if self.time_to_expiry > 0.0 && self.volatility == 0.0 {
            return Err(CoreError::invalid(
                "volatility",
                "must be > 0 before expiry",
            ));
        }
        Ok(())
    }

    fn at_expiry(&self) -> bool {
        self.time_to_expiry == 0.0
    }

    fn d1_d2(&self) -> (f64, f64) {
        let vol_sqrt_t = self.volatility * self.time_to_expiry.sqrt();
        let d1 = ((self.spot / self.strike).ln()
            + (self.rate + 0.5 * self.volatility * self.volatility) * self.time_to_expiry)
            / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    fn discount(&self) -> f64 {
        (-self.rate * self.time_to_expiry).exp()
    }

    pub fn call_price(&self) -> f64 {
        if self.at_expiry() {
            return (self.spot - self.strike).max(0.0);
        }
        let (d1, d2) = self.d1_d2();
        self.spot * norm_cdf(d1) - self.strike * self.discount() * norm_cdf(d2)
    }

    pub fn put_price(&self) -> f64 {
        if self.at_expiry() {
            return (self.strike - self.spot).max(0.0);
        }
        let (d1, d2) = self.d1_d2();
        self.strike * self.discount() * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    pub fn call_delta(&self) -> f64 {
        if self.at_expiry() {
            return if self.spot > self.strike { 1.0 } else { 0.0 };
        }
        norm_cdf(self.d1_d2().0)
    }

    pub fn put_delta(&self) -> f64 {
        if self.at_expiry() {
            return if self.spot < self.strike { -1.0 } else { 0.0 };
        }
        norm_cdf(self.d1_d2().0) - 1.0
    }

    /// Same for calls and puts.
    pub fn gamma(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        let (d1, _) = self.d1_d2();
        norm_pdf(d1) / (self.spot * self.volatility * self.time_to_expiry.sqrt())
    }

    /// Same for calls and puts.
    pub fn vega(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        let (d1, _) = self.d1_d2();
        self.spot * norm_pdf(d1) * self.time_to_expiry.sqrt()
    }

    pub fn call_theta(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        let (d1, d2) = self.d1_d2();
        self.decay_term(d1) - self.rate * self.strike * self.discount() * norm_cdf(d2)
    }

    pub fn put_theta(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        let (d1, d2) = self.d1_d2();
        self.decay_term(d1) + self.rate * self.strike * self.discount() * norm_cdf(-d2)
    }

    pub fn call_rho(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        let (_, d2) = self.d1_d2();
        self.strike * self.time_to_expiry * self.discount() * norm_cdf(d2)
    }

    pub fn put_rho(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        let (_, d2) = self.d1_d2();
        -self.strike * self.time_to_expiry * self.discount() * norm_cdf(-d2)
    }

    fn decay_term(&self, d1: f64) -> f64 {
        -self.spot * norm_pdf(d1) * self.volatility / (2.0 * self.time_to_expiry.sqrt())
    }
}

/// Standard normal density.
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal CDF.
///
/// Uses `erfc` so the tails keep their relative precision.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_approx;

    fn atm() -> OptionParams {
        OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn put_call_parity() {
        let p = atm();
        let lhs = p.call_price() - p.put_price();
        let rhs = p.spot - p.strike * (-p.rate * p.time_to_expiry).exp();
        assert_approx(lhs, rhs, 1e-6);
    }

    #[test]
    fn atm_call_matches_reference_value() {
        // Closed-form reference for S=K=100, T=1, r=5%, sigma=20%.
        assert_approx(atm().call_price(), 10.450_583_572_185_565, 1e-9);
    }

    #[test]
    fn deep_otm_put_keeps_relative_precision() {
        let p = OptionParams::new(140.0, 100.0, 0.1, 0.05, 0.2).unwrap();
        let expected = 4.352_920_692e-8;
        assert!(((p.put_price() - expected) / expected).abs() < 1e-5);
    }

    #[test]
    fn intrinsic_at_expiry() {
        let p = OptionParams::new(120.0, 100.0, 0.0, 0.01, 0.3).unwrap();
        assert_eq!(p.call_price(), 20.0);
        assert_eq!(p.put_price(), 0.0);
        assert_eq!(p.call_delta(), 1.0);
        assert_eq!(p.put_delta(), 0.0);
        assert_eq!(p.gamma(), 0.0);
        assert_eq!(p.vega(), 0.0);
        assert_eq!(p.call_theta(), 0.0);
        assert_eq!(p.put_rho(), 0.0);

        let otm = OptionParams::new(80.0, 100.0, 0.0, 0.01, 0.3).unwrap();
        assert_eq!(otm.put_price(), 20.0);
        assert_eq!(otm.call_delta(), 0.0);
        assert_eq!(otm.put_delta(), -1.0);
    }

    #[test]
    fn greek_relationships() {
        let p = atm();
        assert_approx(p.call_delta() - p.put_delta(), 1.0, 1e-12);
        assert!(p.gamma() > 0.0);
        assert!(p.vega() > 0.0);
        assert!(p.call_theta() < 0.0);
        assert!(p.put_theta() < 0.0);
        assert!(p.call_rho() > 0.0);
        assert!(p.put_rho() < 0.0);
    }

    #[test]
    fn norm_cdf_reference_points() {
        assert_eq!(norm_cdf(0.0), 0.5);
        assert_approx(norm_cdf(1.0), 0.841_344_746_068_542_9, 1e-14);
        assert_approx(norm_cdf(-1.96), 0.024_997_895_148_220_43, 1e-14);
        assert_approx(norm_cdf(1.0) + norm_cdf(-1.0), 1.0, 1e-15);
        assert!(norm_cdf(-40.0) >= 0.0);
        assert!(norm_cdf(40.0) <= 1.0);
    }

    #[test]
    fn invalid_params_rejected() {
        assert!(OptionParams::new(0.0, 100.0, 1.0, 0.05, 0.2).is_err());
        assert!(OptionParams::new(100.0, -1.0, 1.0, 0.05, 0.2).is_err());
        assert!(OptionParams::new(100.0, 100.0, -1.0, 0.05, 0.2).is_err());
        assert!(OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
        assert!(OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.0).is_ok());
        assert!(OptionParams::new(100.0, 100.0, 1.0, f64::NAN, 0.2).is_err());
    }
}
