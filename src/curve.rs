//! Closed-form bonding-curve pricing.
//!
//! The curve ties cumulative issuance `x` to a marginal price through the
//! relation `a · p^1.7 = x`, where `a` is the steepness parameter. Solving
//! and integrating gives three closed forms, each an O(1) evaluation:
//!
//! ```text
//! price(x)            = (x / a)^(10/17)
//! area(x)             = (17/27) · x^(27/17) / a^(10/17)   = K · x^(27/17)
//! supply_from_area(s) = (s / K)^(17/27)
//! ```
//!
//! `area(x)` is the reserve cost of minting `x` units from an empty curve;
//! its inverse recovers the supply a reserve total corresponds to. The
//! coefficient `K` is fixed at construction so per-trade evaluation is a
//! division and one fractional power.
//!
//! When `x < a` the price base `x/a` drops below one, which the power
//! primitive cannot take directly; the reciprocal form `1 / (a/x)^(10/17)`
//! is used instead so the power always sees a base ≥ 1.

use crate::domain::Rounding;
use crate::error::{EngineError, Result};
use crate::math::{pow_frac, Fixed};

/// Exponent numerator/denominator pairs of the closed forms.
const PRICE_EXP: (u32, u32) = (10, 17);
const AREA_EXP: (u32, u32) = (27, 17);
const INVERSE_EXP: (u32, u32) = (17, 27);

/// The immutable pricing function of a market.
///
/// Holds the steepness parameter `a` and the precomputed area coefficient
/// `K`. All functions are pure; the model never touches ledger state.
///
/// # Examples
///
/// ```
/// use helix_curve::curve::CurveModel;
/// use helix_curve::math::Fixed;
///
/// let curve = CurveModel::new(Fixed::ONE).expect("positive parameter");
/// assert_eq!(curve.price_at_supply(Fixed::ZERO), Ok(Fixed::ZERO));
/// assert_eq!(curve.area_of(Fixed::ZERO), Ok(Fixed::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveModel {
    parameter: Fixed,
    coefficient: Fixed,
}

impl CurveModel {
    /// Creates a model from the steepness parameter `a`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] if `a` is zero or so
    /// extreme that the area coefficient leaves the representable range.
    pub fn new(parameter: Fixed) -> Result<Self> {
        if parameter.is_zero() {
            return Err(EngineError::InvalidParameter(
                "curve parameter must be positive",
            ));
        }
        // K = (17/27) / a^(10/17)
        let scaled = pow_frac(parameter, PRICE_EXP.0, PRICE_EXP.1)?;
        if scaled.is_zero() {
            return Err(EngineError::InvalidParameter(
                "curve parameter is below resolution",
            ));
        }
        let seventeen_over_27 = Fixed::from_raw(17 * Fixed::SCALE / 27);
        let coefficient = seventeen_over_27.safe_div(scaled, Rounding::Down)?;
        if coefficient.is_zero() {
            return Err(EngineError::InvalidParameter(
                "area coefficient is below resolution",
            ));
        }
        Ok(Self {
            parameter,
            coefficient,
        })
    }

    /// Returns the steepness parameter `a`.
    #[must_use]
    pub const fn parameter(&self) -> Fixed {
        self.parameter
    }

    /// Returns the precomputed area coefficient `K`.
    #[must_use]
    pub const fn coefficient(&self) -> Fixed {
        self.coefficient
    }

    /// Marginal price at cumulative supply `x`: `(x/a)^(10/17)`.
    ///
    /// `price_at_supply(0) = 0` by definition. For `x < a` the reciprocal
    /// form is evaluated; if even the ratio `a/x` is unrepresentable the
    /// price is below the 18-digit resolution and truncates to zero.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the price itself leaves the
    /// representable range.
    pub fn price_at_supply(&self, x: Fixed) -> Result<Fixed> {
        if x.is_zero() {
            return Ok(Fixed::ZERO);
        }
        if x >= self.parameter {
            let ratio = x.safe_div(self.parameter, Rounding::Down)?;
            return pow_frac(ratio, PRICE_EXP.0, PRICE_EXP.1);
        }
        // x < a: evaluate 1 / (a/x)^(10/17) so the power's base is ≥ 1.
        let inverse_ratio = match self.parameter.safe_div(x, Rounding::Down) {
            Ok(r) => r,
            Err(EngineError::Overflow(_)) => return Ok(Fixed::ZERO),
            Err(e) => return Err(e),
        };
        let denom = pow_frac(inverse_ratio, PRICE_EXP.0, PRICE_EXP.1)?;
        Fixed::ONE.safe_div(denom, Rounding::Down)
    }

    /// Cumulative reserve cost of the first `x` units: `K · x^(27/17)`.
    ///
    /// `area_of(0) = 0` by definition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the area leaves the
    /// representable range.
    pub fn area_of(&self, x: Fixed) -> Result<Fixed> {
        if x.is_zero() {
            return Ok(Fixed::ZERO);
        }
        let grown = pow_frac(x, AREA_EXP.0, AREA_EXP.1)?;
        self.coefficient.safe_mul(grown, Rounding::Down)
    }

    /// Inverse of [`area_of`](Self::area_of): the supply whose cumulative
    /// cost equals `s`, computed as `(s/K)^(17/27)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the intermediate ratio leaves
    /// the representable range.
    pub fn supply_from_area(&self, s: Fixed) -> Result<Fixed> {
        if s.is_zero() {
            return Ok(Fixed::ZERO);
        }
        let ratio = s.safe_div(self.coefficient, Rounding::Down)?;
        pow_frac(ratio, INVERSE_EXP.0, INVERSE_EXP.1)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn unit_curve() -> CurveModel {
        let Ok(c) = CurveModel::new(Fixed::ONE) else {
            panic!("valid curve");
        };
        c
    }

    fn assert_close(actual: Fixed, expected_raw: u128, tol_raw: u128) {
        let diff = actual.raw().abs_diff(expected_raw);
        assert!(
            diff <= tol_raw,
            "expected ≈{expected_raw}, got {} (diff {diff})",
            actual.raw()
        );
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn zero_parameter_rejected() {
        assert_eq!(
            CurveModel::new(Fixed::ZERO),
            Err(EngineError::InvalidParameter(
                "curve parameter must be positive"
            ))
        );
    }

    #[test]
    fn unit_parameter_coefficient() {
        // a = 1 ⇒ K = 17/27 exactly (floored at 18 digits).
        let c = unit_curve();
        assert_eq!(c.coefficient().raw(), 629_629_629_629_629_629);
    }

    // -- Definitional zeros -------------------------------------------------

    #[test]
    fn zero_supply_zero_everything() {
        for a in [1u64, 2, 1_000] {
            let Ok(c) = CurveModel::new(Fixed::from_int(a)) else {
                panic!("valid curve");
            };
            assert_eq!(c.price_at_supply(Fixed::ZERO), Ok(Fixed::ZERO));
            assert_eq!(c.area_of(Fixed::ZERO), Ok(Fixed::ZERO));
            assert_eq!(c.supply_from_area(Fixed::ZERO), Ok(Fixed::ZERO));
        }
    }

    // -- Known values -------------------------------------------------------

    #[test]
    fn price_on_unit_curve() {
        // a = 1: price(1024) = 2^(100/17) = 58.988125…
        let c = unit_curve();
        let Ok(p) = c.price_at_supply(Fixed::from_int(1024)) else {
            panic!("expected Ok");
        };
        assert_close(p, 58_988_125_000_000_000_000, 2_000_000_000_000_000);
    }

    #[test]
    fn area_of_one_is_the_coefficient() {
        let c = unit_curve();
        assert_eq!(c.area_of(Fixed::ONE), Ok(c.coefficient()));
    }

    #[test]
    fn supply_at_coefficient_area_is_one() {
        let c = unit_curve();
        assert_eq!(c.supply_from_area(c.coefficient()), Ok(Fixed::ONE));
    }

    // -- Reciprocal branch --------------------------------------------------

    #[test]
    fn price_below_parameter_uses_reciprocal_form() {
        // a = 4, x = 1: price = 1 / 4^(10/17) = 4^(-10/17) = 0.4423…
        let Ok(c) = CurveModel::new(Fixed::from_int(4)) else {
            panic!("valid curve");
        };
        let Ok(p) = c.price_at_supply(Fixed::ONE) else {
            panic!("expected Ok");
        };
        // 2^(-20/17) = 1 / 2^(20/17); 2^(20/17) = 2.2602328…
        assert_close(p, 442_432_490_000_000_000, 5_000_000_000_000);
    }

    #[test]
    fn price_is_continuous_across_the_branch() {
        // Just below and just above x = a must price within a whisker.
        let Ok(c) = CurveModel::new(Fixed::from_int(7)) else {
            panic!("valid curve");
        };
        let just_below = Fixed::from_raw(7 * Fixed::SCALE - 1_000);
        let just_above = Fixed::from_raw(7 * Fixed::SCALE + 1_000);
        let Ok(lo) = c.price_at_supply(just_below) else {
            panic!("expected Ok");
        };
        let Ok(hi) = c.price_at_supply(just_above) else {
            panic!("expected Ok");
        };
        assert!(lo <= hi);
        assert_close(lo, Fixed::SCALE, 1_000_000);
        assert_close(hi, Fixed::SCALE, 1_000_000);
    }

    // -- Monotonicity -------------------------------------------------------

    #[test]
    fn area_strictly_increases() {
        let c = unit_curve();
        let mut prev = Fixed::ZERO;
        for v in [1u64, 2, 10, 500, 40_000] {
            let Ok(area) = c.area_of(Fixed::from_int(v)) else {
                panic!("expected Ok");
            };
            assert!(area > prev, "area must grow with supply");
            prev = area;
        }
    }

    #[test]
    fn price_never_decreases() {
        let Ok(c) = CurveModel::new(Fixed::from_int(3)) else {
            panic!("valid curve");
        };
        let mut prev = Fixed::ZERO;
        for v in [1u64, 2, 3, 4, 100, 10_000] {
            let Ok(p) = c.price_at_supply(Fixed::from_int(v)) else {
                panic!("expected Ok");
            };
            assert!(p >= prev);
            prev = p;
        }
    }

    // -- Round trip ---------------------------------------------------------

    #[test]
    fn area_round_trips_through_inverse() {
        for (a, xs) in [
            (1u64, [1u64, 7, 1_000, 90_000]),
            (250, [1, 7, 1_000, 90_000]),
        ] {
            let Ok(c) = CurveModel::new(Fixed::from_int(a)) else {
                panic!("valid curve");
            };
            for x in xs {
                let x = Fixed::from_int(x);
                let Ok(area) = c.area_of(x) else {
                    panic!("expected Ok");
                };
                let Ok(back) = c.supply_from_area(area) else {
                    panic!("expected Ok");
                };
                // A part per billion of the value.
                assert_close(back, x.raw(), x.raw() / 1_000_000_000 + 2);
            }
        }
    }

    #[test]
    fn fractional_supply_round_trips() {
        let c = unit_curve();
        let x = Fixed::from_raw(Fixed::SCALE / 3);
        let Ok(area) = c.area_of(x) else {
            panic!("expected Ok");
        };
        let Ok(back) = c.supply_from_area(area) else {
            panic!("expected Ok");
        };
        assert_close(back, x.raw(), x.raw() / 1_000_000_000 + 2);
    }
}
