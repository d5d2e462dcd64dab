//! Fractional powers of fixed-point values.
//!
//! The curve needs `x^(n/d)` for small rational exponents. The exponent is
//! split into an integer part, evaluated by square-and-multiply, and a
//! fractional part, evaluated over its binary expansion with a square-root
//! chain: after `i` square roots the running term equals `base^(1/2^i)`,
//! and multiplying in the terms whose bit is set in the expansion of the
//! fraction yields the power. Sixty fractional bits keep the expansion
//! error below the 18-digit resolution.
//!
//! Bases below one are evaluated through the reciprocal form
//! `1 / (1/base)^(n/d)` so the chain always works on a base ≥ 1, where
//! every intermediate stays representable. If the reciprocal power itself
//! leaves the representable range, the true result is below the smallest
//! representable value and the function returns zero — the same truncation
//! toward zero applied everywhere else.

use super::fixed::Fixed;
use crate::domain::Rounding;
use crate::error::{EngineError, Result};

/// Binary digits used for the fractional part of the exponent.
const FRAC_BITS: u32 = 60;

/// Computes `base^(num/den)` with truncation toward zero.
///
/// `0^e = 0` for `e > 0`, and `b^0 = 1` for any `b`.
///
/// # Errors
///
/// - [`EngineError::DivisionByZero`] if `den` is zero.
/// - [`EngineError::Overflow`] if the result exceeds the representable
///   range (only possible for `base > 1`).
pub fn pow_frac(base: Fixed, num: u32, den: u32) -> Result<Fixed> {
    if den == 0 {
        return Err(EngineError::DivisionByZero);
    }
    if num == 0 {
        return Ok(Fixed::ONE);
    }
    if base.is_zero() {
        return Ok(Fixed::ZERO);
    }
    if base == Fixed::ONE {
        return Ok(Fixed::ONE);
    }

    if base < Fixed::ONE {
        // Reciprocal form: the inverse is ≥ 1 and at most 10^36 raw, so the
        // division itself cannot overflow.
        let inverse = Fixed::ONE.safe_div(base, Rounding::Down)?;
        return match pow_ge_one(inverse, num, den) {
            Ok(p) => Fixed::ONE.safe_div(p, Rounding::Down),
            // The true result underflows the 18-digit resolution.
            Err(EngineError::Overflow(_)) => Ok(Fixed::ZERO),
            Err(e) => Err(e),
        };
    }

    pow_ge_one(base, num, den)
}

/// `base^(num/den)` for `base ≥ 1`.
fn pow_ge_one(base: Fixed, num: u32, den: u32) -> Result<Fixed> {
    let whole = num / den;
    let rem = num % den;

    let mut acc = pow_int(base, whole)?;
    if rem == 0 {
        return Ok(acc);
    }

    // Binary expansion of rem/den, truncated to FRAC_BITS digits. The
    // numerator fits easily: rem < 2^32 and the shift adds 60 bits.
    let expansion = ((rem as u128) << FRAC_BITS) / den as u128;

    let mut term = base;
    let mut i = FRAC_BITS;
    while i > 0 {
        i -= 1;
        // term = base^(1/2^(FRAC_BITS - i)); bit i carries that weight.
        term = term.sqrt();
        if (expansion >> i) & 1 == 1 {
            acc = acc.safe_mul(term, Rounding::Down)?;
        }
    }
    Ok(acc)
}

/// `base^exp` by square-and-multiply, truncating each step.
fn pow_int(base: Fixed, exp: u32) -> Result<Fixed> {
    if exp == 0 {
        return Ok(Fixed::ONE);
    }
    let mut result = Fixed::ONE;
    let mut b = base;
    let mut e = exp;
    while e > 1 {
        if e & 1 == 1 {
            result = result.safe_mul(b, Rounding::Down)?;
        }
        b = b.safe_mul(b, Rounding::Down)?;
        e >>= 1;
    }
    result.safe_mul(b, Rounding::Down)
}
