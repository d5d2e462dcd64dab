//! Unsigned fixed-point decimal at a fixed 18-digit scale.

use core::fmt;

use super::wide;
use crate::domain::{Amount, Rounding};
use crate::error::EngineError;

/// An unsigned fixed-point number storing `value × 10^18` in a `u128`.
///
/// This is the numeric type of all curve math. The scale matches the
/// 18-decimal reserve asset, so a [`Fixed`] and an [`Amount`] with the
/// same raw value denote the same quantity and convert losslessly.
///
/// # Truncation rules
///
/// - [`safe_mul`](Self::safe_mul) and [`safe_div`](Self::safe_div) take an
///   explicit [`Rounding`]; `Down` truncates toward zero, `Up` rounds any
///   non-zero remainder away from zero.
/// - [`sqrt`](Self::sqrt) floors.
/// - Intermediates are 256-bit, so precision is never lost before the
///   final narrowing step.
///
/// # Value range
///
/// Roughly `0` to `3.4 × 10^20` whole units at nano-of-nano precision.
///
/// # Examples
///
/// ```
/// use helix_curve::domain::Rounding;
/// use helix_curve::math::Fixed;
///
/// let half = Fixed::from_raw(Fixed::SCALE / 2);
/// let two = Fixed::from_int(2);
/// assert_eq!(half.safe_mul(two, Rounding::Down), Ok(Fixed::ONE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Fixed(u128);

impl Fixed {
    /// The scale factor, `10^18`.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One (`10^18` raw).
    pub const ONE: Self = Self(Self::SCALE);

    /// Creates a value from its raw scaled representation.
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled representation.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Creates a value from a whole-unit integer.
    ///
    /// Cannot overflow: `u64::MAX × 10^18 < u128::MAX`.
    pub const fn from_int(value: u64) -> Self {
        Self(value as u128 * Self::SCALE)
    }

    /// Reinterprets an [`Amount`] (same 18-decimal scale) as a `Fixed`.
    pub const fn from_amount(amount: Amount) -> Self {
        Self(amount.get())
    }

    /// Reinterprets this value as an [`Amount`], raw-for-raw.
    pub const fn to_amount(self) -> Amount {
        Amount::new(self.0)
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the sum exceeds the range.
    pub const fn safe_add(self, rhs: Self) -> crate::error::Result<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Ok(Self(v)),
            None => Err(EngineError::Overflow("fixed-point addition")),
        }
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Underflow`] if `rhs > self`.
    pub const fn safe_sub(self, rhs: Self) -> crate::error::Result<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Ok(Self(v)),
            None => Err(EngineError::Underflow("fixed-point subtraction")),
        }
    }

    /// Checked multiplication: `self · rhs / 10^18` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the product exceeds the range.
    pub const fn safe_mul(self, rhs: Self, rounding: Rounding) -> crate::error::Result<Self> {
        match wide::mul_div(self.0, rhs.0, Self::SCALE, rounding) {
            Some(v) => Ok(Self(v)),
            None => Err(EngineError::Overflow("fixed-point multiplication")),
        }
    }

    /// Checked division: `self · 10^18 / rhs` with explicit rounding.
    ///
    /// # Errors
    ///
    /// - [`EngineError::DivisionByZero`] if `rhs` is zero.
    /// - [`EngineError::Overflow`] if the quotient exceeds the range.
    pub const fn safe_div(self, rhs: Self, rounding: Rounding) -> crate::error::Result<Self> {
        if rhs.0 == 0 {
            return Err(EngineError::DivisionByZero);
        }
        match wide::mul_div(self.0, Self::SCALE, rhs.0, rounding) {
            Some(v) => Ok(Self(v)),
            None => Err(EngineError::Overflow("fixed-point division")),
        }
    }

    /// Floor square root in value space: `sqrt(raw · 10^18)`.
    ///
    /// Always representable, so this cannot fail.
    pub const fn sqrt(self) -> Self {
        let (hi, lo) = wide::mul_wide(self.0, Self::SCALE);
        Self(wide::isqrt_wide(hi, lo))
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        write!(f, "{int}.{frac:018}")
    }
}
