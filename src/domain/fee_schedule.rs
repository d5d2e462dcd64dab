//! Linear fee schedules and the market fee configuration.

use core::fmt;

use super::AccountId;
use crate::error::EngineError;

/// A linear fee expressed as the rational `rate / base`.
///
/// The fee on a gross amount `g` is `floor(g · rate / base)`; the rest of
/// the fee arithmetic lives in the market's fee module. Construction
/// enforces `base > 0` and `rate < base`, so a schedule can never consume
/// an entire gross amount and the inverse computation `base − rate` never
/// hits zero.
///
/// # Examples
///
/// ```
/// use helix_curve::domain::FeeSchedule;
///
/// let three_percent = FeeSchedule::new(3, 100).expect("valid schedule");
/// assert_eq!(three_percent.rate(), 3);
/// assert_eq!(three_percent.base(), 100);
/// assert!(FeeSchedule::new(100, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeSchedule {
    rate: u64,
    base: u64,
}

impl FeeSchedule {
    /// The zero-fee schedule.
    pub const FREE: Self = Self { rate: 0, base: 1 };

    /// Creates a schedule after validating `base > 0` and `rate < base`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFee`] on violation.
    pub const fn new(rate: u64, base: u64) -> crate::error::Result<Self> {
        if base == 0 {
            return Err(EngineError::InvalidFee("fee base must be non-zero"));
        }
        if rate >= base {
            return Err(EngineError::InvalidFee("fee rate must be below base"));
        }
        Ok(Self { rate, base })
    }

    /// Returns the fee numerator.
    #[must_use]
    pub const fn rate(&self) -> u64 {
        self.rate
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Returns `true` if the schedule charges nothing.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.rate == 0
    }
}

impl fmt::Display for FeeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.rate, self.base)
    }
}

/// Independent buy and sell fee schedules plus the account that receives
/// collected fees.
///
/// The buy side and the sell side are configured separately; both fees are
/// charged in the synthetic asset and forwarded whole to the recipient.
///
/// # Examples
///
/// ```
/// use helix_curve::domain::{AccountId, FeeConfig, FeeSchedule};
///
/// let cfg = FeeConfig::new(
///     FeeSchedule::new(3, 100).expect("valid"),
///     FeeSchedule::new(5, 100).expect("valid"),
///     AccountId::from_bytes([9u8; 32]),
/// )
/// .expect("valid config");
/// assert_eq!(cfg.buy().rate(), 3);
/// assert_eq!(cfg.sell().rate(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeConfig {
    buy: FeeSchedule,
    sell: FeeSchedule,
    recipient: AccountId,
}

impl FeeConfig {
    /// Creates a fee configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFee`] if `recipient` is the zero
    /// sentinel. The schedules carry their own validity from construction.
    pub const fn new(
        buy: FeeSchedule,
        sell: FeeSchedule,
        recipient: AccountId,
    ) -> crate::error::Result<Self> {
        let config = Self {
            buy,
            sell,
            recipient,
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(e) => Err(e),
        }
    }

    /// Re-checks all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFee`] on violation.
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.recipient.is_zero() {
            return Err(EngineError::InvalidFee("fee recipient must be non-zero"));
        }
        if self.buy.base() == 0 || self.buy.rate() >= self.buy.base() {
            return Err(EngineError::InvalidFee("buy schedule out of range"));
        }
        if self.sell.base() == 0 || self.sell.rate() >= self.sell.base() {
            return Err(EngineError::InvalidFee("sell schedule out of range"));
        }
        Ok(())
    }

    /// Returns the buy-side schedule.
    #[must_use]
    pub const fn buy(&self) -> FeeSchedule {
        self.buy
    }

    /// Returns the sell-side schedule.
    #[must_use]
    pub const fn sell(&self) -> FeeSchedule {
        self.sell
    }

    /// Returns the fee recipient account.
    #[must_use]
    pub const fn recipient(&self) -> AccountId {
        self.recipient
    }
}
