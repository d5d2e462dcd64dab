//! Market construction parameters.

use crate::domain::{AccountId, FeeConfig};
use crate::error::EngineError;
use crate::math::Fixed;

/// The validated blueprint a market is built from.
///
/// Bundles the immutable curve steepness parameter, the initial fee
/// configuration, and the vault account the market transacts through.
/// The curve parameter can never change after construction; fees can be
/// replaced later through the market's setter, which revalidates.
///
/// # Examples
///
/// ```
/// use helix_curve::config::MarketConfig;
/// use helix_curve::domain::{AccountId, FeeConfig, FeeSchedule};
/// use helix_curve::math::Fixed;
///
/// let fees = FeeConfig::new(
///     FeeSchedule::new(3, 100).expect("valid"),
///     FeeSchedule::new(3, 100).expect("valid"),
///     AccountId::from_bytes([9u8; 32]),
/// )
/// .expect("valid fees");
///
/// let config = MarketConfig::new(
///     Fixed::ONE,
///     fees,
///     AccountId::from_bytes([1u8; 32]),
/// )
/// .expect("valid config");
/// assert_eq!(config.curve_parameter(), Fixed::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketConfig {
    curve_parameter: Fixed,
    fees: FeeConfig,
    vault: AccountId,
}

impl MarketConfig {
    /// Creates a configuration after validating every invariant.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidParameter`] if the curve parameter is zero.
    /// - [`EngineError::InvalidAccount`] if the vault id is zero.
    /// - [`EngineError::InvalidFee`] from the fee configuration.
    pub const fn new(
        curve_parameter: Fixed,
        fees: FeeConfig,
        vault: AccountId,
    ) -> crate::error::Result<Self> {
        let config = Self {
            curve_parameter,
            fees,
            vault,
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
    /// See [`new`](Self::new).
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.curve_parameter.is_zero() {
            return Err(EngineError::InvalidParameter(
                "curve parameter must be positive",
            ));
        }
        if self.vault.is_zero() {
            return Err(EngineError::InvalidAccount("vault account must be non-zero"));
        }
        self.fees.validate()
    }

    /// Returns the curve steepness parameter.
    #[must_use]
    pub const fn curve_parameter(&self) -> Fixed {
        self.curve_parameter
    }

    /// Returns the initial fee configuration.
    #[must_use]
    pub const fn fees(&self) -> FeeConfig {
        self.fees
    }

    /// Returns the vault account id.
    #[must_use]
    pub const fn vault(&self) -> AccountId {
        self.vault
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::FeeSchedule;

    fn fees() -> FeeConfig {
        let Ok(cfg) = FeeConfig::new(
            FeeSchedule::FREE,
            FeeSchedule::FREE,
            AccountId::from_bytes([9u8; 32]),
        ) else {
            panic!("valid fees");
        };
        cfg
    }

    #[test]
    fn valid_config() {
        let result = MarketConfig::new(Fixed::ONE, fees(), AccountId::from_bytes([1u8; 32]));
        assert!(result.is_ok());
    }

    #[test]
    fn zero_parameter_rejected() {
        let result = MarketConfig::new(Fixed::ZERO, fees(), AccountId::from_bytes([1u8; 32]));
        assert_eq!(
            result,
            Err(EngineError::InvalidParameter(
                "curve parameter must be positive"
            ))
        );
    }

    #[test]
    fn zero_vault_rejected() {
        let result = MarketConfig::new(Fixed::ONE, fees(), AccountId::zero());
        assert_eq!(
            result,
            Err(EngineError::InvalidAccount("vault account must be non-zero"))
        );
    }

    #[test]
    fn accessors() {
        let Ok(cfg) = MarketConfig::new(Fixed::ONE, fees(), AccountId::from_bytes([1u8; 32]))
        else {
            panic!("valid config");
        };
        assert_eq!(cfg.curve_parameter(), Fixed::ONE);
        assert_eq!(cfg.vault(), AccountId::from_bytes([1u8; 32]));
        assert_eq!(cfg.fees().recipient(), AccountId::from_bytes([9u8; 32]));
    }
}
