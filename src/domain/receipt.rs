//! Validated outcomes of buy and sell operations.
//!
//! A receipt is produced by the quote views and by the executing
//! operations from the same computation, so comparing the two is the
//! crate's quote/execute symmetry check.

use core::fmt;

use super::Amount;
use crate::error::EngineError;

/// Outcome of an issuance: reserve paid in, synthetic minted, fee split.
///
/// # Invariants
///
/// - `reserve_in > 0` and `gross > 0`.
/// - `net + fee = gross` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuyReceipt {
    reserve_in: Amount,
    gross: Amount,
    fee: Amount,
    net: Amount,
}

impl BuyReceipt {
    /// Creates a receipt after checking the fee split adds up.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidQuantity`] if `reserve_in` or `gross`
    /// is zero, or if `net + fee != gross`.
    pub(crate) const fn new(
        reserve_in: Amount,
        gross: Amount,
        fee: Amount,
        net: Amount,
    ) -> crate::error::Result<Self> {
        if reserve_in.is_zero() {
            return Err(EngineError::InvalidQuantity("reserve input must be positive"));
        }
        if gross.is_zero() {
            return Err(EngineError::InvalidQuantity("gross mint must be positive"));
        }
        let sum = match net.checked_add(&fee) {
            Some(s) => s,
            None => return Err(EngineError::InvalidQuantity("fee split overflows")),
        };
        if sum.get() != gross.get() {
            return Err(EngineError::InvalidQuantity("fee split does not cover gross"));
        }
        Ok(Self {
            reserve_in,
            gross,
            fee,
            net,
        })
    }

    /// Reserve paid into the market.
    pub const fn reserve_in(&self) -> Amount {
        self.reserve_in
    }

    /// Synthetic minted against the curve before fees.
    pub const fn gross(&self) -> Amount {
        self.gross
    }

    /// Synthetic forwarded to the fee recipient.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Synthetic delivered to the buyer.
    pub const fn net(&self) -> Amount {
        self.net
    }
}

impl fmt::Display for BuyReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BuyReceipt(in={}, gross={}, fee={}, net={})",
            self.reserve_in, self.gross, self.fee, self.net
        )
    }
}

/// Outcome of a redemption: synthetic delivered, fee split, reserve out.
///
/// # Invariants
///
/// - `gross_in > 0` and `burned > 0`.
/// - `burned + fee = gross_in` exactly.
/// - `reserve_out` may be zero for dust-sized burns; slippage bounds are
///   the caller's protection against that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SellReceipt {
    gross_in: Amount,
    fee: Amount,
    burned: Amount,
    reserve_out: Amount,
}

impl SellReceipt {
    /// Creates a receipt after checking the fee split adds up.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidQuantity`] if `gross_in` or `burned`
    /// is zero, or if `burned + fee != gross_in`.
    pub(crate) const fn new(
        gross_in: Amount,
        fee: Amount,
        burned: Amount,
        reserve_out: Amount,
    ) -> crate::error::Result<Self> {
        if gross_in.is_zero() {
            return Err(EngineError::InvalidQuantity("gross input must be positive"));
        }
        if burned.is_zero() {
            return Err(EngineError::InvalidQuantity("burn amount must be positive"));
        }
        let sum = match burned.checked_add(&fee) {
            Some(s) => s,
            None => return Err(EngineError::InvalidQuantity("fee split overflows")),
        };
        if sum.get() != gross_in.get() {
            return Err(EngineError::InvalidQuantity("fee split does not cover input"));
        }
        Ok(Self {
            gross_in,
            fee,
            burned,
            reserve_out,
        })
    }

    /// Synthetic the seller delivered (fee included).
    pub const fn gross_in(&self) -> Amount {
        self.gross_in
    }

    /// Synthetic forwarded to the fee recipient.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Synthetic removed from circulation.
    pub const fn burned(&self) -> Amount {
        self.burned
    }

    /// Reserve paid out to the seller.
    pub const fn reserve_out(&self) -> Amount {
        self.reserve_out
    }
}

impl fmt::Display for SellReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SellReceipt(in={}, fee={}, burned={}, out={})",
            self.gross_in, self.fee, self.burned, self.reserve_out
        )
    }
}
