//! Dual-axis issuance ledger.
//!
//! Buys and sells advance two independent positions on the same curve
//! instead of sharing one. The buy axis accumulates reserve paid in and
//! synthetic minted; the sell axis accumulates reserve paid out and
//! synthetic burned. Decoupling the axes closes a round-trip exploit: with
//! a single shared position, a crafted buy-then-sell pair priced at the
//! identical point can extract more reserve than was paid in. Sell
//! proceeds are always priced against the sell axis's own history and
//! capped by what the buy axis has actually minted.
//!
//! All four accumulators are monotone non-decreasing for the lifetime of
//! the market. The ledger enforces `burned_total ≤ minted_total` (and the
//! reserve mirror of it) on every transition.

use crate::domain::Amount;
use crate::error::{EngineError, Result};

/// The four monotone accumulators plus the one-time seeding flag.
///
/// State transitions go through [`with_seed`](Self::with_seed),
/// [`with_buy`](Self::with_buy), and [`with_sell`](Self::with_sell), which
/// return the successor ledger without mutating `self`; the executor
/// installs the successor only after every external effect has succeeded,
/// so a failed trade leaves the ledger untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ledger {
    /// Reserve collected by the buy axis.
    reserve_in_total: Amount,
    /// Reserve released by the sell axis.
    reserve_out_total: Amount,
    /// Synthetic minted by the buy axis.
    minted_total: Amount,
    /// Synthetic burned by the sell axis.
    burned_total: Amount,
    seeded: bool,
}

impl Ledger {
    /// A fresh ledger: all accumulators zero, not yet seeded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserve_in_total: Amount::ZERO,
            reserve_out_total: Amount::ZERO,
            minted_total: Amount::ZERO,
            burned_total: Amount::ZERO,
            seeded: false,
        }
    }

    /// Total reserve ever collected (buy axis).
    pub const fn reserve_in_total(&self) -> Amount {
        self.reserve_in_total
    }

    /// Total reserve ever released (sell axis).
    pub const fn reserve_out_total(&self) -> Amount {
        self.reserve_out_total
    }

    /// Total synthetic ever minted (buy axis).
    pub const fn minted_total(&self) -> Amount {
        self.minted_total
    }

    /// Total synthetic ever burned (sell axis).
    pub const fn burned_total(&self) -> Amount {
        self.burned_total
    }

    /// Whether the one-time seeding trade has happened.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Synthetic currently outstanding: `minted_total − burned_total`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Underflow`] if the axis invariant were ever
    /// broken; transitions make that unreachable.
    pub fn outstanding_supply(&self) -> Result<Amount> {
        self.minted_total
            .checked_sub(&self.burned_total)
            .ok_or(EngineError::Underflow("burned axis ahead of minted axis"))
    }

    /// Book reserve: `reserve_in_total − reserve_out_total`.
    ///
    /// This is the running bookkeeping figure; the curve-authoritative
    /// counterpart is computed by the market from the areas of the two
    /// axis positions.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Underflow`] if the axis invariant were ever
    /// broken; transitions make that unreachable.
    pub fn book_reserve(&self) -> Result<Amount> {
        self.reserve_in_total
            .checked_sub(&self.reserve_out_total)
            .ok_or(EngineError::Underflow("outflow axis ahead of inflow axis"))
    }

    /// The successor ledger after the one-time seeding trade.
    ///
    /// Seeds the buy axis only; the sell axis stays at zero. Permitted
    /// exactly once, and only while no issuance has happened yet.
    ///
    /// # Errors
    ///
    /// - [`EngineError::AlreadyBootstrapped`] if the flag is set or the
    ///   market already has issuance.
    /// - [`EngineError::InvalidQuantity`] if either amount is zero.
    pub fn with_seed(&self, reserve_in: Amount, minted: Amount) -> Result<Self> {
        if self.seeded || !self.minted_total.is_zero() {
            return Err(EngineError::AlreadyBootstrapped);
        }
        if reserve_in.is_zero() || minted.is_zero() {
            return Err(EngineError::InvalidQuantity("seed amounts must be positive"));
        }
        let mut next = *self;
        next.reserve_in_total = reserve_in;
        next.minted_total = minted;
        next.seeded = true;
        Ok(next)
    }

    /// The successor ledger after a buy advanced the buy axis.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if an accumulator would wrap.
    pub fn with_buy(&self, reserve_in: Amount, minted: Amount) -> Result<Self> {
        let mut next = *self;
        next.reserve_in_total = self
            .reserve_in_total
            .checked_add(&reserve_in)
            .ok_or(EngineError::Overflow("reserve inflow accumulator"))?;
        next.minted_total = self
            .minted_total
            .checked_add(&minted)
            .ok_or(EngineError::Overflow("minted accumulator"))?;
        Ok(next)
    }

    /// The successor ledger after a sell advanced the sell axis.
    ///
    /// Rejects any transition that would push the sell axis past the buy
    /// axis on either the supply or the reserve dimension.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InsufficientSupply`] if the burn would exceed the
    ///   outstanding supply.
    /// - [`EngineError::Underflow`] if the outflow would exceed the booked
    ///   inflow.
    /// - [`EngineError::Overflow`] if an accumulator would wrap.
    pub fn with_sell(&self, reserve_out: Amount, burned: Amount) -> Result<Self> {
        let mut next = *self;
        next.reserve_out_total = self
            .reserve_out_total
            .checked_add(&reserve_out)
            .ok_or(EngineError::Overflow("reserve outflow accumulator"))?;
        next.burned_total = self
            .burned_total
            .checked_add(&burned)
            .ok_or(EngineError::Overflow("burned accumulator"))?;
        if next.burned_total > next.minted_total {
            return Err(EngineError::InsufficientSupply);
        }
        if next.reserve_out_total > next.reserve_in_total {
            return Err(EngineError::Underflow("outflow axis ahead of inflow axis"));
        }
        Ok(next)
    }
}
