//! Domain events emitted by the market.
//!
//! Every state-changing operation emits exactly one event after its ledger
//! commit. Events exist for observability and indexing collaborators; the
//! pricing logic never reads them back.

use crate::domain::{AccountId, Amount};

/// Events emitted by the market, one per committed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketEvent {
    /// The one-time fee-free seeding trade.
    Bootstrapped {
        /// Account that funded the seed.
        buyer: AccountId,
        /// Reserve paid in.
        reserve_in: Amount,
        /// Synthetic delivered; the emitted fee of this trade is zero.
        minted: Amount,
    },

    /// A completed issuance.
    BuyExecuted {
        /// Account that paid the reserve.
        buyer: AccountId,
        /// Reserve paid in.
        reserve_in: Amount,
        /// Synthetic minted before fees.
        gross_minted: Amount,
        /// Synthetic forwarded to the fee recipient.
        fee: Amount,
        /// Synthetic delivered to the buyer.
        net_out: Amount,
    },

    /// A completed redemption.
    SellExecuted {
        /// Account that delivered the synthetic.
        seller: AccountId,
        /// Synthetic delivered, fee included.
        gross_in: Amount,
        /// Synthetic forwarded to the fee recipient.
        fee: Amount,
        /// Synthetic removed from circulation.
        burned: Amount,
        /// Reserve paid out to the seller.
        reserve_out: Amount,
    },

    /// The fee configuration was replaced.
    FeeConfigUpdated {
        /// New buy-side rate and base.
        buy_rate: u64,
        /// New buy-side base.
        buy_base: u64,
        /// New sell-side rate.
        sell_rate: u64,
        /// New sell-side base.
        sell_base: u64,
        /// New fee recipient.
        recipient: AccountId,
    },

    /// Reserve drift above the booked total was swept out.
    ExcessSkimmed {
        /// Destination of the excess.
        to: AccountId,
        /// Exact amount moved.
        amount: Amount,
    },
}

/// Consumer of market events.
///
/// Implementations can forward to logs, metrics, or an indexer. Handlers
/// run after the ledger commit; they must not fail and cannot influence
/// the trade.
pub trait EventSink {
    /// Handles a single event.
    fn on_event(&self, event: &MarketEvent);
}

/// Discards every event. Useful for tests and embedding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl EventSink for NoOpSink {
    fn on_event(&self, _event: &MarketEvent) {}
}

/// Logs every event at `debug` level through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn on_event(&self, event: &MarketEvent) {
        tracing::debug!(?event, "market event");
    }
}
