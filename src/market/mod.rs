//! The stateful primary market: ledger, fee arithmetic, events, and the
//! trade executor that combines them with the pricing curve.

mod engine;
mod events;
mod fees;
mod ledger;

#[cfg(test)]
mod proptest_properties;

pub use engine::Market;
pub use events::{EventSink, MarketEvent, NoOpSink, TracingSink};
pub use ledger::Ledger;
