//! Newtype value types shared across the engine.
//!
//! Everything here is a small, copyable value with checked construction:
//! amounts, account ids, rounding directions, fee schedules, and the
//! receipts that trades produce.

mod account;
mod amount;
mod fee_schedule;
mod receipt;
mod rounding;

pub use account::AccountId;
pub use amount::Amount;
pub use fee_schedule::{FeeConfig, FeeSchedule};
pub use receipt::{BuyReceipt, SellReceipt};
pub use rounding::Rounding;
