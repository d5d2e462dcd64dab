//! Convenience re-exports for common types and traits.
//!
//! A single import brings the frequently used items into scope:
//!
//! ```rust
//! use helix_curve::prelude::*;
//! ```

pub use crate::config::MarketConfig;
pub use crate::curve::CurveModel;
pub use crate::domain::{
    AccountId, Amount, BuyReceipt, FeeConfig, FeeSchedule, Rounding, SellReceipt,
};
pub use crate::error::{EngineError, Result};
pub use crate::market::{EventSink, Market, MarketEvent, NoOpSink, TracingSink};
pub use crate::math::Fixed;
pub use crate::traits::{InMemoryAsset, ReserveAsset, SyntheticAsset, TokenError};
