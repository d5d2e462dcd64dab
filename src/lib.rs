//! # Helix Curve
//!
//! A deterministic bonding-curve primary market: a synthetic asset is
//! minted against a reserve asset and redeemed back at prices that are a
//! closed-form function of cumulative issuance, not of pooled reserves.
//!
//! The engine combines four pieces:
//!
//! - a **curve model** with exact closed forms for marginal price,
//!   cumulative cost, and its inverse — every quote is O(1), no iterative
//!   solving;
//! - a **dual-axis ledger** that tracks buys and sells as independent
//!   monotone positions on the curve, closing round-trip manipulation;
//! - a **fee model** with exact quote/execute symmetry, including the
//!   one-unit correction that makes exact-net and exact-burn requests
//!   land precisely;
//! - a **trade executor** offering six trade shapes, each with a pure
//!   quote twin, plus a one-time fee-free seeding trade and an
//!   admin-gated reserve reconciliation sweep.
//!
//! Token transfers go through capability traits; the engine never
//! implements a token and never reads ambient authority.
//!
//! # Quick Start
//!
//! ```rust
//! use helix_curve::config::MarketConfig;
//! use helix_curve::domain::{AccountId, Amount, FeeConfig, FeeSchedule};
//! use helix_curve::market::{Market, NoOpSink};
//! use helix_curve::math::Fixed;
//! use helix_curve::traits::InMemoryAsset;
//!
//! const TOKEN: u128 = 1_000_000_000_000_000_000;
//!
//! let vault = AccountId::from_bytes([1u8; 32]);
//! let buyer = AccountId::from_bytes([2u8; 32]);
//! let collector = AccountId::from_bytes([9u8; 32]);
//!
//! // 3% buy fee, 3% sell fee.
//! let fees = FeeConfig::new(
//!     FeeSchedule::new(3, 100).expect("valid schedule"),
//!     FeeSchedule::new(3, 100).expect("valid schedule"),
//!     collector,
//! )
//! .expect("valid fee config");
//!
//! let config = MarketConfig::new(Fixed::ONE, fees, vault).expect("valid config");
//!
//! // Fund the collaborators: the buyer holds reserve, the vault holds a
//! // synthetic float to deliver from.
//! let mut reserve = InMemoryAsset::new(18);
//! reserve.credit(buyer, Amount::new(10_000 * TOKEN));
//! reserve.approve(buyer, vault, Amount::new(10_000 * TOKEN));
//!
//! let mut synthetic = InMemoryAsset::new(18);
//! synthetic.credit(vault, Amount::new(1_000_000 * TOKEN));
//!
//! let mut market = Market::new(config, reserve, synthetic, NoOpSink)
//!     .expect("market created");
//!
//! // Open the market with the one-time fee-free seeding trade…
//! let seeded = market
//!     .bootstrap(buyer, Amount::new(1_000 * TOKEN))
//!     .expect("seed succeeds");
//! assert_eq!(seeded.fee(), Amount::ZERO);
//!
//! // …then trade: quote first, execute with a slippage bound.
//! let quote = market
//!     .quote_buy_with_reserve(Amount::new(100 * TOKEN))
//!     .expect("quote succeeds");
//! let receipt = market
//!     .buy_with_reserve(buyer, Amount::new(100 * TOKEN), quote.net())
//!     .expect("buy succeeds");
//! assert_eq!(receipt, quote);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐
//! │  Consumer   │  quotes, executes, admin calls
//! └─────┬──────┘
//!       ▼
//! ┌────────────┐
//! │   Market    │  six trade shapes + bootstrap + skim
//! └─┬───┬───┬──┘
//!   │   │   └───────────────┐
//!   ▼   ▼                   ▼
//! ┌──────┐ ┌────────┐ ┌───────────┐
//! │Curve │ │ Ledger │ │ Fee model │
//! └──┬───┘ └────────┘ └───────────┘
//!    ▼
//! ┌────────────┐
//! │   math      │  18-decimal fixed point, 256-bit intermediates
//! └────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AccountId`](domain::AccountId), fee schedules, receipts |
//! | [`math`]   | [`Fixed`](math::Fixed) 18-decimal arithmetic and [`pow_frac`](math::pow_frac) |
//! | [`curve`]  | [`CurveModel`](curve::CurveModel): price, area, inverse |
//! | [`market`] | [`Market`](market::Market) executor, [`Ledger`](market::Ledger), events |
//! | [`traits`] | Token collaborator capabilities and [`InMemoryAsset`](traits::InMemoryAsset) |
//! | [`config`] | [`MarketConfig`](config::MarketConfig) validated blueprint |
//! | [`error`]  | [`EngineError`](error::EngineError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod curve;
pub mod domain;
pub mod error;
pub mod market;
pub mod math;
pub mod prelude;
pub mod traits;
