//! Declarative market blueprints.

mod market_config;

pub use market_config::MarketConfig;
