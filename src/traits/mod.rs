//! Capability traits for external collaborators.

mod tokens;

pub use tokens::{InMemoryAsset, ReserveAsset, SyntheticAsset, TokenError};
