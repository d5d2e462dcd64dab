//! Unified error types for the engine.
//!
//! All fallible operations across the crate return [`EngineError`] as their
//! error type. Every failure is either a rejected call or a hard abort:
//! there are no internal retries and no silent recovery — each guard is a
//! hard precondition checked before any state change.

use thiserror::Error;

use crate::traits::TokenError;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, EngineError>;

/// Errors produced by curve math, fee math, the ledger, and the trade
/// executor.
///
/// The payload of validation and arithmetic variants is a static message
/// naming the operand that failed, for diagnostics without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A caller-supplied amount was zero or otherwise unusable.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A caller-supplied account id was the zero sentinel.
    #[error("invalid account: {0}")]
    InvalidAccount(&'static str),

    /// A fee schedule violated `rate < base` or named a zero recipient.
    /// Raised only at configuration time, never mid-trade.
    #[error("invalid fee configuration: {0}")]
    InvalidFee(&'static str),

    /// A construction-time parameter (curve steepness, collaborator
    /// decimals) was out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// A realized amount fell outside the caller's min-out/max-in bound.
    /// The ledger is unchanged; re-quote and retry externally.
    #[error("slippage bound violated: {0}")]
    SlippageExceeded(&'static str),

    /// A sell would burn more synthetic than the ledger has outstanding.
    #[error("burn amount exceeds outstanding internal supply")]
    InsufficientSupply,

    /// An exact-output redemption asked for more reserve than the curve
    /// models as redeemable.
    #[error("requested output exceeds modeled reserve")]
    ExceedsModeledReserve,

    /// A second seeding trade was attempted, or one was attempted after
    /// regular issuance had already begun.
    #[error("market is already bootstrapped")]
    AlreadyBootstrapped,

    /// Reconciliation found no surplus between the real token balance and
    /// the internal reserve.
    #[error("no excess reserve to skim")]
    NoExcessReserve,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A token collaborator refused a transfer or burn. Surfaced before
    /// any ledger change.
    #[error("token operation failed: {0}")]
    Token(#[from] TokenError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::InvalidQuantity("amount must be non-zero").to_string(),
            "invalid quantity: amount must be non-zero"
        );
        assert_eq!(EngineError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            EngineError::InsufficientSupply.to_string(),
            "burn amount exceeds outstanding internal supply"
        );
    }

    #[test]
    fn token_error_converts() {
        let err: EngineError = TokenError::InsufficientBalance.into();
        assert_eq!(err, EngineError::Token(TokenError::InsufficientBalance));
    }

    #[test]
    fn equality() {
        assert_eq!(EngineError::NoExcessReserve, EngineError::NoExcessReserve);
        assert_ne!(EngineError::Overflow("a"), EngineError::Overflow("b"));
    }
}
