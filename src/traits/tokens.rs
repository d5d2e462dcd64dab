//! Token collaborator capabilities.
//!
//! The engine never implements a token. It drives two external fungible
//! assets through the narrow capabilities below: the reserve asset it
//! collects and pays out, and the synthetic asset it issues and retires.
//! "Minting" is realized by transferring out of a float the market's vault
//! account holds; "burning" goes through [`SyntheticAsset::burn_from`] and
//! reduces circulating supply.
//!
//! Every method takes explicit accounts — there is no ambient caller — so
//! an implementation can be an adapter over any host environment.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::{AccountId, Amount};

/// Failures a token collaborator can report.
///
/// A token failure surfaces before the engine commits any ledger change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The source account does not hold the requested amount.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The spender is not approved for the requested amount.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// Crediting the destination would overflow its balance.
    #[error("balance overflow")]
    BalanceOverflow,
}

/// The reserve-asset capability: a standard fungible token the market
/// collects on issuance and pays out on redemption.
///
/// Implementations must uphold standard fungible semantics: transfers
/// debit exactly the amount from the source and credit exactly the amount
/// to the destination, atomically per call. The engine additionally
/// requires an 18-decimal asset and checks [`decimals`](Self::decimals)
/// once at construction.
pub trait ReserveAsset {
    /// Moves `amount` from `from` to `to` on the authority of `from`
    /// itself (the market moving its own funds).
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] and leaves all balances unchanged.
    fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Amount)
        -> Result<(), TokenError>;

    /// Moves `amount` from `from` to `to` on the authority of `spender`,
    /// consuming allowance.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] and leaves all balances unchanged.
    fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError>;

    /// Returns the balance of `account`.
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Returns the token's fractional decimal digits.
    fn decimals(&self) -> u8;
}

/// The synthetic-asset capability: the token the market issues and
/// retires.
pub trait SyntheticAsset {
    /// Moves `amount` from `from` to `to` on the authority of `from`
    /// itself (the market paying out of its float).
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] and leaves all balances unchanged.
    fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Amount)
        -> Result<(), TokenError>;

    /// Moves `amount` from `from` to `to` on the authority of `spender`,
    /// consuming allowance.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] and leaves all balances unchanged.
    fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError>;

    /// Destroys `amount` held by `from` on the authority of `spender`,
    /// consuming allowance and reducing circulating supply.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] and leaves all balances unchanged.
    fn burn_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError>;
}

/// An in-memory fungible token implementing both capabilities.
///
/// A reference implementation for tests and simulation: balances and
/// allowances in ordered maps, plus a lifetime burn counter. Accounts
/// holding their own funds are implicitly approved for themselves;
/// third-party pulls consume explicit allowances set with
/// [`approve`](Self::approve).
#[derive(Debug, Clone, Default)]
pub struct InMemoryAsset {
    decimals: u8,
    balances: BTreeMap<AccountId, u128>,
    allowances: BTreeMap<(AccountId, AccountId), u128>,
    total_burned: u128,
}

impl InMemoryAsset {
    /// Creates an empty token with the given decimal count.
    #[must_use]
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }

    /// Credits `account` out of thin air. Test setup only.
    pub fn credit(&mut self, account: AccountId, amount: Amount) {
        let entry = self.balances.entry(account).or_insert(0);
        *entry = entry.saturating_add(amount.get());
    }

    /// Sets the allowance of `spender` over `owner`'s funds.
    pub fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.insert((owner, spender), amount.get());
    }

    /// Returns the balance of `account`.
    #[must_use]
    pub fn balance(&self, account: &AccountId) -> Amount {
        Amount::new(self.balances.get(account).copied().unwrap_or(0))
    }

    /// Returns the lifetime total destroyed through `burn_from`.
    #[must_use]
    pub fn total_burned(&self) -> Amount {
        Amount::new(self.total_burned)
    }

    fn debit(&mut self, from: &AccountId, amount: u128) -> Result<(), TokenError> {
        let balance = self.balances.get_mut(from).ok_or(TokenError::InsufficientBalance)?;
        if *balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        *balance -= amount;
        Ok(())
    }

    fn spend_allowance(
        &mut self,
        owner: &AccountId,
        spender: &AccountId,
        amount: u128,
    ) -> Result<(), TokenError> {
        if owner == spender {
            return Ok(());
        }
        let allowance = self
            .allowances
            .get_mut(&(*owner, *spender))
            .ok_or(TokenError::InsufficientAllowance)?;
        if *allowance < amount {
            return Err(TokenError::InsufficientAllowance);
        }
        *allowance -= amount;
        Ok(())
    }

    fn move_funds(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), TokenError> {
        // Check the credit side before debiting so a failure is effect-free.
        let target = self.balances.get(to).copied().unwrap_or(0);
        if target.checked_add(amount).is_none() {
            return Err(TokenError::BalanceOverflow);
        }
        self.debit(from, amount)?;
        *self.balances.entry(*to).or_insert(0) += amount;
        Ok(())
    }
}

impl ReserveAsset for InMemoryAsset {
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.move_funds(from, to, amount.get())
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.spend_allowance(from, spender, amount.get())?;
        self.move_funds(from, to, amount.get())
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balance(account)
    }

    fn decimals(&self) -> u8 {
        self.decimals
    }
}

impl SyntheticAsset for InMemoryAsset {
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.move_funds(from, to, amount.get())
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.spend_allowance(from, spender, amount.get())?;
        self.move_funds(from, to, amount.get())
    }

    fn burn_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.spend_allowance(from, spender, amount.get())?;
        self.debit(from, amount.get())?;
        self.total_burned += amount.get();
        Ok(())
    }
}
