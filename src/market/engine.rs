//! The trade executor: curve, ledger, fees, and collaborators combined.
//!
//! Six trade shapes, each in two forms: a pure `quote_*` view and a
//! state-changing execute. Both forms run the identical computation over
//! the same ledger snapshot, so a quote equals what the execute realizes
//! as long as no other operation commits in between — divergence under
//! interleaving is the documented slippage exposure, bounded by the
//! min-out/max-in parameter every execute takes.
//!
//! Execution discipline, in order: validate inputs, compute the receipt,
//! check the slippage bound, build the successor ledger, perform external
//! transfers (inbound before outbound), install the successor, emit one
//! event. The ledger is only replaced after every transfer succeeded, so
//! any rejection or collaborator failure leaves accounting untouched.

use crate::config::MarketConfig;
use crate::curve::CurveModel;
use crate::domain::{AccountId, Amount, BuyReceipt, FeeConfig, SellReceipt};
use crate::error::{EngineError, Result};
use crate::math::Fixed;
use crate::traits::{ReserveAsset, SyntheticAsset};

use super::events::{EventSink, MarketEvent};
use super::fees::{gross_for_remainder, split_gross};
use super::ledger::Ledger;

/// Decimal digits the reserve collaborator must expose.
const RESERVE_DECIMALS: u8 = 18;

/// The primary market for a curve-priced synthetic asset.
///
/// Generic over the reserve asset `R`, the synthetic asset `S`, and the
/// event sink `E`. The market transacts through its vault account: reserve
/// inflows land there, redemptions are paid from there, and synthetic
/// deliveries come out of a float the vault pre-holds.
///
/// Administrative entry points ([`set_fee_config`](Self::set_fee_config),
/// [`skim_excess`](Self::skim_excess)) carry no access control of their
/// own; the call boundary that owns the administrative capability decides
/// who may reach them.
#[derive(Debug)]
pub struct Market<R, S, E> {
    curve: CurveModel,
    ledger: Ledger,
    fees: FeeConfig,
    vault: AccountId,
    reserve: R,
    synthetic: S,
    events: E,
}

impl<R, S, E> Market<R, S, E>
where
    R: ReserveAsset,
    S: SyntheticAsset,
    E: EventSink,
{
    /// Builds a market from a validated configuration and collaborators.
    ///
    /// # Errors
    ///
    /// - Any validation error from [`MarketConfig::validate`].
    /// - [`EngineError::InvalidParameter`] if the reserve collaborator is
    ///   not an 18-decimal asset or the curve parameter is unusable.
    pub fn new(config: MarketConfig, reserve: R, synthetic: S, events: E) -> Result<Self> {
        config.validate()?;
        if reserve.decimals() != RESERVE_DECIMALS {
            return Err(EngineError::InvalidParameter(
                "reserve asset must have 18 decimals",
            ));
        }
        let curve = CurveModel::new(config.curve_parameter())?;
        Ok(Self {
            curve,
            ledger: Ledger::new(),
            fees: config.fees(),
            vault: config.vault(),
            reserve,
            synthetic,
            events,
        })
    }

    // -- Read-only accessors ------------------------------------------------

    /// Returns the pricing model.
    #[must_use]
    pub const fn curve(&self) -> &CurveModel {
        &self.curve
    }

    /// Returns the current ledger snapshot.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the active fee configuration.
    #[must_use]
    pub const fn fee_config(&self) -> &FeeConfig {
        &self.fees
    }

    /// Returns the vault account id.
    #[must_use]
    pub const fn vault(&self) -> AccountId {
        self.vault
    }

    /// Returns the reserve collaborator.
    #[must_use]
    pub const fn reserve_asset(&self) -> &R {
        &self.reserve
    }

    /// Returns the synthetic collaborator.
    #[must_use]
    pub const fn synthetic_asset(&self) -> &S {
        &self.synthetic
    }

    /// Synthetic currently outstanding: minted minus burned.
    ///
    /// # Errors
    ///
    /// Propagates ledger invariant violations (unreachable by
    /// construction).
    pub fn internal_supply(&self) -> Result<Amount> {
        self.ledger.outstanding_supply()
    }

    /// Book reserve: recorded inflows minus recorded outflows.
    ///
    /// # Errors
    ///
    /// Propagates ledger invariant violations (unreachable by
    /// construction).
    pub fn internal_reserve(&self) -> Result<Amount> {
        self.ledger.book_reserve()
    }

    /// Curve-authoritative reserve: the area between the two axis
    /// positions. This, not the book figure, bounds what exact-output
    /// redemptions may withdraw.
    ///
    /// # Errors
    ///
    /// Propagates curve evaluation failures.
    pub fn modeled_reserve(&self) -> Result<Amount> {
        let minted = Fixed::from_amount(self.ledger.minted_total());
        let burned = Fixed::from_amount(self.ledger.burned_total());
        let upper = self.curve.area_of(minted)?;
        let lower = self.curve.area_of(burned)?;
        Ok(upper.safe_sub(lower)?.to_amount())
    }

    /// The reserve balance the token collaborator actually reports for
    /// the vault. May exceed the book figure through donations or
    /// rounding dust; never used in curve math.
    #[must_use]
    pub fn real_reserve(&self) -> Amount {
        self.reserve.balance_of(&self.vault)
    }

    /// Marginal price at the buy axis position.
    ///
    /// # Errors
    ///
    /// Propagates curve evaluation failures.
    pub fn current_buy_price(&self) -> Result<Fixed> {
        self.curve
            .price_at_supply(Fixed::from_amount(self.ledger.minted_total()))
    }

    /// Marginal price at the sell axis position.
    ///
    /// # Errors
    ///
    /// Propagates curve evaluation failures.
    pub fn current_sell_price(&self) -> Result<Fixed> {
        self.curve
            .price_at_supply(Fixed::from_amount(self.ledger.burned_total()))
    }

    // -- Quotes -------------------------------------------------------------

    /// Quotes a buy for a fixed reserve input.
    ///
    /// # Errors
    ///
    /// Same as [`buy_with_reserve`](Self::buy_with_reserve), minus the
    /// slippage and transfer failures.
    pub fn quote_buy_with_reserve(&self, reserve_in: Amount) -> Result<BuyReceipt> {
        self.compute_buy_by_input(reserve_in)
    }

    /// Quotes a buy for an exact net synthetic amount.
    ///
    /// # Errors
    ///
    /// Same as [`buy_exact_net`](Self::buy_exact_net), minus the slippage
    /// and transfer failures.
    pub fn quote_buy_exact_net(&self, net_out: Amount) -> Result<BuyReceipt> {
        self.compute_buy_exact_net(net_out)
    }

    /// Quotes a buy for an exact gross mint.
    ///
    /// # Errors
    ///
    /// Same as [`buy_exact_gross`](Self::buy_exact_gross), minus the
    /// slippage and transfer failures.
    pub fn quote_buy_exact_gross(&self, gross_out: Amount) -> Result<BuyReceipt> {
        self.compute_buy_exact_gross(gross_out)
    }

    /// Quotes a sell for a fixed synthetic input.
    ///
    /// # Errors
    ///
    /// Same as [`sell_with_synthetic`](Self::sell_with_synthetic), minus
    /// the slippage and transfer failures.
    pub fn quote_sell_with_synthetic(&self, gross_in: Amount) -> Result<SellReceipt> {
        self.compute_sell_by_input(gross_in)
    }

    /// Quotes a sell for an exact reserve output.
    ///
    /// # Errors
    ///
    /// Same as [`sell_exact_output`](Self::sell_exact_output), minus the
    /// slippage and transfer failures.
    pub fn quote_sell_exact_output(&self, reserve_out: Amount) -> Result<SellReceipt> {
        self.compute_sell_exact_output(reserve_out)
    }

    /// Quotes a sell for an exact burn.
    ///
    /// # Errors
    ///
    /// Same as [`sell_exact_burn`](Self::sell_exact_burn), minus the
    /// slippage and transfer failures.
    pub fn quote_sell_exact_burn(&self, burn: Amount) -> Result<SellReceipt> {
        self.compute_sell_exact_burn(burn)
    }

    // -- Executes: buys -----------------------------------------------------

    /// The one-time fee-free seeding trade.
    ///
    /// Mints `supply_from_area(reserve_in)` against an empty curve,
    /// advances the buy axis only, and permanently sets the seeding flag.
    /// The emitted fee is zero regardless of the configured schedules.
    ///
    /// # Errors
    ///
    /// - [`EngineError::AlreadyBootstrapped`] on any second attempt.
    /// - [`EngineError::InvalidAccount`] / [`EngineError::InvalidQuantity`]
    ///   on zero inputs.
    /// - [`EngineError::Token`] if a transfer fails; no state changes.
    pub fn bootstrap(&mut self, buyer: AccountId, reserve_in: Amount) -> Result<BuyReceipt> {
        if buyer.is_zero() {
            return Err(EngineError::InvalidAccount("buyer must be non-zero"));
        }
        if reserve_in.is_zero() {
            return Err(EngineError::InvalidQuantity("reserve input must be positive"));
        }
        let minted = self
            .curve
            .supply_from_area(Fixed::from_amount(reserve_in))?
            .to_amount();
        if minted.is_zero() {
            return Err(EngineError::InvalidQuantity("seed input too small to mint"));
        }
        let receipt = BuyReceipt::new(reserve_in, minted, Amount::ZERO, minted)?;
        let next = self.ledger.with_seed(reserve_in, minted)?;

        let vault = self.vault;
        self.reserve
            .transfer_from(&vault, &buyer, &vault, reserve_in)?;
        self.synthetic.transfer(&vault, &buyer, minted)?;

        self.ledger = next;
        self.events.on_event(&MarketEvent::Bootstrapped {
            buyer,
            reserve_in,
            minted,
        });
        Ok(receipt)
    }

    /// Buys with a fixed reserve input; mints whatever the curve yields.
    ///
    /// # Errors
    ///
    /// - [`EngineError::SlippageExceeded`] if the net output falls below
    ///   `min_net_out`.
    /// - [`EngineError::InvalidAccount`] / [`EngineError::InvalidQuantity`]
    ///   on zero inputs.
    /// - [`EngineError::Token`] if a transfer fails; no state changes.
    pub fn buy_with_reserve(
        &mut self,
        buyer: AccountId,
        reserve_in: Amount,
        min_net_out: Amount,
    ) -> Result<BuyReceipt> {
        if buyer.is_zero() {
            return Err(EngineError::InvalidAccount("buyer must be non-zero"));
        }
        let receipt = self.compute_buy_by_input(reserve_in)?;
        if receipt.net() < min_net_out {
            return Err(EngineError::SlippageExceeded("net output below minimum"));
        }
        self.settle_buy(buyer, receipt)?;
        Ok(receipt)
    }

    /// Buys an exact net synthetic amount; pays whatever reserve the
    /// curve demands, up to `max_reserve_in`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::SlippageExceeded`] if the reserve cost exceeds
    ///   `max_reserve_in`.
    /// - [`EngineError::InvalidAccount`] / [`EngineError::InvalidQuantity`]
    ///   on zero inputs.
    /// - [`EngineError::Token`] if a transfer fails; no state changes.
    pub fn buy_exact_net(
        &mut self,
        buyer: AccountId,
        net_out: Amount,
        max_reserve_in: Amount,
    ) -> Result<BuyReceipt> {
        if buyer.is_zero() {
            return Err(EngineError::InvalidAccount("buyer must be non-zero"));
        }
        let receipt = self.compute_buy_exact_net(net_out)?;
        if receipt.reserve_in() > max_reserve_in {
            return Err(EngineError::SlippageExceeded("reserve input above maximum"));
        }
        self.settle_buy(buyer, receipt)?;
        Ok(receipt)
    }

    /// Buys an exact gross mint; the fee comes out of the gross.
    ///
    /// # Errors
    ///
    /// - [`EngineError::SlippageExceeded`] if the reserve cost exceeds
    ///   `max_reserve_in`.
    /// - [`EngineError::InvalidAccount`] / [`EngineError::InvalidQuantity`]
    ///   on zero inputs.
    /// - [`EngineError::Token`] if a transfer fails; no state changes.
    pub fn buy_exact_gross(
        &mut self,
        buyer: AccountId,
        gross_out: Amount,
        max_reserve_in: Amount,
    ) -> Result<BuyReceipt> {
        if buyer.is_zero() {
            return Err(EngineError::InvalidAccount("buyer must be non-zero"));
        }
        let receipt = self.compute_buy_exact_gross(gross_out)?;
        if receipt.reserve_in() > max_reserve_in {
            return Err(EngineError::SlippageExceeded("reserve input above maximum"));
        }
        self.settle_buy(buyer, receipt)?;
        Ok(receipt)
    }

    // -- Executes: sells ----------------------------------------------------

    /// Sells a fixed synthetic input; pays out whatever the sell axis
    /// yields.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InsufficientSupply`] if the implied burn exceeds
    ///   the outstanding supply.
    /// - [`EngineError::SlippageExceeded`] if the output falls below
    ///   `min_reserve_out`.
    /// - [`EngineError::InvalidAccount`] / [`EngineError::InvalidQuantity`]
    ///   on zero inputs.
    /// - [`EngineError::Token`] if a transfer or burn fails; no state
    ///   changes.
    pub fn sell_with_synthetic(
        &mut self,
        seller: AccountId,
        gross_in: Amount,
        min_reserve_out: Amount,
    ) -> Result<SellReceipt> {
        if seller.is_zero() {
            return Err(EngineError::InvalidAccount("seller must be non-zero"));
        }
        let receipt = self.compute_sell_by_input(gross_in)?;
        if receipt.reserve_out() < min_reserve_out {
            return Err(EngineError::SlippageExceeded("reserve output below minimum"));
        }
        self.settle_sell(seller, receipt)?;
        Ok(receipt)
    }

    /// Sells for an exact reserve output; delivers whatever synthetic the
    /// curve demands, up to `max_gross_in`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ExceedsModeledReserve`] if the output exceeds the
    ///   curve-authoritative reserve.
    /// - [`EngineError::InsufficientSupply`] if the implied burn exceeds
    ///   the outstanding supply.
    /// - [`EngineError::SlippageExceeded`] if the gross delivery exceeds
    ///   `max_gross_in`.
    /// - [`EngineError::InvalidAccount`] / [`EngineError::InvalidQuantity`]
    ///   on zero inputs.
    /// - [`EngineError::Token`] if a transfer or burn fails; no state
    ///   changes.
    pub fn sell_exact_output(
        &mut self,
        seller: AccountId,
        reserve_out: Amount,
        max_gross_in: Amount,
    ) -> Result<SellReceipt> {
        if seller.is_zero() {
            return Err(EngineError::InvalidAccount("seller must be non-zero"));
        }
        let receipt = self.compute_sell_exact_output(reserve_out)?;
        if receipt.gross_in() > max_gross_in {
            return Err(EngineError::SlippageExceeded("gross input above maximum"));
        }
        self.settle_sell(seller, receipt)?;
        Ok(receipt)
    }

    /// Sells an exact burn amount; the fee is charged on top.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InsufficientSupply`] if the burn exceeds the
    ///   outstanding supply.
    /// - [`EngineError::SlippageExceeded`] if the output falls below
    ///   `min_reserve_out`.
    /// - [`EngineError::InvalidAccount`] / [`EngineError::InvalidQuantity`]
    ///   on zero inputs.
    /// - [`EngineError::Token`] if a transfer or burn fails; no state
    ///   changes.
    pub fn sell_exact_burn(
        &mut self,
        seller: AccountId,
        burn: Amount,
        min_reserve_out: Amount,
    ) -> Result<SellReceipt> {
        if seller.is_zero() {
            return Err(EngineError::InvalidAccount("seller must be non-zero"));
        }
        let receipt = self.compute_sell_exact_burn(burn)?;
        if receipt.reserve_out() < min_reserve_out {
            return Err(EngineError::SlippageExceeded("reserve output below minimum"));
        }
        self.settle_sell(seller, receipt)?;
        Ok(receipt)
    }

    // -- Administration -----------------------------------------------------

    /// Replaces the fee configuration after revalidating it.
    ///
    /// Access control belongs to the call boundary.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFee`] and keeps the old configuration
    /// if the new one is invalid.
    pub fn set_fee_config(&mut self, fees: FeeConfig) -> Result<()> {
        fees.validate()?;
        self.fees = fees;
        self.events.on_event(&MarketEvent::FeeConfigUpdated {
            buy_rate: fees.buy().rate(),
            buy_base: fees.buy().base(),
            sell_rate: fees.sell().rate(),
            sell_base: fees.sell().base(),
            recipient: fees.recipient(),
        });
        Ok(())
    }

    /// Sweeps reserve the vault holds beyond the booked total to `to`.
    ///
    /// Donations and rounding dust accumulate in the vault without ever
    /// entering the ledger; this moves exactly that surplus and touches
    /// none of the four accumulators. Access control belongs to the call
    /// boundary.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoExcessReserve`] if the vault holds no surplus.
    /// - [`EngineError::InvalidAccount`] if `to` is zero.
    /// - [`EngineError::Token`] if the transfer fails.
    pub fn skim_excess(&mut self, to: AccountId) -> Result<Amount> {
        if to.is_zero() {
            return Err(EngineError::InvalidAccount("skim target must be non-zero"));
        }
        let real = self.real_reserve();
        let booked = self.ledger.book_reserve()?;
        let excess = match real.checked_sub(&booked) {
            Some(e) if !e.is_zero() => e,
            _ => return Err(EngineError::NoExcessReserve),
        };
        let vault = self.vault;
        self.reserve.transfer(&vault, &to, excess)?;
        self.events
            .on_event(&MarketEvent::ExcessSkimmed { to, amount: excess });
        Ok(excess)
    }

    // -- Shared computations ------------------------------------------------

    fn compute_buy_by_input(&self, reserve_in: Amount) -> Result<BuyReceipt> {
        if reserve_in.is_zero() {
            return Err(EngineError::InvalidQuantity("reserve input must be positive"));
        }
        let minted_before = Fixed::from_amount(self.ledger.minted_total());
        let area_before = self.curve.area_of(minted_before)?;
        let area_after = area_before.safe_add(Fixed::from_amount(reserve_in))?;
        let minted_after = self.curve.supply_from_area(area_after)?;
        let gross = match minted_after.safe_sub(minted_before) {
            Ok(g) => g.to_amount(),
            Err(_) => Amount::ZERO,
        };
        if gross.is_zero() {
            return Err(EngineError::InvalidQuantity("input too small to mint"));
        }
        let (fee, net) = split_gross(self.fees.buy(), gross)?;
        BuyReceipt::new(reserve_in, gross, fee, net)
    }

    fn compute_buy_exact_net(&self, net_out: Amount) -> Result<BuyReceipt> {
        if net_out.is_zero() {
            return Err(EngineError::InvalidQuantity("net output must be positive"));
        }
        let gross = gross_for_remainder(self.fees.buy(), net_out)?;
        let reserve_in = self.issuance_cost(gross)?;
        let (fee, net) = split_gross(self.fees.buy(), gross)?;
        BuyReceipt::new(reserve_in, gross, fee, net)
    }

    fn compute_buy_exact_gross(&self, gross_out: Amount) -> Result<BuyReceipt> {
        if gross_out.is_zero() {
            return Err(EngineError::InvalidQuantity("gross output must be positive"));
        }
        let reserve_in = self.issuance_cost(gross_out)?;
        let (fee, net) = split_gross(self.fees.buy(), gross_out)?;
        BuyReceipt::new(reserve_in, gross_out, fee, net)
    }

    fn compute_sell_by_input(&self, gross_in: Amount) -> Result<SellReceipt> {
        if gross_in.is_zero() {
            return Err(EngineError::InvalidQuantity("gross input must be positive"));
        }
        let (fee, burn) = split_gross(self.fees.sell(), gross_in)?;
        if burn > self.ledger.outstanding_supply()? {
            return Err(EngineError::InsufficientSupply);
        }
        let reserve_out = self.redemption_proceeds(burn)?;
        SellReceipt::new(gross_in, fee, burn, reserve_out)
    }

    fn compute_sell_exact_output(&self, reserve_out: Amount) -> Result<SellReceipt> {
        if reserve_out.is_zero() {
            return Err(EngineError::InvalidQuantity("reserve output must be positive"));
        }
        // Curve-based and ledger-based capacity are checked independently;
        // they can diverge under accumulated truncation drift and each
        // rejects on its own.
        if reserve_out > self.modeled_reserve()? {
            return Err(EngineError::ExceedsModeledReserve);
        }
        let burned_before = Fixed::from_amount(self.ledger.burned_total());
        let area_before = self.curve.area_of(burned_before)?;
        let area_after = area_before.safe_add(Fixed::from_amount(reserve_out))?;
        let burned_after = self.curve.supply_from_area(area_after)?;
        let burn = match burned_after.safe_sub(burned_before) {
            Ok(b) => b.to_amount(),
            Err(_) => Amount::ZERO,
        };
        if burn.is_zero() {
            return Err(EngineError::InvalidQuantity("output too small to price"));
        }
        if burn > self.ledger.outstanding_supply()? {
            return Err(EngineError::InsufficientSupply);
        }
        let gross_in = gross_for_remainder(self.fees.sell(), burn)?;
        let fee = gross_in
            .checked_sub(&burn)
            .ok_or(EngineError::Underflow("fee on exact-output sell"))?;
        SellReceipt::new(gross_in, fee, burn, reserve_out)
    }

    fn compute_sell_exact_burn(&self, burn: Amount) -> Result<SellReceipt> {
        if burn.is_zero() {
            return Err(EngineError::InvalidQuantity("burn amount must be positive"));
        }
        if burn > self.ledger.outstanding_supply()? {
            return Err(EngineError::InsufficientSupply);
        }
        let gross_in = gross_for_remainder(self.fees.sell(), burn)?;
        let fee = gross_in
            .checked_sub(&burn)
            .ok_or(EngineError::Underflow("fee on exact-burn sell"))?;
        let reserve_out = self.redemption_proceeds(burn)?;
        SellReceipt::new(gross_in, fee, burn, reserve_out)
    }

    /// Reserve cost of advancing the buy axis by `gross`:
    /// `area(x + gross) − area(x)`.
    fn issuance_cost(&self, gross: Amount) -> Result<Amount> {
        let minted_before = Fixed::from_amount(self.ledger.minted_total());
        let minted_after = minted_before.safe_add(Fixed::from_amount(gross))?;
        let area_before = self.curve.area_of(minted_before)?;
        let area_after = self.curve.area_of(minted_after)?;
        Ok(area_after.safe_sub(area_before)?.to_amount())
    }

    /// Reserve released by advancing the sell axis by `burn`:
    /// `area(y + burn) − area(y)`.
    fn redemption_proceeds(&self, burn: Amount) -> Result<Amount> {
        let burned_before = Fixed::from_amount(self.ledger.burned_total());
        let burned_after = burned_before.safe_add(Fixed::from_amount(burn))?;
        let area_before = self.curve.area_of(burned_before)?;
        let area_after = self.curve.area_of(burned_after)?;
        Ok(area_after.safe_sub(area_before)?.to_amount())
    }

    // -- Settlement ---------------------------------------------------------

    fn settle_buy(&mut self, buyer: AccountId, receipt: BuyReceipt) -> Result<()> {
        let next = self
            .ledger
            .with_buy(receipt.reserve_in(), receipt.gross())?;

        let vault = self.vault;
        self.reserve
            .transfer_from(&vault, &buyer, &vault, receipt.reserve_in())?;
        self.synthetic.transfer(&vault, &buyer, receipt.net())?;
        if !receipt.fee().is_zero() {
            self.synthetic
                .transfer(&vault, &self.fees.recipient(), receipt.fee())?;
        }

        self.ledger = next;
        self.events.on_event(&MarketEvent::BuyExecuted {
            buyer,
            reserve_in: receipt.reserve_in(),
            gross_minted: receipt.gross(),
            fee: receipt.fee(),
            net_out: receipt.net(),
        });
        Ok(())
    }

    fn settle_sell(&mut self, seller: AccountId, receipt: SellReceipt) -> Result<()> {
        let next = self
            .ledger
            .with_sell(receipt.reserve_out(), receipt.burned())?;

        let vault = self.vault;
        if !receipt.fee().is_zero() {
            self.synthetic
                .transfer_from(&vault, &seller, &self.fees.recipient(), receipt.fee())?;
        }
        self.synthetic
            .burn_from(&vault, &seller, receipt.burned())?;
        if !receipt.reserve_out().is_zero() {
            self.reserve
                .transfer(&vault, &seller, receipt.reserve_out())?;
        }

        self.ledger = next;
        self.events.on_event(&MarketEvent::SellExecuted {
            seller,
            gross_in: receipt.gross_in(),
            fee: receipt.fee(),
            burned: receipt.burned(),
            reserve_out: receipt.reserve_out(),
        });
        Ok(())
    }
}
