//! Fee arithmetic with exact quote/execute symmetry.
//!
//! Forward direction: a gross synthetic amount splits into
//! `fee = floor(gross · rate / base)` and a remainder the trader keeps
//! (buy) or burns (sell). Inverse direction: given a required remainder,
//! find the smallest gross whose forward split covers it. The inverse
//! starts from `ceil(remainder · base / (base − rate))` and, because the
//! two rounding steps can interact, may be exactly one unit short — in
//! that case the gross is bumped by one and re-split. Both quotes and
//! executes call these functions, so the symmetry between them is by
//! construction.

use crate::domain::{Amount, FeeSchedule, Rounding};
use crate::error::{EngineError, Result};
use crate::math::mul_div;

/// Splits `gross` into `(fee, remainder)` under `schedule`.
///
/// `fee = floor(gross · rate / base)`; the remainder is what the trader
/// keeps on a buy or burns on a sell. Because `rate < base`, the fee is
/// always strictly below `gross`, so a positive gross always leaves a
/// positive remainder.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if the widened product cannot be
/// represented (requires amounts near the numeric ceiling).
pub(crate) fn split_gross(schedule: FeeSchedule, gross: Amount) -> Result<(Amount, Amount)> {
    let fee = mul_div(
        gross.get(),
        schedule.rate() as u128,
        schedule.base() as u128,
        Rounding::Down,
    )
    .ok_or(EngineError::Overflow("fee computation"))?;
    let remainder = gross
        .get()
        .checked_sub(fee)
        .ok_or(EngineError::Underflow("fee exceeds gross"))?;
    Ok((Amount::new(fee), Amount::new(remainder)))
}

/// The smallest gross whose forward split leaves at least `remainder`.
///
/// Used with the buy schedule to find the gross mint for an exact net
/// request, and with the sell schedule to find the gross delivery for an
/// exact burn.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if the scaled amount cannot be
/// represented.
pub(crate) fn gross_for_remainder(schedule: FeeSchedule, remainder: Amount) -> Result<Amount> {
    // rate < base is a construction invariant, so the complement is ≥ 1.
    let complement = schedule.base() - schedule.rate();
    let gross = mul_div(
        remainder.get(),
        schedule.base() as u128,
        complement as u128,
        Rounding::Up,
    )
    .ok_or(EngineError::Overflow("fee inversion"))?;

    let (_, got) = split_gross(schedule, Amount::new(gross))?;
    if got >= remainder {
        return Ok(Amount::new(gross));
    }

    // The two rounding steps interacted; one extra unit always suffices.
    let bumped = gross
        .checked_add(1)
        .ok_or(EngineError::Overflow("fee inversion"))?;
    let (_, got) = split_gross(schedule, Amount::new(bumped))?;
    if got < remainder {
        return Err(EngineError::Overflow("fee inversion did not converge"));
    }
    Ok(Amount::new(bumped))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn schedule(rate: u64, base: u64) -> FeeSchedule {
        let Ok(s) = FeeSchedule::new(rate, base) else {
            panic!("valid schedule");
        };
        s
    }

    // -- split_gross --------------------------------------------------------

    #[test]
    fn split_three_percent() {
        let (fee, net) = split_gross(schedule(3, 100), Amount::new(1_000)).expect("split");
        assert_eq!(fee, Amount::new(30));
        assert_eq!(net, Amount::new(970));
    }

    #[test]
    fn split_floors_the_fee() {
        // 3% of 33 = 0.99 → fee 0, net 33
        let (fee, net) = split_gross(schedule(3, 100), Amount::new(33)).expect("split");
        assert_eq!(fee, Amount::ZERO);
        assert_eq!(net, Amount::new(33));
    }

    #[test]
    fn split_free_schedule() {
        let (fee, net) = split_gross(FeeSchedule::FREE, Amount::new(777)).expect("split");
        assert_eq!(fee, Amount::ZERO);
        assert_eq!(net, Amount::new(777));
    }

    #[test]
    fn split_always_adds_up() {
        for gross in [1u128, 2, 99, 100, 101, 1_000_000_000_000_000_000] {
            let (fee, net) = split_gross(schedule(7, 250), Amount::new(gross)).expect("split");
            assert_eq!(fee.get() + net.get(), gross);
        }
    }

    #[test]
    fn split_wide_amount() {
        // gross · rate overflows u128 without the widened intermediate.
        let gross = Amount::new(u128::MAX / 2);
        let (fee, net) = split_gross(schedule(1, 2), gross).expect("split");
        assert_eq!(fee.get() + net.get(), gross.get());
        assert!(fee.get() <= net.get());
    }

    // -- gross_for_remainder ------------------------------------------------

    #[test]
    fn inversion_exact_case() {
        // net 970 at 3/100 → gross 1000 exactly.
        let gross = gross_for_remainder(schedule(3, 100), Amount::new(970)).expect("gross");
        assert_eq!(gross, Amount::new(1_000));
    }

    #[test]
    fn inversion_covers_and_is_minimal() {
        for rate_base in [(3u64, 100u64), (1, 3), (999, 1_000), (7, 250)] {
            let s = schedule(rate_base.0, rate_base.1);
            for remainder in [1u128, 2, 3, 10, 97, 1_000, 123_457, 10_000_000_001] {
                let remainder = Amount::new(remainder);
                let gross = gross_for_remainder(s, remainder).expect("gross");
                let (_, got) = split_gross(s, gross).expect("split");
                assert!(got >= remainder, "{s}: gross {gross} must cover {remainder}");

                // One unit less must no longer cover.
                let Some(less) = gross.checked_sub(&Amount::new(1)) else {
                    panic!("gross is positive");
                };
                if !less.is_zero() {
                    let (_, short) = split_gross(s, less).expect("split");
                    assert!(short < remainder, "{s}: gross {gross} must be minimal");
                }
            }
        }
    }

    #[test]
    fn inversion_free_schedule_is_identity() {
        let gross = gross_for_remainder(FeeSchedule::FREE, Amount::new(42)).expect("gross");
        assert_eq!(gross, Amount::new(42));
    }

    #[test]
    fn inversion_zero_remainder() {
        let gross = gross_for_remainder(schedule(3, 100), Amount::ZERO).expect("gross");
        assert_eq!(gross, Amount::ZERO);
    }
}
