//! Compounding loops shared by the fund model and the reference projections

/// Amount of money in the contribution currency
pub type Money = f64;

/// Growth rate as a decimal fraction per period (0.07 = 7% per year)
pub type Rate = f64;

/// Accumulate capital from a starting amount.
///
/// Each period the capital grows by `(1 + rate)` and then the periodic
/// contribution is added at the end of the period (ordinary annuity).
/// With `periods == 0` the starting capital is returned unchanged.
pub fn accumulate(start: Money, rate: Rate, periodic_contribution: Money, periods: u32) -> Money {
    let mut capital = start;
    for _ in 0..periods {
        capital *= 1.0 + rate;
        capital += periodic_contribution;
    }
    capital
}

/// Terminal capital of a fixed periodic contribution starting from zero.
pub fn compound(rate: Rate, periodic_contribution: Money, periods: u32) -> Money {
    accumulate(0.0, rate, periodic_contribution, periods)
}

/// Grow a one-time contribution for `periods` periods with no further inflows.
pub fn grow_lump_sum(start: Money, rate: Rate, periods: u32) -> Money {
    accumulate(start, rate, 0.0, periods)
}
