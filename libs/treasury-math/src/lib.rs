#![no_std]

//! Checked fixed-point helpers for vault accounting.
//!
//! Every amount is a non-negative `i128` with [`DECIMALS`] fractional digits.
//! Functions return `None` instead of wrapping, truncating or panicking, so
//! callers can map the failure onto their own contract error.

use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, I256};

/// Fractional digits shared by both reserve assets and the share token
pub const DECIMALS: u32 = 18;

/// Fixed-point 1.0 (also 100% when used as a proportion)
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Returns `floor(a * b / denominator)`.
///
/// The product is first attempted in `i128`; if it does not fit, it is
/// recomputed with a 256-bit intermediate. `None` if an input is negative, the
/// denominator is not positive, or the quotient does not fit in `i128`.
pub fn mul_div_floor(env: &Env, a: i128, b: i128, denominator: i128) -> Option<i128> {
    if a < 0 || b < 0 || denominator <= 0 {
        return None;
    }
    if let Some(result) = a.fixed_mul_floor(b, denominator) {
        return Some(result);
    }
    let product = I256::from_i128(env, a).mul(&I256::from_i128(env, b));
    product.div(&I256::from_i128(env, denominator)).to_i128()
}

/// Fraction of `total` held by `part`, scaled by [`SCALE`] and rounded down.
///
/// `None` when `total` is zero or `part` exceeds it.
pub fn proportion(env: &Env, part: i128, total: i128) -> Option<i128> {
    if part > total {
        return None;
    }
    mul_div_floor(env, part, SCALE, total)
}

/// The proportion that completes `proportion` to exactly [`SCALE`].
pub fn complement(proportion: i128) -> Option<i128> {
    if !(0..=SCALE).contains(&proportion) {
        return None;
    }
    SCALE.checked_sub(proportion)
}

/// Share of `reserve` owed to `amount` out of `supply` units, rounded down.
///
/// Redeeming the whole supply yields the whole reserve, so nothing is left
/// behind once the last unit is burned.
pub fn pro_rata(env: &Env, reserve: i128, amount: i128, supply: i128) -> Option<i128> {
    if supply <= 0 || amount < 0 || amount > supply {
        return None;
    }
    if amount == supply {
        return Some(reserve);
    }
    mul_div_floor(env, reserve, amount, supply)
}
