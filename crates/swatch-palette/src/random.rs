// SPDX-License-Identifier: MIT
//! Random range sampling and shuffling.
//!
//! Every function takes the random source explicitly so callers can pass a
//! seeded generator (`StdRng::seed_from_u64`) and get repeatable output, or
//! `rand::rng()` for everyday use. This is decorative randomness only; no
//! function here is suitable for anything security-sensitive.

use rand::Rng;
use rand::seq::SliceRandom;

/// Uniform integer in the inclusive range `[min, max]`.
///
/// `min == max` returns that value.
///
/// # Panics
///
/// Panics if `min > max`. Every caller in this crate passes an ordered
/// range; a reversed one is a bug at the call site, not something to
/// quietly swap.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    assert!(min <= max, "random_int: empty range [{min}, {max}]");
    rng.random_range(min..=max)
}

/// Uniform real number in the inclusive range `[min, max]`.
///
/// # Panics
///
/// Panics if `min > max` or either bound is not finite.
pub fn random_real<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    assert!(
        min.is_finite() && max.is_finite() && min <= max,
        "random_real: invalid range [{min}, {max}]"
    );
    rng.random_range(min..=max)
}

/// Return a uniformly shuffled copy of `items`. The input is untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
