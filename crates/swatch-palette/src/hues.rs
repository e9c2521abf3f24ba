// SPDX-License-Identifier: MIT
//! Hue set — six evenly spaced hue angles around a random base.
//!
//! A palette draws every color's hue from one `HueSet`. The first hue is
//! the base itself and anchors the low-saturation ramp; the other five sit
//! at 60° steps around the wheel and feed the vivid accents.

use rand::Rng;

use crate::random::random_int;

/// Number of hues in a set.
pub const HUE_COUNT: usize = 6;

/// Angular spacing between neighbouring hues, in degrees.
pub const HUE_STEP: f64 = 60.0;

/// Six hue angles in `[0, 360)`, `60°` apart, starting at the base hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueSet([f64; HUE_COUNT]);

impl HueSet {
    /// Build the set around `base_hue` (any angle, wrapped into `[0, 360)`).
    #[must_use]
    pub fn from_base(base_hue: f64) -> Self {
        let mut hues = [0.0; HUE_COUNT];
        for (k, hue) in hues.iter_mut().enumerate() {
            *hue = norm((k as f64).mul_add(HUE_STEP, base_hue));
        }
        Self(hues)
    }

    /// Build the set around a whole-degree base hue drawn uniformly from
    /// `[0, 359]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_base(f64::from(random_int(rng, 0, 359)))
    }

    /// The base hue — used by every anchor color.
    #[must_use]
    pub const fn anchor(&self) -> f64 {
        self.0[0]
    }

    /// Pick one of the six hues uniformly (with replacement across calls).
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let idx = random_int(rng, 0, HUE_COUNT as i32 - 1);
        self.0[usize::try_from(idx).unwrap_or_default()]
    }

    /// All six hues, base first.
    #[must_use]
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Normalize a hue to [0, 360).
fn norm(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn six_hues_sixty_apart() {
        let set = HueSet::from_base(10.0);
        assert_eq!(set.as_slice(), &[10.0, 70.0, 130.0, 190.0, 250.0, 310.0]);
    }

    /// Offsets past 360 wrap around.
    #[test]
    fn wraps_past_360() {
        let set = HueSet::from_base(300.0);
        assert_eq!(set.as_slice(), &[300.0, 0.0, 60.0, 120.0, 180.0, 240.0]);
    }

    #[test]
    fn anchor_is_base() {
        assert!((HueSet::from_base(123.0).anchor() - 123.0).abs() < 1e-12);
    }

    #[test]
    fn negative_base_wraps() {
        for h in HueSet::from_base(-30.0).as_slice() {
            assert!((0.0..360.0).contains(h), "Hue out of range: {h}");
        }
    }

    #[test]
    fn random_base_is_whole_degree_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let set = HueSet::random(&mut rng);
            let base = set.anchor();
            assert!((0.0..360.0).contains(&base));
            assert!((base - base.round()).abs() < 1e-12, "fractional base {base}");
        }
    }

    #[test]
    fn pick_draws_from_the_set() {
        let mut rng = StdRng::seed_from_u64(5);
        let set = HueSet::from_base(42.0);
        let mut seen = [false; HUE_COUNT];
        for _ in 0..500 {
            let hue = set.pick(&mut rng);
            let idx = set.as_slice().iter().position(|&h| (h - hue).abs() < 1e-12);
            seen[idx.expect("picked hue not in set")] = true;
        }
        assert!(seen.iter().all(|&s| s), "not every hue was picked: {seen:?}");
    }
}
