// SPDX-License-Identifier: MIT
//! Generator properties across many seeds and parameter combinations.

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use swatch_palette::{GenerationParameters, Mode, PaletteError, generate_palette};

fn is_hex(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn default_six_colors() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = generate_palette(&mut rng, &GenerationParameters::default()).unwrap();
        assert_eq!(palette.len(), 6);
        assert!(palette.iter().all(|c| is_hex(c)));
        assert_ne!(palette.first(), palette.last(), "seed {seed}");
    }
}

#[test]
fn single_color() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = generate_palette(&mut rng, &GenerationParameters::new(1)).unwrap();
        assert_eq!(palette.len(), 1);
        assert!(is_hex(&palette.as_slice()[0]));
    }
}

#[test]
fn single_part_long_ramp() {
    let mut rng = StdRng::seed_from_u64(10);
    let params = GenerationParameters::new(10).with_parts(1);
    let palette = generate_palette(&mut rng, &params).unwrap();
    assert_eq!(palette.len(), 10);
}

#[test]
fn total_equal_to_parts() {
    for n in 1..=8 {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let params = GenerationParameters::new(n).with_parts(n);
        assert_eq!(generate_palette(&mut rng, &params).unwrap().len(), n);
    }
}

#[test]
fn total_below_parts() {
    let mut rng = StdRng::seed_from_u64(4);
    let params = GenerationParameters::new(2).with_parts(9);
    assert_eq!(generate_palette(&mut rng, &params).unwrap().len(), 2);
}

#[test]
fn padding_range_is_safe() {
    let mut rng = StdRng::seed_from_u64(77);
    for step in 0..=10 {
        let padding = f64::from(step) * 0.05;
        for mode in Mode::ALL {
            let params = GenerationParameters::new(9).with_padding(padding).with_mode(mode);
            let palette = generate_palette(&mut rng, &params).unwrap();
            assert_eq!(palette.len(), 9);
            assert!(palette.iter().all(|c| is_hex(c)), "{mode} {padding}: {palette:?}");
        }
    }
}

/// Shuffling reorders the raw list but never changes the output size.
#[test]
fn random_order() {
    let mut rng = StdRng::seed_from_u64(12);
    for total in [1, 3, 6, 15] {
        let params = GenerationParameters::new(total).with_random_order(true);
        assert_eq!(generate_palette(&mut rng, &params).unwrap().len(), total);
    }
}

#[test]
fn preconditions() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generate_palette(&mut rng, &GenerationParameters::new(0)).unwrap_err(),
        PaletteError::ZeroTotal
    );
    assert_eq!(
        generate_palette(&mut rng, &GenerationParameters::new(4).with_parts(0)).unwrap_err(),
        PaletteError::ZeroParts
    );
}
