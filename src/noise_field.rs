//! Seeded coherent noise sampled by the terrain classifier.
//!
//! Wraps classic Perlin gradient noise from the `noise` crate behind a
//! floating-point seed, so map seeds like `0.7316` (as produced by a uniform
//! reroll) and integer seeds like `42` both select a permutation table.

use noise::{NoiseFn, Perlin};

/// Seed substituted for NaN or infinite seed values.
pub const DEFAULT_NOISE_SEED: u32 = 0;

/// Fractional seeds in (0, 1) are spread over this range before flooring so
/// that rerolled seeds don't all collapse onto the same table.
const FRACTIONAL_SEED_SPAN: f64 = 65536.0;

/// A 2D gradient noise field. Immutable after seeding, so one field can be
/// shared across threads for a whole grid pass.
#[derive(Clone, Debug)]
pub struct NoiseField {
    perlin: Perlin,
    seed: u32,
}

impl NoiseField {
    pub fn new(seed: f64) -> Self {
        let seed = seed_to_u32(seed);
        Self {
            perlin: Perlin::new(seed),
            seed,
        }
    }

    /// Reinitialize the permutation table from `value`.
    pub fn seed(&mut self, value: f64) {
        self.seed = seed_to_u32(value);
        self.perlin = Perlin::new(self.seed);
    }

    /// The integer seed the permutation table was built from.
    pub fn table_seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field at continuous coordinates. Output lies in [-1, 1].
    #[inline]
    pub fn sample2(&self, x: f64, y: f64) -> f64 {
        self.perlin.get([x, y]).clamp(-1.0, 1.0)
    }
}

/// Map a floating-point seed onto the 32-bit seed the permutation table uses.
pub fn seed_to_u32(value: f64) -> u32 {
    if !value.is_finite() {
        return DEFAULT_NOISE_SEED;
    }
    let mut v = value.abs();
    if v > 0.0 && v < 1.0 {
        v *= FRACTIONAL_SEED_SPAN;
    }
    // `as u64` saturates for huge values; keep the low 32 bits
    (v.floor() as u64 & 0xFFFF_FFFF) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_same_seed_same_samples() {
        let a = NoiseField::new(42.0);
        let b = NoiseField::new(42.0);
        for i in 0..200 {
            let x = i as f64 * 0.173;
            let y = i as f64 * 0.311;
            assert_eq!(a.sample2(x, y).to_bits(), b.sample2(x, y).to_bits());
        }
    }

    #[test]
    fn test_reseed_matches_fresh_field() {
        let mut field = NoiseField::new(1.0);
        field.seed(42.0);
        let fresh = NoiseField::new(42.0);
        assert_eq!(field.table_seed(), fresh.table_seed());
        assert_eq!(field.sample2(3.3, 7.7), fresh.sample2(3.3, 7.7));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = NoiseField::new(42.0);
        let b = NoiseField::new(43.0);
        let differs = (0..100).any(|i| {
            let x = 0.37 + i as f64 * 0.41;
            let y = 0.53 + i as f64 * 0.29;
            a.sample2(x, y) != b.sample2(x, y)
        });
        assert!(differs, "Seeds 42 and 43 produced identical fields");
    }

    #[test]
    fn test_samples_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let field = NoiseField::new(rng.gen_range(0.0..100_000.0));
            let x: f64 = rng.gen_range(-500.0..500.0);
            let y: f64 = rng.gen_range(-500.0..500.0);
            let v = field.sample2(x, y);
            assert!((-1.0..=1.0).contains(&v), "Sample {} out of range at ({}, {})", v, x, y);
        }
    }

    #[test]
    fn test_continuity_across_integer_boundaries() {
        let field = NoiseField::new(42.0);
        let eps = 1e-4;
        // Gradient noise has a bounded derivative; 8 is well above it
        let bound = 8.0 * eps;
        for xi in -10..10 {
            for yi in 0..10 {
                let x = xi as f64;
                let y = yi as f64 + 0.25;
                let dx = (field.sample2(x + eps / 2.0, y) - field.sample2(x - eps / 2.0, y)).abs();
                let dy = (field.sample2(y, x + eps / 2.0) - field.sample2(y, x - eps / 2.0)).abs();
                assert!(dx <= bound, "Jump of {} across x={}", dx, x);
                assert!(dy <= bound, "Jump of {} across y={}", dy, x);
            }
        }
    }

    #[test]
    fn test_non_finite_seed_uses_default() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let field = NoiseField::new(bad);
            assert_eq!(field.table_seed(), DEFAULT_NOISE_SEED);
            let v = field.sample2(1.5, 2.5);
            assert!(v.is_finite());
        }
    }

    #[test]
    fn test_seed_mapping() {
        assert_eq!(seed_to_u32(42.0), 42);
        assert_eq!(seed_to_u32(42.9), 42);
        assert_eq!(seed_to_u32(-42.0), 42);
        assert_eq!(seed_to_u32(0.5), 32768);
        assert_eq!(seed_to_u32(0.0), 0);
        assert_eq!(seed_to_u32(4_294_967_296.0 + 5.0), 5);
    }
}
