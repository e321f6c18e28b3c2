//! Random sources for dealing practice flops.
//!
//! Dealing only needs uniform integers below a bound, so the engine consumes
//! the narrow [`DealRng`] trait. [`Lcg`] is the reference generator whose
//! sequence is fixed across platforms and releases; ChaCha20 is available for
//! sessions that should not be predictable.

use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// Source of uniform integers for shuffling.
pub trait DealRng {
    /// Uniform integer in `0..n`. `n` must be non-zero.
    fn rand_int(&mut self, n: u32) -> u32;
}

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// 32-bit linear congruential generator (Numerical Recipes constants).
///
/// # Examples
///
/// ```
/// use flopnuts_engine::rng::{DealRng, Lcg};
///
/// let mut a = Lcg::new(12345);
/// let mut b = Lcg::new(12345);
/// assert_eq!(a.rand_int(52), b.rand_int(52));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Seeds wider than 32 bits are reduced modulo 2^32.
    pub fn new(seed: u64) -> Self {
        Self { state: seed as u32 }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.state = seed as u32;
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Next value in `[0, 1)`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }
}

impl DealRng for Lcg {
    // floor(state / 2^32 * n), computed without rounding
    fn rand_int(&mut self, n: u32) -> u32 {
        ((u64::from(self.step()) * u64::from(n)) >> 32) as u32
    }
}

impl DealRng for ChaCha20Rng {
    fn rand_int(&mut self, n: u32) -> u32 {
        self.random_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Lcg::new(12345);
        let mut b = Lcg::new(12345);
        assert_eq!(a.next(), b.next());
        for _ in 0..100 {
            assert_eq!(a.rand_int(52), b.rand_int(52));
        }
    }

    #[test]
    fn first_step_matches_reference_constants() {
        let mut rng = Lcg::new(0);
        rng.next();
        assert_eq!(rng.state(), 1_013_904_223);
        rng.next();
        assert_eq!(rng.state(), 1_196_435_762);
    }

    #[test]
    fn next_stays_in_unit_interval() {
        let mut rng = Lcg::new(7);
        for _ in 0..1000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn rand_int_agrees_with_float_form() {
        let mut a = Lcg::new(99);
        let mut b = Lcg::new(99);
        for n in 1..=52u32 {
            let expected = (a.next() * f64::from(n)).floor() as u32;
            assert_eq!(b.rand_int(n), expected);
        }
    }

    #[test]
    fn reseed_restarts_sequence() {
        let mut rng = Lcg::new(5);
        let first: Vec<u32> = (0..5).map(|_| rng.rand_int(10)).collect();
        rng.reseed(5);
        let again: Vec<u32> = (0..5).map(|_| rng.rand_int(10)).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn chacha_stays_in_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for n in 1..=52u32 {
            assert!(rng.rand_int(n) < n);
        }
    }
}
