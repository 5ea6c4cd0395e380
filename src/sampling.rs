//! Synthetic energy sample generation.
//!
//! Each method follows a saturating decay curve with uniform noise until it
//! converges, then holds its level with a small centered jitter walk.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::method::Method;

/// Draws one energy value per method per tick.
///
/// The generator owns its RNG; history bookkeeping and convergence marking
/// are the caller's responsibility.
pub struct SampleGenerator<R: Rng> {
    rng: R,
    centered: Uniform<f64>,
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            centered: Uniform::new(-0.5, 0.5),
        }
    }

    /// Next energy for `method` at `iteration`.
    ///
    /// `frozen` carries the method's last emitted value once it has
    /// converged; `None` selects the decay-curve branch.
    pub fn next_energy(&mut self, method: Method, iteration: usize, frozen: Option<f64>) -> f64 {
        match frozen {
            Some(level) => self.frozen_step(method, level),
            None => self.curve_sample(method, iteration),
        }
    }

    fn curve_sample(&mut self, method: Method, iteration: usize) -> f64 {
        let p = method.curve();
        let progress = 1.0 - (-(iteration as f64) / p.decay).exp();
        p.base - p.amplitude * progress + p.noise * self.rng.gen::<f64>()
    }

    fn frozen_step(&mut self, method: Method, level: f64) -> f64 {
        let p = method.curve();
        level + p.jitter * self.centered.sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::mock::StepRng;

    /// RNG whose uniform draws are all zero, pinning the noise term.
    fn zero_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn hybrid_curve_starts_at_base_without_noise() {
        let mut gen = SampleGenerator::new(zero_rng());
        let e = gen.next_energy(Method::VqeUccsdHybrid, 0, None);
        assert_relative_eq!(e, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn hybrid_curve_approaches_asymptote() {
        let mut gen = SampleGenerator::new(zero_rng());
        let e = gen.next_energy(Method::VqeUccsdHybrid, 10_000, None);
        assert_relative_eq!(e, -1.4, epsilon = 1e-9);
    }

    #[test]
    fn curve_decreases_monotonically_without_noise() {
        let mut gen = SampleGenerator::new(zero_rng());
        for method in Method::ALL {
            let mut prev = gen.next_energy(method, 0, None);
            for iteration in 1..40 {
                let next = gen.next_energy(method, iteration, None);
                assert!(next < prev, "{} rose at iteration {}", method.key(), iteration);
                prev = next;
            }
        }
    }

    #[test]
    fn noise_stays_within_declared_amplitude() {
        let mut gen = SampleGenerator::new(rand::thread_rng());
        let mut clean = SampleGenerator::new(zero_rng());
        for method in Method::ALL {
            let p = method.curve();
            for iteration in [0, 3, 17, 90] {
                let noiseless = clean.next_energy(method, iteration, None);
                let noisy = gen.next_energy(method, iteration, None);
                assert!(noisy >= noiseless - 1e-12);
                assert!(noisy < noiseless + p.noise);
            }
        }
    }

    #[test]
    fn frozen_step_is_bounded_by_half_jitter() {
        let mut gen = SampleGenerator::new(rand::thread_rng());
        for method in Method::ALL {
            let jitter = method.curve().jitter;
            let mut level = -1.37;
            for _ in 0..200 {
                let next = gen.next_energy(method, 0, Some(level));
                assert!((next - level).abs() <= jitter * 0.5 + 1e-15);
                level = next;
            }
        }
    }

    #[test]
    fn zne_jitter_is_tighter_than_the_others() {
        assert_relative_eq!(Method::NormalVqe.curve().jitter, 0.001);
        assert_relative_eq!(Method::VqeUccsdHybrid.curve().jitter, 0.001);
        assert_relative_eq!(Method::VqeUccsdHybridZne.curve().jitter, 0.0005);
    }
}
