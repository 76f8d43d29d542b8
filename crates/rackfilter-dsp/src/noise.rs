//! Per-instance dither noise for the ladder filters.
//!
//! A nonlinear feedback loop fed pure digital silence has no energy to start
//! resonating, so each ladder injects a tiny amount of noise at its loop
//! input. Every ladder owns its generator: there is no global RNG state, and
//! two filters built from the same seed produce identical output.

use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg32;

use crate::sample::Sample;

/// Default seed used when a ladder is built without an explicit seed.
pub const DEFAULT_NOISE_SEED: u32 = 0x5eed_1add;

/// PCG32 stream for a 32-bit seed, mirrored into both halves of the 64-bit state seed.
pub fn create_rng(seed: u32) -> Pcg32 {
    let wide = u64::from(seed);
    Pcg32::seed_from_u64(wide << 32 | wide)
}

/// Seed for one voice of a polyphonic patch.
///
/// BLAKE3 of `base_seed ‖ voice_index` (little-endian), truncated to the
/// first four bytes, so adjacent voices get unrelated noise streams.
pub fn derive_voice_seed(base_seed: u32, voice_index: u32) -> u32 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&base_seed.to_le_bytes());
    hasher.update(&voice_index.to_le_bytes());
    let digest = hasher.finalize();
    let head = &digest.as_bytes()[..4];
    u32::from_le_bytes([head[0], head[1], head[2], head[3]])
}

/// Zero-mean Gaussian noise with standard deviation `amplitude`, drawn from
/// an owned PCG32 stream.
#[derive(Debug, Clone)]
pub struct NoiseSource<T: Sample> {
    rng: Pcg32,
    seed: u32,
    amplitude: T,
}

impl<T: Sample> NoiseSource<T> {
    /// Creates a noise source whose stream is fully determined by `seed`.
    ///
    /// # Arguments
    /// * `seed` - Seed for the PCG32 stream
    /// * `amplitude` - Standard deviation of the noise
    pub fn new(seed: u32, amplitude: T) -> Self {
        Self {
            rng: create_rng(seed),
            seed,
            amplitude,
        }
    }

    /// A source that always returns zero.
    pub fn silent() -> Self {
        Self::new(DEFAULT_NOISE_SEED, T::zero())
    }

    /// Draws the next noise sample.
    #[inline]
    pub fn sample(&mut self) -> T {
        if self.amplitude == T::zero() {
            return T::zero();
        }
        let z: f64 = StandardNormal.sample(&mut self.rng);
        T::lit(z) * self.amplitude
    }

    /// Rewinds the stream to its seed.
    pub fn reseed(&mut self) {
        self.rng = create_rng(self.seed);
    }

    /// Seed this source was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Standard deviation of the noise.
    pub fn amplitude(&self) -> T {
        self.amplitude
    }

    /// Sets the standard deviation of the noise.
    pub fn set_amplitude(&mut self, amplitude: T) {
        self.amplitude = amplitude;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let (mut a, mut b) = (create_rng(42), create_rng(42));
        let drawn: Vec<(u32, u32)> = (0..100).map(|_| (a.gen(), b.gen())).collect();
        assert!(drawn.iter().all(|(x, y)| x == y));
    }

    #[test]
    fn test_voice_seed_derivation() {
        assert_eq!(derive_voice_seed(42, 0), derive_voice_seed(42, 0));
        assert_ne!(derive_voice_seed(42, 0), derive_voice_seed(42, 1));
        assert_ne!(derive_voice_seed(42, 0), derive_voice_seed(43, 0));
    }

    #[test]
    fn test_noise_is_gaussian() {
        let sigma = 1e-3f64;
        let mut noise = NoiseSource::new(7, sigma);
        let draws: Vec<f64> = (0..20_000).map(|_| noise.sample()).collect();
        let n = draws.len() as f64;
        let mean = draws.iter().sum::<f64>() / n;
        let std = (draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert!(mean.abs() < 5e-5, "mean {}", mean);
        assert!((std / sigma - 1.0).abs() < 0.05, "std {}", std);

        // About 31.7% of a normal lies beyond one standard deviation.
        let tails = draws.iter().filter(|x| x.abs() > sigma).count() as f64 / n;
        assert!((0.28..0.36).contains(&tails), "tail fraction {}", tails);
    }

    #[test]
    fn test_noise_reseed_repeats() {
        let mut noise = NoiseSource::new(99, 0.5f32);
        let first: Vec<f32> = (0..16).map(|_| noise.sample()).collect();
        noise.reseed();
        let second: Vec<f32> = (0..16).map(|_| noise.sample()).collect();
        assert_eq!(first, second);
        assert!(first.iter().any(|x| *x != 0.0));
    }

    #[test]
    fn test_silent_source() {
        let mut noise = NoiseSource::<f64>::silent();
        assert!((0..100).all(|_| noise.sample() == 0.0));
    }
}
