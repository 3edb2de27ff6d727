// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

/// Stream of canonical samples in [0, 1). A sampler never runs dry;
/// reseeding restarts the stream.
pub trait Sampler {
    fn next_1d(&mut self) -> Float;

    fn next_2d(&mut self) -> Vector2f {
        let u = self.next_1d();
        let v = self.next_1d();
        Vector2f::new(u, v)
    }

    fn reseed(&mut self, seed: u64);
}

pub struct RandomSampler {
    rng: Xoshiro256Plus,
    draws: u64,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256Plus::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Number of values drawn since the last reseed.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Sampler for RandomSampler {
    fn next_1d(&mut self) -> Float {
        self.draws += 1;
        self.rng.gen::<Float>()
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = Xoshiro256Plus::seed_from_u64(seed);
        self.draws = 0;
    }
}

// SplitMix64 finalizer. A bijection on u64.
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed of the stream used for one pixel of one frame. Independent of the
/// order in which pixels are visited. Every input is hashed at full width:
/// with the other inputs fixed, distinct seeds, frames or pixels always give
/// distinct stream seeds.
pub fn pixel_seed(base_seed: u64, frame_num: u32, x: u32, y: u32) -> u64 {
    let frame_seed = mix64(mix64(base_seed) ^ frame_num as u64);
    mix64(frame_seed ^ (((y as u64) << 32) | x as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_canonical() {
        let mut sampler = RandomSampler::new(7);
        for _ in 0..10_000 {
            let u = sampler.next_1d();
            assert!((0.0..1.0).contains(&u));
        }
        assert_eq!(sampler.draws(), 10_000);
    }

    #[test]
    fn test_reseed_replays_stream() {
        let mut a = RandomSampler::new(pixel_seed(3, 11, 4, 5));
        let first: Vec<Float> = (0..8).map(|_| a.next_1d()).collect();
        a.reseed(pixel_seed(3, 11, 4, 5));
        assert_eq!(a.draws(), 0);
        let second: Vec<Float> = (0..8).map(|_| a.next_1d()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeds_differ_per_pixel_and_frame() {
        assert_ne!(pixel_seed(0, 0, 1, 0), pixel_seed(0, 0, 0, 1));
        assert_ne!(pixel_seed(0, 0, 1, 0), pixel_seed(0, 1, 1, 0));
    }

    #[test]
    fn test_seeds_use_every_input_bit() {
        // Inputs that only differ above the low bits.
        assert_ne!(pixel_seed(0, 0, 0, 0), pixel_seed(4096, 0, 0, 0));
        assert_ne!(pixel_seed(0, 0, 0, 0), pixel_seed(1 << 63, 0, 0, 0));
        assert_ne!(pixel_seed(0, 0, 0, 0), pixel_seed(0, 1 << 20, 0, 0));
        assert_ne!(pixel_seed(0, 0, 0, 0), pixel_seed(0, 0, 1 << 16, 0));
        assert_ne!(pixel_seed(0, 0, 0, 0), pixel_seed(0, 0, 0, 1 << 16));
        assert_ne!(pixel_seed(3, 7, 1, 0), pixel_seed(3, 7, 0, 1));
    }

    #[test]
    fn test_distinct_seeds_give_distinct_streams() {
        let stream = |seed: u64| -> Vec<Float> {
            let mut sampler = RandomSampler::new(seed);
            (0..4).map(|_| sampler.next_1d()).collect()
        };
        assert_ne!(stream(pixel_seed(0, 5, 2, 2)), stream(pixel_seed(4096, 5, 2, 2)));
        assert_ne!(stream(pixel_seed(0, 0, 2, 2)), stream(pixel_seed(0, 1 << 20, 2, 2)));
        assert_ne!(stream(pixel_seed(0, 0, 0, 0)), stream(pixel_seed(0, 0, 65536, 0)));
    }
}
