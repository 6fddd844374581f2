//! Random number source used when spawning particles.
//!
//! Spawning code is generic over [`RandomSource`] so tests can drive it with a
//! seeded or scripted generator. The running app keeps a [`SpawnRng`]
//! resource wrapping [`fastrand::Rng`], seeded from the config when a seed is
//! set.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

/// Uniform random draws needed by the spawners.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_f32(&mut self) -> f32;
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl RandomSource for Rng {
    fn next_f32(&mut self) -> f32 {
        self.f32()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.usize(0..len)
    }
}

/// Sample a random f32 in the range [min, max).
/// If the range is smaller than EPSILON, returns min directly.
#[inline]
pub fn random_f32_range<R: RandomSource + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.next_f32() * range
}

/// Generator resource used by the increment observer.
#[derive(Resource, Debug, Clone)]
pub struct SpawnRng(pub Rng);

impl SpawnRng {
    /// Seeded generator when `seed` is set, otherwise seeded from the OS.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => SpawnRng(Rng::with_seed(s)),
            None => SpawnRng(Rng::new()),
        }
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        SpawnRng(Rng::new())
    }
}
