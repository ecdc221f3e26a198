//! Deterministic randomness and the tile-deck shuffling capability.
//!
//! The engine itself never draws random numbers during play. The only
//! randomness is the tile deck order at setup, which goes through the
//! [`Shuffler`] capability so tests can inject a fixed order.
//!
//! ```
//! use rust_citadel::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut x = vec![1, 2, 3, 4, 5, 6];
//! let mut y = x.clone();
//! a.shuffle_slice(&mut x);
//! b.shuffle_slice(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Tile;

/// Capability to order the tile deck at setup.
pub trait Shuffler {
    /// Reorder the tiles in place.
    fn shuffle_tiles(&mut self, tiles: &mut [Tile]);
}

/// Leaves the deck in its canonical order.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle_tiles(&mut self, _tiles: &mut [Tile]) {}
}

/// Seeded RNG.
///
/// Uses ChaCha8 so the same seed yields the same deck on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle_slice<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl Shuffler for GameRng {
    fn shuffle_tiles(&mut self, tiles: &mut [Tile]) {
        self.shuffle_slice(tiles);
    }
}
