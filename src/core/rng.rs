//! Randomness boundary for the engine.
//!
//! All randomness flows through the `RandomSource` trait: a single method
//! yielding a uniform `f64` in `[0, 1)`. Hosts may inject their own source
//! at match setup (any zero-argument closure works), while `GameRng` is
//! the seedable default.
//!
//! Deck shuffles and the opening seat flip are the only consumers of the
//! source, so two matches given the same source state and the same
//! submitted actions evolve identically.
//!
//! ```
//! use im::Vector;
//! use rosenkoenig::core::{shuffled, GameRng};
//!
//! let pile: Vector<i32> = (1..=6).collect();
//!
//! // A seeded source replays the same order.
//! let first = shuffled(&pile, &mut GameRng::new(42));
//! let second = shuffled(&pile, &mut GameRng::new(42));
//! assert_eq!(first, second);
//!
//! // Any zero-argument closure yielding [0, 1) works as a source.
//! let fixed = shuffled(&pile, &mut || 0.0);
//! assert_eq!(fixed.len(), 6);
//! ```

use im::Vector;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform randomness in `[0, 1)`.
///
/// The engine never asks for anything richer. Keeping the boundary this
/// narrow lets tests drive shuffles with plain closures and lets hosts
/// plug in whatever generator they already carry.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_uniform(&mut self) -> f64 {
        self()
    }
}

/// Seedable default random source.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness and exact
/// reproducibility across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for GameRng {
    fn next_uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Return a copy of `items` reordered by a Fisher-Yates pass.
///
/// Iterates from the last index down to 1, drawing one value from
/// `random` per swap, so a pile of n cards consumes n - 1 draws and
/// piles of length 0 or 1 consume none. The input is never modified.
pub fn shuffled<T, R>(items: &Vector<T>, random: &mut R) -> Vector<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut cards: Vec<T> = items.iter().cloned().collect();
    for last in (1..cards.len()).rev() {
        let chosen = ((random.next_uniform() * (last + 1) as f64) as usize).min(last);
        cards.swap(last, chosen);
    }
    cards.into_iter().collect()
}
