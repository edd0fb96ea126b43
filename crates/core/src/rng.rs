//! RNG module - injectable, seedable randomness
//!
//! Every random decision the engine makes (initial fill, refill after gravity,
//! reshuffle) goes through a [`RandomSource`], so tests and replays are
//! deterministic. [`SimpleRng`] is the default source.

use crate::types::PieceType;

/// Source of uniform random numbers.
///
/// Implementors only provide [`next_u32`](RandomSource::next_u32); ranged draws
/// and shuffling are derived from it.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`. `max` must be non-zero.
    ///
    /// Uses the high bits of the raw value (multiply-shift reduction), which are
    /// the well-distributed bits of an LCG.
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range requires a non-empty range");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates: for `i` from the last index down to 1,
    /// swap with a uniform index in `[0, i]`.
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Uniform pick from the configured piece set.
    fn pick_piece(&mut self, kinds: &[PieceType]) -> PieceType {
        kinds[self.next_range(kinds.len() as u32) as usize]
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
