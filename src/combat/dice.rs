//! Random sources for dice rolls
//!
//! Every roll goes through [`RandomSource`] so callers decide where entropy
//! comes from. Any `rand::Rng` works directly (seed a `ChaCha8Rng` for
//! reproducible runs); [`ScriptedDice`] replays fixed values in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::constants::DIE_FACES;

/// Something that can draw uniform integers
pub trait RandomSource {
    /// Draw a uniform integer in `low..=high`
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

/// Deterministic source that cycles through a fixed list of values
///
/// Values outside the requested range are clamped into it. An empty
/// script always yields the low end of the range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedDice {
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.max(low).min(high)
    }
}

/// Independent generator for one unit of parallel work
///
/// Every `(seed, stream)` pair yields its own reproducible sequence, so
/// work split across threads gives the same results in any order.
pub fn seeded_stream(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Roll a single six-sided die
pub fn roll_die<S: RandomSource + ?Sized>(source: &mut S) -> u8 {
    source.uniform_inclusive(1, DIE_FACES) as u8
}

/// Roll `count` dice and return them highest first
pub fn roll_sorted<S: RandomSource + ?Sized>(source: &mut S, count: u32) -> Vec<u8> {
    let mut rolls: Vec<u8> = (0..count).map(|_| roll_die(&mut *source)).collect();
    rolls.sort_unstable_by(|a, b| b.cmp(a));
    rolls
}
