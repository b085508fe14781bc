//! Random sources for tie-breaks and chaotic seeding.
//!
//! The simulation runs on a seeded `ChaCha8` stream so a given seed replays
//! the same run on every platform. `ScriptedRng` replays a fixed list of
//! values instead, which lets tests pin exactly which tie-breaks go left.

use rand::{Error, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The generator a [`crate::Simulation`] owns.
pub type SimRng = ChaCha8Rng;

#[must_use]
pub fn seeded(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays `values` in order (cycling), counting every draw.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
    draws: usize,
}

impl ScriptedRng {
    /// # Panics
    /// If `values` is empty.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "ScriptedRng needs at least one value");
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// Every draw returns the same value.
    #[must_use]
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of `u32` draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.draws += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
