//! Random stream plumbing.
//!
//! The generator is always passed explicitly; nothing in the engine reaches
//! for a global. One seeded ChaCha stream drives a whole run.
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Construct the process-wide stream for a run.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl<R: rand::RngCore> CountingRng<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

/// Replays a fixed list of unit-interval draws; panics once exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    values: std::collections::VecDeque<u64>,
    pub(crate) calls: u32,
}

#[cfg(test)]
impl ScriptedRng {
    /// Each value must be a dyadic fraction (k / 2^53) in [0, 1) to replay exactly.
    pub(crate) fn new(draws: &[f64]) -> Self {
        let scale = (1_u64 << 53) as f64;
        let values = draws
            .iter()
            .map(|&v| ((v * scale) as u64) << 11)
            .collect();
        Self { values, calls: 0 }
    }
}

#[cfg(test)]
impl rand::RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.calls = self.calls.saturating_add(1);
        self.values.pop_front().expect("scripted draws exhausted")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let value = self.next_u64().to_le_bytes();
        for (idx, byte) in dest.iter_mut().enumerate() {
            *byte = value[idx % value.len()];
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
