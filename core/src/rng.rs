//! Deterministic random number generation.
//!
//! RULE: Nothing in the study may call any platform RNG.
//! All randomness flows through StudyRng instances derived
//! from the single seed on the StudyConfig.
//!
//! Each stream is seeded from (seed XOR stream_index * golden). This means:
//!   - Changing the scenario weights never changes the noise sequence.
//!   - Each stream is fully reproducible in isolation.

use crate::types::Seed;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single stream.
pub struct StudyRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StudyRng {
    /// Create a stream RNG from the study seed and a stable
    /// stream index. The index must never change once assigned.
    pub fn new(seed: Seed, stream_index: u64) -> Self {
        let derived_seed = seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a float in [low, high).
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Pick an index with probability proportional to its weight.
    /// Weights need not sum to one. Returns None for an empty or
    /// all-zero slice.
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().sum();
        if weights.is_empty() || total <= 0.0 {
            return None;
        }
        let roll = self.next_f64() * total;
        let mut cumulative = 0.0;
        for (i, w) in weights.iter().enumerate() {
            cumulative += w;
            if roll < cumulative {
                return Some(i);
            }
        }
        // Float rounding can leave roll == total.
        weights.iter().rposition(|w| *w > 0.0)
    }
}

/// All stream RNGs for a single study, indexed by stable slot.
pub struct RngBank {
    seed: Seed,
}

impl RngBank {
    pub fn new(seed: Seed) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn for_stream(&self, slot: StreamSlot) -> StudyRng {
        StudyRng::new(self.seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    ScenarioDraw = 0,
    PriceNoise = 1,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ScenarioDraw => "scenario_draw",
            Self::PriceNoise => "price_noise",
        }
    }
}
