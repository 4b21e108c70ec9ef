// src/sampling/mod.rs

//! Draws measurement shots from the probability distribution implied by a
//! statevector.
//!
//! The RNG is seeded from a hash of the amplitude bytes, so identical
//! states always produce identical counts — runs are reproducible without
//! threading a seed through the public API.

use crate::core::{StateVector, DEFAULT_SHOTS};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Counts for one basis state that received at least one shot.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Zero-padded binary label of the basis state, qubit 0 leftmost.
    pub bitstring: String,
    /// Number of shots that landed on this state.
    pub count: usize,
    /// `count / shots`.
    pub probability: f64,
}

impl Measurement {
    /// Ket-style display string, e.g. `|010⟩`.
    pub fn basis_state(&self) -> String {
        format!("|{}⟩", self.bitstring)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({:.4})", self.basis_state(), self.count, self.probability)
    }
}

/// Draws a fixed number of categorical samples from a statevector.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    shots: usize,
}

impl Sampler {
    /// A sampler drawing the default shot count (1000).
    pub fn new() -> Self {
        Self { shots: DEFAULT_SHOTS }
    }

    /// A sampler drawing a custom shot count.
    pub fn with_shots(shots: usize) -> Self {
        Self { shots }
    }

    /// The configured shot count.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Draws `shots` independent samples from `|amplitude|^2` and tallies
    /// them per basis state, sorted by basis index. Counts always sum to
    /// the shot count; states that never came up are omitted.
    pub fn sample(&self, state: &StateVector) -> Vec<Measurement> {
        let probabilities = state.probabilities();
        let mut rng = StdRng::seed_from_u64(state_seed(state));
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();

        for _ in 0..self.shots {
            let sample_point: f64 = rng.random();
            let mut cumulative = 0.0;
            // Fall back to the last index if float accumulation leaves the
            // sample point above the cumulative total.
            let mut outcome = probabilities.len() - 1;
            for (index, probability) in probabilities.iter().enumerate() {
                cumulative += probability;
                if sample_point < cumulative {
                    outcome = index;
                    break;
                }
            }
            *counts.entry(outcome).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(index, count)| Measurement {
                bitstring: format!("{:0width$b}", index, width = state.num_qubits()),
                count,
                probability: count as f64 / self.shots as f64,
            })
            .collect()
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic per-state seed derived from the amplitude bytes.
fn state_seed(state: &StateVector) -> u64 {
    let mut hasher = DefaultHasher::new();
    for amplitude in state.amplitudes() {
        amplitude.re.to_ne_bytes().hash(&mut hasher);
        amplitude.im.to_ne_bytes().hash(&mut hasher);
    }
    hasher.finish()
}
