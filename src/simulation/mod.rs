// src/simulation/mod.rs

//! Simulates the execution of `qlab::circuits::Circuit` over a full
//! statevector. This module contains the `Simulator` entry point, the
//! internal `SimulationEngine` responsible for evolving the state, and
//! the per-step performance annotations.

mod engine;
mod metrics;
mod results;

// Re-export the main public interface types
pub use metrics::{step_fidelity, PerformanceRecord};
pub use results::SimulationResult;

use crate::circuits::Circuit;
use crate::core::{QlabError, MAX_QUBITS};
use crate::sampling::Sampler;
use engine::SimulationEngine;
use std::time::Instant;

/// The main simulator orchestrating the execution of circuits.
///
/// The simulator itself is stateless: every [`run`](Simulator::run)
/// builds a fresh statevector and performance log and returns them in the
/// result, so a single instance can serve concurrent sessions.
#[derive(Debug, Default)]
pub struct Simulator {}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a simulation of the provided circuit.
    ///
    /// The register size is derived from the highest qubit index the
    /// circuit references (minimum 1, capped at `MAX_QUBITS`). Operations
    /// are applied in circuit order, each one timed and annotated with
    /// its synthetic fidelity; the final statevector is rescaled if
    /// floating-point drift pushed its norm off 1.0, then sampled for
    /// measurement counts.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the statevector, measurements and
    ///   per-step performance records.
    /// * `Err(QlabError)` naming the offending operation if any step is
    ///   invalid; no partial results are returned.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult, QlabError> {
        let num_qubits = circuit.qubit_count();
        if num_qubits > MAX_QUBITS {
            return Err(QlabError::CapacityExceeded {
                required: num_qubits,
                limit: MAX_QUBITS,
            });
        }

        let mut engine = SimulationEngine::new(num_qubits)?;
        let mut performance = Vec::with_capacity(circuit.len());

        for (index, op) in circuit.operations().iter().enumerate() {
            let started = Instant::now();
            // Fail fast: the first bad step aborts the run, and the
            // performance log accumulated so far is discarded with it.
            engine.apply_operation(index + 1, op)?;
            performance.push(PerformanceRecord {
                step: index,
                gate: op.gate_kind(),
                duration: started.elapsed(),
                fidelity: step_fidelity(op.gate_kind(), index),
                target: op.target(),
                control: op.control(),
            });
        }

        engine.renormalize();
        let statevector = engine.into_state();
        let measurements = Sampler::new().sample(&statevector);
        Ok(SimulationResult::new(statevector, measurements, performance))
    }
}
