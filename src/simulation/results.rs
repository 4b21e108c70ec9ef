// src/simulation/results.rs

use crate::core::StateVector;
use crate::sampling::Measurement;
use crate::simulation::metrics::PerformanceRecord;
use std::fmt;

/// Everything a successful simulation run produces: the final
/// statevector, the sampled measurement counts, and the per-step
/// performance annotations.
///
/// Failed runs produce none of this — the error value is all the caller
/// gets, with no partial state.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    statevector: StateVector,
    measurements: Vec<Measurement>,
    performance: Vec<PerformanceRecord>,
}

impl SimulationResult {
    /// Packages a run's outputs. (Internal visibility)
    pub(crate) fn new(
        statevector: StateVector,
        measurements: Vec<Measurement>,
        performance: Vec<PerformanceRecord>,
    ) -> Self {
        Self { statevector, measurements, performance }
    }

    /// The final normalized statevector.
    pub fn statevector(&self) -> &StateVector {
        &self.statevector
    }

    /// Sampled measurement counts, sorted by basis index; only states
    /// that received at least one shot appear.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// One performance record per applied operation, in circuit order.
    pub fn performance(&self) -> &[PerformanceRecord] {
        &self.performance
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final State Vector:")?;
        for (index, amplitude) in self.statevector.amplitudes().iter().enumerate() {
            writeln!(
                f,
                "  {}  {:.4}{:+.4}i",
                self.statevector.basis_label(index),
                amplitude.re,
                amplitude.im
            )?;
        }

        let total_shots: usize = self.measurements.iter().map(|m| m.count).sum();
        writeln!(f, "Measurement Results ({} shots):", total_shots)?;
        for measurement in &self.measurements {
            writeln!(
                f,
                "  {}  {}/{}  ({:.4})",
                measurement.basis_state(),
                measurement.count,
                total_shots,
                measurement.probability
            )?;
        }

        if !self.performance.is_empty() {
            writeln!(f, "Step Metrics:")?;
            for record in &self.performance {
                match record.control {
                    Some(control) => writeln!(
                        f,
                        "  step {}: {} {} -> {}  fidelity {:.4}",
                        record.step, record.gate, control, record.target, record.fidelity
                    )?,
                    None => writeln!(
                        f,
                        "  step {}: {} on {}  fidelity {:.4}",
                        record.step, record.gate, record.target, record.fidelity
                    )?,
                }
            }
        }
        Ok(())
    }
}
