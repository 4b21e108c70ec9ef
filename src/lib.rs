// src/lib.rs

//! `qlab` - A small statevector simulator for interactive quantum circuits
//!
//! This library simulates circuits over a handful of qubits: it expands a
//! gate sequence into a full statevector, draws measurement shots from the
//! resulting distribution, and annotates each step with a synthetic
//! fidelity metric for visualization layers to render.

pub mod core;
pub mod gates;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod sampling;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{QlabError, QubitId, StateVector};
pub use crate::gates::{catalog, ControlledGate, GateKind, SingleQubitGate};
pub use crate::operations::Operation;
pub use crate::circuits::{Circuit, CircuitBuilder};
pub use crate::simulation::{step_fidelity, PerformanceRecord, SimulationResult, Simulator};
pub use crate::sampling::{Measurement, Sampler};
pub use crate::validation::{check_normalization, validate_circuit, ValidationIssue};

// Example 1: Bell state preparation
// Demonstrates building a two-qubit circuit, simulating it, and reading
// the entangled amplitudes back out.
/// ```
/// use qlab::{CircuitBuilder, QubitId, Simulator};
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// let q0 = QubitId(0);
/// let q1 = QubitId(1);
///
/// // H on q0, then CNOT entangling q0 and q1.
/// let circuit = CircuitBuilder::new().h(q0).cnot(q0, q1).build();
///
/// let simulator = Simulator::new();
/// match simulator.run(&circuit) {
///     Ok(result) => {
///         let amplitudes = result.statevector().amplitudes();
///         // (1/sqrt(2)) (|00> + |11>)
///         assert!((amplitudes[0].re - FRAC_1_SQRT_2).abs() < 1e-9);
///         assert!(amplitudes[1].norm() < 1e-9);
///         assert!(amplitudes[2].norm() < 1e-9);
///         assert!((amplitudes[3].re - FRAC_1_SQRT_2).abs() < 1e-9);
///     }
///     Err(e) => panic!("simulation failed: {}", e),
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Validation and measurement counts
// Demonstrates pre-flight validation and the fixed-shot sampler output.
/// ```
/// use qlab::{validate_circuit, CircuitBuilder, QubitId, Simulator};
///
/// let q0 = QubitId(0);
/// let circuit = CircuitBuilder::new().x(q0).build();
///
/// // A well-formed circuit validates cleanly.
/// assert!(validate_circuit(&circuit).is_empty());
///
/// let result = Simulator::new().run(&circuit).expect("simulation failed");
///
/// // X|0> = |1>, so all 1000 shots land on the same basis state.
/// let measurements = result.measurements();
/// assert_eq!(measurements.len(), 1);
/// assert_eq!(measurements[0].basis_state(), "|1⟩");
/// assert_eq!(measurements[0].count, 1000);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
