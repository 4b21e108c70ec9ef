// src/validation/mod.rs

//! Pre-flight circuit validation and statevector checks.
//!
//! Circuit validation is side-effect-free and independent of simulation,
//! so UI layers can surface problems while the user is still editing.
//! Gate arity problems (a CNOT with no control, a stray control on a
//! Hadamard) are unrepresentable in [`Operation`] and are caught earlier,
//! at the [`Operation::from_parts`] boundary.

use crate::circuits::Circuit;
use crate::core::{QlabError, StateVector, MAX_QUBITS, NORM_TOLERANCE};
use crate::operations::Operation;
use std::fmt;

/// One problem found while validating a circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// 1-indexed position of the offending operation, or `None` for
    /// circuit-level problems.
    pub step: Option<usize>,
    /// Human-readable description of the problem.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step {
            Some(step) => write!(f, "Operation #{}: {}", step, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Checks a circuit without simulating it, returning every problem found
/// (empty when the circuit is valid). Calling it twice on the same
/// circuit returns the same list.
pub fn validate_circuit(circuit: &Circuit) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if circuit.is_empty() {
        issues.push(ValidationIssue {
            step: None,
            message: "circuit is empty; add at least one gate".to_string(),
        });
        return issues;
    }

    for (index, op) in circuit.operations().iter().enumerate() {
        let step = index + 1;

        if let Operation::Controlled { control, target, .. } = op {
            if control == target {
                issues.push(ValidationIssue {
                    step: Some(step),
                    message: format!(
                        "control and target qubits must be distinct (both {})",
                        control
                    ),
                });
            }
        }

        for qubit in op.involved_qubits() {
            if qubit.index() >= MAX_QUBITS {
                issues.push(ValidationIssue {
                    step: Some(step),
                    message: format!(
                        "{} exceeds the {}-qubit simulator capacity",
                        qubit, MAX_QUBITS
                    ),
                });
            }
        }
    }

    issues
}

/// Checks that the state vector is normalized (sum of squared amplitudes
/// ≈ 1.0).
///
/// # Arguments
/// * `state` - The statevector to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to the
///   simulator's own tolerance.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QlabError::NumericalDrift)` carrying the measured norm.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QlabError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq: f64 = state.amplitudes().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QlabError::NumericalDrift { norm: norm_sq.sqrt() })
    } else {
        Ok(())
    }
}
