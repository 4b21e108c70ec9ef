// src/operations/mod.rs

//! Defines the operations a circuit is built from.
//!
//! An operation names a gate and the wire(s) it acts on. The split into
//! single-qubit and controlled variants makes "a two-qubit gate needs a
//! control" a structural fact rather than a runtime check; the only
//! invariant left to validation is that control and target differ.

// Import necessary types from the core module
use crate::core::{QlabError, QubitId};
use crate::gates::{ControlledGate, GateKind, SingleQubitGate};

/// A single step of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// A single-qubit gate applied to `target`.
    Gate {
        /// Which gate to apply.
        gate: SingleQubitGate,
        /// The qubit the gate acts on.
        target: QubitId,
    },

    /// A controlled two-qubit gate. The `target` transform fires only on
    /// basis states where the `control` bit is 1.
    Controlled {
        /// Which controlled gate to apply.
        gate: ControlledGate,
        /// The qubit whose value gates the interaction.
        control: QubitId,
        /// The qubit that is potentially transformed.
        target: QubitId,
    },
}

impl Operation {
    /// Builds an operation from an untyped `{gate, target, control?}`
    /// record, the shape UI layers assemble from user input. `step` is
    /// the record's 1-indexed position, used in error reporting.
    pub fn from_parts(
        step: usize,
        kind: GateKind,
        target: QubitId,
        control: Option<QubitId>,
    ) -> Result<Self, QlabError> {
        match kind {
            GateKind::H | GateKind::X | GateKind::Y | GateKind::Z => {
                if control.is_some() {
                    return Err(QlabError::InvalidOperation {
                        step,
                        reason: format!("{} acts on a single qubit and takes no control", kind),
                    });
                }
                let gate = match kind {
                    GateKind::H => SingleQubitGate::H,
                    GateKind::X => SingleQubitGate::X,
                    GateKind::Y => SingleQubitGate::Y,
                    GateKind::Z => SingleQubitGate::Z,
                    _ => unreachable!(),
                };
                Ok(Operation::Gate { gate, target })
            }
            GateKind::Cnot | GateKind::Cz => {
                let control = control.ok_or_else(|| QlabError::InvalidOperation {
                    step,
                    reason: format!("{} requires a control qubit", kind),
                })?;
                if control == target {
                    return Err(QlabError::InvalidOperation {
                        step,
                        reason: format!(
                            "control and target qubits must be distinct (both {})",
                            control
                        ),
                    });
                }
                let gate = match kind {
                    GateKind::Cnot => ControlledGate::Cnot,
                    GateKind::Cz => ControlledGate::Cz,
                    _ => unreachable!(),
                };
                Ok(Operation::Controlled { gate, control, target })
            }
        }
    }

    /// The catalog kind of this operation's gate.
    pub fn gate_kind(&self) -> GateKind {
        match self {
            Operation::Gate { gate, .. } => (*gate).into(),
            Operation::Controlled { gate, .. } => (*gate).into(),
        }
    }

    /// The qubit the gate transforms.
    pub fn target(&self) -> QubitId {
        match self {
            Operation::Gate { target, .. } => *target,
            Operation::Controlled { target, .. } => *target,
        }
    }

    /// The control qubit, for controlled operations.
    pub fn control(&self) -> Option<QubitId> {
        match self {
            Operation::Gate { .. } => None,
            Operation::Controlled { control, .. } => Some(*control),
        }
    }

    /// Returns a list of all qubit IDs directly mentioned in the
    /// operation's parameters. This is what lets the circuit derive its
    /// register size from the operations alone.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Gate { target, .. } => vec![*target],
            Operation::Controlled { control, target, .. } => vec![*control, *target],
        }
    }
}
