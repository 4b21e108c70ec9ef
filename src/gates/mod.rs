// src/gates/mod.rs

//! The fixed gate set and its unitary matrix definitions.
//!
//! Six gates are supported: the single-qubit H, X, Y, Z and the two-qubit
//! controlled CNOT and CZ. Single-qubit gates carry their 2×2 unitary
//! directly; controlled gates expose the 2×2 applied to the target when
//! the control bit is 1, which the engine lifts to the full controlled
//! unitary.

use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// A gate acting on one qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleQubitGate {
    /// Hadamard.
    H,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl SingleQubitGate {
    /// The 2×2 unitary matrix, row-major over the {|0⟩, |1⟩} basis.
    pub fn matrix(self) -> [[Complex<f64>; 2]; 2] {
        let one = Complex::new(1.0, 0.0);
        let i = Complex::i();
        match self {
            SingleQubitGate::H => {
                let h = Complex::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            SingleQubitGate::X => [[Complex::zero(), one], [one, Complex::zero()]],
            SingleQubitGate::Y => [[Complex::zero(), -i], [i, Complex::zero()]],
            SingleQubitGate::Z => [[one, Complex::zero()], [Complex::zero(), -one]],
        }
    }
}

/// A gate acting on a control/target qubit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlledGate {
    /// Controlled-NOT: flips the target when the control bit is 1.
    Cnot,
    /// Controlled-Z: negates the amplitude when both bits are 1.
    Cz,
}

impl ControlledGate {
    /// The 2×2 unitary applied to the target qubit when the control bit
    /// is 1 (X for CNOT, Z for CZ).
    pub fn target_matrix(self) -> [[Complex<f64>; 2]; 2] {
        match self {
            ControlledGate::Cnot => SingleQubitGate::X.matrix(),
            ControlledGate::Cz => SingleQubitGate::Z.matrix(),
        }
    }
}

/// The flat catalog of every supported gate kind, used for gate listings,
/// performance records and the untyped operation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Hadamard.
    H,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Controlled-NOT.
    Cnot,
    /// Controlled-Z.
    Cz,
}

impl GateKind {
    /// Every supported gate, in catalog order.
    pub const ALL: [GateKind; 6] = [
        GateKind::H,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::Cnot,
        GateKind::Cz,
    ];

    /// Human-readable description for UI gate pickers.
    pub fn description(self) -> &'static str {
        match self {
            GateKind::H => "Hadamard Gate - Creates superposition",
            GateKind::X => "Pauli-X Gate - Bit flip",
            GateKind::Y => "Pauli-Y Gate - Combined bit and phase flip",
            GateKind::Z => "Pauli-Z Gate - Phase flip",
            GateKind::Cnot => "Controlled-NOT Gate - Two-qubit controlled bit flip",
            GateKind::Cz => "Controlled-Z Gate - Two-qubit controlled phase flip",
        }
    }

    /// Whether this kind takes a control qubit.
    pub fn requires_control(self) -> bool {
        matches!(self, GateKind::Cnot | GateKind::Cz)
    }

    /// Short symbol, used by circuit diagrams and error messages.
    pub fn symbol(self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::Cnot => "CNOT",
            GateKind::Cz => "CZ",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<SingleQubitGate> for GateKind {
    fn from(gate: SingleQubitGate) -> Self {
        match gate {
            SingleQubitGate::H => GateKind::H,
            SingleQubitGate::X => GateKind::X,
            SingleQubitGate::Y => GateKind::Y,
            SingleQubitGate::Z => GateKind::Z,
        }
    }
}

impl From<ControlledGate> for GateKind {
    fn from(gate: ControlledGate) -> Self {
        match gate {
            ControlledGate::Cnot => GateKind::Cnot,
            ControlledGate::Cz => GateKind::Cz,
        }
    }
}

/// Ordered `(kind, description)` listing of every supported gate.
pub fn catalog() -> impl Iterator<Item = (GateKind, &'static str)> {
    GateKind::ALL.into_iter().map(|kind| (kind, kind.description()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// U · U† should be the identity for every single-qubit matrix.
    fn assert_unitary(m: [[Complex<f64>; 2]; 2]) {
        for row in 0..2 {
            for col in 0..2 {
                let mut acc: Complex<f64> = Complex::zero();
                for k in 0..2 {
                    acc += m[row][k] * m[col][k].conj();
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!(
                    (acc - Complex::new(expected, 0.0)).norm() < 1e-12,
                    "U·U† mismatch at ({row},{col}): {acc}"
                );
            }
        }
    }

    #[test]
    fn single_qubit_matrices_are_unitary() {
        for gate in [
            SingleQubitGate::H,
            SingleQubitGate::X,
            SingleQubitGate::Y,
            SingleQubitGate::Z,
        ] {
            assert_unitary(gate.matrix());
        }
    }

    #[test]
    fn controlled_target_matrices_are_pauli() {
        assert_eq!(ControlledGate::Cnot.target_matrix(), SingleQubitGate::X.matrix());
        assert_eq!(ControlledGate::Cz.target_matrix(), SingleQubitGate::Z.matrix());
    }

    #[test]
    fn catalog_lists_all_six_gates_in_order() {
        let listing: Vec<_> = catalog().collect();
        assert_eq!(listing.len(), 6);
        assert_eq!(listing[0].0, GateKind::H);
        assert_eq!(listing[4].0, GateKind::Cnot);
        assert!(listing[0].1.contains("superposition"));
    }

    #[test]
    fn control_requirement_matches_arity() {
        assert!(GateKind::Cnot.requires_control());
        assert!(GateKind::Cz.requires_control());
        assert!(!GateKind::H.requires_control());
    }
}
