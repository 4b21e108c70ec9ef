// src/simulation/engine.rs

use crate::core::{QlabError, QubitId, StateVector, NORM_TOLERANCE};
use crate::operations::Operation;
use num_complex::Complex;
use num_traits::Zero;

/// The core engine that evolves a statevector through a sequence of gate
/// operations. One engine is constructed per simulation run and dropped
/// with it; nothing carries over between calls. (Internal visibility)
pub(crate) struct SimulationEngine {
    /// The global statevector over all qubits in the register.
    state: StateVector,
}

impl SimulationEngine {
    /// Initializes the engine with the register in |0…0⟩.
    ///
    /// The simulator enforces the interactive qubit cap before calling
    /// this; the shift-width guard here only protects against an absurd
    /// count reaching the engine through some future path.
    pub(crate) fn new(num_qubits: usize) -> Result<Self, QlabError> {
        if num_qubits as u32 >= usize::BITS {
            return Err(QlabError::SimulationError {
                message: format!("state dimension 2^{} overflows usize", num_qubits),
            });
        }
        Ok(Self { state: StateVector::new(num_qubits) })
    }

    /// Applies one operation to the statevector. `step` is the
    /// operation's 1-indexed position, used in error reporting.
    pub(crate) fn apply_operation(&mut self, step: usize, op: &Operation) -> Result<(), QlabError> {
        match op {
            Operation::Gate { gate, target } => {
                let target_bit = self.bit_position(*target)?;
                self.apply_single_qubit(target_bit, &gate.matrix());
            }
            Operation::Controlled { gate, control, target } => {
                if control == target {
                    return Err(QlabError::InvalidOperation {
                        step,
                        reason: format!(
                            "control and target qubits must be distinct (both {})",
                            control
                        ),
                    });
                }
                let control_bit = self.bit_position(*control)?;
                let target_bit = self.bit_position(*target)?;

                // Lift the 2x2 target transform to the controlled 4x4:
                // identity on the control-0 block, U on the control-1 block.
                // Basis order: |control, target> -> |00>, |01>, |10>, |11>.
                let u = gate.target_matrix();
                let one = Complex::new(1.0, 0.0);
                let controlled_u: [[Complex<f64>; 4]; 4] = [
                    [one, Complex::zero(), Complex::zero(), Complex::zero()],
                    [Complex::zero(), one, Complex::zero(), Complex::zero()],
                    [Complex::zero(), Complex::zero(), u[0][0], u[0][1]],
                    [Complex::zero(), Complex::zero(), u[1][0], u[1][1]],
                ];
                self.apply_two_qubit(control_bit, target_bit, &controlled_u);
            }
        }
        Ok(())
    }

    /// Rescales the statevector if floating-point drift pushed its norm
    /// off 1.0. Returns whether a rescale was needed.
    pub(crate) fn renormalize(&mut self) -> bool {
        self.state.renormalize(NORM_TOLERANCE)
    }

    /// Consumes the engine, yielding the final statevector.
    pub(crate) fn into_state(self) -> StateVector {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    /// Maps a qubit index to its bit position in the basis index
    /// (qubit 0 occupies the most significant bit).
    fn bit_position(&self, qubit: QubitId) -> Result<usize, QlabError> {
        let n = self.state.num_qubits();
        if qubit.index() >= n {
            // The register is sized from the circuit itself, so this is an
            // internal inconsistency rather than a user error.
            return Err(QlabError::SimulationError {
                message: format!("{} is outside the {}-qubit register", qubit, n),
            });
        }
        Ok(n - 1 - qubit.index())
    }

    /// Applies a 2x2 matrix to the target qubit: for every pair of basis
    /// indices differing only in the target bit, replace the two
    /// amplitudes by the matrix-vector product with the current pair.
    fn apply_single_qubit(&mut self, target_bit: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let mask = 1usize << target_bit;
        let dim = self.state.dim();
        let amplitudes = self.state.amplitudes_mut();

        for i0 in 0..dim {
            if i0 & mask != 0 {
                continue;
            }
            let i1 = i0 | mask;
            let psi_0 = amplitudes[i0];
            let psi_1 = amplitudes[i1];
            amplitudes[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            amplitudes[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }
    }

    /// Applies a 4x4 matrix over the two-qubit subspace spanned by the
    /// control and target bits, iterating every assignment of the
    /// remaining qubits.
    fn apply_two_qubit(
        &mut self,
        control_bit: usize,
        target_bit: usize,
        matrix: &[[Complex<f64>; 4]; 4],
    ) {
        let c_mask = 1usize << control_bit;
        let t_mask = 1usize << target_bit;
        let dim = self.state.dim();
        let amplitudes = self.state.amplitudes_mut();

        for base in 0..dim {
            if base & (c_mask | t_mask) != 0 {
                continue;
            }
            // Subspace indices in |control, target> order: 00, 01, 10, 11.
            let indices = [base, base | t_mask, base | c_mask, base | c_mask | t_mask];
            let psi = [
                amplitudes[indices[0]],
                amplitudes[indices[1]],
                amplitudes[indices[2]],
                amplitudes[indices[3]],
            ];
            for (row, &index) in indices.iter().enumerate() {
                let mut value = Complex::zero();
                for (col, amp) in psi.iter().enumerate() {
                    value += matrix[row][col] * *amp;
                }
                amplitudes[index] = value;
            }
        }
    }
}
