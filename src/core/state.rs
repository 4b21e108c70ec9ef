// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// The full statevector of an `n`-qubit register.
///
/// Amplitudes are indexed by basis-state integer. Bit `i` of an index,
/// counted from the most-significant side of the `n`-bit word, holds
/// qubit `i`'s classical value — so qubit 0 is the leftmost character of
/// a formatted bitstring.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl StateVector {
    /// Creates the all-zero basis state |0…0⟩ for `num_qubits` qubits.
    pub(crate) fn new(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self { amplitudes, num_qubits }
    }

    /// Wraps a raw amplitude vector. The caller guarantees
    /// `amplitudes.len() == 2^num_qubits`.
    #[cfg(test)]
    pub(crate) fn from_amplitudes(num_qubits: usize, amplitudes: Vec<Complex<f64>>) -> Self {
        debug_assert_eq!(amplitudes.len(), 1usize << num_qubits);
        Self { amplitudes, num_qubits }
    }

    /// Number of qubits the vector describes.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the vector (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Mutable access for the simulation engine.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// The Euclidean norm `sqrt(sum |amplitude|^2)`.
    pub fn norm(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Per-basis-state probabilities `|amplitude|^2`.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Rescales the amplitudes when the norm has drifted from 1.0 beyond
    /// `tolerance`. Returns whether a rescale happened.
    pub(crate) fn renormalize(&mut self, tolerance: f64) -> bool {
        let norm = self.norm();
        if (norm - 1.0).abs() <= tolerance || norm == 0.0 {
            return false;
        }
        for amplitude in &mut self.amplitudes {
            *amplitude /= norm;
        }
        true
    }

    /// Ket label for a basis index, e.g. `|010⟩` for index 2 of a
    /// three-qubit register.
    pub fn basis_label(&self, index: usize) -> String {
        format!("|{:0width$b}⟩", index, width = self.num_qubits)
    }

    /// Bloch-sphere coordinates `(x, y, z)` of a single-qubit state.
    /// Returns `None` for multi-qubit registers, where a single Bloch
    /// vector no longer captures the state.
    pub fn bloch_vector(&self) -> Option<(f64, f64, f64)> {
        if self.num_qubits != 1 {
            return None;
        }
        let a = self.amplitudes[0];
        let b = self.amplitudes[1];
        let cross = a.conj() * b;
        Some((2.0 * cross.re, 2.0 * cross.im, a.norm_sqr() - b.norm_sqr()))
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, amplitude) in self.amplitudes.iter().enumerate() {
            writeln!(
                f,
                "{}  {:.4}{:+.4}i",
                self.basis_label(index),
                amplitude.re,
                amplitude.im
            )?;
        }
        Ok(())
    }
}
