//! Numeric constants shared across the simulator.

/// Measurement shots drawn per simulation run.
pub const DEFAULT_SHOTS: usize = 1000;

/// Defensive upper bound on the derived qubit count. State size is `2^n`,
/// so anything past this turns an interactive tool into a memory hog.
pub const MAX_QUBITS: usize = 10;

/// Allowed deviation of the statevector norm from 1.0 before the
/// simulator rescales the amplitudes.
pub const NORM_TOLERANCE: f64 = 1e-7;
