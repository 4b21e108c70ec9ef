// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! operations (`qlab::operations::Operation`).
//!
//! A circuit is nothing more than its operation list: the register size
//! is derived from the highest qubit index any operation references, so
//! appending an operation on a new wire silently grows the system.

use crate::core::QubitId;
use crate::gates::{ControlledGate, GateKind, SingleQubitGate};
use crate::operations::Operation;
use std::fmt;

/// An ordered sequence of operations over an implicitly-sized register.
///
/// Sequence order is application order; gate operations do not commute in
/// general.
#[derive(Clone, PartialEq)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// The ordered sequence of operations defining the circuit's logic.
    operations: Vec<Operation>,
    /// Highest qubit index referenced so far, if any.
    highest_qubit: Option<usize>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            highest_qubit: None,
        }
    }

    /// Appends a single operation, growing the implied register if the
    /// operation references a new highest wire.
    pub fn add_operation(&mut self, op: Operation) {
        for qubit in op.involved_qubits() {
            let index = qubit.index();
            if self.highest_qubit.is_none_or(|highest| index > highest) {
                self.highest_qubit = Some(index);
            }
        }
        self.operations.push(op);
    }

    /// Appends multiple operations from an iterator.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// The derived register size: one past the highest referenced index,
    /// and never less than 1 — an empty circuit still describes a single
    /// qubit in |0⟩.
    pub fn qubit_count(&self) -> usize {
        self.highest_qubit.map_or(1, |highest| highest + 1)
    }

    /// The ordered operation sequence.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Total number of operations in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

// Implement Default for convenient creation of empty circuits.
impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances
/// using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Adds a single operation to the circuit being built.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Appends a Hadamard on `target`.
    pub fn h(self, target: QubitId) -> Self {
        self.add_op(Operation::Gate { gate: SingleQubitGate::H, target })
    }

    /// Appends a Pauli-X on `target`.
    pub fn x(self, target: QubitId) -> Self {
        self.add_op(Operation::Gate { gate: SingleQubitGate::X, target })
    }

    /// Appends a Pauli-Y on `target`.
    pub fn y(self, target: QubitId) -> Self {
        self.add_op(Operation::Gate { gate: SingleQubitGate::Y, target })
    }

    /// Appends a Pauli-Z on `target`.
    pub fn z(self, target: QubitId) -> Self {
        self.add_op(Operation::Gate { gate: SingleQubitGate::Z, target })
    }

    /// Appends a CNOT with the given control and target.
    pub fn cnot(self, control: QubitId, target: QubitId) -> Self {
        self.add_op(Operation::Controlled { gate: ControlledGate::Cnot, control, target })
    }

    /// Appends a CZ with the given control and target.
    pub fn cz(self, control: QubitId, target: QubitId) -> Self {
        self.add_op(Operation::Controlled { gate: ControlledGate::Cz, control, target })
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

// Implement Default for convenient creation of builders.
impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            return writeln!(f, "qlab::Circuit[0 operations on 0 qubits]");
        }

        let num_ops = self.operations.len();
        let num_qubits = self.qubit_count();

        // Grid dimensions and padding
        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────"; // GATE_WIDTH dashes
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][time] stores the gate/wire segment string;
        // v_connect[row][time] stores the vertical connector char below row.
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        // Helper to center a gate symbol within its wire segment.
        fn format_gate(symbol: &str) -> String {
            let len = symbol.chars().count();
            if len >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - len;
                let pre = total_dashes / 2;
                let post = total_dashes - pre;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre),
                    symbol,
                    H_WIRE.to_string().repeat(post)
                )
            }
        }

        for (t, op) in self.operations.iter().enumerate() {
            match op {
                Operation::Gate { gate, target } => {
                    op_grid[target.index()][t] = format_gate(GateKind::from(*gate).symbol());
                }
                Operation::Controlled { gate, control, target } => {
                    let target_symbol = match gate {
                        ControlledGate::Cnot => "X",
                        ControlledGate::Cz => "●",
                    };
                    op_grid[control.index()][t] = format_gate("@");
                    op_grid[target.index()][t] = format_gate(target_symbol);

                    let r_min = control.index().min(target.index());
                    let r_max = control.index().max(target.index());
                    for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                        row_vec[t] = V_WIRE;
                    }
                }
            }
        }

        let max_label_width = format!("q{}", num_qubits - 1).len();
        let label_padding = " ".repeat(max_label_width + 2);

        writeln!(f, "qlab::Circuit[{} operations on {} qubits]", num_ops, num_qubits)?;
        for r in 0..num_qubits {
            let label = format!("q{}: ", r);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let connector = v_connect[r][t];
                    let padding_needed = GATE_WIDTH - 1;
                    let pre = padding_needed / 2;
                    let post = padding_needed - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), connector, " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
