// tests/simulation_tests.rs

use num_complex::Complex;
use qlab::{
    validate_circuit, Circuit, CircuitBuilder, ControlledGate, GateKind, Operation, QlabError,
    QubitId, SingleQubitGate, Simulator,
};
use std::f64::consts::FRAC_1_SQRT_2;

// Helper function to create QubitId for tests
fn q(index: usize) -> QubitId {
    QubitId(index)
}

// Helper function asserting component-wise closeness of amplitude vectors
fn assert_amplitudes_close(actual: &[Complex<f64>], expected: &[Complex<f64>], context: &str) {
    assert_eq!(actual.len(), expected.len(), "vector length mismatch - {}", context);
    for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let dist_sq = (a - e).norm_sqr();
        assert!(
            dist_sq < 1e-18,
            "mismatch at index {} - actual: {}, expected: {}, context: {}",
            index,
            a,
            e,
            context
        );
    }
}

fn zero() -> Complex<f64> {
    Complex::new(0.0, 0.0)
}

fn one() -> Complex<f64> {
    Complex::new(1.0, 0.0)
}

#[test]
fn empty_circuit_yields_single_qubit_ground_state() -> Result<(), QlabError> {
    let circuit = Circuit::new();
    let result = Simulator::new().run(&circuit)?;

    assert_eq!(result.statevector().num_qubits(), 1);
    assert_amplitudes_close(result.statevector().amplitudes(), &[one(), zero()], "empty circuit");

    // Every shot lands on |0>.
    assert_eq!(result.measurements().len(), 1);
    assert_eq!(result.measurements()[0].bitstring, "0");
    assert_eq!(result.measurements()[0].count, 1000);
    assert!(result.performance().is_empty());
    Ok(())
}

#[test]
fn hadamard_twice_restores_ground_state() -> Result<(), QlabError> {
    // H is self-inverse: H H |0> = |0>.
    let circuit = CircuitBuilder::new().h(q(0)).h(q(0)).build();
    let result = Simulator::new().run(&circuit)?;
    assert_amplitudes_close(result.statevector().amplitudes(), &[one(), zero()], "H H |0>");
    Ok(())
}

#[test]
fn x_flips_ground_state() -> Result<(), QlabError> {
    let circuit = CircuitBuilder::new().x(q(0)).build();
    let result = Simulator::new().run(&circuit)?;
    assert_amplitudes_close(result.statevector().amplitudes(), &[zero(), one()], "X |0>");
    Ok(())
}

#[test]
fn y_flips_with_imaginary_phase() -> Result<(), QlabError> {
    // Y |0> = i |1>.
    let circuit = CircuitBuilder::new().y(q(0)).build();
    let result = Simulator::new().run(&circuit)?;
    assert_amplitudes_close(
        result.statevector().amplitudes(),
        &[zero(), Complex::new(0.0, 1.0)],
        "Y |0>",
    );
    Ok(())
}

#[test]
fn z_negates_the_one_component() -> Result<(), QlabError> {
    // Z (H |0>) = (1/sqrt(2)) (|0> - |1>).
    let circuit = CircuitBuilder::new().h(q(0)).z(q(0)).build();
    let result = Simulator::new().run(&circuit)?;
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    assert_amplitudes_close(result.statevector().amplitudes(), &[h, -h], "Z H |0>");
    Ok(())
}

#[test]
fn bell_state_entangles_two_qubits() -> Result<(), QlabError> {
    let circuit = CircuitBuilder::new().h(q(0)).cnot(q(0), q(1)).build();
    let result = Simulator::new().run(&circuit)?;
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    assert_amplitudes_close(
        result.statevector().amplitudes(),
        &[h, zero(), zero(), h],
        "Bell state",
    );
    Ok(())
}

#[test]
fn cz_negates_only_the_both_ones_component() -> Result<(), QlabError> {
    // H H |00> = uniform superposition; CZ flips the sign of |11> only.
    let circuit = CircuitBuilder::new().h(q(0)).h(q(1)).cz(q(0), q(1)).build();
    let result = Simulator::new().run(&circuit)?;
    let half = Complex::new(0.5, 0.0);
    assert_amplitudes_close(
        result.statevector().amplitudes(),
        &[half, half, half, -half],
        "CZ on uniform superposition",
    );
    Ok(())
}

#[test]
fn cnot_direction_follows_control_and_target() -> Result<(), QlabError> {
    // Control on q1: |01> -> |11>. Qubit 0 is the leftmost bit.
    let circuit = CircuitBuilder::new().x(q(1)).cnot(q(1), q(0)).build();
    let result = Simulator::new().run(&circuit)?;
    let mut expected = vec![zero(); 4];
    expected[3] = one();
    assert_amplitudes_close(result.statevector().amplitudes(), &expected, "reversed CNOT");
    Ok(())
}

#[test]
fn referencing_a_higher_qubit_grows_the_register() -> Result<(), QlabError> {
    // A single gate on q2 implies a three-qubit register.
    let circuit = CircuitBuilder::new().x(q(2)).build();
    let result = Simulator::new().run(&circuit)?;
    assert_eq!(result.statevector().num_qubits(), 3);
    assert_eq!(result.statevector().dim(), 8);
    // |001>: qubit 2 is the least significant bit of the basis index.
    let mut expected = vec![zero(); 8];
    expected[1] = one();
    assert_amplitudes_close(result.statevector().amplitudes(), &expected, "X on q2");
    Ok(())
}

#[test]
fn statevector_stays_normalized_through_deep_circuits() -> Result<(), QlabError> {
    let mut builder = CircuitBuilder::new();
    for _ in 0..8 {
        builder = builder
            .h(q(0))
            .y(q(1))
            .cnot(q(0), q(2))
            .cz(q(1), q(2))
            .z(q(0));
    }
    let result = Simulator::new().run(&builder.build())?;
    let norm_sq: f64 = result
        .statevector()
        .amplitudes()
        .iter()
        .map(|a| a.norm_sqr())
        .sum();
    assert!((norm_sq - 1.0).abs() < 1e-6, "norm_sq drifted to {}", norm_sq);
    Ok(())
}

#[test]
fn coincident_control_and_target_fail_with_step_number() {
    let mut circuit = Circuit::new();
    circuit.add_operation(Operation::Gate { gate: SingleQubitGate::H, target: q(0) });
    circuit.add_operation(Operation::Controlled {
        gate: ControlledGate::Cnot,
        control: q(1),
        target: q(1),
    });

    let result = Simulator::new().run(&circuit);
    match result {
        Err(QlabError::InvalidOperation { step, reason }) => {
            assert_eq!(step, 2);
            assert!(reason.contains("distinct"), "unexpected reason: {reason}");
        }
        other => panic!("expected InvalidOperation, got {other:?}"),
    }
}

#[test]
fn oversized_register_is_rejected_before_simulation() {
    // q10 implies an 11-qubit register, one past the cap.
    let circuit = CircuitBuilder::new().x(q(10)).build();
    let result = Simulator::new().run(&circuit);
    match result {
        Err(QlabError::CapacityExceeded { required, limit }) => {
            assert_eq!(required, 11);
            assert_eq!(limit, 10);
        }
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }
}

#[test]
fn missing_control_is_rejected_at_the_raw_boundary() {
    let err = Operation::from_parts(3, GateKind::Cnot, q(1), None).unwrap_err();
    match err {
        QlabError::InvalidOperation { step, reason } => {
            assert_eq!(step, 3);
            assert!(reason.contains("control"), "unexpected reason: {reason}");
        }
        other => panic!("expected InvalidOperation, got {other:?}"),
    }
}

#[test]
fn performance_records_cover_each_step_in_order() -> Result<(), QlabError> {
    let circuit = CircuitBuilder::new().h(q(0)).cnot(q(0), q(1)).build();
    let result = Simulator::new().run(&circuit)?;

    let records = result.performance();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].step, 0);
    assert_eq!(records[0].gate, GateKind::H);
    assert_eq!(records[0].target, q(0));
    assert_eq!(records[0].control, None);
    assert!((records[0].fidelity - 0.97).abs() < 1e-12);

    assert_eq!(records[1].step, 1);
    assert_eq!(records[1].gate, GateKind::Cnot);
    assert_eq!(records[1].target, q(1));
    assert_eq!(records[1].control, Some(q(0)));
    assert!((records[1].fidelity - 0.95 * 0.99).abs() < 1e-12);
    Ok(())
}

#[test]
fn fidelity_decay_floors_deep_in_the_circuit() -> Result<(), QlabError> {
    let mut builder = CircuitBuilder::new();
    for _ in 0..26 {
        builder = builder.x(q(0));
    }
    let result = Simulator::new().run(&builder.build())?;
    let records = result.performance();
    assert_eq!(records.len(), 26);
    // Depth factor bottoms out at 0.8 from step 20 onward.
    assert!((records[25].fidelity - 0.99 * 0.8).abs() < 1e-12);
    assert!((records[20].fidelity - 0.99 * 0.8).abs() < 1e-12);
    // Step 19 is still on the linear ramp.
    assert!((records[19].fidelity - 0.99 * 0.81).abs() < 1e-12);
    Ok(())
}

#[test]
fn validation_catches_what_simulation_would_reject() {
    let mut circuit = Circuit::new();
    circuit.add_operation(Operation::Controlled {
        gate: ControlledGate::Cz,
        control: q(0),
        target: q(0),
    });

    let issues = validate_circuit(&circuit);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].step, Some(1));

    // validate is pure: a second pass reports the same problems.
    assert_eq!(issues, validate_circuit(&circuit));

    // And simulate agrees the circuit is unusable.
    assert!(Simulator::new().run(&circuit).is_err());
}

#[test]
fn gate_catalog_is_stable_and_described() {
    let listing: Vec<_> = qlab::catalog().collect();
    assert_eq!(listing.len(), 6);
    assert_eq!(listing[0].0, GateKind::H);
    assert_eq!(listing[5].0, GateKind::Cz);
    for (kind, description) in listing {
        assert!(!description.is_empty(), "{kind} has no description");
    }
}
