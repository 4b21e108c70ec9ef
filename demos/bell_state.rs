// demos/bell_state.rs

//! Prepares the two-qubit Bell state and prints the circuit diagram, the
//! final statevector, the sampled measurement counts and the per-step
//! metrics.

use qlab::{validate_circuit, CircuitBuilder, QubitId, Simulator};

fn main() {
    let q0 = QubitId(0);
    let q1 = QubitId(1);

    let circuit = CircuitBuilder::new().h(q0).cnot(q0, q1).build();
    println!("{}", circuit);

    let issues = validate_circuit(&circuit);
    if !issues.is_empty() {
        for issue in issues {
            eprintln!("validation: {}", issue);
        }
        return;
    }

    match Simulator::new().run(&circuit) {
        Ok(result) => println!("{}", result),
        Err(e) => eprintln!("simulation failed: {}", e),
    }
}
