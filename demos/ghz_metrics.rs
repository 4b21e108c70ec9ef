// demos/ghz_metrics.rs

//! Builds a three-qubit GHZ state and walks through the gate catalog and
//! the synthetic performance metrics attached to each step.

use qlab::{catalog, CircuitBuilder, QubitId, Simulator};

fn main() {
    println!("Available gates:");
    for (kind, description) in catalog() {
        println!("  {:<5} {}", kind.symbol(), description);
    }
    println!();

    let q0 = QubitId(0);
    let q1 = QubitId(1);
    let q2 = QubitId(2);

    // (1/sqrt(2)) (|000> + |111>)
    let circuit = CircuitBuilder::new()
        .h(q0)
        .cnot(q0, q1)
        .cnot(q1, q2)
        .build();
    println!("{}", circuit);

    match Simulator::new().run(&circuit) {
        Ok(result) => {
            println!("{}", result);
            for record in result.performance() {
                println!(
                    "step {} took {:?} at synthetic fidelity {:.4}",
                    record.step, record.duration, record.fidelity
                );
            }
        }
        Err(e) => eprintln!("simulation failed: {}", e),
    }
}
