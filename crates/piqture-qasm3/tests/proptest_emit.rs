//! Property-based tests for QASM3 emission.

use piqture_ir::{Circuit, ParameterVector, QubitId, random_circuit};
use piqture_qasm3::emit;
use proptest::prelude::*;

/// Statements after the declarations block.
fn body_statements(qasm: &str) -> Vec<&str> {
    qasm.lines()
        .filter(|l| l.ends_with(';'))
        .filter(|l| {
            !l.starts_with("OPENQASM")
                && !l.starts_with("include")
                && !l.starts_with("input")
                && !l.starts_with("qubit[")
                && !l.starts_with("bit[")
        })
        .collect()
}

/// Gate names declared by `stdgates.inc`, plus the builtin `U`.
const STDGATES: [&str; 28] = [
    "U", "p", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "sx", "rx", "ry", "rz", "cx", "cy",
    "cz", "cp", "crx", "cry", "crz", "ch", "swap", "ccx", "cswap", "cu", "id", "phase",
];

/// Leading keyword of a statement: `rx(0.1) q[0];` gives `rx`.
fn keyword(statement: &str) -> &str {
    statement
        .split(|c: char| c == '(' || c.is_whitespace())
        .next()
        .unwrap_or_default()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every gate becomes one statement; a measurement becomes one per qubit.
    #[test]
    fn statement_count_matches_instructions(
        num_qubits in 1_u32..=6,
        depth in 0_u32..=4,
        max_operands in 1_u32..=3,
        seed in any::<u64>(),
    ) {
        let circuit = random_circuit(num_qubits, depth, max_operands, true, seed).unwrap();
        let qasm = emit(&circuit).unwrap();

        let expected: usize = circuit
            .instructions()
            .map(|inst| if inst.is_measure() { inst.qubits.len() } else { 1 })
            .sum();
        prop_assert_eq!(body_statements(&qasm).len(), expected);
        let qubit_decl = format!("qubit[{num_qubits}] q;");
        prop_assert!(qasm.contains(&qubit_decl));
    }

    /// Emission is a pure function of the circuit.
    #[test]
    fn emission_is_deterministic(seed in any::<u64>()) {
        let a = random_circuit(4, 3, 3, false, seed).unwrap();
        let b = random_circuit(4, 3, 3, false, seed).unwrap();
        prop_assert_eq!(emit(&a).unwrap(), emit(&b).unwrap());
    }

    /// Each free vector element is declared once as an input.
    #[test]
    fn symbolic_vectors_declare_inputs(len in 1_usize..=12) {
        let theta = ParameterVector::new("theta", len);
        let mut circuit = Circuit::with_size("ansatz", 1, 0);
        for p in theta.iter() {
            circuit.ry(p, QubitId(0)).unwrap();
        }
        let qasm = emit(&circuit).unwrap();

        let declared = qasm.lines().filter(|l| l.starts_with("input angle")).count();
        prop_assert_eq!(declared, len);
        for i in 0..len {
            let decl = format!("input angle theta_{i};");
            prop_assert!(qasm.contains(&decl));
        }
    }

    /// Every statement uses a stdgates gate, a gate defined in the program,
    /// or a non-unitary keyword.
    #[test]
    fn gate_keywords_are_declared(
        num_qubits in 1_u32..=5,
        depth in 1_u32..=4,
        max_operands in 1_u32..=3,
        seed in any::<u64>(),
    ) {
        let circuit = random_circuit(num_qubits, depth, max_operands, true, seed).unwrap();
        let qasm = emit(&circuit).unwrap();

        let defined: Vec<&str> = qasm
            .lines()
            .filter_map(|l| l.strip_prefix("gate "))
            .map(keyword)
            .collect();
        for statement in body_statements(&qasm) {
            if statement.contains(" = measure ") {
                continue;
            }
            let kw = keyword(statement);
            prop_assert!(
                STDGATES.contains(&kw)
                    || defined.contains(&kw)
                    || ["ctrl", "reset", "barrier"].contains(&kw),
                "undeclared gate `{}` in `{}`",
                kw,
                statement
            );
        }
    }
}
