//! Circuit to OpenQASM 3 text.

use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::fmt::Write as _;

use piqture_ir::{Circuit, Instruction, InstructionKind, ParameterExpression, QubitId, StandardGate};

use crate::error::{EmitError, EmitResult};

/// Constants printed by name instead of as decimals.
const NAMED_ANGLES: [(f64, &str); 5] = [
    (PI, "pi"),
    (PI / 2.0, "pi/2"),
    (PI / 4.0, "pi/4"),
    (-PI / 2.0, "-pi/2"),
    (-PI / 4.0, "-pi/4"),
];

/// Gates the IR knows that `stdgates.inc` does not declare. A definition is
/// written into the program for each one the circuit uses.
const EXTRA_GATES: [(&str, &str); 4] = [
    ("sxdg", "gate sxdg a { s a; h a; s a; }"),
    (
        "rxx",
        "gate rxx(theta) a, b { h a; h b; cx a, b; rz(theta) b; cx a, b; h a; h b; }",
    ),
    (
        "ryy",
        "gate ryy(theta) a, b { rx(pi/2) a; rx(pi/2) b; cx a, b; rz(theta) b; cx a, b; \
         rx(-pi/2) a; rx(-pi/2) b; }",
    ),
    ("rzz", "gate rzz(theta) a, b { cx a, b; rz(theta) b; cx a, b; }"),
];

/// Render `circuit` as an OpenQASM 3 program.
///
/// Free symbols become `input angle` declarations, qubits live in one
/// register `q` and classical bits in `c`.
pub fn emit(circuit: &Circuit) -> EmitResult<String> {
    let mut out = String::from("OPENQASM 3.0;\ninclude \"stdgates.inc\";\n");

    let used: BTreeSet<&str> = circuit
        .instructions()
        .filter_map(Instruction::as_gate)
        .map(StandardGate::name)
        .collect();
    for (_, definition) in EXTRA_GATES.iter().filter(|(name, _)| used.contains(name)) {
        out.push_str(definition);
        out.push('\n');
    }
    out.push('\n');

    let inputs = circuit.parameters();
    for name in &inputs {
        let _ = writeln!(out, "input angle {};", qasm_identifier(name)?);
    }
    if !inputs.is_empty() {
        out.push('\n');
    }

    let (nq, nc) = (circuit.num_qubits(), circuit.num_clbits());
    if nq > 0 {
        let _ = writeln!(out, "qubit[{nq}] q;");
    }
    if nc > 0 {
        let _ = writeln!(out, "bit[{nc}] c;");
    }
    if nq + nc > 0 {
        out.push('\n');
    }

    for inst in circuit.instructions() {
        emit_instruction(&mut out, inst)?;
    }
    Ok(out)
}

/// Turn a symbol name into a QASM identifier: `theta[3]` becomes `theta_3`.
///
/// Anything left outside `[A-Za-z0-9_]`, or a leading digit, is an error.
pub fn qasm_identifier(name: &str) -> EmitResult<String> {
    let ident = name.replace('[', "_").replace(']', "");
    let mut chars = ident.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic());
    if starts_well && chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        Ok(ident)
    } else {
        Err(EmitError::InvalidIdentifier(name.to_string()))
    }
}

fn emit_instruction(out: &mut String, inst: &Instruction) -> EmitResult<()> {
    let qubits = operand_list(&inst.qubits);
    match &inst.kind {
        InstructionKind::Gate(gate) => {
            let head = gate_head(gate);
            let params = gate
                .parameters()
                .into_iter()
                .map(angle)
                .collect::<EmitResult<Vec<_>>>()?;
            if params.is_empty() {
                let _ = writeln!(out, "{head} {qubits};");
            } else {
                let _ = writeln!(out, "{head}({}) {qubits};", params.join(", "));
            }
        }
        InstructionKind::Measure => {
            if inst.qubits.len() != inst.clbits.len() {
                return Err(EmitError::UnpairedMeasurement {
                    qubits: inst.qubits.len(),
                    clbits: inst.clbits.len(),
                });
            }
            for (q, c) in inst.qubits.iter().zip(&inst.clbits) {
                let _ = writeln!(out, "c[{}] = measure q[{}];", c.0, q.0);
            }
        }
        InstructionKind::Reset => {
            let _ = writeln!(out, "reset {qubits};");
        }
        InstructionKind::Barrier if qubits.is_empty() => out.push_str("barrier;\n"),
        InstructionKind::Barrier => {
            let _ = writeln!(out, "barrier {qubits};");
        }
    }
    Ok(())
}

/// Gate keyword, with a `ctrl(n) @` modifier for multi-controlled gates.
fn gate_head(gate: &StandardGate) -> String {
    match gate {
        StandardGate::U(..) => "U".to_string(),
        StandardGate::MCX { num_ctrl } => format!("ctrl({num_ctrl}) @ x"),
        StandardGate::MCRy { num_ctrl, .. } => format!("ctrl({num_ctrl}) @ ry"),
        other => other.name().to_string(),
    }
}

fn angle(expr: &ParameterExpression) -> EmitResult<String> {
    Ok(match expr {
        ParameterExpression::Constant(v) => NAMED_ANGLES
            .iter()
            .find(|(value, _)| (v - value).abs() < 1e-10)
            .map_or_else(|| format!("{v:?}"), |(_, name)| (*name).to_string()),
        ParameterExpression::Symbol(name) => qasm_identifier(name)?,
        ParameterExpression::Pi => "pi".to_string(),
        ParameterExpression::Neg(e) => format!("-({})", angle(e)?),
        ParameterExpression::Binary(op, a, b) => {
            format!("({} {} {})", angle(a)?, op.symbol(), angle(b)?)
        }
    })
}

fn operand_list(qubits: &[QubitId]) -> String {
    qubits
        .iter()
        .map(|q| format!("q[{}]", q.0))
        .collect::<Vec<_>>()
        .join(", ")
}
