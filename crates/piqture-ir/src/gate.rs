//! Gate set of the IR.
//!
//! Every gate knows its OpenQASM name, how many qubits it spans and how many
//! of those are controls. Multi-controlled gates list their controls first and
//! the target last.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::parameter::ParameterExpression;

/// A gate with fixed semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity.
    I,
    /// Bit flip.
    X,
    /// Pauli Y.
    Y,
    /// Phase flip.
    Z,
    /// Hadamard.
    H,
    /// Quarter turn about Z.
    S,
    /// Inverse of `S`.
    Sdg,
    /// Eighth turn about Z.
    T,
    /// Inverse of `T`.
    Tdg,
    /// Square root of X.
    SX,
    /// Inverse of `SX`.
    SXdg,
    /// `exp(-iθX/2)`.
    Rx(ParameterExpression),
    /// `exp(-iθY/2)`. Carries pixel and block angles.
    Ry(ParameterExpression),
    /// `exp(-iθZ/2)`.
    Rz(ParameterExpression),
    /// Relative phase on `|1⟩`.
    P(ParameterExpression),
    /// Generic single-qubit rotation `U(θ, φ, λ)`.
    U(
        ParameterExpression,
        ParameterExpression,
        ParameterExpression,
    ),

    /// CNOT.
    CX,
    /// Controlled Y.
    CY,
    /// Controlled Z.
    CZ,
    /// Controlled Hadamard.
    CH,
    /// Exchange two qubits.
    Swap,
    /// Controlled `Rx`.
    CRx(ParameterExpression),
    /// Controlled `Ry`, used by FRQI.
    CRy(ParameterExpression),
    /// Controlled `Rz`.
    CRz(ParameterExpression),
    /// Controlled phase.
    CP(ParameterExpression),
    /// Ising XX coupling.
    RXX(ParameterExpression),
    /// Ising YY coupling.
    RYY(ParameterExpression),
    /// Ising ZZ coupling.
    RZZ(ParameterExpression),

    /// Toffoli.
    CCX,
    /// Fredkin.
    CSwap,

    /// X on the target when all `num_ctrl` controls are set.
    MCX {
        /// Control count.
        num_ctrl: u32,
    },
    /// `Ry(theta)` on the target when all `num_ctrl` controls are set.
    MCRy {
        /// Rotation angle.
        theta: ParameterExpression,
        /// Control count.
        num_ctrl: u32,
    },
}

/// Static shape of a gate: `(name, controls, targets)`.
type Shape = (&'static str, u32, u32);

impl StandardGate {
    fn shape(&self) -> Shape {
        use StandardGate as G;
        match self {
            G::I => ("id", 0, 1),
            G::X => ("x", 0, 1),
            G::Y => ("y", 0, 1),
            G::Z => ("z", 0, 1),
            G::H => ("h", 0, 1),
            G::S => ("s", 0, 1),
            G::Sdg => ("sdg", 0, 1),
            G::T => ("t", 0, 1),
            G::Tdg => ("tdg", 0, 1),
            G::SX => ("sx", 0, 1),
            G::SXdg => ("sxdg", 0, 1),
            G::Rx(_) => ("rx", 0, 1),
            G::Ry(_) => ("ry", 0, 1),
            G::Rz(_) => ("rz", 0, 1),
            G::P(_) => ("p", 0, 1),
            G::U(..) => ("u", 0, 1),
            G::CX => ("cx", 1, 1),
            G::CY => ("cy", 1, 1),
            G::CZ => ("cz", 1, 1),
            G::CH => ("ch", 1, 1),
            G::Swap => ("swap", 0, 2),
            G::CRx(_) => ("crx", 1, 1),
            G::CRy(_) => ("cry", 1, 1),
            G::CRz(_) => ("crz", 1, 1),
            G::CP(_) => ("cp", 1, 1),
            G::RXX(_) => ("rxx", 0, 2),
            G::RYY(_) => ("ryy", 0, 2),
            G::RZZ(_) => ("rzz", 0, 2),
            G::CCX => ("ccx", 2, 1),
            G::CSwap => ("cswap", 1, 2),
            G::MCX { num_ctrl } => ("mcx", *num_ctrl, 1),
            G::MCRy { num_ctrl, .. } => ("mcry", *num_ctrl, 1),
        }
    }

    /// Lowercase gate name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.shape().0
    }

    /// Operand count, controls included.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        let (_, controls, targets) = self.shape();
        controls + targets
    }

    /// Leading operands that act as controls.
    #[inline]
    pub fn num_controls(&self) -> u32 {
        self.shape().1
    }

    /// Angles of this gate, in declaration order.
    pub fn parameters(&self) -> Vec<&ParameterExpression> {
        use StandardGate as G;
        match self {
            G::U(theta, phi, lambda) => vec![theta, phi, lambda],
            G::Rx(p)
            | G::Ry(p)
            | G::Rz(p)
            | G::P(p)
            | G::CRx(p)
            | G::CRy(p)
            | G::CRz(p)
            | G::CP(p)
            | G::RXX(p)
            | G::RYY(p)
            | G::RZZ(p)
            | G::MCRy { theta: p, .. } => vec![p],
            _ => Vec::new(),
        }
    }

    /// Whether any angle still holds a free symbol.
    pub fn is_parameterized(&self) -> bool {
        self.parameters().into_iter().any(ParameterExpression::is_symbolic)
    }

    /// Substitute `values` into every angle. Angles left without symbols
    /// become constants.
    pub fn bind(&mut self, values: &FxHashMap<String, f64>) {
        use StandardGate as G;
        let rebind = |p: &mut ParameterExpression| {
            if p.is_symbolic() {
                *p = p.bind_all(values).simplify();
            }
        };
        match self {
            G::U(theta, phi, lambda) => {
                rebind(theta);
                rebind(phi);
                rebind(lambda);
            }
            G::Rx(p)
            | G::Ry(p)
            | G::Rz(p)
            | G::P(p)
            | G::CRx(p)
            | G::CRy(p)
            | G::CRz(p)
            | G::CP(p)
            | G::RXX(p)
            | G::RYY(p)
            | G::RZZ(p)
            | G::MCRy { theta: p, .. } => rebind(p),
            _ => {}
        }
    }
}
