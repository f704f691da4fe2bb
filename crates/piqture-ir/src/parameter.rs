//! Symbolic gate angles.
//!
//! An angle is a small expression tree over constants, π and named symbols.
//! Symbols come from parameter vectors (`Angle[i]` for symbolic FRQI pixels,
//! `theta[i]` for MPS weights) and are replaced by numbers on binding.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::fmt;

/// Arithmetic operator of a [`ParameterExpression::Binary`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
}

impl BinaryOp {
    /// Infix symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Evaluate on numbers. Division by zero yields `None`.
    fn eval(self, a: f64, b: f64) -> Option<f64> {
        match self {
            BinaryOp::Add => Some(a + b),
            BinaryOp::Sub => Some(a - b),
            BinaryOp::Mul => Some(a * b),
            BinaryOp::Div => (b != 0.0).then(|| a / b),
        }
    }
}

/// A gate angle, concrete or symbolic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A number.
    Constant(f64),
    /// A free symbol such as `theta[3]`.
    Symbol(String),
    /// π.
    Pi,
    /// `-e`
    Neg(Box<ParameterExpression>),
    /// `a op b`
    Binary(BinaryOp, Box<ParameterExpression>, Box<ParameterExpression>),
}

impl ParameterExpression {
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        ParameterExpression::Symbol(name.into())
    }

    pub fn pi() -> Self {
        ParameterExpression::Pi
    }

    fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        ParameterExpression::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Whether a symbol occurs anywhere in the tree.
    pub fn is_symbolic(&self) -> bool {
        match self {
            ParameterExpression::Symbol(_) => true,
            ParameterExpression::Constant(_) | ParameterExpression::Pi => false,
            ParameterExpression::Neg(e) => e.is_symbolic(),
            ParameterExpression::Binary(_, a, b) => a.is_symbolic() || b.is_symbolic(),
        }
    }

    /// Numeric value, or `None` while symbols remain (or on division by
    /// zero).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Pi => Some(PI),
            ParameterExpression::Symbol(_) => None,
            ParameterExpression::Neg(e) => e.as_f64().map(|v| -v),
            ParameterExpression::Binary(op, a, b) => op.eval(a.as_f64()?, b.as_f64()?),
        }
    }

    /// Names of the free symbols, sorted.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        self.collect_symbols(&mut set);
        set
    }

    pub(crate) fn collect_symbols(&self, set: &mut BTreeSet<String>) {
        match self {
            ParameterExpression::Symbol(name) => {
                set.insert(name.clone());
            }
            ParameterExpression::Constant(_) | ParameterExpression::Pi => {}
            ParameterExpression::Neg(e) => e.collect_symbols(set),
            ParameterExpression::Binary(_, a, b) => {
                a.collect_symbols(set);
                b.collect_symbols(set);
            }
        }
    }

    /// Replace symbol `name` by `value`.
    pub fn bind(&self, name: &str, value: f64) -> Self {
        self.substitute(&|n| (n == name).then_some(value))
    }

    /// Replace every symbol found in `values`; the rest stay free.
    pub fn bind_all(&self, values: &FxHashMap<String, f64>) -> Self {
        self.substitute(&|n| values.get(n).copied())
    }

    fn substitute(&self, lookup: &dyn Fn(&str) -> Option<f64>) -> Self {
        match self {
            ParameterExpression::Symbol(n) => {
                lookup(n).map_or_else(|| self.clone(), ParameterExpression::Constant)
            }
            ParameterExpression::Constant(_) | ParameterExpression::Pi => self.clone(),
            ParameterExpression::Neg(e) => -e.substitute(lookup),
            ParameterExpression::Binary(op, a, b) => {
                Self::binary(*op, a.substitute(lookup), b.substitute(lookup))
            }
        }
    }

    /// Fold to a constant once no symbols remain.
    pub fn simplify(&self) -> Self {
        self.as_f64()
            .map_or_else(|| self.clone(), ParameterExpression::Constant)
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Symbol(name) => f.write_str(name),
            ParameterExpression::Pi => f.write_str("π"),
            ParameterExpression::Neg(e) => write!(f, "-({e})"),
            ParameterExpression::Binary(op, a, b) => write!(f, "({a} {} {b})", op.symbol()),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<&ParameterExpression> for ParameterExpression {
    fn from(value: &ParameterExpression) -> Self {
        value.clone()
    }
}

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl std::ops::$trait for ParameterExpression {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::binary($op, self, rhs)
            }
        }
    };
}

binary_operator!(Add, add, BinaryOp::Add);
binary_operator!(Sub, sub, BinaryOp::Sub);
binary_operator!(Mul, mul, BinaryOp::Mul);
binary_operator!(Div, div, BinaryOp::Div);

impl std::ops::Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self {
        ParameterExpression::Neg(Box::new(self))
    }
}
