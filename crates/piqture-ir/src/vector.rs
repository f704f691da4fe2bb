//! Parameter vectors and sequential parameter consumption.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::parameter::ParameterExpression;

/// A named, fixed-length family of symbolic parameters.
///
/// Element `i` of a vector named `theta` is the symbol `theta[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterVector {
    name: String,
    len: usize,
}

impl ParameterVector {
    /// Create a vector of `len` symbols.
    pub fn new(name: impl Into<String>, len: usize) -> Self {
        Self {
            name: name.into(),
            len,
        }
    }

    /// Vector name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Symbol name of element `index`.
    pub fn element_name(&self, index: usize) -> String {
        format!("{}[{index}]", self.name)
    }

    /// Element `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<ParameterExpression> {
        (index < self.len).then(|| ParameterExpression::symbol(self.element_name(index)))
    }

    /// Element `index` without a bounds check against `len`.
    ///
    /// Used by encoders that size the vector to their own loop bounds.
    pub fn param(&self, index: usize) -> ParameterExpression {
        ParameterExpression::symbol(self.element_name(index))
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = ParameterExpression> + '_ {
        (0..self.len).map(|i| self.param(i))
    }

    /// All elements in order.
    pub fn params(&self) -> Vec<ParameterExpression> {
        self.iter().collect()
    }

    /// Start consuming this vector from its first element.
    pub fn cursor(&self) -> ParameterCursor {
        ParameterCursor::new(self.params())
    }
}

/// Consumes a parameter list front to back.
///
/// Block builders take what they need with [`ParameterCursor::take`]; whatever
/// is left is available to the next block.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterCursor {
    params: Vec<ParameterExpression>,
    position: usize,
}

impl ParameterCursor {
    /// Wrap an explicit parameter list.
    pub fn new(params: Vec<ParameterExpression>) -> Self {
        Self {
            params,
            position: 0,
        }
    }

    /// Number of parameters not yet consumed.
    pub fn remaining(&self) -> usize {
        self.params.len() - self.position
    }

    /// Number of parameters consumed so far.
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// The unconsumed parameters.
    pub fn rest(&self) -> &[ParameterExpression] {
        &self.params[self.position..]
    }

    /// Take the next `n` parameters.
    pub fn take(&mut self, n: usize) -> IrResult<Vec<ParameterExpression>> {
        if n > self.remaining() {
            return Err(IrError::InsufficientParameters {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let taken = self.params[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(taken)
    }
}

impl From<&ParameterVector> for ParameterCursor {
    fn from(vector: &ParameterVector) -> Self {
        vector.cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_elements() {
        let v = ParameterVector::new("theta", 3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(0), Some(ParameterExpression::symbol("theta[0]")));
        assert_eq!(v.get(3), None);
        assert_eq!(v.params().len(), 3);
    }

    #[test]
    fn test_cursor_take() {
        let v = ParameterVector::new("theta", 5);
        let mut cursor = v.cursor();

        let first = cursor.take(2).unwrap();
        assert_eq!(first[1], ParameterExpression::symbol("theta[1]"));
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.rest()[0], ParameterExpression::symbol("theta[2]"));

        let err = cursor.take(4).unwrap_err();
        assert!(matches!(
            err,
            IrError::InsufficientParameters {
                needed: 4,
                remaining: 3
            }
        ));
        assert_eq!(cursor.consumed(), 2);
    }
}
