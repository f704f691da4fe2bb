//! Bit identifiers. Both kinds are plain indices into the circuit register
//! and print with a one-letter prefix (`q3`, `c0`).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! bit_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self(index)
            }
        }
    };
}

bit_id!(
    /// Position of a qubit in the register.
    QubitId,
    "q"
);
bit_id!(
    /// Position of a classical bit in the register.
    ClbitId,
    "c"
);

impl QubitId {
    /// `len` consecutive qubits from `start`.
    pub fn range(start: u32, len: u32) -> impl Iterator<Item = QubitId> {
        (start..start + len).map(QubitId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(QubitId(3).to_string(), "q3");
        assert_eq!(ClbitId::from(1).to_string(), "c1");
    }

    #[test]
    fn test_range() {
        let ids: Vec<_> = QubitId::range(2, 3).collect();
        assert_eq!(ids, vec![QubitId(2), QubitId(3), QubitId(4)]);
        assert_eq!(QubitId::range(0, 0).count(), 0);
    }
}
