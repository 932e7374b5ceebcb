//! Edge weights and path distances.
//!
//! Weights are any totally ordered numeric type with a zero and checked
//! addition; the signed integers are the intended instances. Zero doubles as the
//! "no edge" marker of the weight matrix.

use core::fmt;

use num_traits::{CheckedAdd, Zero};
use serde::{Deserialize, Serialize};

/// Numeric type usable as an edge weight.
pub trait Weight: Copy + Ord + Zero + CheckedAdd + fmt::Debug + fmt::Display {}

impl<T> Weight for T where T: Copy + Ord + Zero + CheckedAdd + fmt::Debug + fmt::Display {}

/// Best known path cost to a vertex.
///
/// `Infinite` orders after every finite value, so "is `a` shorter than `b`"
/// is a plain `a < b`. Serializes as the bare number, or `null` for infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance<W> {
    /// Cost of a known path.
    Finite(W),
    /// No path is known.
    Infinite,
}

impl<W: Copy> Distance<W> {
    /// Returns the finite value, if any.
    #[inline]
    pub fn finite(self) -> Option<W> {
        match self {
            Self::Finite(w) => Some(w),
            Self::Infinite => None,
        }
    }

    /// `true` when a path is known.
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// `true` when no path is known.
    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }
}

impl<W> From<W> for Distance<W> {
    fn from(w: W) -> Self {
        Self::Finite(w)
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(w) => w.fmt(f),
            Self::Infinite => f.write_str("∞"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_orders_after_every_finite_value() {
        assert!(Distance::Finite(i64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(-5) < Distance::Finite(3));
        assert_eq!(Distance::<i32>::Infinite, Distance::Infinite);
    }

    #[test]
    fn accessors() {
        let d = Distance::Finite(7i32);
        assert_eq!(d.finite(), Some(7));
        assert!(d.is_finite());
        assert!(Distance::<i32>::Infinite.is_infinite());
        assert_eq!(Distance::<i32>::Infinite.finite(), None);
        assert_eq!(Distance::from(4i32), Distance::Finite(4));
    }

    #[test]
    fn display_and_json() {
        assert_eq!(Distance::Finite(-2i64).to_string(), "-2");
        assert_eq!(Distance::<i64>::Infinite.to_string(), "∞");

        let json = serde_json::to_string(&vec![Distance::Finite(3i64), Distance::Infinite]).unwrap();
        assert_eq!(json, "[3,null]");
        let back: Vec<Distance<i64>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Distance::Finite(3), Distance::Infinite]);
    }
}
