//! Points value object - non-negative answer weight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// Point value carried by an answer option.
///
/// Weights are small non-negative integers (the built-in sets use 0-3);
/// sums over a whole question set stay well inside u32.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Points(u32);

impl Points {
    /// Zero points.
    pub const ZERO: Self = Self(0);

    /// Creates a new Points value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Points {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}

impl std::ops::Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
