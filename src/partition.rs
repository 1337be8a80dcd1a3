//! Integer partitions.
use core::fmt;

use crate::error::{Result, SchurError};
use crate::tableau::Shape;

/// An integer partition, stored with its positive parts in non-increasing order.
///
/// Parts may be supplied in any order (in particular the non-decreasing order produced by some
/// partition generators) and zero parts are accepted and dropped, so `(2, 2, 0)`, `(2, 2)` and
/// `(0, 2, 2)` are the same partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Partition {
    parts: Vec<usize>,
}

impl Partition {
    pub fn new(parts: impl Into<Vec<usize>>) -> Self {
        let mut parts = parts.into();
        parts.retain(|&p| p > 0);
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Partition { parts }
    }

    /// The empty partition of zero.
    pub fn empty() -> Self {
        Partition { parts: Vec::new() }
    }

    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    /// Number of (positive) parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The number being partitioned.
    pub fn size(&self) -> usize {
        self.parts.iter().sum()
    }

    /// The Young diagram of this partition.
    pub fn shape(&self) -> Shape {
        Shape::new(self.parts.clone())
    }

    /// The parts zero-extended to exactly `n` entries.
    pub fn padded(&self, n: usize) -> Result<Vec<usize>> {
        if self.parts.len() > n {
            return Err(SchurError::PartitionLengthExceedsN {
                length: self.parts.len(),
                n,
            });
        }
        let mut padded = self.parts.clone();
        padded.resize(n, 0);
        Ok(padded)
    }
}

impl From<Vec<usize>> for Partition {
    fn from(parts: Vec<usize>) -> Self {
        Partition::new(parts)
    }
}

impl From<Partition> for Vec<usize> {
    fn from(partition: Partition) -> Self {
        partition.parts
    }
}

impl From<&[usize]> for Partition {
    fn from(parts: &[usize]) -> Self {
        Partition::new(parts.to_vec())
    }
}

impl<const K: usize> From<[usize; K]> for Partition {
    fn from(parts: [usize; K]) -> Self {
        Partition::new(parts.to_vec())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, ")")
    }
}

/// Every partition of `n`, in reverse lexicographic order starting from `(n)`.
///
/// `partitions_of(0)` is the single empty partition.
pub fn partitions_of(n: usize) -> Vec<Partition> {
    let mut results = Vec::new();
    let mut current = Vec::new();

    fn walk(
        remaining: usize,
        max_part: usize,
        current: &mut Vec<usize>,
        results: &mut Vec<Partition>,
    ) {
        if remaining == 0 {
            results.push(Partition {
                parts: current.clone(),
            });
            return;
        }

        for part in (1..=max_part.min(remaining)).rev() {
            current.push(part);
            walk(remaining - part, part, current, results);
            current.pop();
        }
    }

    walk(n, n, &mut current, &mut results);
    results
}
