use thiserror::Error;

use crate::polynomial::Polynomial;

pub type Result<T> = core::result::Result<T, SchurError>;

/// Failures surfaced by the tableau and Schur polynomial operations.
///
/// Note that a label bound too small for a shape is *not* an error: enumeration simply yields no
/// tableaux, and the enumerated Schur polynomial is zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchurError {
    /// A labeling was applied to a diagram with different row count or row lengths.
    #[error("dimension mismatch: expected row lengths {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// A position outside the diagram was addressed.
    #[error("cell ({row}, {col}) is outside a diagram with row lengths {row_lengths:?}")]
    CellOutOfShape {
        row: usize,
        col: usize,
        row_lengths: Vec<usize>,
    },

    /// The Weyl formula needs at least as many variables as the partition has parts.
    #[error("partition has {length} parts but only {n} variables were requested")]
    PartitionLengthExceedsN { length: usize, n: usize },

    /// Enumeration and the Weyl formula produced different polynomials.
    #[error(
        "schur polynomials disagree for partition {partition:?} in {n} variables:\n  \
         enumeration: {enumerated}\n  weyl: {weyl}"
    )]
    CrossValidationMismatch {
        partition: Vec<usize>,
        n: usize,
        enumerated: Box<Polynomial>,
        weyl: Box<Polynomial>,
    },

    /// Polynomial division left a nonzero remainder.
    #[error("polynomial division is not exact")]
    InexactDivision,

    #[error("division by the zero polynomial")]
    ZeroDivisor,
}
