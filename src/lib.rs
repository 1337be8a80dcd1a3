//! # Schur polynomials from semistandard tableaux
//!
//! The Schur polynomial of a partition `λ` in `n` variables is
//!
//! ```text
//! s_λ(x1, ..., xn) = Σ_T  x1^(#1s in T) * x2^(#2s in T) * ... * xn^(#ns in T)
//! ```
//!
//! summed over every *semistandard Young tableau* `T` of shape `λ` with labels in `1..=n`: a
//! filling of the Young diagram whose rows weakly increase to the right and whose columns
//! strictly increase downwards. For example the eight tableaux of shape `(2, 1)` in three labels
//! include
//!
//! ```text
//!   1,1    1,2    1,3    2,3
//!   2      3      2      3
//! ```
//!
//! This crate computes `s_λ` two independent ways:
//!
//! - by **enumeration**: the tableau rules are posed as a finite-domain constraint problem
//!   ([`tableau::TableauModel`]) whose every solution is found by exhaustive backtracking
//!   ([`tableau::enumerate_tableaux`]), and the monomials are summed
//!   ([`schur::schur_by_enumeration`]);
//! - by the **Weyl character formula**: a ratio of an alternant determinant and the Vandermonde
//!   product, divided exactly over the rationals ([`schur::schur_by_weyl`]).
//!
//! [`schur::cross_validate`] computes both and fails loudly if they differ.
//!
//! ```rust
//! use schur_tableaux::prelude::*;
//!
//! let partition = Partition::from([2, 1]);
//! let s = cross_validate(&partition, 3).unwrap();
//! assert_eq!(s.len(), 7);
//!
//! let tableaux = enumerate_tableaux(&partition.shape(), 3);
//! assert_eq!(tableaux.len(), 8);
//! assert_eq!(tableaux[0].to_string(), "1,1\n2");
//! ```

pub mod csp;
pub mod error;
pub mod matrix;
pub mod partition;
pub mod polynomial;
pub mod schur;
pub mod tableau;
pub mod trail;

pub mod prelude {
    //! The types and operations most callers need.
    pub use crate::csp::{LogTrace, NoopTrace, SearchConfig, SearchTrace, VarOrder};
    pub use crate::error::{Result, SchurError};
    pub use crate::partition::{partitions_of, Partition};
    pub use crate::polynomial::{Coefficient, Monomial, Polynomial};
    pub use crate::schur::{cross_validate, polynomials_equal, schur_by_enumeration, schur_by_weyl};
    pub use crate::tableau::{
        count_constraints, enumerate_tableaux, enumerate_tableaux_with, Cell, Diagram, Shape,
        Tableau,
    };
}
