//! Schur polynomials, two ways.
//!
//! [`schur_by_enumeration`] sums monomials over every semistandard tableau found by the
//! constraint search; [`schur_by_weyl`] evaluates the Weyl character formula as an exact ratio
//! of determinants. [`cross_validate`] insists that the two agree.
mod enumeration;
mod validate;
mod weyl;

pub use enumeration::schur_by_enumeration;
pub use validate::{cross_validate, polynomials_equal};
pub use weyl::{alternant, schur_by_weyl, vandermonde};
