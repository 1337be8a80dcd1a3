//! Sparse multivariate polynomials over the rationals.
mod monomial;
mod sparse;

pub use monomial::Monomial;
pub use sparse::{Coefficient, Polynomial};
