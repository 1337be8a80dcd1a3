use num_traits::One;

use crate::error::Result;
use crate::matrix::PolyMatrix;
use crate::partition::Partition;
use crate::polynomial::{Monomial, Polynomial};

/// The generalised alternant: the `n × n` matrix with entry `(i, j)` equal to
/// `x{j+1}^(exponents[i] + n - 1 - i)`.
///
/// # Panics
///
/// If `exponents` does not have exactly `n` entries.
pub fn alternant(exponents: &[usize], n: usize) -> PolyMatrix {
    assert_eq!(exponents.len(), n, "one exponent per row");
    PolyMatrix::from_fn(n, |i, j| {
        let power = exponents[i] + n - 1 - i;
        Polynomial::from(Monomial::var_pow(j, power as u32))
    })
}

/// `∏_{1 ≤ i < j ≤ n} (xi - xj)`, the Vandermonde determinant.
pub fn vandermonde(n: usize) -> Polynomial {
    let mut product = Polynomial::one();
    for j in 0..n {
        for i in 0..j {
            product = &product * &(&Polynomial::var(i) - &Polynomial::var(j));
        }
    }
    product
}

/// The Schur polynomial `s_λ(x1, ..., xn)` by the Weyl character formula:
///
/// ```text
///            det[ xj^(λi + n - i) ]
/// s_λ  =  ---------------------------
///          ∏_{i<j} (xi - xj)
/// ```
///
/// with `λ` zero-extended to `n` parts. The division is carried out exactly.
///
/// # Errors
///
/// [`SchurError::PartitionLengthExceedsN`](crate::error::SchurError::PartitionLengthExceedsN)
/// if `λ` has more than `n` parts.
pub fn schur_by_weyl(partition: &Partition, n: usize) -> Result<Polynomial> {
    let exponents = partition.padded(n)?;
    let numerator = alternant(&exponents, n).determinant()?;
    let denominator = vandermonde(n);
    log::debug!(
        "s{} in {} variables by weyl: numerator has {} terms, denominator {}",
        partition,
        n,
        numerator.len(),
        denominator.len()
    );
    numerator.div_exact(&denominator)
}
