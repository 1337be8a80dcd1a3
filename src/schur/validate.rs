use num_traits::Zero;

use super::enumeration::schur_by_enumeration;
use super::weyl::schur_by_weyl;
use crate::error::{Result, SchurError};
use crate::partition::Partition;
use crate::polynomial::Polynomial;

/// Equality after full expansion: same monomials with the same coefficients.
pub fn polynomials_equal(p: &Polynomial, q: &Polynomial) -> bool {
    (p - q).is_zero()
}

/// Compute `s_λ(x1, ..., xn)` both by tableau enumeration and by the Weyl formula, and return it
/// only if the two agree.
pub fn cross_validate(partition: &Partition, n: usize) -> Result<Polynomial> {
    let enumerated = schur_by_enumeration(partition, n);
    let weyl = schur_by_weyl(partition, n)?;

    if !polynomials_equal(&enumerated, &weyl) {
        log::error!("s{partition} in {n} variables: enumeration and weyl formula disagree");
        return Err(SchurError::CrossValidationMismatch {
            partition: partition.parts().to_vec(),
            n,
            enumerated: Box::new(enumerated),
            weyl: Box::new(weyl),
        });
    }

    log::debug!("s{partition} in {n} variables: {} terms agree", enumerated.len());
    Ok(enumerated)
}
