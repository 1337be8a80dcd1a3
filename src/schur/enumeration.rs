use num_traits::{One, Zero};

use crate::partition::Partition;
use crate::polynomial::{Coefficient, Monomial, Polynomial};
use crate::tableau::enumerate_tableaux;

/// The Schur polynomial `s_λ(x1, ..., xn)` as the sum, over every semistandard tableau of shape
/// `λ` with labels in `1..=n`, of `x1^(#1s) * x2^(#2s) * ... * xn^(#ns)`.
///
/// A partition with more than `n` parts has no such tableaux, and gives the zero polynomial.
pub fn schur_by_enumeration(partition: &Partition, n: usize) -> Polynomial {
    let tableaux = enumerate_tableaux(&partition.shape(), n);

    let mut schur = Polynomial::zero();
    for tableau in &tableaux {
        schur.add_term(Monomial::new(tableau.content(n)), Coefficient::one());
    }

    log::debug!(
        "s{} in {} variables by enumeration: {} tableaux, {} terms",
        partition,
        n,
        tableaux.len(),
        schur.len()
    );
    schur
}

#[cfg(test)]
mod tests {
    use super::schur_by_enumeration;
    use crate::partition::Partition;
    use crate::polynomial::{Monomial, Polynomial};
    use num_traits::{One, Zero};

    #[test]
    fn single_row_is_complete_homogeneous() {
        // h_2(x1, x2) = x1^2 + x1 x2 + x2^2
        let s = schur_by_enumeration(&Partition::from([2]), 2);
        let expected = [vec![2], vec![1, 1], vec![0, 2]]
            .into_iter()
            .map(|e| Polynomial::from(Monomial::new(e)))
            .sum::<Polynomial>();
        assert_eq!(s, expected);
    }

    #[test]
    fn single_column_is_elementary() {
        // e_3(x1, x2, x3) = x1 x2 x3
        let s = schur_by_enumeration(&Partition::from([1, 1, 1]), 3);
        assert_eq!(s, Polynomial::from(Monomial::new(vec![1, 1, 1])));
    }

    #[test]
    fn too_many_parts_is_zero() {
        assert!(schur_by_enumeration(&Partition::from([1, 1, 1]), 2).is_zero());
    }

    #[test]
    fn empty_partition_is_one() {
        assert_eq!(schur_by_enumeration(&Partition::empty(), 3), Polynomial::one());
        assert_eq!(schur_by_enumeration(&Partition::empty(), 0), Polynomial::one());
    }
}
