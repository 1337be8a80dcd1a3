use num_traits::Zero;
use schur_tableaux::prelude::*;

use crate::formulas::hook_length_count;
use crate::strategy::arb_partition_and_vars;

use proptest::prelude::*;

#[test]
fn every_partition_up_to_six_in_its_own_length() {
    for n in 0..=6 {
        for partition in partitions_of(n) {
            let vars = partition.len();
            if let Err(err) = cross_validate(&partition, vars) {
                panic!("{err}");
            }
        }
    }
}

#[test]
fn partitions_up_to_twelve_with_at_most_four_parts() {
    for n in 7..=12 {
        for partition in partitions_of(n).into_iter().filter(|p| p.len() <= 4) {
            let s = cross_validate(&partition, partition.len()).unwrap();
            assert!(s.is_homogeneous(n as u32));
        }
    }
}

#[test]
fn kostka_number_of_squarefree_monomial_counts_standard_tableaux() {
    for n in 1..=6 {
        let squarefree = Monomial::new(vec![1; n]);
        for partition in partitions_of(n) {
            let s = schur_by_enumeration(&partition, n);
            let expected = Coefficient::from_integer(hook_length_count(&partition).into());
            assert_eq!(s.coefficient(&squarefree), expected, "{partition}");
        }
    }
}

#[test]
fn weyl_rejects_too_many_parts() {
    let partition = Partition::from([1, 1, 1, 1]);
    assert_eq!(
        schur_by_weyl(&partition, 3),
        Err(SchurError::PartitionLengthExceedsN { length: 4, n: 3 })
    );
    // enumeration has no tableaux to offer instead
    assert!(schur_by_enumeration(&partition, 3).is_zero());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn enumeration_and_weyl_agree((partition, n) in arb_partition_and_vars(6, 4)) {
        let enumerated = schur_by_enumeration(&partition, n);
        let weyl = schur_by_weyl(&partition, n).unwrap();
        prop_assert!(polynomials_equal(&enumerated, &weyl), "{} in {}", partition, n);
    }

    #[test]
    fn schur_polynomials_are_symmetric_and_homogeneous((partition, n) in arb_partition_and_vars(6, 4)) {
        let s = schur_by_enumeration(&partition, n);
        prop_assert!(s.is_symmetric(n));
        prop_assert!(s.is_homogeneous(partition.size() as u32));
        prop_assert!(!s.is_zero());
    }
}
