use schur_tableaux::csp::{NoopTrace, SearchConfig, VarOrder};
use schur_tableaux::partition::{partitions_of, Partition};
use schur_tableaux::tableau::*;

use crate::formulas::hook_content_count;
use crate::strategy::arb_partition_and_bound;

use proptest::prelude::*;

/// Every labelling of `shape` with labels in `1..=max_label`, semistandard or not.
fn all_labellings(shape: &Shape, max_label: usize) -> Vec<Tableau> {
    let cells = shape.num_cells();
    if max_label == 0 && cells > 0 {
        return Vec::new();
    }

    let mut results = Vec::new();
    let mut word = vec![1; cells];
    loop {
        let mut labels = word.iter().copied();
        let rows = shape
            .row_lengths()
            .iter()
            .map(|&len| labels.by_ref().take(len).collect())
            .collect();
        results.push(Tableau::from_rows(shape.clone(), rows).unwrap());

        // odometer increment, last cell fastest
        let Some(pos) = word.iter().rposition(|&l| l < max_label) else {
            return results;
        };
        word[pos] += 1;
        for l in &mut word[pos + 1..] {
            *l = 1;
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_tableau_is_semistandard((partition, max_label) in arb_partition_and_bound(7, 4)) {
        let shape = partition.shape();
        for tableau in enumerate_tableaux(&shape, max_label) {
            prop_assert_eq!(tableau.shape(), &shape);
            prop_assert!(tableau.is_semistandard(), "{}", tableau);
            prop_assert!(tableau.labels().all(|l| (1..=max_label).contains(&l)));
        }
    }

    #[test]
    fn content_accounts_for_every_cell((partition, max_label) in arb_partition_and_bound(7, 4)) {
        for tableau in enumerate_tableaux(&partition.shape(), max_label) {
            let total: u32 = tableau.content(max_label).iter().sum();
            prop_assert_eq!(total as usize, partition.size());
        }
    }

    #[test]
    fn enumeration_matches_brute_force((partition, max_label) in arb_partition_and_bound(5, 3)) {
        let shape = partition.shape();
        let expected = all_labellings(&shape, max_label)
            .into_iter()
            .filter(Tableau::is_semistandard)
            .collect::<Vec<_>>();
        prop_assert_eq!(enumerate_tableaux(&shape, max_label), expected);
    }

    #[test]
    fn results_are_sorted_and_distinct((partition, max_label) in arb_partition_and_bound(7, 4)) {
        let tableaux = enumerate_tableaux(&partition.shape(), max_label);
        prop_assert!(tableaux.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn search_configurations_agree((partition, max_label) in arb_partition_and_bound(6, 4)) {
        let shape = partition.shape();
        let reference = enumerate_tableaux(&shape, max_label);
        let config = SearchConfig { order: VarOrder::SmallestDomain, propagate: false };
        prop_assert_eq!(enumerate_tableaux_with(&shape, max_label, &config, &NoopTrace), reference);
    }
}

#[test]
fn empty_shape_yields_the_empty_tableau() {
    for max_label in 0..3 {
        let tableaux = enumerate_tableaux(&Shape::default(), max_label);
        assert_eq!(tableaux.len(), 1);
        assert_eq!(tableaux[0].labels().count(), 0);
    }
}

#[test]
fn labels_below_column_height_yield_nothing() {
    for n in 1..=8 {
        for partition in partitions_of(n) {
            let shape = partition.shape();
            let height = shape.max_column_height();
            assert!(enumerate_tableaux(&shape, height - 1).is_empty(), "{partition}");
            assert!(!enumerate_tableaux(&shape, height).is_empty(), "{partition}");
        }
    }
}

#[test]
fn counts_match_hook_content_formula() {
    for n in 0..=12 {
        for partition in partitions_of(n) {
            let vars = partition.len();
            let count = enumerate_tableaux(&partition.shape(), vars).len() as u64;
            assert_eq!(count, hook_content_count(&partition, vars), "{partition} in {vars}");
        }
    }
    // a few with more labels than rows
    for (parts, labels) in [(vec![2, 1], 4), (vec![3, 2], 5), (vec![2, 2, 2], 5)] {
        let partition = Partition::new(parts);
        let count = enumerate_tableaux(&partition.shape(), labels).len() as u64;
        assert_eq!(count, hook_content_count(&partition, labels));
    }
}

#[test]
fn reversed_row_order_is_the_same_shape() {
    let ascending = Shape::new(vec![1, 1, 2, 4]);
    let descending = Shape::new(vec![4, 2, 1, 1]);
    assert_eq!(enumerate_tableaux(&ascending, 4), enumerate_tableaux(&descending, 4));
}

#[test]
fn constraint_counts() {
    assert_eq!(count_constraints(&Shape::default()), 0);
    assert_eq!(count_constraints(&Shape::new(vec![1])), 0);
    assert_eq!(count_constraints(&Shape::new(vec![2, 1])), 2);
    assert_eq!(count_constraints(&Shape::new(vec![2, 2])), 4);
}
