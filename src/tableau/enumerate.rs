use super::diagram::Tableau;
use super::model::TableauModel;
use super::shape::Shape;
use crate::csp::{Label, NoopTrace, SearchConfig, SearchTrace};

/// Every semistandard tableau of `shape` with labels in `1..=max_label`.
///
/// Tableaux come back sorted by their row-major labels, without duplicates. The result is empty
/// when `max_label` is smaller than the tallest column of `shape`, and holds exactly the empty
/// tableau when `shape` has no cells.
pub fn enumerate_tableaux(shape: &Shape, max_label: Label) -> Vec<Tableau> {
    enumerate_tableaux_with(shape, max_label, &SearchConfig::default(), &NoopTrace)
}

pub fn enumerate_tableaux_with(
    shape: &Shape,
    max_label: Label,
    config: &SearchConfig,
    trace: &dyn SearchTrace,
) -> Vec<Tableau> {
    let model = TableauModel::build(shape, max_label);
    let tableaux = model
        .csp()
        .solve_all_with(config, trace)
        .iter()
        .map(|values| model.tableau(values))
        .collect::<Vec<_>>();

    log::debug!(
        "shape {:?} with {} labels: {} tableaux ({} constraints)",
        shape.row_lengths(),
        max_label,
        tableaux.len(),
        model.constraint_count(),
    );
    tableaux
}
