//! Semistandard tableaux as a constraint model.
//!
//! Every cell of the shape becomes one variable with domain `1..=max_label`. Two families of
//! ordering constraints make a solution semistandard:
//!
//! - rows: `cell[i][j] <= cell[i][j + 1]` for adjacent cells in a row;
//! - columns: `cell[i][c] < cell[i + 1][c]` for vertically adjacent cells.
//!
//! Columns are walked down the conceptually right-padded grid and stop at the first row which has
//! no cell in that column; a missing cell is never compared against anything.
use super::diagram::Tableau;
use super::shape::{Cell, Shape};
use crate::csp::{Csp, Domain, Label, Relation, VarId};

/// Pairs of cells related by the semistandard ordering rules, rows first, then columns.
pub fn ordering_constraints(shape: &Shape) -> Vec<(Cell, Relation, Cell)> {
    let mut pairs = Vec::new();

    // Weakly increasing along rows
    for (row, &len) in shape.row_lengths().iter().enumerate() {
        for col in 1..len {
            pairs.push((Cell::new(row, col - 1), Relation::LessEq, Cell::new(row, col)));
        }
    }

    // Strictly increasing down columns
    for col in 0..shape.width() {
        for row in 0..shape.num_rows() {
            let (Some(upper), Some(lower)) = (shape.cell(row, col), shape.cell(row + 1, col)) else {
                break;
            };
            pairs.push((upper, Relation::Less, lower));
        }
    }

    pairs
}

/// Number of ordering constraints the model of `shape` has, whatever the label bound.
pub fn count_constraints(shape: &Shape) -> usize {
    ordering_constraints(shape).len()
}

/// A constraint model whose solutions are exactly the semistandard tableaux of a shape with
/// labels in `1..=max_label`.
///
/// Variables are keyed by [`Cell`]; they are allocated in row-major order, so the model's
/// `VarId`s coincide with the row-major cell index.
#[derive(Debug, Clone)]
pub struct TableauModel {
    shape: Shape,
    max_label: Label,
    csp: Csp,
    // cell_vars[row][col] is the variable for that cell
    cell_vars: Vec<Vec<VarId>>,
    var_cells: Vec<Cell>,
}

impl TableauModel {
    pub fn build(shape: &Shape, max_label: Label) -> Self {
        let mut csp = Csp::new();
        let mut cell_vars = shape
            .row_lengths()
            .iter()
            .map(|&len| Vec::with_capacity(len))
            .collect::<Vec<_>>();
        let mut var_cells = Vec::with_capacity(shape.num_cells());

        for cell in shape.cells() {
            let var = csp.add_var(Domain::new(1, max_label));
            cell_vars[cell.row].push(var);
            var_cells.push(cell);
        }

        let mut model = TableauModel {
            shape: shape.clone(),
            max_label,
            csp,
            cell_vars,
            var_cells,
        };

        for (left, relation, right) in ordering_constraints(shape) {
            let left = model.cell_vars[left.row][left.col];
            let right = model.cell_vars[right.row][right.col];
            model.csp.add_constraint(left, relation, right);
        }

        model
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn max_label(&self) -> Label {
        self.max_label
    }

    pub fn csp(&self) -> &Csp {
        &self.csp
    }

    pub fn num_vars(&self) -> usize {
        self.var_cells.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.csp.constraints().len()
    }

    /// The variable standing for `cell`, if the shape has that cell.
    pub fn var(&self, cell: Cell) -> Option<VarId> {
        self.cell_vars.get(cell.row)?.get(cell.col).copied()
    }

    pub fn cell(&self, var: VarId) -> Option<Cell> {
        self.var_cells.get(var).copied()
    }

    /// Read a solution of [`TableauModel::csp`] back into a tableau.
    ///
    /// # Panics
    ///
    /// If `values` does not hold exactly one value per variable.
    pub fn tableau(&self, values: &[Label]) -> Tableau {
        assert_eq!(values.len(), self.num_vars(), "one value per cell");
        let rows = self
            .cell_vars
            .iter()
            .map(|vars| vars.iter().map(|&var| values[var]).collect())
            .collect();
        Tableau::from_rows_unchecked(self.shape.clone(), rows)
    }
}
