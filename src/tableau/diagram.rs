use core::fmt;

use super::shape::{Cell, Shape};
use crate::csp::Label;
use crate::error::{Result, SchurError};

/// Marker printed for a cell which has not been labelled.
pub const UNSET: &str = "x";

fn check_dimensions<T>(shape: &Shape, rows: &[Vec<T>]) -> Result<()> {
    let found = rows.iter().map(Vec::len).collect::<Vec<_>>();
    if found != shape.row_lengths() {
        return Err(SchurError::ShapeMismatch {
            expected: shape.row_lengths().to_vec(),
            found,
        });
    }
    Ok(())
}

fn write_rows<'a, I, R>(f: &mut fmt::Formatter<'_>, rows: I) -> fmt::Result
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = Option<&'a Label>>,
{
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        for (j, label) in row.into_iter().enumerate() {
            if j > 0 {
                write!(f, ",")?;
            }
            match label {
                Some(label) => write!(f, "{label}")?,
                None => write!(f, "{UNSET}")?,
            }
        }
    }
    Ok(())
}

/// A Young diagram whose cells may or may not carry a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    shape: Shape,
    cells: Vec<Vec<Option<Label>>>,
}

impl Diagram {
    /// A diagram with every cell unset.
    pub fn new(shape: Shape) -> Self {
        let cells = shape.row_lengths().iter().map(|&len| vec![None; len]).collect();
        Diagram { shape, cells }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Label every cell from `rows`, which must have exactly the diagram's row lengths.
    pub fn label(&mut self, rows: &[Vec<Label>]) -> Result<()> {
        check_dimensions(&self.shape, rows)?;
        for (cells, labels) in self.cells.iter_mut().zip(rows) {
            for (cell, &label) in cells.iter_mut().zip(labels) {
                *cell = Some(label);
            }
        }
        Ok(())
    }

    pub fn set(&mut self, cell: Cell, label: Label) -> Result<()> {
        if !self.shape.contains(cell) {
            return Err(SchurError::CellOutOfShape {
                row: cell.row,
                col: cell.col,
                row_lengths: self.shape.row_lengths().to_vec(),
            });
        }
        self.cells[cell.row][cell.col] = Some(label);
        Ok(())
    }

    pub fn get(&self, cell: Cell) -> Option<Label> {
        self.cells.get(cell.row)?.get(cell.col).copied().flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// The labelled tableau, if every cell is set.
    pub fn to_tableau(&self) -> Option<Tableau> {
        let rows = self
            .cells
            .iter()
            .map(|row| row.iter().copied().collect::<Option<Vec<_>>>())
            .collect::<Option<Vec<_>>>()?;
        Some(Tableau {
            shape: self.shape.clone(),
            rows,
        })
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.cells.iter().map(|row| row.iter().map(Option::as_ref)))
    }
}

/// A labelling of every cell of a shape.
///
/// Tableaux of the same shape order lexicographically by their row-major labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TableauRows")
)]
pub struct Tableau {
    shape: Shape,
    rows: Vec<Vec<Label>>,
}

/// Unchecked wire form of a [`Tableau`]; deserialization goes through [`Tableau::from_rows`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TableauRows {
    shape: Shape,
    rows: Vec<Vec<Label>>,
}

#[cfg(feature = "serde")]
impl TryFrom<TableauRows> for Tableau {
    type Error = SchurError;

    fn try_from(raw: TableauRows) -> Result<Self> {
        Tableau::from_rows(raw.shape, raw.rows)
    }
}

impl Tableau {
    /// Fails with [`SchurError::ShapeMismatch`] unless `rows` has exactly the shape's row lengths.
    /// The labels themselves are not checked; see [`Tableau::is_semistandard`].
    pub fn from_rows(shape: Shape, rows: Vec<Vec<Label>>) -> Result<Self> {
        check_dimensions(&shape, &rows)?;
        Ok(Tableau { shape, rows })
    }

    pub(crate) fn from_rows_unchecked(shape: Shape, rows: Vec<Vec<Label>>) -> Self {
        debug_assert!(check_dimensions(&shape, &rows).is_ok());
        Tableau { shape, rows }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn rows(&self) -> &[Vec<Label>] {
        &self.rows
    }

    pub fn get(&self, cell: Cell) -> Option<Label> {
        self.rows.get(cell.row)?.get(cell.col).copied()
    }

    /// Labels in row-major order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Occurrence count of each positive label; entry `i` counts label `i + 1`.
    ///
    /// The result has at least `n` entries, and more if a label above `n` occurs, so every
    /// positive label is counted. Label `0` is not a tableau label and is not counted.
    pub fn content(&self, n: usize) -> Vec<u32> {
        let len = self.labels().max().unwrap_or(0).max(n);
        let mut counts = vec![0; len];
        for label in self.labels().filter(|&label| label >= 1) {
            counts[label - 1] += 1;
        }
        counts
    }

    /// Labels are positive, weakly increasing along rows and strictly increasing down columns.
    pub fn is_semistandard(&self) -> bool {
        let positive = self.labels().all(|label| label >= 1);
        let rows_weak = self
            .rows
            .iter()
            .all(|row| row.windows(2).all(|pair| pair[0] <= pair[1]));
        let columns_strict = self.shape.cells().all(|cell| {
            match self.shape.cell(cell.row + 1, cell.col) {
                Some(below) => self.rows[cell.row][cell.col] < self.rows[below.row][below.col],
                None => true,
            }
        });
        positive && rows_weak && columns_strict
    }

    pub fn to_diagram(&self) -> Diagram {
        Diagram {
            shape: self.shape.clone(),
            cells: self
                .rows
                .iter()
                .map(|row| row.iter().copied().map(Some).collect())
                .collect(),
        }
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows.iter().map(|row| row.iter().map(Some)))
    }
}
