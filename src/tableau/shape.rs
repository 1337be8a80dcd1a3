/// A cell of a Young diagram, addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

/// A Young diagram: left-justified rows whose lengths are non-increasing from top to bottom.
///
/// Rows are given by length; the diagram is jagged, so a position `(row, col)` is only a cell
/// when `col < row_lengths[row]`. Use [`Shape::cell`] to ask whether a position exists rather
/// than indexing past the end of a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Shape {
    row_lengths: Vec<usize>,
}

impl From<Vec<usize>> for Shape {
    fn from(row_lengths: Vec<usize>) -> Self {
        Shape::new(row_lengths)
    }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self {
        shape.row_lengths
    }
}

impl Shape {
    /// Row lengths are sorted into canonical (non-increasing) order and empty rows dropped.
    pub fn new(row_lengths: impl Into<Vec<usize>>) -> Self {
        let mut row_lengths = row_lengths.into();
        row_lengths.retain(|&r| r > 0);
        row_lengths.sort_unstable_by(|a, b| b.cmp(a));
        Shape { row_lengths }
    }

    pub fn row_lengths(&self) -> &[usize] {
        &self.row_lengths
    }

    pub fn num_rows(&self) -> usize {
        self.row_lengths.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.row_lengths.first().copied().unwrap_or(0)
    }

    pub fn num_cells(&self) -> usize {
        self.row_lengths.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.row_lengths.is_empty()
    }

    /// The cell at `(row, col)`, if the diagram has one there.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        match self.row_lengths.get(row) {
            Some(&len) if col < len => Some(Cell { row, col }),
            _ => None,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cell(cell.row, cell.col).is_some()
    }

    /// Number of cells in column `col`.
    pub fn column_height(&self, col: usize) -> usize {
        self.row_lengths.iter().take_while(|&&len| col < len).count()
    }

    /// The tallest column; a strictly increasing column this tall needs at least this many labels.
    pub fn max_column_height(&self) -> usize {
        self.column_height(0)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.row_lengths
            .iter()
            .enumerate()
            .flat_map(|(row, &len)| (0..len).map(move |col| Cell { row, col }))
    }
}
