use anyhow::{ensure, Result};

/// Rectangular row-major grid. Zero rows or zero columns make an empty grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build from a list of rows; all rows must have the same length.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len();
        let cols = rows.first().map_or(0, |r| r.len());
        let mut cells = Vec::with_capacity(num_rows * cols);
        for (idx, row) in rows.into_iter().enumerate() {
            ensure!(
                row.len() == cols,
                "row {} has {} columns, expected {}",
                idx,
                row.len(),
                cols
            );
            cells.extend(row);
        }
        // a list of empty rows is still an empty grid
        let rows = if cols == 0 { 0 } else { num_rows };
        Ok(Grid { rows, cols, cells })
    }

    pub fn from_shape(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        ensure!(
            cells.len() == rows * cols,
            "{} cells do not fill a {}x{} grid",
            cells.len(),
            rows,
            cols
        );
        if rows == 0 || cols == 0 {
            return Ok(Grid {
                rows: 0,
                cols: 0,
                cells,
            });
        }
        Ok(Grid { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        if r < self.rows && c < self.cols {
            Some(&self.cells[r * self.cols + c])
        } else {
            None
        }
    }

    pub(crate) fn index_of(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    pub(crate) fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl Grid<char> {
    /// One row per line; lines must be of equal length.
    pub fn from_lines(s: &str) -> Result<Self> {
        Grid::new(s.lines().map(|l| l.chars().collect()).collect())
    }
}
