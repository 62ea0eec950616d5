use crate::Grid;

/// Clockwise spiral linearization starting at the top-left cell.
///
/// Walks right, down, left, then up, each leg stopping before the edge or an
/// already visited cell, then steps right into the next inner ring. Stops when
/// that step is blocked.
pub fn spiral_order<T: Clone>(grid: &Grid<T>) -> Vec<T> {
    if grid.is_empty() {
        return vec![];
    }
    let (rows, cols) = (grid.rows(), grid.cols());
    let cells = grid.cells();
    let mut visited = vec![false; cells.len()];
    let mut res = Vec::with_capacity(cells.len());

    let (mut r, mut c) = (0usize, 0usize);
    let is_open = |visited: &[bool], r: usize, c: usize| !visited[grid.index_of(r, c)];

    let mut take = |visited: &mut [bool], r: usize, c: usize| {
        let idx = grid.index_of(r, c);
        visited[idx] = true;
        res.push(cells[idx].clone());
    };

    while c < cols && is_open(&visited, r, c) {
        while c + 1 < cols && is_open(&visited, r, c + 1) {
            take(&mut visited, r, c);
            c += 1;
        }
        while r + 1 < rows && is_open(&visited, r + 1, c) {
            take(&mut visited, r, c);
            r += 1;
        }
        while c > 0 && is_open(&visited, r, c - 1) {
            take(&mut visited, r, c);
            c -= 1;
        }
        while r > 0 && is_open(&visited, r - 1, c) {
            take(&mut visited, r, c);
            r -= 1;
        }
        take(&mut visited, r, c);
        c += 1;
    }

    tracing::trace!(rows, cols, "spiral");
    res
}
