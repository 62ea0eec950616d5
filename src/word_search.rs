use crate::Grid;

// up, right, down, left
const DIRS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

fn neighbor<T>(grid: &Grid<T>, r: usize, c: usize, dir: usize) -> Option<(usize, usize)> {
    let (dr, dc) = DIRS[dir];
    let nr = r.checked_add_signed(dr)?;
    let nc = c.checked_add_signed(dc)?;
    if nr < grid.rows() && nc < grid.cols() {
        Some((nr, nc))
    } else {
        None
    }
}

struct Frame {
    r: usize,
    c: usize,
    idx: usize,
    next_dir: usize,
}

/// Returns true if `word` can be spelled by a path of 4-connected cells,
/// using each cell at most once. The search keeps its own stack of frames and
/// does not recurse.
pub fn word_exists(grid: &Grid<char>, word: &str) -> bool {
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return true;
    }
    if grid.is_empty() {
        return false;
    }

    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut todo: Vec<Frame> = Vec::new();

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if grid.get(r, c) != Some(&word[0]) {
                continue;
            }
            visited[grid.index_of(r, c)] = true;
            todo.push(Frame {
                r,
                c,
                idx: 0,
                next_dir: 0,
            });

            while let Some(top) = todo.last_mut() {
                if top.idx == word.len() - 1 {
                    tracing::trace!(start_r = r, start_c = c, "word found");
                    return true;
                }
                if top.next_dir >= DIRS.len() {
                    visited[grid.index_of(top.r, top.c)] = false;
                    todo.pop();
                    continue;
                }
                let dir = top.next_dir;
                top.next_dir += 1;
                let next_idx = top.idx + 1;
                if let Some((nr, nc)) = neighbor(grid, top.r, top.c, dir) {
                    let cell = grid.index_of(nr, nc);
                    if !visited[cell] && grid.get(nr, nc) == Some(&word[next_idx]) {
                        visited[cell] = true;
                        todo.push(Frame {
                            r: nr,
                            c: nc,
                            idx: next_idx,
                            next_dir: 0,
                        });
                    }
                }
            }
        }
    }
    false
}

/// Recursive variant of [`word_exists`]; cells on the current path are marked
/// in a mask and unmarked on the way back.
pub fn word_exists_recursive(grid: &Grid<char>, word: &str) -> bool {
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return true;
    }
    let mut used = vec![false; grid.rows() * grid.cols()];
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if find_path(grid, &word, &mut used, r, c, 0) {
                return true;
            }
        }
    }
    false
}

fn find_path(
    grid: &Grid<char>,
    word: &[char],
    used: &mut [bool],
    r: usize,
    c: usize,
    idx: usize,
) -> bool {
    let cell = grid.index_of(r, c);
    if used[cell] || grid.get(r, c) != Some(&word[idx]) {
        return false;
    }
    if idx == word.len() - 1 {
        return true;
    }
    used[cell] = true;
    let found = (0..DIRS.len()).any(|dir| match neighbor(grid, r, c, dir) {
        Some((nr, nc)) => find_path(grid, word, used, nr, nc, idx + 1),
        None => false,
    });
    used[cell] = false;
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_at_edges() {
        let g = Grid::from_lines("ab\ncd").unwrap();
        assert_eq!(neighbor(&g, 0, 0, 0), None);
        assert_eq!(neighbor(&g, 0, 0, 1), Some((0, 1)));
        assert_eq!(neighbor(&g, 0, 0, 2), Some((1, 0)));
        assert_eq!(neighbor(&g, 0, 0, 3), None);
        assert_eq!(neighbor(&g, 1, 1, 1), None);
    }

    #[test]
    fn single_cell() {
        let g = Grid::from_lines("a").unwrap();
        assert!(word_exists(&g, "a"));
        assert!(word_exists_recursive(&g, "a"));
        assert!(!word_exists(&g, "aa"));
        assert!(!word_exists_recursive(&g, "aa"));
    }
}
