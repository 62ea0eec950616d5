use crate::HashSet;

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: usize) -> usize {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Number of cells of a `rows` x `cols` board reachable from (0, 0) by moving
/// right or down through cells with `digit_sum(r) + digit_sum(c) <= limit`.
///
/// Only visited cells are stored, so huge boards with a small `limit` are
/// cheap.
pub fn count_reachable(rows: usize, cols: usize, limit: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    let allowed = |r: usize, c: usize| digit_sum(r) + digit_sum(c) <= limit;

    let mut visited: HashSet<(usize, usize)> = HashSet::default();
    let mut todo = vec![(0, 0)];
    while let Some((r, c)) = todo.pop() {
        if r >= rows || c >= cols || visited.contains(&(r, c)) || !allowed(r, c) {
            continue;
        }
        visited.insert((r, c));
        // r < rows and c < cols, so neither step overflows
        todo.push((r, c + 1));
        todo.push((r + 1, c));
    }
    visited.len()
}
