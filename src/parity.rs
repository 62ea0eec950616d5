/// Reorders `values` in place so that every even value precedes every odd
/// value. Order within each parity class is not preserved.
///
/// Two cursors walk in from both ends; the left one stops on an odd value,
/// the right one on an even value, and the pair is swapped.
pub fn partition_by_parity(values: &mut [i64]) {
    if values.len() < 2 {
        return;
    }
    let (mut l, mut r) = (0, values.len() - 1);
    while l < r {
        while l < r && values[l] % 2 == 0 {
            l += 1;
        }
        while l < r && values[r] % 2 != 0 {
            r -= 1;
        }
        if l < r {
            values.swap(l, r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_cases() {
        let mut v = vec![1, 2, 3, 4];
        partition_by_parity(&mut v);
        assert_eq!(v, vec![4, 2, 3, 1]);

        let mut v: Vec<i64> = vec![];
        partition_by_parity(&mut v);
        assert!(v.is_empty());

        let mut v = vec![-3, -2];
        partition_by_parity(&mut v);
        assert_eq!(v, vec![-2, -3]);
    }
}
