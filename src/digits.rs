/// All integers `1..10^cnt` as decimal strings, in ascending order.
///
/// Built by filling `cnt` digit positions with 0..=9 in order and stripping
/// leading zeros from each complete assignment, so the cost is
/// O(10^cnt * cnt). `cnt == 0` yields nothing.
pub fn count_numbers(cnt: usize) -> Vec<String> {
    let mut num = vec!['0'; cnt];
    let mut res = Vec::new();
    build_number(&mut num, 0, &mut res);
    tracing::trace!(cnt, generated = res.len(), "count_numbers");
    res
}

fn build_number(num: &mut [char], pos: usize, res: &mut Vec<String>) {
    if pos == num.len() {
        let start = num.iter().position(|&d| d != '0');
        // all zeros is not in range
        if let Some(start) = start {
            res.push(num[start..].iter().collect());
        }
        return;
    }
    for d in '0'..='9' {
        num[pos] = d;
        build_number(num, pos + 1, res);
    }
}
