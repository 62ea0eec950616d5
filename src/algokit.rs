use algokit::{
    count_numbers, count_reachable, partition_by_parity, spiral_order, word_exists, Grid,
    MatcherBuilder, MinStack, Strategy,
};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("count_numbers(2): {:?}", count_numbers(2));

    let cases = [
        ("aab", "c*a*b"),
        ("mississippi", "mis*is*p*."),
        ("a", "ab*"),
        ("aaa", "ab*a*c*a"),
    ];
    for strategy in [Strategy::Backtrack, Strategy::Table, Strategy::Memo] {
        for (text, pattern) in cases {
            let mut m = MatcherBuilder::new().strategy(strategy).build(pattern)?;
            println!("{:?} {:?} ~ {:?}: {}", strategy, text, pattern, m.is_match(text)?);
        }
    }

    let mut values = vec![1, 2, 3, 4];
    partition_by_parity(&mut values);
    println!("partition_by_parity: {:?}", values);

    let grid = Grid::new(vec![
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
        vec![13, 14, 15, 16],
    ])?;
    println!("spiral_order: {:?}", spiral_order(&grid));

    let mut stack = MinStack::new();
    for x in [-2, 0, -3] {
        stack.push(x);
    }
    println!("min: {}", stack.get_min()?);
    stack.pop()?;
    println!("top: {}, min: {}", stack.top()?, stack.get_min()?);

    let board = Grid::from_lines("ABCE\nSFCS\nADEE")?;
    println!("word_exists(ABCCED): {}", word_exists(&board, "ABCCED"));
    println!("count_reachable(4, 7, 5): {}", count_reachable(4, 7, 5));

    Ok(())
}
