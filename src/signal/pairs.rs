use itertools::Itertools;

use crate::debugln;
use crate::helpers::{blocks, Block};

use super::{compare, is_in_order, LoadError, SignalValue, Verdict};

/// Two packets that are checked against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub left: SignalValue,
    pub right: SignalValue,
}

impl Pair {
    pub fn new(left: SignalValue, right: SignalValue) -> Self {
        Self { left, right }
    }

    pub fn verdict(&self) -> Verdict {
        compare(&self.left, &self.right)
    }

    pub fn is_in_order(&self) -> bool {
        is_in_order(&self.left, &self.right)
    }

    /// Both packets, left first.
    pub fn packets(&self) -> [&SignalValue; 2] {
        [&self.left, &self.right]
    }
}

/// Parses `input` into pairs: blocks of exactly two packets, separated by
/// blank lines.
pub fn load_pairs(input: &str) -> Result<Vec<Pair>, LoadError> {
    let pairs: Vec<Pair> = blocks(input)
        .enumerate()
        .map(|(i, block)| parse_pair(i + 1, &block))
        .collect::<Result<_, _>>()?;

    debugln!("Loaded {} pairs", pairs.len());
    Ok(pairs)
}

fn parse_pair(index: usize, block: &Block<'_>) -> Result<Pair, LoadError> {
    let Some((left, right)) = block.numbered_lines().collect_tuple() else {
        return Err(LoadError::PairSize {
            pair: index,
            line: block.first_line,
            count: block.lines.len(),
        });
    };

    Ok(Pair::new(parse_packet(left)?, parse_packet(right)?))
}

fn parse_packet((line, text): (usize, &str)) -> Result<SignalValue, LoadError> {
    text.parse::<SignalValue>()
        .map_err(|source| LoadError::Packet { line, source })
}

/// Sum of the 1-based indices of the pairs that are in the right order.
pub fn in_order_index_sum(pairs: &[Pair]) -> usize {
    pairs
        .iter()
        .enumerate()
        .filter(|(i, pair)| {
            let index = i + 1;
            debugln!();
            debugln!("== Pair {index} ==");
            let in_order = pair.is_in_order();
            debugln!("in order: {in_order}");
            in_order
        })
        .map(|(i, _)| i + 1)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    use crate::signal;

    #[test]
    fn loads_pairs() {
        let input = indoc! {"
            [1,1,3,1,1]
            [1,1,5,1,1]

            [[1],[2,3,4]]
            [[1],4]
        "};
        let pairs = load_pairs(input).unwrap();
        assert_eq!(
            pairs,
            vec![
                Pair::new(signal!([1, 1, 3, 1, 1]), signal!([1, 1, 5, 1, 1])),
                Pair::new(signal!([[1], [2, 3, 4]]), signal!([[1], 4])),
            ]
        );
    }

    #[test]
    fn extra_blank_lines() {
        let input = "\n\n[1]\n[2]\n\n\n\n[3]\n[]\n\n";
        let pairs = load_pairs(input).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], Pair::new(signal!([3]), signal!([])));
    }

    #[test]
    fn empty_input() {
        assert_eq!(load_pairs(""), Ok(vec![]));
        assert_eq!(in_order_index_sum(&[]), 0);
    }

    #[test]
    fn wrong_block_size() {
        let input = "[1]\n[2]\n\n[3]\n\n[4]\n[5]\n";
        assert!(matches!(
            load_pairs(input),
            Err(LoadError::PairSize {
                pair: 2,
                line: 4,
                count: 1
            })
        ));

        let input = "[1]\n[2]\n[3]\n";
        assert!(matches!(
            load_pairs(input),
            Err(LoadError::PairSize {
                pair: 1,
                line: 1,
                count: 3
            })
        ));
    }

    #[test]
    fn malformed_packet_line() {
        let input = "[1]\n[2]\n\n[3]\n[4,\n";
        let Err(LoadError::Packet { line, source }) = load_pairs(input) else {
            panic!("expected a packet error");
        };
        assert_eq!(line, 5);
        assert_eq!(source.position, 3);
    }

    #[test]
    fn deeply_nested_packet_is_an_error() {
        let deep = format!("{}{}", "[".repeat(10_000), "]".repeat(10_000));
        let input = format!("[1]\n{deep}\n");
        let Err(LoadError::Packet { line, source }) = load_pairs(&input) else {
            panic!("expected a packet error");
        };
        assert_eq!(line, 2);
        assert_eq!(source.position, crate::signal::MAX_DEPTH);
    }

    #[test]
    fn equal_pairs_are_in_order() {
        let pairs = [
            Pair::new(signal!([1]), signal!([[1]])),
            Pair::new(signal!([2]), signal!([1])),
            Pair::new(signal!([3, 3]), signal!([3, 3])),
        ];
        assert_eq!(pairs[0].verdict(), Verdict::Equal);
        assert_eq!(in_order_index_sum(&pairs), 1 + 3);
    }
}
