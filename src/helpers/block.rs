use std::iter::Enumerate;
use std::str::Lines;

/// A run of consecutive non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-based line number of `lines[0]` in the original input.
    pub first_line: usize,
    /// The lines of the block, trimmed.
    pub lines: Vec<&'a str>,
}

impl Block<'_> {
    /// Iterates over the lines of the block along with their 1-based line
    /// numbers in the original input.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        (self.first_line..).zip(self.lines.iter().copied())
    }
}

/// Splits `input` into blocks separated by blank lines.
///
/// Any number of blank lines (lines that are empty after trimming) separate
/// two blocks. Blank lines before the first and after the last block are
/// ignored, so this never yields an empty block.
pub fn blocks(input: &str) -> Blocks<'_> {
    Blocks {
        lines: input.lines().enumerate(),
    }
}

/// Iterator returned by [`blocks`].
pub struct Blocks<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (first_idx, first) = self
            .lines
            .by_ref()
            .map(|(idx, line)| (idx, line.trim()))
            .find(|(_, line)| !line.is_empty())?;

        let mut lines = vec![first];
        for (_, line) in self.lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }

        Some(Block {
            first_line: first_idx + 1,
            lines,
        })
    }
}
