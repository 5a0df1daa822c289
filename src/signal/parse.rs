use std::str::FromStr;

use combine::{easy, ParseError, Parser, Stream};

use crate::helpers::parse;

use super::SignalValue;

/// Deepest list nesting a packet may have. The parser and the comparator both
/// recurse once per level.
pub const MAX_DEPTH: usize = 64;

impl SignalValue {
    /// Parses one packet in bracket notation, e.g. `[1,[2,3],[]]`. Spaces and
    /// tabs are allowed around brackets and commas.
    ///
    /// Does not limit nesting; callers go through [`FromStr`], which checks
    /// [`MAX_DEPTH`] first.
    fn parser<Input>() -> impl Parser<Input, Output = Self>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        value()
    }
}

impl FromStr for SignalValue {
    type Err = parse::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_depth(s)?;

        let trimmed = s.trim();
        // Keep reported positions relative to `s` rather than `trimmed`.
        let offset = s.len() - s.trim_start().len();
        parse::from_str(trimmed, Self::parser())
            .map_err(|err| err.map_position(|pos| pos + offset))
    }
}

/// Fails at the first `[` that opens a list deeper than [`MAX_DEPTH`].
fn check_depth(s: &str) -> Result<(), parse::ParseError> {
    let mut depth = 0usize;
    for (offset, c) in s.char_indices() {
        match c {
            '[' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    let message = format!("nesting deeper than {MAX_DEPTH} levels");
                    return Err(easy::Errors::from_error(
                        offset,
                        easy::Error::Message(easy::Info::Owned(message)),
                    ));
                }
            }
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn value_<Input>() -> impl Parser<Input, Output = SignalValue>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let integer = parse::decimal_integer().map(SignalValue::Integer);

    let item = (value(), parse::blanks()).map(|(item, _)| item);
    let comma = (combine::token(','), parse::blanks());
    let list = combine::between(
        (combine::token('['), parse::blanks()),
        combine::token(']'),
        combine::sep_by(item, comma),
    )
    .map(SignalValue::List);

    combine::choice((integer, list))
}

combine::parser! {
    fn value[Input]()(Input) -> SignalValue
    where [Input: Stream<Token = char>]
    {
        value_()
    }
}
