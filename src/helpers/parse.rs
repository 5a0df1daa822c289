use std::fmt;
use std::str::FromStr;

use combine::{easy, EasyParser, ParseError as CombineParseError, Parser, Stream};

/// An owned parse error. Positions are byte offsets into the parsed string.
pub type ParseError = easy::Errors<char, String, usize>;
pub type Result<T> = std::result::Result<T, ParseError>;

/// Runs `parser` over the whole of `s`, failing if anything is left over.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
        .map_err(|err| {
            err.map_range(|range| range.to_owned())
                .map_position(|pos| pos.translate_position(s))
        })
}

/// An optionally negative base-10 integer, e.g. `42` or `-7`.
///
/// Values that overflow `T` fail with the message from `T`'s [`FromStr`].
pub fn decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    T::Err: fmt::Display,
    Input: Stream<Token = char>,
    Input::Error: CombineParseError<Input::Token, Input::Range, Input::Position>,
{
    use combine::parser::{char::digit, combinator};

    let sign = combine::optional(combine::token('-'));
    let digits = combine::skip_many1(digit());
    combinator::from_str(combinator::recognize::<String, _, _>((sign, digits)))
        .expected("integer")
}

/// Zero or more spaces or tabs. Unlike `combine::parser::char::spaces`, never
/// crosses a line break.
pub fn blanks<Input>() -> impl Parser<Input, Output = ()>
where
    Input: Stream<Token = char>,
    Input::Error: CombineParseError<Input::Token, Input::Range, Input::Position>,
{
    combine::skip_many(combine::one_of([' ', '\t'])).expected("whitespace")
}
