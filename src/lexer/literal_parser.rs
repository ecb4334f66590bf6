//! 数値リテラルと case ラベルの認識
//!
//! Recognizers only report how much text a literal spans; no values are parsed.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{char, one_of, satisfy};
use nom::combinator::{not, opt, recognize};
use nom::sequence::{pair, terminated, tuple};
use nom::IResult;

fn is_digit_or_underscore(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

fn digits(input: &str) -> IResult<&str, &str> {
    take_while1(is_digit_or_underscore)(input)
}

/// `[eE][-+]?[0-9_]+`
fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digits)))(input)
}

/// Tail of a literal that started with `.`: `[0-9_]+` plus an optional exponent.
pub fn fraction_tail(input: &str) -> IResult<&str, &str> {
    recognize(pair(digits, opt(exponent)))(input)
}

/// Tail of a hex literal after the leading `0`.
pub fn hex_tail(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        one_of("xX"),
        take_while1(|c: char| c.is_ascii_hexdigit() || c == '_'),
    ))(input)
}

/// Tail of an octal literal after the leading `0`.
pub fn octal_tail(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| ('0'..='7').contains(&c) || c == '_')(input)
}

/// Tail of a decimal literal after its first digit. Every part is optional,
/// so this never fails.
pub fn decimal_tail(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        take_while(is_digit_or_underscore),
        opt(char('.')),
        take_while(is_digit_or_underscore),
        opt(exponent),
    )))(input)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `case` or `default` as a whole word.
fn case_label(input: &str) -> IResult<&str, &str> {
    terminated(
        alt((tag("case"), tag("default"))),
        not(satisfy(is_word_char)),
    )(input)
}

pub fn starts_with_case_label(text: &str) -> bool {
    case_label(text).is_ok()
}
