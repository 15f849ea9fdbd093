use nom::branch::*;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::sequence::*;
use nom::IResult;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Please enter valid numbers")]
pub struct InvalidNumber(pub String);

/// Parses user text as a decimal number, ignoring surrounding whitespace.
///
/// ```
/// # use coursework::operand::parse_operand;
/// assert_eq!(Ok(2.5), parse_operand(" 2.5 "));
/// assert_eq!(Ok(1000.0), parse_operand("1e3"));
/// assert!(parse_operand("abc").is_err());
/// ```
pub fn parse_operand(text: &str) -> Result<f64, InvalidNumber> {
    all_consuming(delimited(multispace0, number, multispace0))(text)
        .map(|(_, value)| value)
        .map_err(|_| InvalidNumber(text.to_owned()))
}

fn number(input: &str) -> IResult<&str, f64> {
    map_res(alt((decimal, non_finite)), str::parse::<f64>)(input)
}

// [+-] (digits [. digits*] | . digits) [(e|E) [+-] digits]
fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(sign),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(sign), digit1))),
    )))(input)
}

fn non_finite(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(sign),
        alt((
            tag_no_case("infinity"),
            tag_no_case("inf"),
            tag_no_case("nan"),
        )),
    ))(input)
}

fn sign(input: &str) -> IResult<&str, char> {
    one_of("+-")(input)
}

/// Renders a number for display: shortest digits that read back to the same
/// value, always with a fractional part or an exponent.
///
/// Magnitudes below `1e-4` or from `1e16` upwards switch to scientific
/// notation with a signed exponent of at least two digits.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }

    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}
