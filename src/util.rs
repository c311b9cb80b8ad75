use std::num::ParseFloatError;
use std::str::FromStr;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{Error, NumberError, Result};

#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Views bytes as text without copying.
///
/// The returned `&str` borrows from `input` and must not outlive the call that
/// produced it. Anything stored into a destination is copied from it.
#[inline]
pub(crate) fn view(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).map_err(|source| {
        cold_path();
        Error::InvalidUtf8 {
            input: lossy(input),
            source,
        }
    })
}

/// Owned rendering of an input for diagnostics.
pub(crate) fn lossy(input: &[u8]) -> String {
    String::from_utf8_lossy(input).into_owned()
}

pub(crate) fn parse_bool(input: &str) -> Result<bool> {
    match input {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => {
            cold_path();
            Err(Error::InvalidBool(input.to_owned()))
        }
    }
}

/// Parses a base-10 number at the precision of `T`.
///
/// Out-of-range integers fail; nothing is saturated or truncated.
pub(crate) fn parse_number<T>(input: &str) -> Result<T>
where
    T: FromStr,
    NumberError: From<T::Err>,
{
    input.parse::<T>().map_err(|source| {
        cold_path();
        Error::InvalidNumber {
            input: input.to_owned(),
            source: source.into(),
        }
    })
}

/// Parses a base-10 float at the precision of `T`.
///
/// A finite literal that overflows the target width fails instead of becoming
/// an infinity. Explicit `inf`/`infinity` literals are still accepted.
pub(crate) fn parse_float<T>(input: &str) -> Result<T>
where
    T: FromStr<Err = ParseFloatError> + Into<f64> + Copy,
{
    let value = parse_number::<T>(input)?;
    if Into::<f64>::into(value).is_infinite() && !is_infinity_literal(input) {
        cold_path();
        return Err(Error::InvalidNumber {
            input: input.to_owned(),
            source: NumberError::FloatRange,
        });
    }
    Ok(value)
}

fn is_infinity_literal(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

pub(crate) fn parse_date_time(input: &str) -> Result<OffsetDateTime> {
    OffsetDateTime::parse(input, &Rfc3339).map_err(|source| {
        cold_path();
        Error::InvalidDateTime {
            input: input.to_owned(),
            source,
        }
    })
}

#[cfg(feature = "serde")]
pub(crate) fn parse_char(input: &str) -> Result<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => {
            cold_path();
            Err(Error::InvalidChar(input.to_owned()))
        }
    }
}
