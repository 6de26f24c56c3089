//! Validation of the positional `N` argument.

use thiserror::Error;

/// Reasons the command line cannot be turned into a number to root.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("Missing argument N.")]
    Missing,
    #[error("Not a positive non-null integer: '{0}'")]
    NotPositive(String),
}

/// Parse `raw` as a strictly positive base-10 integer.
///
/// Anything that is not a whole `i64` (empty, trailing garbage, out of
/// range) or is `<= 0` is rejected with the original text kept for the
/// message.
pub fn parse_number(raw: Option<&str>) -> Result<i64, ArgError> {
    let raw = raw.ok_or(ArgError::Missing)?;
    match raw.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgError::NotPositive(raw.to_owned())),
    }
}
