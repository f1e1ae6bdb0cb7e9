//! Text formatting and parsing.

use std::{fmt, str::FromStr};

use crate::error::ParseVectorError;

use super::Vector;

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as a parenthesized, comma-separated list of its elements: `(1, 2, 3)`.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

/// Parses exactly `N` elements, separated by whitespace and/or commas.
///
/// The list may be wrapped in a single pair of parentheses, so the output of the [`fmt::Display`]
/// impl parses back into the same vector.
///
/// # Examples
///
/// ```
/// # use mgmath::*;
/// let v: Vec3f = "1 2.5   -3".parse().unwrap();
/// assert_eq!(v, vec3(1.0, 2.5, -3.0));
///
/// let v: Vec4i = "(0, 0, 0, 1)".parse().unwrap();
/// assert_eq!(v, vec4(0, 0, 0, 1));
///
/// assert!("1 2".parse::<Vec3f>().is_err());
/// ```
impl<T, const N: usize> FromStr for Vector<T, N>
where
    T: FromStr,
{
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map_err(|e| {
            log::trace!("failed to parse {s:?} as a {N}-element vector: {e}");
            e
        })
    }
}

fn parse<T: FromStr, const N: usize>(s: &str) -> Result<Vector<T, N>, ParseVectorError> {
    let s = s.trim();
    let inner = match (s.starts_with('('), s.ends_with(')')) {
        (true, true) if s.len() >= 2 => &s[1..s.len() - 1],
        (false, false) => s,
        _ => return Err(ParseVectorError::UnbalancedParens),
    };

    let tokens = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>();
    if tokens.len() != N {
        return Err(ParseVectorError::WrongCount {
            expected: N,
            found: tokens.len(),
        });
    }

    let elems = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token
                .parse()
                .map_err(|_| ParseVectorError::InvalidComponent {
                    index,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<T>, _>>()?;

    <[T; N]>::try_from(elems)
        .map(Vector)
        .map_err(|elems| ParseVectorError::WrongCount {
            expected: N,
            found: elems.len(),
        })
}
