//! Gap detection over extracted sequence tokens.
//!
//! Presence is decided on the integer value, so `"7"`, `"07"`, `"007"` and the
//! fullwidth `"７"` all mark 7 as present. Missing values are zero-padded to
//! the digit count of the largest observed number.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SeqGapError};

/// Order in which missing values are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Returns every integer in `1..=max` that no token represents.
///
/// # Errors
/// Returns `EmptySequence` when `tokens` is empty, and the errors of
/// [`parse_token`] for the first token that is not a number.
pub fn find_gaps<I, S>(tokens: I, order: SortOrder) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let present = parse_tokens(tokens)?;
    let max = present.last().copied().ok_or(SeqGapError::EmptySequence)?;
    let width = digit_count(max);

    let pad = |n: u64| format!("{n:0width$}");
    let missing = (1..=max).filter(|n| !present.contains(n));

    Ok(match order {
        SortOrder::Ascending => missing.map(pad).collect(),
        SortOrder::Descending => missing.rev().map(pad).collect(),
    })
}

fn parse_tokens<I, S>(tokens: I) -> Result<BTreeSet<u64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| parse_token(token.as_ref()))
        .collect()
}

/// Parses a run of decimal digits from any script (`"12"`, `"１２"`, `"١٢"`).
///
/// Signs, separators and whitespace are rejected.
///
/// # Errors
/// Returns `NonNumericToken` if `token` is empty or holds a non-digit, and
/// `TokenTooLarge` if its value does not fit in a `u64`.
pub fn parse_token(token: &str) -> Result<u64> {
    let digits: Option<Vec<u32>> = token.chars().map(decimal_value).collect();
    let digits = digits
        .filter(|d| !d.is_empty())
        .ok_or_else(|| SeqGapError::NonNumericToken {
            token: token.to_string(),
        })?;

    digits
        .into_iter()
        .try_fold(0u64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit))
        })
        .ok_or_else(|| SeqGapError::TokenTooLarge {
            token: token.to_string(),
        })
}

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}$").expect("Invalid regex"));

fn is_decimal_digit(ch: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(ch.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit (general category `Nd`), the class `\d`
/// matches.
fn decimal_value(ch: char) -> Option<u32> {
    if let Some(digit) = ch.to_digit(10) {
        return Some(digit);
    }
    if !is_decimal_digit(ch) {
        return None;
    }

    // Nd code points are assigned in contiguous runs of whole 0..=9 blocks,
    // so the offset from the start of the run gives the value.
    let code = u32::from(ch);
    let mut start = code;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((code - start) % 10)
}

/// Number of decimal digits in `n` (1 for zero).
#[must_use]
pub const fn digit_count(n: u64) -> usize {
    match n.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

#[cfg(test)]
#[path = "gaps_tests.rs"]
mod tests;
