//! Integer-to-English-words rendering.
//!
//! Splits the decimal digits of a value into base-1000 triplets and renders
//! them most-significant first, each non-zero triplet followed by its
//! magnitude word (thousand .. quadrillion).


mod words;

use tracing::debug;

use words::{MAGNITUDES, TEENS, TENS, UNITS};

/// Decimal digits covered by the magnitude table: six base-1000 groups, up
/// through quadrillion.
const MAX_DIGITS: usize = 18;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WordsError {
    #[error("{value} has {digits} decimal digits; magnitudes above quadrillion (18 digits) are unsupported")]
    MagnitudeOverflow { value: u64, digits: usize },
}

/// How the writer connects a hundreds word to the rest of its group when the
/// tens digit is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AndStyle {
    /// Emit "and" only when a units word follows: "three hundred and five",
    /// but plain "one hundred".
    #[default]
    Suppressed,
    /// Emit "and" whenever the tens digit is zero, even with nothing after
    /// it ("one hundred and"), matching the historical output.
    Trailing,
}

/// Spell a value as English words with the default [`AndStyle`].
pub fn number_to_words(value: u64) -> Result<Vec<&'static str>, WordsError> {
    number_to_words_with(value, AndStyle::default())
}

/// Spell a value as English words.
///
/// Returns the ordered word tokens; joining them with single spaces yields
/// the display phrase. Zero spells as `["Zero"]`. Values above 18 decimal
/// digits have no magnitude word and are rejected rather than truncated.
pub fn number_to_words_with(
    value: u64,
    style: AndStyle,
) -> Result<Vec<&'static str>, WordsError> {
    if value == 0 {
        return Ok(vec!["Zero"]);
    }

    let decimal = value.to_string();
    if decimal.len() > MAX_DIGITS {
        return Err(WordsError::MagnitudeOverflow {
            value,
            digits: decimal.len(),
        });
    }

    // Groups are built least-significant first and rendered in reverse so the
    // most significant group leads the phrase.
    let groups = split_groups(&decimal);
    let mut tokens = Vec::new();
    for (index, &group) in groups.iter().enumerate().rev() {
        if group == [0, 0, 0] {
            continue;
        }
        push_group_words(&mut tokens, group, style);
        if index >= 1 {
            tokens.push(MAGNITUDES[index - 1]);
        }
    }

    debug!(value, token_count = tokens.len());
    Ok(tokens)
}

/// Render a value as a single display phrase (words joined by spaces).
pub fn to_phrase(value: u64) -> Result<String, WordsError> {
    Ok(number_to_words(value)?.join(" "))
}

/// Render a value as a single display phrase with an explicit [`AndStyle`].
pub fn to_phrase_with(value: u64, style: AndStyle) -> Result<String, WordsError> {
    Ok(number_to_words_with(value, style)?.join(" "))
}

/// Split a decimal digit string into base-1000 triplets, least significant
/// group first. Each triplet is [hundreds, tens, units].
fn split_groups(decimal: &str) -> Vec<[u8; 3]> {
    let digits: Vec<u8> = decimal.bytes().map(|b| b - b'0').collect();
    let mut groups = Vec::with_capacity(digits.len().div_ceil(3));
    for chunk in digits.rchunks(3) {
        let mut group = [0u8; 3];
        group[3 - chunk.len()..].copy_from_slice(chunk);
        groups.push(group);
    }
    groups
}

/// Append the words for one [hundreds, tens, units] triplet.
///
/// The teen arm consumes both the tens and units digits at once, so a group
/// never emits a teen word and a units word together.
fn push_group_words(tokens: &mut Vec<&'static str>, [h, t, u]: [u8; 3], style: AndStyle) {
    if h != 0 {
        tokens.push(UNITS[h as usize]);
        tokens.push("hundred");
        if t == 0 && (u != 0 || style == AndStyle::Trailing) {
            tokens.push("and");
        }
    }
    match t {
        0 => {
            if u != 0 {
                tokens.push(UNITS[u as usize]);
            }
        }
        1 => tokens.push(TEENS[u as usize]),
        _ => {
            tokens.push(TENS[t as usize]);
            if u != 0 {
                tokens.push(UNITS[u as usize]);
            }
        }
    }
}
