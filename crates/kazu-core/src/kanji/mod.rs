//! Kanji numeral parsing.
//!
//! Scans a numeral string left to right, accumulating digit and multiplier
//! symbols into a running subtotal per base-10000 group, and folds each group
//! into the total when a big multiplier (万/億/兆) or the end of the input is
//! reached.

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::lexicon::{classify, symbol_value, SymbolClass};

/// Parse a kanji numeral string into its integer value.
///
/// Never fails: unrecognized characters carry value 0 and flow through the
/// digit branch, the empty string parses to 0, and the accumulator saturates
/// at `u64::MAX` on inputs past the representable range.
///
/// A digit immediately followed by a big multiplier joins the subtotal on its
/// own (二万 = 2 × 10000); a big multiplier with an empty subtotal contributes
/// its bare value (lone 万 = 10000).
pub fn parse_kanji_numeral(input: &str) -> u64 {
    let mut total: u64 = 0;
    let mut subtotal: u64 = 0;
    let mut multiplier: u64 = 1;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        let value = symbol_value(c);
        let next_value = chars.peek().map(|&n| symbol_value(n));

        match classify(value) {
            SymbolClass::Digit => {
                multiplier = value;
                match next_value {
                    // Last character: fold the pending digit and close the group.
                    None => {
                        subtotal = subtotal.saturating_add(multiplier);
                        multiplier = 1;
                        total = total.saturating_add(subtotal);
                        subtotal = 0;
                    }
                    // A big multiplier follows, so this digit stands alone in
                    // front of it rather than scaling a smaller position.
                    Some(next) if next > 1000 => {
                        subtotal = subtotal.saturating_add(multiplier);
                        multiplier = 1;
                    }
                    _ => {}
                }
            }
            SymbolClass::SmallMultiplier => {
                // value * multiplier is at most 9000; only the accumulation
                // across groups can saturate.
                subtotal = subtotal.saturating_add(value * multiplier);
                multiplier = 1;
                if next_value.is_none() {
                    total = total.saturating_add(subtotal);
                    subtotal = 0;
                }
            }
            SymbolClass::BigMultiplier => {
                total = if subtotal == 0 {
                    total.saturating_add(value)
                } else {
                    total.saturating_add(subtotal.saturating_mul(value))
                };
                subtotal = 0;
                multiplier = 1;
            }
        }
    }

    debug!(len = input.chars().count(), total, "parsed kanji numeral");
    total
}
