//! End-to-end translation: kanji numeral → integer → English words.

use serde::Serialize;
use tracing::debug_span;

use crate::english::{number_to_words_with, AndStyle, WordsError};
use crate::kanji::parse_kanji_numeral;

/// Result of translating one kanji numeral.
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub value: u64,
    pub words: Vec<&'static str>,
}

impl Translation {
    /// The English words joined into a display phrase.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }
}

/// Translate a kanji numeral into its value and English spelling, with the
/// default [`AndStyle`].
pub fn translate(input: &str) -> Result<Translation, WordsError> {
    translate_with(input, AndStyle::default())
}

/// Translate a kanji numeral into its value and English spelling.
///
/// Parsing never fails; the writer rejects values past the quadrillion
/// magnitude, which only inputs stacking repeated big multipliers can reach.
pub fn translate_with(input: &str, style: AndStyle) -> Result<Translation, WordsError> {
    let _span = debug_span!("translate", len = input.chars().count()).entered();
    let value = parse_kanji_numeral(input);
    let words = number_to_words_with(value, style)?;
    Ok(Translation { value, words })
}
