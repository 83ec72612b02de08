//! Kanji numeral to English number-word transcoding.
//!
//! Two independent leaf components: [`kanji`] parses Japanese kanji numerals
//! (五億百九十万二千三百八) into integers, and [`english`] spells integers as
//! long-form English words ("five hundred and one million ..."). The
//! [`translate`] pipeline composes the two. All functions are pure; the
//! symbol lexicon and word tables are compiled-in, read-only data.

pub mod english;
pub mod kanji;
pub mod lexicon;
mod translate;

pub use english::{
    number_to_words, number_to_words_with, to_phrase, to_phrase_with, AndStyle, WordsError,
};
pub use kanji::parse_kanji_numeral;
pub use translate::{translate, translate_with, Translation};
