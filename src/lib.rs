//! Sinhala social-media text normalization.
//!
//! Build a [`Normalizer`] once and pass it by reference to whatever needs
//! features; it is immutable and `Send + Sync`. The free functions at the
//! crate root are a convenience over one process-wide default normalizer for
//! callers that never configure anything.

pub mod char_map;
pub mod context;
pub mod delimiter;
pub mod emoji;
pub mod normalizer;
pub mod process;
pub mod profile;
pub mod sinhala;
pub mod stage;
pub mod stemmer;
pub mod tokenizer;

#[cfg(test)]
mod testing;

pub use char_map::CharMap;
pub use context::Context;
pub use emoji::{EmojiData, EmojiSet, EmojiSource, NoEmoji, UnicodeEmoji};
pub use normalizer::{Normalizer, NormalizerBuilder, NormalizerError};
pub use stage::fix_vowels::FixVowels;
pub use stage::lower_case::LowerCase;
pub use stage::simplify::Simplify;
pub use stemmer::{Stemmer, SuffixRule};
pub use tokenizer::Tokenizer;

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT: Normalizer = Normalizer::default();
}

/// The process-wide default normalizer behind the free functions below,
/// built on first use. Prefer an explicit [`Normalizer`] when the caller owns
/// configuration.
pub fn default_normalizer() -> &'static Normalizer {
    &DEFAULT
}

/// [`Normalizer::normalize`] on the process-wide default.
pub fn normalize(text: &str) -> String {
    DEFAULT.normalize(text)
}

/// [`Normalizer::tokenize`] on the process-wide default.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT.tokenize(text)
}

/// [`Normalizer::stem`] on the process-wide default.
pub fn stem(token: &str) -> &str {
    DEFAULT.stem(token)
}

/// [`Normalizer::simplify`] on the process-wide default.
pub fn simplify(text: &str) -> String {
    DEFAULT.simplify(text)
}

/// [`Normalizer::fix_vowels`] on the process-wide default.
pub fn fix_vowels(text: &str) -> String {
    DEFAULT.fix_vowels(text)
}
