//! Token boundary characters.

use crate::emoji::EmojiSet;
use phf::{Set, phf_set};

/// Punctuation, quote, bracket, digit and stray-glyph code points that end a
/// token. The list comes from the Sinhala corpus tooling the classifier was
/// trained against, including the private-use glyphs legacy Sinhala fonts
/// leave behind.
pub static BASE_DELIMITERS: Set<char> = phf_set! {
    '.', '…', ',', '\u{200C}', ' ', '¸', '‚', '"', '/', '|', '—', '¦', '”', '‘',
    '\'', '“', '’', '´', '!', '@', '#', '$', '%', '^', '&', '*', '+', '-', '£',
    '?', '˜', '(', ')', '[', ']', '{', '}', ':', ';', '–', 'Ê', '\u{00A0}',
    '\u{2003}', '\u{FFFD}', '\u{F020}', '\u{F073}', '\u{F06C}', '\u{F190}',
    '\u{202A}', '\u{202C}', '\u{200F}',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
};

/// The full delimiter set: [`BASE_DELIMITERS`], every Unicode whitespace
/// character, and every emoji code point.
#[derive(Debug, Clone)]
pub struct DelimiterSet {
    emoji: EmojiSet,
}

impl Default for DelimiterSet {
    /// Same emoji data as [`Context::default`](crate::context::Context).
    fn default() -> Self {
        Self::new(EmojiSet::unicode())
    }
}

impl DelimiterSet {
    pub fn new(emoji: EmojiSet) -> Self {
        Self { emoji }
    }

    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        c.is_whitespace() || BASE_DELIMITERS.contains(&c) || self.emoji.contains(c)
    }

    /// Split `text` on every delimiter, dropping the empty pieces between
    /// consecutive delimiters. Pieces are yielded left to right.
    #[inline]
    pub fn split<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(move |c: char| self.contains(c))
            .filter(|piece| !piece.is_empty())
    }
}
