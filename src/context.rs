// src/context.rs
// Read-only tables every stage consults. Built once, shared by reference.

use crate::{char_map::CharMap, delimiter::DelimiterSet, emoji::EmojiSet};

/// Runtime context passed to every normalization stage.
///
/// Contains:
/// - `char_map`: canonical glyph table used by `Simplify`
/// - `emoji`: emoji code points used by `SpaceEmoji`
/// - `delimiters`: token boundaries used by the tokenizer
///
/// Cloning only bumps reference counts.
#[derive(Debug, Clone)]
pub struct Context {
    pub char_map: CharMap,
    pub emoji: EmojiSet,
    pub delimiters: DelimiterSet,
}

impl Default for Context {
    #[inline]
    fn default() -> Self {
        Self::new(CharMap::Builtin, EmojiSet::unicode())
    }
}

impl Context {
    pub fn new(char_map: CharMap, emoji: EmojiSet) -> Self {
        let delimiters = DelimiterSet::new(emoji.clone());
        Self {
            char_map,
            emoji,
            delimiters,
        }
    }
}
