//! Emoji code point sources.
//!
//! The tokenizer only ever asks one question of emoji metadata: *which code
//! points are emoji?* [`EmojiSource`] is that capability. Providers differ in
//! how they ship the data – a mapping of emoji to names, or a bare list – and
//! [`EmojiData`] absorbs both shapes so nothing downstream can tell them apart.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Anything that can enumerate emoji code points.
///
/// An empty set is a valid answer: emoji are then neither spaced nor used as
/// delimiters, and the rest of the pipeline is unaffected.
pub trait EmojiSource: Send + Sync {
    fn emoji_code_points(&self) -> HashSet<char>;
}

/// Emoji data in either of the shapes metadata providers ship.
#[derive(Debug, Clone)]
pub enum EmojiData {
    /// emoji sequence → description
    Mapping(HashMap<String, String>),
    /// bare emoji sequences
    Keys(Vec<String>),
}

impl EmojiData {
    fn sequences(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            EmojiData::Mapping(map) => Box::new(map.keys().map(String::as_str)),
            EmojiData::Keys(keys) => Box::new(keys.iter().map(String::as_str)),
        }
    }
}

impl EmojiSource for EmojiData {
    /// Every non-ASCII code point that occurs in any emoji sequence, including
    /// joiners, variation selectors and skin-tone modifiers. ASCII members of
    /// keycap sequences (`#`, `*`, digits) are left to the delimiter table.
    fn emoji_code_points(&self) -> HashSet<char> {
        self.sequences()
            .flat_map(str::chars)
            .filter(|c| !c.is_ascii())
            .collect()
    }
}

/// Built-in source: the Unicode `Emoji` and `Emoji_Component` properties.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeEmoji;

// Every Emoji / Emoji_Component code point outside ASCII lies in one of these blocks.
const EMOJI_BLOCKS: &[(char, char)] = &[
    ('\u{00A9}', '\u{00AE}'),
    ('\u{2000}', '\u{33FF}'),
    ('\u{FE00}', '\u{FE0F}'),
    ('\u{1F000}', '\u{1FAFF}'),
    ('\u{E0020}', '\u{E007F}'),
];

lazy_static! {
    static ref EMOJI_PROPERTY: Regex = Regex::new(r"^[\p{Emoji}\p{Emoji_Component}]$")
        .expect("static emoji property pattern");
    static ref UNICODE_EMOJI: HashSet<char> = {
        let mut buf = [0u8; 4];
        EMOJI_BLOCKS
            .iter()
            .flat_map(|&(lo, hi)| lo..=hi)
            .filter(|c| EMOJI_PROPERTY.is_match(c.encode_utf8(&mut buf)))
            .collect()
    };
}

impl EmojiSource for UnicodeEmoji {
    fn emoji_code_points(&self) -> HashSet<char> {
        UNICODE_EMOJI.clone()
    }
}

/// Empty source – disables emoji handling.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEmoji;

impl EmojiSource for NoEmoji {
    fn emoji_code_points(&self) -> HashSet<char> {
        HashSet::new()
    }
}

/// Frozen emoji set shared by the context, the spacing stage and the
/// delimiter set.
#[derive(Debug, Clone, Default)]
pub struct EmojiSet(Arc<HashSet<char>>);

lazy_static! {
    static ref DEFAULT_EMOJI_SET: EmojiSet = EmojiSet(Arc::new(UNICODE_EMOJI.clone()));
}

impl EmojiSet {
    pub fn from_source(source: &dyn EmojiSource) -> Self {
        EmojiSet(Arc::new(source.emoji_code_points()))
    }

    /// Shared instance built from [`UnicodeEmoji`]; computed once per process.
    pub fn unicode() -> Self {
        DEFAULT_EMOJI_SET.clone()
    }

    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    #[inline]
    pub fn contains_any(&self, text: &str) -> bool {
        !self.0.is_empty() && text.chars().any(|c| self.contains(c))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
