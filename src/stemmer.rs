//! Rule-ordered suffix stripping.
//!
//! Rules are tried top to bottom and the first suffix that matches wins –
//! *not* the longest. Reordering the list changes which features the
//! classifier sees, so order is part of the contract.

use std::borrow::Cow;
use thiserror::Error;

/// Tokens shorter than this (in chars) are never stemmed.
pub const DEFAULT_MIN_STEM_LEN: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuffixRuleError {
    #[error("suffix rule has an empty suffix")]
    EmptySuffix,
    #[error("suffix rule `{suffix}` strips {strip} chars, expected 1..={len}")]
    StripOutOfRange {
        suffix: String,
        strip: usize,
        len: usize,
    },
}

/// "If the token ends with `suffix`, drop its last `strip` chars."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    suffix: Cow<'static, str>,
    strip: usize,
}

impl SuffixRule {
    const fn builtin(suffix: &'static str, strip: usize) -> Self {
        Self {
            suffix: Cow::Borrowed(suffix),
            strip,
        }
    }

    pub fn new(suffix: impl Into<String>, strip: usize) -> Result<Self, SuffixRuleError> {
        let suffix = suffix.into();
        let len = suffix.chars().count();
        if len == 0 {
            return Err(SuffixRuleError::EmptySuffix);
        }
        if strip == 0 || strip > len {
            return Err(SuffixRuleError::StripOutOfRange { suffix, strip, len });
        }
        Ok(Self {
            suffix: Cow::Owned(suffix),
            strip,
        })
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[inline]
    pub fn strip(&self) -> usize {
        self.strip
    }
}

/// Built-in Sinhala rules. Suffixes are written in their simplified form
/// (`ගෙ`, not `ගේ`) because stemming runs after glyph simplification.
///
/// `ගෙ` is shadowed by the bare `ෙ` rule above it; it is kept so the list
/// matches the feature space existing models were trained on.
pub static DEFAULT_SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule::builtin("ට", 1),
    SuffixRule::builtin("ද", 1),
    SuffixRule::builtin("ටත්", 3),
    SuffixRule::builtin("ෙක්", 3),
    SuffixRule::builtin("ෙ", 1),
    SuffixRule::builtin("ක්", 2),
    SuffixRule::builtin("ගෙ", 2),
];

#[derive(Debug, Clone)]
pub struct Stemmer {
    rules: Cow<'static, [SuffixRule]>,
    min_len: usize,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self {
            rules: Cow::Borrowed(DEFAULT_SUFFIX_RULES),
            min_len: DEFAULT_MIN_STEM_LEN,
        }
    }
}

impl Stemmer {
    pub fn new(rules: Vec<SuffixRule>, min_len: usize) -> Self {
        Self {
            rules: Cow::Owned(rules),
            min_len,
        }
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Stem `token`. The result is always a prefix of `token`.
    pub fn stem<'t>(&self, token: &'t str) -> &'t str {
        if token.chars().count() < self.min_len {
            return token;
        }
        self.rules
            .iter()
            .find(|rule| token.ends_with(rule.suffix()))
            .map_or(token, |rule| strip_chars(token, rule.strip))
    }
}

/// `token` without its last `n` chars.
#[inline]
fn strip_chars(token: &str, n: usize) -> &str {
    match n.checked_sub(1).and_then(|k| token.char_indices().rev().nth(k)) {
        Some((i, _)) => &token[..i],
        None if n == 0 => token,
        None => "",
    }
}
