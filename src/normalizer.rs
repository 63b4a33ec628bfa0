use thiserror::Error;

use crate::{
    char_map::{CharMap, CharMapError},
    context::Context,
    emoji::{EmojiSet, EmojiSource},
    process::DynamicProcess,
    profile::{DynProfileBuilder, Profile, ProfileError, preset::pre_tokenize_builder},
    stage::{Stage, fix_vowels},
    stemmer::{DEFAULT_MIN_STEM_LEN, Stemmer, SuffixRule, SuffixRuleError},
    tokenizer::Tokenizer,
};
use std::{borrow::Cow, collections::HashMap, fmt, sync::Arc};

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("invalid suffix rule: {0}")]
    InvalidSuffixRule(#[from] SuffixRuleError),
    #[error("invalid character map: {0}")]
    NonIdempotentCharMap(#[from] CharMapError),
}

/// Raw text → classifier features.
///
/// Immutable once built; share it by reference across threads.
pub struct Normalizer {
    ctx: Context,
    pre: Profile<DynamicProcess>,
    tokenizer: Tokenizer,
    stemmer: Option<Stemmer>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            ctx: Context::default(),
            pre: pre_tokenize_builder().build(),
            tokenizer: Tokenizer::new(),
            stemmer: Some(Stemmer::default()),
        }
    }
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Names of the stages run ahead of tokenization, in order.
    pub fn pre_stages(&self) -> Vec<&'static str> {
        self.pre.stage_names()
    }

    /// Normalized tokens joined by single spaces. Never fails; a stage that
    /// errors is logged and skipped.
    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    /// [`normalize`](Self::normalize) over the `Display` form of `value`.
    pub fn normalize_display<T: fmt::Display + ?Sized>(&self, value: &T) -> String {
        self.normalize(&value.to_string())
    }

    /// Strict variant of [`normalize`](Self::normalize).
    pub fn try_normalize(&self, text: &str) -> Result<String, NormalizerError> {
        Ok(self.try_tokens(text)?.join(" "))
    }

    /// The token sequence [`normalize`](Self::normalize) would join.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let cleaned = self.pre.run_lenient(Cow::Borrowed(text), &self.ctx);
        let tokens = self.tokenizer.tokenize(&cleaned, &self.ctx);
        self.finish(tokens)
    }

    pub fn try_tokens(&self, text: &str) -> Result<Vec<String>, NormalizerError> {
        let cleaned = self.pre.run(Cow::Borrowed(text), &self.ctx)?;
        let tokens = self.tokenizer.try_tokenize(&cleaned, &self.ctx)?;
        Ok(self.finish(tokens))
    }

    /// Tokenizer output alone: no quote trim, vowel repair or stemming.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text, &self.ctx)
    }

    /// Identity when stemming is disabled.
    pub fn stem<'t>(&self, token: &'t str) -> &'t str {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(token),
            None => token,
        }
    }

    /// Per-char canonicalization through this normalizer's character map.
    pub fn simplify(&self, text: &str) -> String {
        text.chars().map(|c| self.ctx.char_map.map(c)).collect()
    }

    pub fn fix_vowels(&self, text: &str) -> String {
        fix_vowels::fix(text).unwrap_or_else(|| text.to_owned())
    }

    // Stem, drop what stemming emptied, fold the mention placeholder's case.
    fn finish(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.stem(token))
            .filter(|stem| !stem.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

pub struct NormalizerBuilder {
    emoji: Option<EmojiSet>,
    char_table: Option<HashMap<char, char>>,
    suffix_rules: Option<Vec<(String, usize)>>,
    min_stem_len: usize,
    stemming: bool,
    pre: DynProfileBuilder,
}

impl Default for NormalizerBuilder {
    fn default() -> Self {
        Self {
            emoji: None,
            char_table: None,
            suffix_rules: None,
            min_stem_len: DEFAULT_MIN_STEM_LEN,
            stemming: true,
            pre: pre_tokenize_builder(),
        }
    }
}

impl NormalizerBuilder {
    /// Emoji code points come from `source` instead of the Unicode tables.
    pub fn emoji_source(mut self, source: &dyn EmojiSource) -> Self {
        self.emoji = Some(EmojiSet::from_source(source));
        self
    }

    pub fn emoji_set(mut self, emoji: EmojiSet) -> Self {
        self.emoji = Some(emoji);
        self
    }

    /// Replace the built-in glyph table. An empty table disables simplification.
    pub fn char_map(mut self, table: HashMap<char, char>) -> Self {
        self.char_table = Some(table);
        self
    }

    /// Replace the built-in suffix rules; order is match priority.
    pub fn suffix_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        self.suffix_rules = Some(rules.into_iter().map(|(s, n)| (s.into(), n)).collect());
        self
    }

    pub fn min_stem_len(mut self, min_len: usize) -> Self {
        self.min_stem_len = min_len;
        self
    }

    pub fn stemming(mut self, enabled: bool) -> Self {
        self.stemming = enabled;
        self
    }

    /// Append a stage to the cleanup that runs before tokenization.
    pub fn add_stage<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.pre = self.pre.add_stage(stage);
        self
    }

    pub fn add_shared_stage(mut self, stage: Arc<dyn Stage + Send + Sync>) -> Self {
        self.pre = self.pre.add_shared_stage(stage);
        self
    }

    pub fn build(self) -> Result<Normalizer, NormalizerError> {
        let char_map = match self.char_table {
            Some(table) => CharMap::custom(table)?,
            None => CharMap::Builtin,
        };
        let emoji = self.emoji.unwrap_or_else(EmojiSet::unicode);

        let stemmer = if self.stemming {
            let stemmer = match self.suffix_rules {
                Some(rules) => {
                    let rules = rules
                        .into_iter()
                        .map(|(suffix, strip)| SuffixRule::new(suffix, strip))
                        .collect::<Result<Vec<_>, _>>()?;
                    Stemmer::new(rules, self.min_stem_len)
                }
                None => Stemmer::default().with_min_len(self.min_stem_len),
            };
            Some(stemmer)
        } else {
            None
        };

        Ok(Normalizer {
            ctx: Context::new(char_map, emoji),
            pre: self.pre.build(),
            tokenizer: Tokenizer::new(),
            stemmer,
        })
    }
}
