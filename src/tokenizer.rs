//! Cleanup + delimiter split.
//!
//! Cleanup is the fixed [`tokenizer_cleanup`] chain: quote peel, retweet
//! strip, lowercase, glyph simplification, mention mask, URL strip, emoji
//! spacing. The cleaned text is then cut on every member of the context's
//! [`DelimiterSet`](crate::delimiter::DelimiterSet).

use crate::{
    context::Context,
    profile::{
        Profile, ProfileError,
        preset::{TokenizerCleanup, tokenizer_cleanup},
    },
};
use std::borrow::Cow;

pub struct Tokenizer {
    cleanup: Profile<TokenizerCleanup>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            cleanup: tokenizer_cleanup(),
        }
    }

    /// The cleaned, not yet split text. Zero-copy when nothing needed cleaning.
    pub fn clean<'a>(&self, text: &'a str, ctx: &Context) -> Cow<'a, str> {
        self.cleanup.run_lenient(Cow::Borrowed(text), ctx)
    }

    /// Ordered, non-empty tokens of `text`. No token contains a delimiter.
    pub fn tokenize(&self, text: &str, ctx: &Context) -> Vec<String> {
        let cleaned = self.clean(text, ctx);
        split(&cleaned, ctx)
    }

    /// Like [`tokenize`](Self::tokenize) but surfaces stage failures.
    pub fn try_tokenize(&self, text: &str, ctx: &Context) -> Result<Vec<String>, ProfileError> {
        let cleaned = self.cleanup.run(Cow::Borrowed(text), ctx)?;
        Ok(split(&cleaned, ctx))
    }
}

#[inline]
fn split(text: &str, ctx: &Context) -> Vec<String> {
    ctx.delimiters.split(text).map(str::to_owned).collect()
}
