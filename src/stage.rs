//! Core normalization stage abstraction.
//!
//! Every step of the pipeline before token splitting is a [`Stage`]: a pure
//! `Cow<str> → Cow<str>` transformation over the shared [`Context`].
//!
//! Stages follow two rules:
//!
//! * **Zero-copy when clean.** If a stage has nothing to do it hands back the
//!   `Cow` it was given – same pointer, no allocation.
//! * **`needs_apply` never lies in the negative.** Returning `Ok(false)` is a
//!   promise that `apply` would not change the text; the pipeline skips the
//!   stage entirely. A cheap `true` that turns out to be a no-op is allowed.

pub mod delete_symbols;
pub mod fix_vowels;
pub mod lower_case;
pub mod mask_mentions;
pub mod simplify;
pub mod space_emoji;
pub mod strip_retweet;
pub mod strip_urls;
pub mod trim_quotes;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation.  Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

/// Hand back `text` untouched unless a rewrite actually produced new content.
///
/// `regex::Regex::replace_all` borrows its haystack; this turns its result
/// back into a `Cow` tied to the caller's lifetime.
#[inline]
pub(crate) fn keep_or_replace<'a>(text: Cow<'a, str>, replaced: Option<String>) -> Cow<'a, str> {
    replaced.map_or(text, Cow::Owned)
}
