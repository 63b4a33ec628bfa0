use crate::{
    context::Context,
    stage::{Stage, StageError, keep_or_replace},
};
use lazy_static::lazy_static;
use memchr::memchr;
use regex::Regex;
use std::borrow::Cow;

/// Placeholder every `@mention` is replaced with.
pub const MENTION_PLACEHOLDER: &str = "PERSON";

lazy_static! {
    static ref MENTION: Regex = Regex::new(r"@\w*").expect("static mention pattern");
}

/// Replace `@handle` (including a bare `@`) with [`MENTION_PLACEHOLDER`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MaskMentions;

impl Stage for MaskMentions {
    fn name(&self) -> &'static str {
        "mask_mentions"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        // `@\w*` matches any `@`, so a byte search is exact.
        Ok(memchr(b'@', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let replaced = match MENTION.replace_all(&text, MENTION_PLACEHOLDER) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        Ok(keep_or_replace(text, replaced))
    }
}
