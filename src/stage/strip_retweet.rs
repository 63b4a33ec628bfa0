use crate::{
    context::Context,
    stage::{Stage, StageError, keep_or_replace},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref RETWEET: Regex = Regex::new(r"^RT @\w*: ").expect("static retweet pattern");
}

/// Remove a leading `RT @handle: ` retweet marker.
///
/// Anchored at the start of the text and case-sensitive, so it must run before
/// lowercasing; mid-text `RT @x: ` is left for the mention mask.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripRetweet;

impl Stage for StripRetweet {
    fn name(&self) -> &'static str {
        "strip_retweet"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.starts_with("RT @") && RETWEET.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let replaced = match RETWEET.replace(&text, "") {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        Ok(keep_or_replace(text, replaced))
    }
}
