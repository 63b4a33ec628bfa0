use crate::{
    context::Context,
    stage::{Stage, StageError, keep_or_replace},
};
use lazy_static::lazy_static;
use memchr::memmem;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref URL: Regex = Regex::new(
        r"(http://www\.|https://www\.|http://|https://)[a-z0-9]+([\-.][a-z0-9A-Z/]+)*"
    )
    .expect("static url pattern");
}

/// Delete `http(s)://[www.]host[.tld][/path]` spans entirely.
///
/// The host pattern is lowercase-only, so this runs after `LowerCase`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripUrls;

impl Stage for StripUrls {
    fn name(&self) -> &'static str {
        "strip_urls"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memmem::find(text.as_bytes(), b"http").is_some() && URL.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let replaced = match URL.replace_all(&text, "") {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        Ok(keep_or_replace(text, replaced))
    }
}
