use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Insert a space after every emoji code point so `හරි😂` can never come out of
/// the tokenizer as one token. Uses the context's emoji set; an empty set makes
/// this a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpaceEmoji;

impl Stage for SpaceEmoji {
    fn name(&self) -> &'static str {
        "space_emoji"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.emoji.contains_any(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !ctx.emoji.contains_any(&text) {
            return Ok(text);
        }
        let mut out = String::with_capacity(text.len() + 8);
        for c in text.chars() {
            out.push(c);
            if ctx.emoji.contains(c) {
                out.push(' ');
            }
        }
        Ok(Cow::Owned(out))
    }
}
