//! stage/simplify.rs – **Canonical glyph folding**
//! * One code point in, one code point out – offsets and lengths in chars are preserved
//! * Table comes from the [`Context`], so a custom map needs no new stage
//! * Zero-copy when no character has a different canonical form
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

#[derive(Debug, Default, Clone, Copy)]
pub struct Simplify;

impl Stage for Simplify {
    fn name(&self) -> &'static str {
        "simplify"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.char_map.remaps_any(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !ctx.char_map.remaps_any(&text) {
            return Ok(text);
        }
        let out: String = text.chars().map(|c| ctx.char_map.map(c)).collect();
        Ok(Cow::Owned(out))
    }
}
