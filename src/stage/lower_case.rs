use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Full Unicode lowercasing (`str::to_lowercase`).
///
/// Sinhala has no case, so Sinhala-only text is a guaranteed zero-copy pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

#[inline(always)]
fn changes_on_lowercase(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.len() != 1 || lower.next() != Some(c)
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(text.bytes().any(|b| b.is_ascii_uppercase()));
        }
        Ok(text.chars().any(changes_on_lowercase))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        Ok(Cow::Owned(text.to_lowercase()))
    }
}
