use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Markup-ish symbols that carry no signal for the classifier.
pub const DELETED_SYMBOLS: &[char] = &['#', '*', '_', '/', '\\', '|'];

/// Delete [`DELETED_SYMBOLS`] outright – no space is left behind, so
/// `#මචං` and `ම_චං` both collapse to `මචං`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteSymbols;

#[inline(always)]
fn is_deleted(b: u8) -> bool {
    matches!(b, b'#' | b'*' | b'_' | b'/' | b'\\' | b'|')
}

impl Stage for DeleteSymbols {
    fn name(&self) -> &'static str {
        "delete_symbols"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        // All symbols are ASCII, so a byte scan is exact.
        Ok(text.bytes().any(is_deleted))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let out: String = text.chars().filter(|c| !DELETED_SYMBOLS.contains(c)).collect();
        Ok(Cow::Owned(out))
    }
}
