use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Trim surrounding whitespace, then peel one layer of enclosing quotes.
///
/// Quotes are peeled per side, `"` first and then `'`, so `"'hi'"` becomes
/// `hi` and a lone leading quote is dropped as well. Exactly one layer of each
/// kind is removed, which makes the stage non-idempotent on nested quotes
/// (`""a""` → `"a"`).
#[derive(Debug, Default, Clone, Copy)]
pub struct TrimQuotes;

/// Tokenizer-side variant: one layer of `"` only, whitespace untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PeelDoubleQuotes;

#[inline]
fn peel(text: &str, quote: char) -> &str {
    let text = text.strip_prefix(quote).unwrap_or(text);
    text.strip_suffix(quote).unwrap_or(text)
}

#[inline]
fn trim_quotes(text: &str) -> &str {
    peel(peel(text.trim(), '"'), '\'')
}

impl Stage for TrimQuotes {
    fn name(&self) -> &'static str {
        "trim_quotes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(trim_quotes(text).len() != text.len())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let trimmed = trim_quotes(&text);
        if trimmed.len() == text.len() {
            return Ok(text);
        }
        Ok(Cow::Owned(trimmed.to_string()))
    }
}

impl Stage for PeelDoubleQuotes {
    fn name(&self) -> &'static str {
        "peel_double_quotes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        Ok(text.starts_with('"') || text.ends_with('"'))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let peeled = peel(&text, '"');
        if peeled.len() == text.len() {
            return Ok(text);
        }
        Ok(Cow::Owned(peeled.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stage_contract::StageTestConfig;

    impl StageTestConfig for TrimQuotes {
        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("  hello  ", "hello"),
                ("\"hello\"", "hello"),
                ("'hello'", "hello"),
                (" \"'මචං'\" ", "මචං"),
                ("\"\"nested\"\"", "\"nested\""),
                ("\"dangling", "dangling"),
            ]
        }

        fn idempotent() -> bool {
            false
        }
    }

    impl StageTestConfig for PeelDoubleQuotes {
        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[("\"RT @a: hi\"", "RT @a: hi"), ("'kept'", "'kept'"), (" \"x\" ", " \"x\" ")]
        }

        fn idempotent() -> bool {
            false
        }
    }

    #[test]
    fn test_trim_quotes_contract() {
        crate::assert_stage_contract!(TrimQuotes);
    }

    #[test]
    fn test_peel_double_quotes_contract() {
        crate::assert_stage_contract!(PeelDoubleQuotes);
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        let ctx = Context::default();
        let out = TrimQuotes.apply(Cow::Borrowed(" \t\n "), &ctx).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_inner_quotes_untouched() {
        let ctx = Context::default();
        let out = TrimQuotes.apply(Cow::Borrowed("say \"hi\" now"), &ctx).unwrap();
        assert_eq!(out, "say \"hi\" now");
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
