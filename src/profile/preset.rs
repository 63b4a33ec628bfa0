use crate::{
    process::{ChainedProcess, DynamicProcess, EmptyProcess},
    profile::{DynProfileBuilder, Profile},
    stage::{
        delete_symbols::DeleteSymbols,
        fix_vowels::FixVowels,
        lower_case::LowerCase,
        mask_mentions::MaskMentions,
        simplify::Simplify,
        space_emoji::SpaceEmoji,
        strip_retweet::StripRetweet,
        strip_urls::StripUrls,
        trim_quotes::{PeelDoubleQuotes, TrimQuotes},
    },
};

/// Concrete type of [`tokenizer_cleanup`], spelled out so the tokenizer can
/// own it without boxing.
pub type TokenizerCleanup = ChainedProcess<
    SpaceEmoji,
    ChainedProcess<
        StripUrls,
        ChainedProcess<
            MaskMentions,
            ChainedProcess<
                Simplify,
                ChainedProcess<
                    LowerCase,
                    ChainedProcess<StripRetweet, ChainedProcess<PeelDoubleQuotes, EmptyProcess>>,
                >,
            >,
        >,
    >,
>;

/// Everything the tokenizer does before splitting, in its fixed order.
pub fn tokenizer_cleanup() -> Profile<TokenizerCleanup> {
    Profile::builder("tokenizer_cleanup")
        .add_stage(PeelDoubleQuotes)
        .add_stage(StripRetweet)
        .add_stage(LowerCase)
        .add_stage(Simplify)
        .add_stage(MaskMentions)
        .add_stage(StripUrls)
        .add_stage(SpaceEmoji)
        .build()
}

/// Raw-text repair ahead of tokenization; open for extra stages.
pub fn pre_tokenize_builder() -> DynProfileBuilder {
    Profile::plugin_builder("pre_tokenize")
        .add_stage(TrimQuotes)
        .add_stage(FixVowels)
        .add_stage(DeleteSymbols)
}

pub fn pre_tokenize() -> Profile<DynamicProcess> {
    pre_tokenize_builder().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use std::borrow::Cow;

    #[test]
    fn test_pre_tokenize_order() {
        assert_eq!(
            pre_tokenize().stage_names(),
            ["trim_quotes", "fix_vowels", "delete_symbols"]
        );
    }

    #[test]
    fn test_tokenizer_cleanup_runs_in_order() {
        let ctx = Context::default();
        let profile = tokenizer_cleanup();
        let out = profile
            .run(Cow::Borrowed("\"RT @Sam: Hi @Bob ආයුබෝවන් http://x.com 😀!\""), &ctx)
            .unwrap();
        assert_eq!(out, "hi PERSON අයුබොවන්  😀 !");
    }

    #[test]
    fn test_clean_text_is_zero_copy() {
        let ctx = Context::default();
        let input = "plain words only";
        let out = tokenizer_cleanup().run(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
