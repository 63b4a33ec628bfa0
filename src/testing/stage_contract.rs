use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &[
            "Hello World 123",
            " මචං කොහොමද ",
            "RT @sam92ky: ආයුබෝවන් 😀",
            "check http://example.com/page now",
            "",
        ]
    }

    /// Samples that must pass through unchanged and unallocated.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "abc def", ""]
    }

    /// Input/output pairs that verify concrete transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Whether `apply(apply(x)) == apply(x)` holds on the samples.
    fn idempotent() -> bool {
        true
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_has_no_false_negatives` → a skipped stage would not have changed the text
/// 4. `handles_empty_string` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_has_no_false_negatives(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx).unwrap() {
        stage.apply(text, ctx).unwrap()
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();

    for &input in S::should_pass_through() {
        let out = run(stage, Cow::Borrowed(input), &ctx);
        assert_eq!(out.as_ref(), input);
        assert!(
            matches!(out, Cow::Borrowed(b) if std::ptr::eq(b, input)),
            "zero-copy violated on pass-through sample (stage: {}, input: `{input}`)",
            stage.name()
        );
    }

    // apply() itself, bypassing needs_apply, must not allocate on unchanged text
    for &input in S::samples() {
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        if out == input {
            assert!(
                matches!(out, Cow::Borrowed(b) if std::ptr::eq(b, input)),
                "apply() allocated without changing `{input}` (stage: {})",
                stage.name()
            );
        }
    }

    for &(input, expected) in S::should_transform() {
        let out = run(stage, Cow::Borrowed(input), &ctx);
        assert_eq!(out.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    if !S::idempotent() {
        return;
    }
    let ctx = Context::default();
    for &input in S::samples().iter().chain(S::should_pass_through()) {
        let once = run(stage, Cow::Borrowed(input), &ctx).into_owned();
        let twice = run(stage, Cow::Borrowed(once.as_str()), &ctx).into_owned();
        assert_eq!(once, twice, "stage `{}` not idempotent on `{input}`", stage.name());
    }
}

pub fn needs_apply_has_no_false_negatives<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .chain(S::should_transform().iter().map(|(i, _)| i));
    for &input in inputs {
        let predicted = stage.needs_apply(input, &ctx).expect("needs_apply errored");
        // Owned input so stages that always allocate are not penalised.
        let output = stage
            .apply(Cow::Owned(input.to_owned()), &ctx)
            .expect("apply errored");
        if !predicted {
            assert_eq!(
                output,
                input,
                "needs_apply() said skip but apply() changed the text (stage `{}`)",
                stage.name()
            );
        }
    }
}

pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let out = run(stage, Cow::Borrowed(""), &ctx);
    assert_eq!(out.as_ref(), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for input in [
        "Hello 世界 русский ගෙදර العربية 😀👍🏽",
        "ෙෙකා්් අා @@ http://",
        "\u{200D}\u{FE0F}\u{20E3}ෙ",
    ] {
        let _ = stage.apply(Cow::Borrowed(input), &ctx);
    }
}
