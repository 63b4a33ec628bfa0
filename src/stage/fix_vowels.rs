//! stage/fix_vowels.rs – **Sinhala vowel-sign repair**
//! * Moves pre-base signs typed in visual order (`ෙක`) after their consonant (`කෙ`)
//! * Merges letter + sign spellings of independent vowels (`අා` → `ආ`)
//! * Merges split two-part signs (`ෙ` + `ා` → `ො`) and doubled signs (`කාා` → `කා`)
//! * Identity on well-formed text; non-Sinhala code points never move
//! * Idempotent: rules are re-applied until nothing changes
use crate::{
    context::Context,
    sinhala::{AL_LAKUNA, ZWJ, compose, contains_sinhala, is_consonant, is_pre_base_sign},
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::borrow::Cow;
use tracing::trace;

/// Public stage – zero-sized, stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixVowels;

impl Stage for FixVowels {
    fn name(&self) -> &'static str {
        "fix_vowels"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(contains_sinhala(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !contains_sinhala(&text) {
            return Ok(text);
        }
        let fixed = fix(&text);
        Ok(fixed.map_or(text, Cow::Owned))
    }
}

/// Repair `text`, returning `None` when it is already well formed.
pub fn fix(text: &str) -> Option<String> {
    let mut current: Vec<char> = text.chars().collect();
    let mut changed = false;

    // Every productive pass shortens the text or moves a consonant left past a
    // sign, so the loop is bounded by the input length.
    for pass in 0..=current.len() {
        let next = compose_pass(&reorder_pass(&current));
        if next == current {
            break;
        }
        trace!(
            target: "sinhala_norm::fix_vowels",
            pass,
            before = %current.iter().collect::<String>(),
            after = %next.iter().collect::<String>(),
            "repaired vowel signs"
        );
        current = next;
        changed = true;
    }

    changed.then(|| current.into_iter().collect())
}

/// Move each detached run of pre-base signs after the consonant cluster that
/// follows it.
///
/// A run is detached when the code point before it is not a consonant – the
/// start of the text, a space, another vowel. A run already following a
/// consonant belongs to that consonant and stays put.
fn reorder_pass(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let attached = out.last().is_some_and(|&p| is_consonant(p));
        if !is_pre_base_sign(c) || attached {
            out.push(c);
            i += 1;
            continue;
        }

        let run_end = chars[i..]
            .iter()
            .position(|&s| !is_pre_base_sign(s))
            .map_or(chars.len(), |n| i + n);

        match chars.get(run_end) {
            Some(&base) if is_consonant(base) => {
                let cluster_end = conjunct_end(chars, run_end);
                out.extend_from_slice(&chars[run_end..cluster_end]);
                out.extend_from_slice(&chars[i..run_end]);
                i = cluster_end;
            }
            _ => {
                out.extend_from_slice(&chars[i..run_end]);
                i = run_end;
            }
        }
    }
    out
}

/// End of the consonant cluster starting at `base`: the consonant plus every
/// following `් ZWJ consonant` link. A pre-base sign belongs after the last one.
fn conjunct_end(chars: &[char], base: usize) -> usize {
    let mut end = base + 1;
    while let [AL_LAKUNA, ZWJ, next, ..] = &chars[end..] {
        if !is_consonant(*next) {
            break;
        }
        end += 3;
    }
    end
}

/// Merge adjacent pairs through [`compose`] until no pair is mergeable.
fn compose_pass(chars: &[char]) -> Vec<char> {
    let mut out: SmallVec<[char; 64]> = SmallVec::with_capacity(chars.len());
    for &c in chars {
        out.push(c);
        while out.len() >= 2 {
            let n = out.len();
            match compose(out[n - 2], out[n - 1]) {
                Some(merged) => {
                    out.pop();
                    out[n - 2] = merged;
                }
                None => break,
            }
        }
    }
    out.into_vec()
}
