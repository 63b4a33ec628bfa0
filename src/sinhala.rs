//! Sinhala block (U+0D80–U+0DFF) classification and the vowel-sign
//! composition table used by the vowel fixer.
//!
//! All predicates are `const fn` over code point ranges – no tables, no
//! hashing, so they inline into the hot loops of every stage.

pub const AL_LAKUNA: char = '\u{0DCA}'; // ්
pub const AELA_PILLA: char = '\u{0DCF}'; // ා
pub const KETTI_AEDA_PILLA: char = '\u{0DD0}'; // ැ
pub const DIGA_AEDA_PILLA: char = '\u{0DD1}'; // ෑ
pub const GAETTA_PILLA: char = '\u{0DD8}'; // ෘ
pub const KOMBUVA: char = '\u{0DD9}'; // ෙ
pub const DIGA_KOMBUVA: char = '\u{0DDA}'; // ේ
pub const KOMBU_DEKA: char = '\u{0DDB}'; // ෛ
pub const KOMBUVA_HAA_AELA_PILLA: char = '\u{0DDC}'; // ො
pub const KOMBUVA_HAA_DIGA_AELA_PILLA: char = '\u{0DDD}'; // ෝ
pub const KOMBUVA_HAA_GAYANUKITTA: char = '\u{0DDE}'; // ෞ
pub const GAYANUKITTA: char = '\u{0DDF}'; // ෟ
pub const DIGA_GAETTA_PILLA: char = '\u{0DF2}'; // ෲ
pub const DIGA_GAYANUKITTA: char = '\u{0DF3}'; // ෳ
/// Joins an al-lakuna consonant to the next one (rakaransaya, yansaya, repaya).
pub const ZWJ: char = '\u{200D}';

#[inline(always)]
pub const fn is_sinhala(c: char) -> bool {
    matches!(c as u32, 0x0D80..=0x0DFF)
}

/// Consonant letters ක … ෆ.
#[inline(always)]
pub const fn is_consonant(c: char) -> bool {
    matches!(c as u32, 0x0D9A..=0x0DC6)
}

/// Independent vowel letters අ … ඖ.
#[inline(always)]
pub const fn is_independent_vowel(c: char) -> bool {
    matches!(c as u32, 0x0D85..=0x0D96)
}

/// Dependent vowel signs plus the al-lakuna (virama).
#[inline(always)]
pub const fn is_dependent_sign(c: char) -> bool {
    matches!(c as u32, 0x0DCA | 0x0DCF..=0x0DD4 | 0x0DD6 | 0x0DD8..=0x0DDF | 0x0DF2 | 0x0DF3)
}

/// Signs drawn to the left of their consonant. Users typing in visual order
/// put these *before* the consonant in storage.
#[inline(always)]
pub const fn is_pre_base_sign(c: char) -> bool {
    matches!(c, KOMBUVA | DIGA_KOMBUVA | KOMBU_DEKA)
}

#[inline]
pub fn contains_sinhala(text: &str) -> bool {
    // Sinhala is a 3-byte sequence starting 0xE0 0xB6/0xB7; pure ASCII never matches.
    !text.is_ascii() && text.chars().any(is_sinhala)
}

/// Merge two adjacent code points that are a decomposed spelling of a single
/// code point. Returns `None` when the pair is well formed as it stands.
///
/// Covers:
/// * independent vowel letters written as letter + sign (Unicode "do not use" sequences),
/// * two-part dependent signs written as their parts,
/// * the same dependent sign typed twice.
#[inline]
pub const fn compose(a: char, b: char) -> Option<char> {
    let merged = match (a, b) {
        // independent vowels
        ('\u{0D85}', AELA_PILLA) => '\u{0D86}',       // අ + ා → ආ
        ('\u{0D85}', KETTI_AEDA_PILLA) => '\u{0D87}', // අ + ැ → ඇ
        ('\u{0D85}', DIGA_AEDA_PILLA) => '\u{0D88}',  // අ + ෑ → ඈ
        ('\u{0D8B}', GAYANUKITTA) => '\u{0D8C}',      // උ + ෟ → ඌ
        ('\u{0D8D}', GAETTA_PILLA) => '\u{0D8E}',     // ඍ + ෘ → ඎ
        ('\u{0D8F}', GAYANUKITTA) => '\u{0D90}',      // ඏ + ෟ → ඐ
        ('\u{0D91}', AL_LAKUNA) => '\u{0D92}',        // එ + ් → ඒ
        ('\u{0D91}', KOMBUVA) => '\u{0D93}',          // එ + ෙ → ඓ
        ('\u{0D94}', AL_LAKUNA) => '\u{0D95}',        // ඔ + ් → ඕ
        ('\u{0D94}', GAYANUKITTA) => '\u{0D96}',      // ඔ + ෟ → ඖ

        // two-part dependent signs
        (KOMBUVA, AL_LAKUNA) => DIGA_KOMBUVA,
        (KOMBUVA, AELA_PILLA) => KOMBUVA_HAA_AELA_PILLA,
        (KOMBUVA_HAA_AELA_PILLA, AL_LAKUNA) => KOMBUVA_HAA_DIGA_AELA_PILLA,
        (KOMBUVA, GAYANUKITTA) => KOMBUVA_HAA_GAYANUKITTA,
        (KOMBUVA, KOMBUVA) => KOMBU_DEKA,
        (GAETTA_PILLA, GAETTA_PILLA) => DIGA_GAETTA_PILLA,
        (GAYANUKITTA, GAYANUKITTA) => DIGA_GAYANUKITTA,

        // doubled signs
        (x, y) if x == y && is_dependent_sign(x) => x,

        _ => return None,
    };
    Some(merged)
}
