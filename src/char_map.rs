//! Canonical glyph table.
//!
//! Social-media Sinhala is typed on phonetic keyboards where aspirated,
//! pre-nasalised and retroflex letters, and long/short vowel pairs, are used
//! interchangeably. Folding each family onto one representative shrinks the
//! feature space the classifier sees.
//!
//! Every entry maps one code point to one code point and no target is itself a
//! source, so a single lookup is already a fixed point.

use phf::{Map, phf_map};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub static SIMPLIFY_TABLE: Map<char, char> = phf_map! {
    // aspirated / pre-nasalised / retroflex consonants
    'ඛ' => 'ක',
    'ඝ' => 'ග',
    'ඟ' => 'ග',
    'ඡ' => 'ච',
    'ඣ' => 'ජ',
    'ඦ' => 'ජ',
    'ඥ' => 'ඤ',
    'ඨ' => 'ට',
    'ඪ' => 'ඩ',
    'ඬ' => 'ඩ',
    'ණ' => 'න',
    'ඳ' => 'ද',
    'ඵ' => 'ප',
    'භ' => 'බ',
    'ඹ' => 'බ',
    'ෂ' => 'ශ',
    'ළ' => 'ල',

    // long independent vowels
    'ආ' => 'අ',
    'ඈ' => 'ඇ',
    'ඊ' => 'ඉ',
    'ඌ' => 'උ',
    'ඒ' => 'එ',
    'ඕ' => 'ඔ',
    'ඎ' => 'ඍ',
    'ඐ' => 'ඏ',

    // long dependent vowel signs
    'ෑ' => 'ැ',
    'ී' => 'ි',
    'ූ' => 'ු',
    'ේ' => 'ෙ',
    'ෝ' => 'ො',
    'ෲ' => 'ෘ',
    'ෳ' => 'ෟ',
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CharMapError {
    #[error("character map is not idempotent: `{from}` maps to `{to}`, which is itself remapped")]
    NotIdempotent { from: char, to: char },
}

/// Read-only `char → char` table shared by every request.
///
/// Cloning is cheap; custom tables live behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub enum CharMap {
    /// The built-in Sinhala table.
    #[default]
    Builtin,
    /// A caller-supplied, pre-validated table.
    Custom(Arc<HashMap<char, char>>),
    /// No mapping at all; `simplify` is the identity.
    Identity,
}

impl CharMap {
    /// Validate and wrap a caller-supplied table.
    ///
    /// Identity entries are dropped. An empty table becomes [`CharMap::Identity`].
    pub fn custom(table: HashMap<char, char>) -> Result<Self, CharMapError> {
        let table: HashMap<char, char> = table.into_iter().filter(|(f, t)| f != t).collect();
        if table.is_empty() {
            return Ok(CharMap::Identity);
        }
        for (&from, &to) in &table {
            if table.contains_key(&to) {
                return Err(CharMapError::NotIdempotent { from, to });
            }
        }
        Ok(CharMap::Custom(Arc::new(table)))
    }

    #[inline(always)]
    pub fn get(&self, c: char) -> Option<char> {
        match self {
            CharMap::Builtin => SIMPLIFY_TABLE.get(&c).copied(),
            CharMap::Custom(table) => table.get(&c).copied(),
            CharMap::Identity => None,
        }
    }

    /// Canonical form of `c`; characters outside the table map to themselves.
    #[inline(always)]
    pub fn map(&self, c: char) -> char {
        self.get(c).unwrap_or(c)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, CharMap::Identity)
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            CharMap::Builtin => SIMPLIFY_TABLE.len(),
            CharMap::Custom(table) => table.len(),
            CharMap::Identity => 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if at least one character of `text` has a different canonical form.
    #[inline]
    pub fn remaps_any(&self, text: &str) -> bool {
        if self.is_identity() {
            return false;
        }
        if text.is_ascii() && matches!(self, CharMap::Builtin) {
            return false;
        }
        text.chars().any(|c| self.get(c).is_some())
    }
}
