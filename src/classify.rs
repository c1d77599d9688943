//! Per-scalar script classification with two precision modes.
//!
//! Classification is an **ordered** cascade of predicate checks; the first
//! predicate that matches wins. The order is load-bearing because the
//! underlying ranges overlap (both space characters live inside punctuation
//! ranges, the prolonged sound mark ー is punctuation, hiragana *and*
//! katakana). Reordering the cascade changes results.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::unicode::{
    is_en_num, is_en_punctuation, is_en_space, is_hiragana, is_ja_num, is_ja_punctuation,
    is_ja_space, is_japanese, is_kanji, is_katakana, is_romaji,
};

/// Classification precision.
///
/// [`Mode::Full`] distinguishes all eleven [`TokenKind`]s. [`Mode::Compact`]
/// coarsens to `En` / `Ja` / `Other` — and it *reclassifies* rather than
/// relabels: digits and punctuation of either script become `Other`, while
/// each script's space character folds into that script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Full,
    Compact,
}

/// Error for a mode label that is neither `"full"` nor `"compact"`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown classification mode `{0}`, expected \"full\" or \"compact\"")]
pub struct ModeError(String);

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Mode::Full),
            "compact" => Ok(Mode::Compact),
            other => Err(ModeError(other.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Full => "full",
            Mode::Compact => "compact",
        })
    }
}

/// Script/category of a scalar, and by extension of a token.
///
/// Compact mode only ever produces `En`, `Ja`, or `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    En,
    Ja,
    EnNum,
    JaNum,
    EnPunc,
    JaPunc,
    Kanji,
    Hiragana,
    Katakana,
    Space,
    Other,
}

impl TokenKind {
    /// Stable external label, e.g. for serialized output or display.
    pub const fn label(self) -> &'static str {
        match self {
            TokenKind::En => "en",
            TokenKind::Ja => "ja",
            TokenKind::EnNum => "englishNumeral",
            TokenKind::JaNum => "japaneseNumeral",
            TokenKind::EnPunc => "englishPunctuation",
            TokenKind::JaPunc => "japanesePunctuation",
            TokenKind::Kanji => "kanji",
            TokenKind::Hiragana => "hiragana",
            TokenKind::Katakana => "katakana",
            TokenKind::Space => "space",
            TokenKind::Other => "other",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies one Unicode scalar value. Total, pure, deterministic.
#[inline]
pub fn classify(c: char, mode: Mode) -> TokenKind {
    match mode {
        Mode::Full => classify_full(c),
        Mode::Compact => classify_compact(c),
    }
}

// Both spaces collapse into one script-less Space kind. The space checks
// must precede the punctuation checks, which swallow both space characters.
#[inline(always)]
fn classify_full(c: char) -> TokenKind {
    if is_ja_space(c) {
        return TokenKind::Space;
    }
    if is_en_space(c) {
        return TokenKind::Space;
    }
    if is_ja_num(c) {
        return TokenKind::JaNum;
    }
    if is_en_num(c) {
        return TokenKind::EnNum;
    }
    if is_en_punctuation(c) {
        return TokenKind::EnPunc;
    }
    if is_ja_punctuation(c) {
        return TokenKind::JaPunc;
    }
    if is_kanji(c) {
        return TokenKind::Kanji;
    }
    if is_hiragana(c) {
        return TokenKind::Hiragana;
    }
    if is_katakana(c) {
        return TokenKind::Katakana;
    }
    if is_japanese(c) {
        return TokenKind::Ja;
    }
    if is_romaji(c) {
        return TokenKind::En;
    }
    TokenKind::Other
}

// Unlike full mode, each space stays affiliated with its script so that
// "truly 私は" groups as ["truly ", "私は"], while digits and punctuation
// of either script drop to Other.
#[inline(always)]
fn classify_compact(c: char) -> TokenKind {
    if is_ja_num(c) {
        return TokenKind::Other;
    }
    if is_en_num(c) {
        return TokenKind::Other;
    }
    if is_en_space(c) {
        return TokenKind::En;
    }
    if is_en_punctuation(c) {
        return TokenKind::Other;
    }
    if is_ja_space(c) {
        return TokenKind::Ja;
    }
    if is_ja_punctuation(c) {
        return TokenKind::Other;
    }
    if is_japanese(c) {
        return TokenKind::Ja;
    }
    if is_romaji(c) {
        return TokenKind::En;
    }
    TokenKind::Other
}
