//! Maximal-run grouping of classified scalars.
//!
//! [`Tokens`] is a single-pass iterator over an input string that classifies
//! each scalar once and merges consecutive scalars of equal [`TokenKind`]
//! into maximal runs. Tokens borrow from the input; the whole pass performs
//! no allocation beyond what the caller collects into.
//!
//! Guarantees, for every input and mode:
//!
//! * concatenating all token texts in order reproduces the input exactly;
//! * no token text is empty;
//! * no two adjacent tokens share a kind.
//!
//! Iteration is over scalar values (`char_indices`), never over code units,
//! so astral-plane characters are classified and bounded as one character.

use std::iter::FusedIterator;
use std::str::CharIndices;

use crate::classify::{Mode, TokenKind, classify};

/// One maximal same-kind run of the input.
///
/// `text` is a substring of the tokenized input; tokens are plain values
/// with no identity beyond their position in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Iterator over the maximal same-kind runs of `input` under `mode`.
pub fn tokens(input: &str, mode: Mode) -> Tokens<'_> {
    let mut iter = input.char_indices();
    // Seed the first run; an empty input yields a fused, empty iterator.
    let run = iter.next().map(|(_, c)| (0, classify(c, mode)));
    Tokens {
        input,
        iter,
        mode,
        run,
    }
}

/// See [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    iter: CharIndices<'a>,
    mode: Mode,
    // Byte offset and kind of the open run; `None` once exhausted. The run
    // kind is the kind of the run's first scalar, which equals the kind of
    // every scalar merged into it.
    run: Option<(usize, TokenKind)>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let (start, kind) = self.run?;
        for (at, c) in self.iter.by_ref() {
            let next_kind = classify(c, self.mode);
            if next_kind != kind {
                self.run = Some((at, next_kind));
                return Some(Token {
                    kind,
                    text: &self.input[start..at],
                });
            }
        }
        // Input exhausted: close the final run.
        self.run = None;
        Some(Token {
            kind,
            text: &self.input[start..],
        })
    }
}

impl FusedIterator for Tokens<'_> {}

/// Splits `input` into maximal script runs under [`Mode::Full`].
///
/// ```
/// assert_eq!(kanaseg::tokenize("ふふフフ"), ["ふふ", "フフ"]);
/// assert_eq!(
///     kanaseg::tokenize("truly 私は悲しい"),
///     ["truly", " ", "私", "は", "悲", "しい"],
/// );
/// assert!(kanaseg::tokenize("").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    tokenize_with(input, Mode::Full)
}

/// Splits `input` into maximal script runs under the given mode.
///
/// ```
/// use kanaseg::Mode;
/// assert_eq!(
///     kanaseg::tokenize_with("truly 私は悲しい", Mode::Compact),
///     ["truly ", "私は悲しい"],
/// );
/// ```
pub fn tokenize_with(input: &str, mode: Mode) -> Vec<&str> {
    tokens(input, mode).map(|t| t.text).collect()
}

/// Like [`tokenize_with`], but pairs each run with its [`TokenKind`].
pub fn tokenize_detailed(input: &str, mode: Mode) -> Vec<Token<'_>> {
    tokens(input, mode).collect()
}
