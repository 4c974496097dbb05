//! Structural validation of SMILES strings.
//!
//! The check is deliberately shallow: a restricted character set plus
//! balanced round and square brackets. Passing it means "character-safe and
//! balanced", not "chemically valid". Element symbols, valence, ring-closure
//! pairing and aromaticity are never looked at.
//!
//! Both entry points are total. [`is_valid_smiles`] is the verdict callers
//! normally want; [`check_smiles`] additionally says what was wrong.

use std::fmt;
use thiserror::Error;

/// Bracket family tracked by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(` / `)` branch delimiters.
    Round,
    /// `[` / `]` bracket-atom delimiters.
    Square,
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bracket::Round => f.write_str("parenthesis"),
            Bracket::Square => f.write_str("square bracket"),
        }
    }
}

/// First structural problem found in a candidate string.
///
/// Positions are character offsets from the start of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmilesError {
    #[error("SMILES string is empty")]
    Empty,

    #[error("character {ch:?} at position {position} is not allowed in SMILES")]
    InvalidCharacter { ch: char, position: usize },

    #[error("closing {bracket} at position {position} has no matching opener")]
    UnmatchedClose { bracket: Bracket, position: usize },

    #[error("{depth} {bracket}(s) left unclosed")]
    Unclosed { bracket: Bracket, depth: i64 },
}

/// Characters accepted anywhere in a candidate: ASCII letters and digits
/// plus `[ ] ( ) = # + - : . @ / \ %`.
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '[' | ']' | '(' | ')' | '=' | '#' | '+' | '-' | ':' | '.' | '@' | '/' | '\\' | '%'
        )
}

/// Structural check with a reason on failure.
///
/// The whole string is screened for disallowed characters before bracket
/// balance is looked at, so `"C)$"` reports the `$`, not the `)`.
pub fn check_smiles(candidate: &str) -> Result<(), SmilesError> {
    if candidate.is_empty() {
        return Err(SmilesError::Empty);
    }

    let disallowed = candidate
        .chars()
        .enumerate()
        .find(|(_, c)| !is_allowed_char(*c));
    if let Some((position, ch)) = disallowed {
        return Err(SmilesError::InvalidCharacter { ch, position });
    }

    let mut round: i64 = 0;
    let mut square: i64 = 0;
    for (position, ch) in candidate.chars().enumerate() {
        match ch {
            '(' => round += 1,
            ')' => round -= 1,
            '[' => square += 1,
            ']' => square -= 1,
            _ => continue,
        }
        if round < 0 {
            return Err(SmilesError::UnmatchedClose {
                bracket: Bracket::Round,
                position,
            });
        }
        if square < 0 {
            return Err(SmilesError::UnmatchedClose {
                bracket: Bracket::Square,
                position,
            });
        }
    }

    if round != 0 {
        return Err(SmilesError::Unclosed {
            bracket: Bracket::Round,
            depth: round,
        });
    }
    if square != 0 {
        return Err(SmilesError::Unclosed {
            bracket: Bracket::Square,
            depth: square,
        });
    }
    Ok(())
}

/// `true` when `candidate` is non-empty, uses only allowed characters and
/// has balanced brackets. Never panics.
pub fn is_valid_smiles(candidate: &str) -> bool {
    check_smiles(candidate).is_ok()
}
