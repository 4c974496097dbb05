//! Heuristic molecular weight estimation from a SMILES string.
//!
//! Tokens are every non-overlapping match of `[A-Z][a-z]?`. This is a
//! scanner, not a parser: bracket atoms such as `[nH]` are not grouped,
//! lowercase aromatic atoms are never matched, ring-closure digits are
//! skipped simply because they never match, and implicit hydrogens are not
//! added. Unknown tokens weigh nothing.
//!
//! [`estimate_molecular_weight`] cannot tell "no atoms" apart from "atoms it
//! does not know"; both give `0.0`. Callers that need the difference use
//! [`composition`], which counts unrecognized tokens separately.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::{atomic_weight, Element};

/// Atom-symbol token pattern: one uppercase letter, optionally one lowercase.
static ATOM_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]?").expect("atom token pattern is valid"));

/// Iterate over atom-symbol tokens in scan order.
pub fn atom_tokens(candidate: &str) -> impl Iterator<Item = &str> {
    ATOM_TOKEN.find_iter(candidate).map(|m| m.as_str())
}

/// Round half-up to two decimal places. Inputs here are never negative, so
/// `f64::round` (half away from zero) is half-up.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Approximate molecular weight in g/mol, rounded to two decimals.
///
/// Total and pure: any input, including one that fails validation, yields a
/// finite number `>= 0.0`.
pub fn estimate_molecular_weight(candidate: &str) -> f64 {
    let sum: f64 = atom_tokens(candidate).map(atomic_weight).sum();
    round2(sum)
}

/// Per-element token counts for a candidate string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    counts: BTreeMap<Element, usize>,
    unrecognized: usize,
}

impl Composition {
    pub fn count(&self, element: Element) -> usize {
        self.counts.get(&element).copied().unwrap_or(0)
    }

    /// Number of recognized atom tokens.
    pub fn atom_count(&self) -> usize {
        self.counts.values().sum()
    }

    /// Tokens that matched the atom pattern but are not in the weight table.
    pub fn unrecognized(&self) -> usize {
        self.unrecognized
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty() && self.unrecognized == 0
    }

    /// Unrounded sum of recognized atom weights.
    pub fn weight(&self) -> f64 {
        self.counts
            .iter()
            .map(|(element, n)| element.atomic_weight() * *n as f64)
            .sum()
    }

    /// Hill-order formula: carbon first, hydrogen second, then alphabetical.
    /// Without carbon every element, hydrogen included, is alphabetical.
    /// Returns an empty string when nothing was recognized.
    pub fn formula(&self) -> String {
        let mut order: Vec<Element> = self.counts.keys().copied().collect();
        order.sort_by_key(|e| e.symbol());
        if self.counts.contains_key(&Element::C) {
            order.retain(|e| !matches!(e, Element::C | Element::H));
            if self.counts.contains_key(&Element::H) {
                order.insert(0, Element::H);
            }
            order.insert(0, Element::C);
        }

        let mut out = String::new();
        for element in order {
            out.push_str(element.symbol());
            let n = self.count(element);
            if n > 1 {
                out.push_str(&n.to_string());
            }
        }
        out
    }
}

/// Count the atom tokens of `candidate` per element.
pub fn composition(candidate: &str) -> Composition {
    let mut comp = Composition::default();
    for token in atom_tokens(candidate) {
        match Element::from_symbol(token) {
            Some(element) => *comp.counts.entry(element).or_insert(0) += 1,
            None => comp.unrecognized += 1,
        }
    }
    comp
}
