//! Element symbols recognized by the weight estimator and their average
//! atomic masses.
//!
//! The table is a closed enum with `const` weights, so there is nothing to
//! initialise or tear down and every lookup is a plain `match`. Symbols
//! outside the table are not an error: [`atomic_weight`] resolves them to
//! `0.0`.

use std::fmt;

/// An element the estimator knows a weight for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    H,
    C,
    N,
    O,
    F,
    P,
    S,
    Cl,
    Br,
    I,
}

impl Element {
    /// Every recognized element, in table order.
    pub const ALL: [Element; 10] = [
        Element::H,
        Element::C,
        Element::N,
        Element::O,
        Element::F,
        Element::P,
        Element::S,
        Element::Cl,
        Element::Br,
        Element::I,
    ];

    /// Case-sensitive symbol lookup. `"cl"` and `"CL"` are not `Cl`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let element = match symbol {
            "H" => Element::H,
            "C" => Element::C,
            "N" => Element::N,
            "O" => Element::O,
            "F" => Element::F,
            "P" => Element::P,
            "S" => Element::S,
            "Cl" => Element::Cl,
            "Br" => Element::Br,
            "I" => Element::I,
            _ => return None,
        };
        Some(element)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Br => "Br",
            Element::I => "I",
        }
    }

    /// Average atomic mass in g/mol.
    pub const fn atomic_weight(self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::F => 18.998,
            Element::P => 30.974,
            Element::S => 32.065,
            Element::Cl => 35.453,
            Element::Br => 79.904,
            Element::I => 126.904,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Weight for a raw symbol, `0.0` for anything not in the table.
pub fn atomic_weight(symbol: &str) -> f64 {
    Element::from_symbol(symbol)
        .map(Element::atomic_weight)
        .unwrap_or(0.0)
}
