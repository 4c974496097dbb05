use serde::Serialize;

use crate::smiles::check_smiles;
use crate::weight::{composition, estimate_molecular_weight};

/// Everything the core can say about one candidate string.
///
/// Used for CLI output (text and `--json`) and the `analyze_smiles` tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoleculeSummary {
    pub smiles: String,
    pub valid: bool,
    /// First structural problem, if any.
    pub problem: Option<String>,
    pub molecular_weight: f64,
    pub formula: String,
    pub unrecognized_tokens: usize,
}

impl MoleculeSummary {
    /// Never fails; an invalid string still gets a best-effort weight.
    pub fn analyze(candidate: &str) -> Self {
        let check = check_smiles(candidate);
        let comp = composition(candidate);
        MoleculeSummary {
            smiles: candidate.to_string(),
            valid: check.is_ok(),
            problem: check.err().map(|e| e.to_string()),
            molecular_weight: estimate_molecular_weight(candidate),
            formula: comp.formula(),
            unrecognized_tokens: comp.unrecognized(),
        }
    }

    /// Single-line rendering used by the CLI and tool responses.
    pub fn to_line(&self) -> String {
        let verdict = match &self.problem {
            None => String::from("valid"),
            Some(problem) => format!("invalid ({problem})"),
        };
        let formula = if self.formula.is_empty() {
            "-"
        } else {
            self.formula.as_str()
        };
        let mut line = format!(
            "{}: {}, MW {:.2} g/mol, formula {}",
            self.smiles, verdict, self.molecular_weight, formula
        );
        if self.unrecognized_tokens > 0 {
            line.push_str(&format!(
                ", {} unrecognized token(s)",
                self.unrecognized_tokens
            ));
        }
        line
    }
}
