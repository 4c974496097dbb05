//! Library entry point for the drug discovery platform's Rust core.
//!
//! The molecule-string utilities (`smiles`, `weight`, `element`) are pure,
//! synchronous and total: every input gets an answer, nothing panics and no
//! state is shared beyond the constant atomic weight table. They are safe to
//! call on every keystroke of a form field or from any number of tool
//! handlers at once.
//!
//! `task` and `component` hold the record types and text templates used by
//! the MCP server.
//
// Public modules
pub mod analysis;
pub mod component;
pub mod element;
pub mod smiles;
pub mod task;
pub mod weight;

// Re-export primary entry points for ergonomic use.
pub use analysis::MoleculeSummary;
pub use component::{generate_component, ComponentKind};
pub use element::Element;
pub use smiles::{check_smiles, is_valid_smiles, SmilesError};
pub use task::{TaskKind, TaskRecord, TaskStatus};
pub use weight::{composition, estimate_molecular_weight, Composition};
