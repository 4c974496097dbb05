//! Task and molecule records shared by the platform's remote tables.
//!
//! Three task families live in three tables with slightly different
//! columns. Insert payloads are modelled per family; rows are read back
//! through the common [`TaskRecord`] view, which only names the columns
//! every family has.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::weight::estimate_molecular_weight;

/// Owner id stamped on tasks created without a signed-in user.
pub const SYSTEM_USER_ID: &str = "system";

/// Table holding generated / imported molecules.
pub const MOLECULES_TABLE: &str = "molecules";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task type: {0} (expected molecule_generation, optimization or screening)")]
pub struct UnknownTaskKind(pub String);

/// Task family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    MoleculeGeneration,
    Optimization,
    Screening,
}

impl TaskKind {
    pub fn table(self) -> &'static str {
        match self {
            TaskKind::MoleculeGeneration => "molecule_generation_tasks",
            TaskKind::Optimization => "multi_objective_optimization_tasks",
            TaskKind::Screening => "virtual_screening_tasks",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::MoleculeGeneration => "molecule_generation",
            TaskKind::Optimization => "optimization",
            TaskKind::Screening => "screening",
        }
    }

    /// Human-readable name used in tool responses.
    pub fn label(self) -> &'static str {
        match self {
            TaskKind::MoleculeGeneration => "Molecule generation",
            TaskKind::Optimization => "Multi-objective optimization",
            TaskKind::Screening => "Virtual screening",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = UnknownTaskKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "molecule_generation" => Ok(TaskKind::MoleculeGeneration),
            "optimization" => Ok(TaskKind::Optimization),
            "screening" => Ok(TaskKind::Screening),
            other => Err(UnknownTaskKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insert payload for `molecule_generation_tasks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGenerationTask {
    pub name: String,
    pub description: String,
    pub parameters: Value,
    pub status: TaskStatus,
    pub user_id: String,
}

impl NewGenerationTask {
    pub fn new(name: String, description: Option<String>, parameters: Value, user_id: &str) -> Self {
        Self {
            name,
            description: description.unwrap_or_default(),
            parameters,
            status: TaskStatus::Pending,
            user_id: user_id.to_string(),
        }
    }
}

/// Insert payload for `multi_objective_optimization_tasks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOptimizationTask {
    pub name: String,
    pub objectives: Value,
    pub algorithm: String,
    pub status: TaskStatus,
    pub user_id: String,
}

impl NewOptimizationTask {
    pub fn new(name: String, objectives: Value, algorithm: String, user_id: &str) -> Self {
        Self {
            name,
            objectives,
            algorithm,
            status: TaskStatus::Pending,
            user_id: user_id.to_string(),
        }
    }
}

/// Insert payload for `virtual_screening_tasks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewScreeningTask {
    pub name: String,
    pub compound_library: String,
    pub target_protein: String,
    /// Column is non-null; an empty object is sent when the caller has none.
    pub screening_parameters: Value,
    pub status: TaskStatus,
    pub user_id: String,
}

impl NewScreeningTask {
    pub fn new(
        name: String,
        compound_library: String,
        target_protein: String,
        screening_parameters: Option<Value>,
        user_id: &str,
    ) -> Self {
        Self {
            name,
            compound_library,
            target_protein,
            screening_parameters: screening_parameters.unwrap_or_else(|| Value::Object(Map::new())),
            status: TaskStatus::Pending,
            user_id: user_id.to_string(),
        }
    }
}

/// Columns shared by every task table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub user_id: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeRecord {
    pub id: String,
    #[serde(default)]
    pub task_id: Option<String>,
    pub smiles: String,
    #[serde(default)]
    pub properties: Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `"{label} task created, task id: {id}"`
pub fn created_message(kind: TaskKind, id: &str) -> String {
    format!("{} task created, task id: {}", kind.label(), id)
}

pub fn status_message(task: &TaskRecord) -> String {
    format!("Task status: {}, created at: {}", task.status, task.created_at)
}

/// Search hit listing, one `- smiles (weight)` line per molecule.
pub fn search_message(molecules: &[MoleculeRecord]) -> String {
    let mut out = format!("Found {} molecules:", molecules.len());
    for m in molecules {
        out.push_str(&format!(
            "\n- {} ({:.2} g/mol)",
            m.smiles,
            estimate_molecular_weight(&m.smiles)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_parse_from_tool_names() {
        assert_eq!(
            "molecule_generation".parse::<TaskKind>(),
            Ok(TaskKind::MoleculeGeneration)
        );
        assert_eq!("optimization".parse::<TaskKind>(), Ok(TaskKind::Optimization));
        assert_eq!("screening".parse::<TaskKind>(), Ok(TaskKind::Screening));
        assert_eq!(
            "docking".parse::<TaskKind>(),
            Err(UnknownTaskKind("docking".to_string()))
        );
    }

    #[test]
    fn kinds_map_to_tables() {
        assert_eq!(TaskKind::MoleculeGeneration.table(), "molecule_generation_tasks");
        assert_eq!(TaskKind::Optimization.table(), "multi_objective_optimization_tasks");
        assert_eq!(TaskKind::Screening.table(), "virtual_screening_tasks");
    }

    #[test]
    fn generation_payload_defaults() {
        let task = NewGenerationTask::new("gen".into(), None, json!({"n": 10}), SYSTEM_USER_ID);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "gen",
                "description": "",
                "parameters": {"n": 10},
                "status": "pending",
                "user_id": "system"
            })
        );
    }

    #[test]
    fn screening_payload_fills_parameters() {
        let task = NewScreeningTask::new(
            "screen".into(),
            "zinc".into(),
            "EGFR".into(),
            None,
            SYSTEM_USER_ID,
        );
        assert_eq!(task.screening_parameters, json!({}));
    }

    #[test]
    fn record_reads_partial_rows() {
        let row = json!({
            "id": "42",
            "name": "opt",
            "status": "running",
            "user_id": "system",
            "created_at": "2025-01-01T00:00:00Z",
            "objectives": {"qed": "max"},
            "algorithm": "nsga2"
        });
        let task: TaskRecord = serde_json::from_value(row).unwrap();
        assert_eq!(task.status, TaskStatus::Running);
        assert_eq!(
            status_message(&task),
            "Task status: running, created at: 2025-01-01T00:00:00Z"
        );
    }

    #[test]
    fn messages_render() {
        assert_eq!(
            created_message(TaskKind::Screening, "abc"),
            "Virtual screening task created, task id: abc"
        );
        let hits = vec![MoleculeRecord {
            id: "1".into(),
            task_id: None,
            smiles: "CCO".into(),
            properties: Value::Null,
            created_at: None,
        }];
        assert_eq!(search_message(&hits), "Found 1 molecules:\n- CCO (40.02 g/mol)");
        assert_eq!(search_message(&[]), "Found 0 molecules:");
    }
}
