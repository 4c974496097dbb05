// Rust guideline compliant 2026-10-18

use std::sync::Arc;

use drug_discovery::component::{component_message, ComponentKind};
use drug_discovery::task::{
    created_message, search_message, status_message, NewGenerationTask, NewOptimizationTask,
    NewScreeningTask, TaskKind,
};
use drug_discovery::{check_smiles, estimate_molecular_weight, MoleculeSummary};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content},
    schemars, ErrorData,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::store::TaskStore;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 100;

/// Input for creating a molecule generation task.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerationTaskInput {
    #[schemars(description = "Task name")]
    pub name: String,
    #[schemars(description = "Task description")]
    pub description: Option<String>,
    #[schemars(description = "Generation parameters (JSON object)")]
    pub parameters: Value,
}

/// Input for creating a multi-objective optimization task.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct OptimizationTaskInput {
    #[schemars(description = "Task name")]
    pub name: String,
    #[schemars(description = "Optimization objectives (JSON object)")]
    pub objectives: Value,
    #[schemars(description = "Optimization algorithm")]
    pub algorithm: String,
}

/// Input for creating a virtual screening task.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScreeningTaskInput {
    #[schemars(description = "Task name")]
    pub name: String,
    #[schemars(description = "Compound library to screen")]
    pub compound_library: String,
    #[schemars(description = "Target protein")]
    pub target_protein: String,
    #[schemars(description = "Optional screening parameters (JSON object, default {})")]
    pub screening_parameters: Option<Value>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TaskStatusInput {
    #[schemars(description = "Task id")]
    pub task_id: String,
    #[schemars(description = "Task type: molecule_generation, optimization or screening")]
    pub task_type: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchMoleculesInput {
    #[schemars(description = "Substring to look for in SMILES (case-insensitive)")]
    pub query: String,
    #[schemars(description = "Maximum number of results (default: 10)")]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct VueComponentInput {
    #[schemars(description = "Component name")]
    pub component_name: String,
    #[schemars(
        description = "Component type: data_table, molecule_viewer, task_monitor (anything else gives a basic component)"
    )]
    pub component_type: String,
    #[schemars(description = "Feature names to note in the component")]
    pub features: Option<Vec<String>>,
}

/// Molecule input that tolerates any JSON value, or none at all; non-strings
/// are treated as invalid input rather than rejected.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SmilesInput {
    #[serde(default)]
    #[schemars(description = "SMILES string")]
    pub smiles: Value,
}

/// MCP server exposing task creation, search and molecule tools.
#[derive(Clone)]
pub struct DrugDiscoveryMcpServer {
    pub tool_router: ToolRouter<Self>,
    store: Arc<dyn TaskStore>,
    user_id: String,
}

/// Turn a handler outcome into a tool result. Failures become error results
/// carrying `Error: ...` text; the session itself never fails.
fn respond(tool: &str, result: anyhow::Result<String>) -> Result<CallToolResult, ErrorData> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(err) => {
            warn!(tool, error = %err, "tool call failed");
            Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {err}"
            ))]))
        }
    }
}

#[rmcp::tool_router]
impl DrugDiscoveryMcpServer {
    pub fn new(store: Arc<dyn TaskStore>, user_id: impl Into<String>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            store,
            user_id: user_id.into(),
        }
    }

    #[rmcp::tool(description = "Create a molecule generation task")]
    async fn create_molecule_generation_task(
        &self,
        Parameters(input): Parameters<GenerationTaskInput>,
    ) -> Result<CallToolResult, ErrorData> {
        respond(
            "create_molecule_generation_task",
            self.create_generation_impl(input).await,
        )
    }

    #[rmcp::tool(description = "Create a multi-objective optimization task")]
    async fn create_optimization_task(
        &self,
        Parameters(input): Parameters<OptimizationTaskInput>,
    ) -> Result<CallToolResult, ErrorData> {
        respond(
            "create_optimization_task",
            self.create_optimization_impl(input).await,
        )
    }

    #[rmcp::tool(description = "Create a virtual screening task")]
    async fn create_screening_task(
        &self,
        Parameters(input): Parameters<ScreeningTaskInput>,
    ) -> Result<CallToolResult, ErrorData> {
        respond(
            "create_screening_task",
            self.create_screening_impl(input).await,
        )
    }

    #[rmcp::tool(description = "Get the status of a task by id and type")]
    async fn get_task_status(
        &self,
        Parameters(input): Parameters<TaskStatusInput>,
    ) -> Result<CallToolResult, ErrorData> {
        respond("get_task_status", self.task_status_impl(input).await)
    }

    #[rmcp::tool(description = "Search stored molecules by SMILES substring")]
    async fn search_molecules(
        &self,
        Parameters(input): Parameters<SearchMoleculesInput>,
    ) -> Result<CallToolResult, ErrorData> {
        respond("search_molecules", self.search_impl(input).await)
    }

    #[rmcp::tool(description = "Generate Vue 3 component source code")]
    async fn generate_vue_component(
        &self,
        Parameters(input): Parameters<VueComponentInput>,
    ) -> Result<CallToolResult, ErrorData> {
        respond("generate_vue_component", Ok(Self::component_impl(input)))
    }

    #[rmcp::tool(
        description = "Check that a SMILES string uses allowed characters and has balanced brackets"
    )]
    async fn validate_smiles(
        &self,
        Parameters(input): Parameters<SmilesInput>,
    ) -> Result<CallToolResult, ErrorData> {
        respond("validate_smiles", Ok(Self::validate_impl(&input.smiles)))
    }

    #[rmcp::tool(description = "Estimate molecular weight (g/mol) from the atoms written in a SMILES string")]
    async fn estimate_molecular_weight(
        &self,
        Parameters(input): Parameters<SmilesInput>,
    ) -> Result<CallToolResult, ErrorData> {
        respond(
            "estimate_molecular_weight",
            Ok(Self::weight_impl(&input.smiles)),
        )
    }

    #[rmcp::tool(description = "Validate a SMILES string and report weight and formula")]
    async fn analyze_smiles(
        &self,
        Parameters(input): Parameters<SmilesInput>,
    ) -> Result<CallToolResult, ErrorData> {
        respond("analyze_smiles", Ok(Self::analyze_impl(&input.smiles)))
    }
}

impl DrugDiscoveryMcpServer {
    fn clamp_limit(limit: Option<usize>) -> usize {
        limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT)
    }

    async fn insert(&self, kind: TaskKind, row: Value) -> anyhow::Result<String> {
        let record = self.store.insert_task(kind, row).await?;
        debug!(kind = %kind, id = %record.id, "task created");
        Ok(created_message(kind, &record.id))
    }

    async fn create_generation_impl(&self, input: GenerationTaskInput) -> anyhow::Result<String> {
        let payload =
            NewGenerationTask::new(input.name, input.description, input.parameters, &self.user_id);
        self.insert(TaskKind::MoleculeGeneration, serde_json::to_value(&payload)?)
            .await
    }

    async fn create_optimization_impl(
        &self,
        input: OptimizationTaskInput,
    ) -> anyhow::Result<String> {
        let payload =
            NewOptimizationTask::new(input.name, input.objectives, input.algorithm, &self.user_id);
        self.insert(TaskKind::Optimization, serde_json::to_value(&payload)?)
            .await
    }

    async fn create_screening_impl(&self, input: ScreeningTaskInput) -> anyhow::Result<String> {
        let payload = NewScreeningTask::new(
            input.name,
            input.compound_library,
            input.target_protein,
            input.screening_parameters,
            &self.user_id,
        );
        self.insert(TaskKind::Screening, serde_json::to_value(&payload)?)
            .await
    }

    async fn task_status_impl(&self, input: TaskStatusInput) -> anyhow::Result<String> {
        let kind: TaskKind = input.task_type.parse()?;
        let task = self.store.get_task(kind, &input.task_id).await?;
        Ok(status_message(&task))
    }

    async fn search_impl(&self, input: SearchMoleculesInput) -> anyhow::Result<String> {
        let limit = Self::clamp_limit(input.limit);
        let hits = self.store.search_molecules(&input.query, limit).await?;
        Ok(search_message(&hits))
    }

    fn component_impl(input: VueComponentInput) -> String {
        let kind = ComponentKind::parse(&input.component_type);
        let features = input.features.unwrap_or_default();
        component_message(&input.component_name, kind, &features)
    }

    fn validate_impl(smiles: &Value) -> String {
        match smiles.as_str() {
            Some(s) => match check_smiles(s) {
                Ok(()) => String::from("valid: true"),
                Err(problem) => format!("valid: false ({problem})"),
            },
            None => String::from("valid: false (smiles must be a string)"),
        }
    }

    fn analyze_impl(smiles: &Value) -> String {
        match smiles.as_str() {
            Some(s) => MoleculeSummary::analyze(s).to_line(),
            None => format!("{smiles}: invalid (smiles must be a string)"),
        }
    }

    fn weight_impl(smiles: &Value) -> String {
        let weight = smiles.as_str().map(estimate_molecular_weight).unwrap_or(0.0);
        format!("Estimated molecular weight: {weight:.2} g/mol")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use serde_json::json;

    fn server(store: MemoryStore) -> DrugDiscoveryMcpServer {
        DrugDiscoveryMcpServer::new(Arc::new(store), "system")
    }

    fn task_id(message: &str) -> String {
        message
            .rsplit("task id: ")
            .next()
            .map(str::to_string)
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn created_task_status_can_be_read_back() {
        let srv = server(MemoryStore::default());
        let created = srv
            .create_screening_impl(ScreeningTaskInput {
                name: "egfr".into(),
                compound_library: "zinc-fragments".into(),
                target_protein: "EGFR".into(),
                screening_parameters: None,
            })
            .await
            .unwrap();
        assert!(created.starts_with("Virtual screening task created, task id: "));

        let status = srv
            .task_status_impl(TaskStatusInput {
                task_id: task_id(&created),
                task_type: "screening".into(),
            })
            .await
            .unwrap();
        assert!(status.starts_with("Task status: pending, created at: "));
    }

    #[tokio::test]
    async fn tasks_are_scoped_to_their_kind() {
        let srv = server(MemoryStore::default());
        let created = srv
            .create_generation_impl(GenerationTaskInput {
                name: "gen".into(),
                description: None,
                parameters: json!({"samples": 100}),
            })
            .await
            .unwrap();
        let err = srv
            .task_status_impl(TaskStatusInput {
                task_id: task_id(&created),
                task_type: "optimization".into(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn unknown_task_type_is_an_error_result() {
        let srv = server(MemoryStore::default());
        let result = srv
            .get_task_status(Parameters(TaskStatusInput {
                task_id: "1".into(),
                task_type: "docking".into(),
            }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn backend_failures_do_not_end_the_session() {
        let srv = server(MemoryStore::unavailable());
        let result = srv
            .create_optimization_task(Parameters(OptimizationTaskInput {
                name: "opt".into(),
                objectives: json!({"qed": "max"}),
                algorithm: "nsga2".into(),
            }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));

        let err = srv
            .create_optimization_impl(OptimizationTaskInput {
                name: "opt".into(),
                objectives: json!({}),
                algorithm: "nsga2".into(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[tokio::test]
    async fn search_respects_limit_and_annotates_weight() {
        let srv = server(MemoryStore::with_molecules(&["CCO", "CCN", "c1ccccc1", "OCCO"]));
        let out = srv
            .search_impl(SearchMoleculesInput {
                query: "cc".into(),
                limit: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(out, "Found 2 molecules:\n- CCO (40.02 g/mol)\n- CCN (38.03 g/mol)");
    }

    #[test]
    fn search_limit_is_clamped() {
        assert_eq!(DrugDiscoveryMcpServer::clamp_limit(None), 10);
        assert_eq!(DrugDiscoveryMcpServer::clamp_limit(Some(0)), 1);
        assert_eq!(DrugDiscoveryMcpServer::clamp_limit(Some(5000)), 100);
    }

    #[test]
    fn validation_never_errors_on_odd_payloads() {
        assert_eq!(
            DrugDiscoveryMcpServer::validate_impl(&json!("CC(=O)O")),
            "valid: true"
        );
        assert!(DrugDiscoveryMcpServer::validate_impl(&json!("")).starts_with("valid: false"));
        assert_eq!(
            DrugDiscoveryMcpServer::validate_impl(&json!(42)),
            "valid: false (smiles must be a string)"
        );
        assert_eq!(
            DrugDiscoveryMcpServer::validate_impl(&Value::Null),
            "valid: false (smiles must be a string)"
        );
    }

    #[test]
    fn missing_or_non_string_smiles_still_deserializes() {
        let missing: SmilesInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.smiles, Value::Null);
        let number: SmilesInput = serde_json::from_value(json!({"smiles": 5})).unwrap();
        assert_eq!(number.smiles, json!(5));
    }

    #[tokio::test]
    async fn molecule_tools_answer_odd_payloads_with_results() {
        let srv = server(MemoryStore::default());
        for payload in [json!({}), json!({"smiles": 5})] {
            let input: SmilesInput = serde_json::from_value(payload.clone()).unwrap();
            let result = srv.validate_smiles(Parameters(input)).await.unwrap();
            assert_eq!(result.is_error, Some(false), "validate_smiles {payload}");

            let input: SmilesInput = serde_json::from_value(payload.clone()).unwrap();
            let result = srv.analyze_smiles(Parameters(input)).await.unwrap();
            assert_eq!(result.is_error, Some(false), "analyze_smiles {payload}");

            let input: SmilesInput = serde_json::from_value(payload.clone()).unwrap();
            let result = srv.estimate_molecular_weight(Parameters(input)).await.unwrap();
            assert_eq!(result.is_error, Some(false), "estimate_molecular_weight {payload}");
        }
        assert_eq!(
            DrugDiscoveryMcpServer::validate_impl(&Value::Null),
            "valid: false (smiles must be a string)"
        );
        assert_eq!(
            DrugDiscoveryMcpServer::analyze_impl(&json!(5)),
            "5: invalid (smiles must be a string)"
        );
        assert_eq!(
            DrugDiscoveryMcpServer::analyze_impl(&json!("CC(=O)O")),
            "CC(=O)O: valid, MW 56.02 g/mol, formula C2O2"
        );
    }

    #[test]
    fn weight_of_non_strings_is_zero() {
        assert_eq!(
            DrugDiscoveryMcpServer::weight_impl(&json!("C")),
            "Estimated molecular weight: 12.01 g/mol"
        );
        assert_eq!(
            DrugDiscoveryMcpServer::weight_impl(&json!(["C"])),
            "Estimated molecular weight: 0.00 g/mol"
        );
    }

    #[test]
    fn component_type_falls_back_to_basic() {
        let out = DrugDiscoveryMcpServer::component_impl(VueComponentInput {
            component_name: "Summary".into(),
            component_type: "chart".into(),
            features: None,
        });
        assert!(out.contains("<h2>Summary component</h2>"));
        assert!(out.starts_with("Generated Vue component:\n```vue\n"));
    }
}
