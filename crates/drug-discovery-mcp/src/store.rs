// Rust guideline compliant 2026-10-18

use async_trait::async_trait;
use drug_discovery::task::{MoleculeRecord, TaskKind, TaskRecord};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request to {table} failed: {source}")]
    Http {
        table: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{table} returned HTTP {status}: {message}")]
    Api {
        table: String,
        status: u16,
        message: String,
    },

    #[error("insert into {0} returned no rows")]
    EmptyInsert(String),

    #[error("task {id} not found in {table}")]
    NotFound { table: String, id: String },

    #[error("failed to encode row: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Remote tables the MCP tools read and write.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert one row into the kind's table and return it as stored.
    async fn insert_task(&self, kind: TaskKind, row: Value) -> Result<TaskRecord, StoreError>;

    async fn get_task(&self, kind: TaskKind, id: &str) -> Result<TaskRecord, StoreError>;

    /// Case-insensitive substring match on `molecules.smiles`.
    async fn search_molecules(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<MoleculeRecord>, StoreError>;
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    /// In-process store used by the tool tests.
    #[derive(Default)]
    pub struct MemoryStore {
        tasks: Mutex<HashMap<TaskKind, Vec<TaskRecord>>>,
        molecules: Vec<MoleculeRecord>,
        unavailable: bool,
    }

    impl MemoryStore {
        pub fn with_molecules(smiles: &[&str]) -> Self {
            let molecules = smiles
                .iter()
                .enumerate()
                .map(|(i, s)| MoleculeRecord {
                    id: format!("m{}", i + 1),
                    task_id: None,
                    smiles: s.to_string(),
                    properties: Value::Null,
                    created_at: None,
                })
                .collect();
            Self {
                molecules,
                ..Default::default()
            }
        }

        /// Every call fails as if the backend answered 503.
        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Default::default()
            }
        }

        fn check(&self, table: &str) -> Result<(), StoreError> {
            if self.unavailable {
                return Err(StoreError::Api {
                    table: table.to_string(),
                    status: 503,
                    message: "service unavailable".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TaskStore for MemoryStore {
        async fn insert_task(&self, kind: TaskKind, row: Value) -> Result<TaskRecord, StoreError> {
            self.check(kind.table())?;
            let mut row = row;
            if let Value::Object(fields) = &mut row {
                fields.insert("id".into(), Value::String(uuid::Uuid::new_v4().to_string()));
                fields.insert(
                    "created_at".into(),
                    Value::String(chrono::Utc::now().to_rfc3339()),
                );
            }
            let record: TaskRecord = serde_json::from_value(row)?;
            self.tasks
                .lock()
                .await
                .entry(kind)
                .or_default()
                .push(record.clone());
            Ok(record)
        }

        async fn get_task(&self, kind: TaskKind, id: &str) -> Result<TaskRecord, StoreError> {
            self.check(kind.table())?;
            self.tasks
                .lock()
                .await
                .get(&kind)
                .and_then(|rows| rows.iter().find(|t| t.id == id).cloned())
                .ok_or_else(|| StoreError::NotFound {
                    table: kind.table().to_string(),
                    id: id.to_string(),
                })
        }

        async fn search_molecules(
            &self,
            query: &str,
            limit: usize,
        ) -> Result<Vec<MoleculeRecord>, StoreError> {
            self.check(drug_discovery::task::MOLECULES_TABLE)?;
            let needle = query.to_lowercase();
            Ok(self
                .molecules
                .iter()
                .filter(|m| m.smiles.to_lowercase().contains(&needle))
                .take(limit)
                .cloned()
                .collect())
        }
    }
}
