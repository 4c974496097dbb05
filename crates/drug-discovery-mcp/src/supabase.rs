// Rust guideline compliant 2026-10-18

//! `TaskStore` backed by a Supabase project's PostgREST endpoint.

use anyhow::Context;
use async_trait::async_trait;
use drug_discovery::task::{MoleculeRecord, TaskKind, TaskRecord, MOLECULES_TABLE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::McpConfig;
use crate::store::{StoreError, TaskStore};

/// Thin PostgREST client. Every request carries the project key both as
/// `apikey` and as a bearer token.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: Client,
    rest_url: String,
    key: String,
}

impl SupabaseStore {
    pub fn new(config: &McpConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            rest_url: rest_url(&config.supabase_url),
            key: config.supabase_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.key).bearer_auth(&self.key)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        table: &str,
        request: RequestBuilder,
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|source| StoreError::Http {
                table: table.to_string(),
                source,
            })?;
        read_rows(table, response).await
    }
}

/// `https://x.supabase.co/` -> `https://x.supabase.co/rest/v1`
pub fn rest_url(base: &str) -> String {
    format!("{}/rest/v1", base.trim_end_matches('/'))
}

/// PostgREST `ilike` filter value for a substring match.
pub fn ilike_contains(query: &str) -> String {
    format!("ilike.*{query}*")
}

/// Pull the `message` field out of a PostgREST error body, falling back to
/// the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

async fn read_rows<T: DeserializeOwned>(
    table: &str,
    response: Response,
) -> Result<Vec<T>, StoreError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StoreError::Api {
            table: table.to_string(),
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    response
        .json::<Vec<T>>()
        .await
        .map_err(|source| StoreError::Http {
            table: table.to_string(),
            source,
        })
}

#[async_trait]
impl TaskStore for SupabaseStore {
    async fn insert_task(&self, kind: TaskKind, row: Value) -> Result<TaskRecord, StoreError> {
        let table = kind.table();
        debug!(table, "inserting task");
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&row);
        let rows: Vec<TaskRecord> = self.send(table, request).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::EmptyInsert(table.to_string()))
    }

    async fn get_task(&self, kind: TaskKind, id: &str) -> Result<TaskRecord, StoreError> {
        let table = kind.table();
        debug!(table, id, "fetching task");
        let request = self.client.get(self.table_url(table)).query(&[
            ("select", "*".to_string()),
            ("id", format!("eq.{id}")),
            ("limit", "1".to_string()),
        ]);
        let rows: Vec<TaskRecord> = self.send(table, request).await?;
        rows.into_iter().next().ok_or_else(|| StoreError::NotFound {
            table: table.to_string(),
            id: id.to_string(),
        })
    }

    async fn search_molecules(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<MoleculeRecord>, StoreError> {
        debug!(query, limit, "searching molecules");
        let request = self.client.get(self.table_url(MOLECULES_TABLE)).query(&[
            ("select", "*".to_string()),
            ("smiles", ilike_contains(query)),
            ("limit", limit.to_string()),
        ]);
        self.send(MOLECULES_TABLE, request).await
    }
}
