// Rust guideline compliant 2026-10-18

mod config;
mod store;
mod supabase;
mod tools;

use std::sync::Arc;

use anyhow::Context;
use rmcp::{model::*, tool_handler, transport::stdio, ServerHandler, ServiceExt};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::McpConfig;
use crate::supabase::SupabaseStore;
use crate::tools::DrugDiscoveryMcpServer;

#[tool_handler]
impl ServerHandler for DrugDiscoveryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Drug Discovery MCP Server: create and track molecule generation, optimization and screening tasks, search stored molecules, check SMILES strings and generate Vue components.".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env may carry both the Supabase credentials and RUST_LOG.
    dotenvy::dotenv().ok();

    // stdout is the MCP transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = McpConfig::from_env().context("loading Supabase configuration")?;
    let store = SupabaseStore::new(&config)?;
    info!(url = %config.supabase_url, user_id = %config.user_id, "drug discovery MCP server starting");

    let server = DrugDiscoveryMcpServer::new(Arc::new(store), config.user_id.clone());
    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("MCP serve error: {e:?}");
    })?;
    service.waiting().await?;
    Ok(())
}
