//! Read-only per-connector commands: config, tasks, status

use crate::api::ApiClient;
use crate::commands::{render, run_targeted, Context, TargetArgs};
use crate::error::CliResult;

/// Configuration of one connector, after checking it exists
pub async fn connector_config(client: ApiClient, name: String) -> CliResult<serde_json::Value> {
    client.ensure_exists(&name).await?;
    let config = client.get_config(&name).await?;
    Ok(serde_json::json!({ "name": name, "config": config }))
}

/// Tasks of one connector, after checking it exists
pub async fn connector_tasks(client: ApiClient, name: String) -> CliResult<serde_json::Value> {
    client.ensure_exists(&name).await?;
    let tasks = client.list_tasks(&name).await?;
    Ok(serde_json::to_value(tasks)?)
}

/// Runtime status of one connector, after checking it exists
pub async fn connector_status(client: ApiClient, name: String) -> CliResult<serde_json::Value> {
    client.ensure_exists(&name).await?;
    let status = client.get_status(&name).await?;
    if status.has_failures() {
        tracing::warn!(connector = %name, "connector or task reports FAILED");
    }
    Ok(serde_json::to_value(status)?)
}

/// Execute the config command
pub async fn execute_config(ctx: &Context, args: TargetArgs) -> CliResult<()> {
    render(run_targeted(ctx, &args.target(), "config", connector_config).await?)
}

/// Execute the tasks command
pub async fn execute_tasks(ctx: &Context, args: TargetArgs) -> CliResult<()> {
    render(run_targeted(ctx, &args.target(), "tasks", connector_tasks).await?)
}

/// Execute the status command
pub async fn execute_status(ctx: &Context, args: TargetArgs) -> CliResult<()> {
    render(run_targeted(ctx, &args.target(), "status", connector_status).await?)
}
