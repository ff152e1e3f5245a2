//! Create command - submit a connector from a JSON file or built interactively

use crate::api::ApiClient;
use crate::commands::Context;
use crate::error::{CliError, CliResult};
use crate::interactive::{require_interactive, InteractiveBuilder, Prompter, TerminalPrompter};
use crate::models::{ConnectorConfig, ConnectorInfo, PluginKind};
use crate::output::{print_json, print_success};
use crate::validation;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the create command
#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// JSON file holding the connector document; prompts interactively when omitted
    #[arg(long, short = 'J')]
    pub json_file: Option<PathBuf>,

    /// Only validate the JSON file, do not submit it
    #[arg(long, short = 'V', requires = "json_file")]
    pub validate: bool,
}

/// Report printed by `--validate`
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub name: String,
    pub connector_class: String,
    pub plugin: String,
}

impl ValidationReport {
    fn new(document: &ConnectorConfig, kind: &PluginKind) -> Self {
        Self {
            valid: true,
            name: document.name.clone(),
            connector_class: document.connector_class().unwrap_or_default().to_string(),
            plugin: kind.to_string(),
        }
    }
}

/// Validate a document file without touching the network
pub fn validate_file(path: &std::path::Path) -> CliResult<ValidationReport> {
    let document = validation::load_document(path)?;
    let kind = validation::validate(&document)?;
    Ok(ValidationReport::new(&document, &kind))
}

/// Submit a validated document, refusing to overwrite an existing connector
pub async fn submit(client: &ApiClient, document: &ConnectorConfig) -> CliResult<ConnectorInfo> {
    validation::validate(document)?;
    if client.exists(&document.name).await? {
        return Err(CliError::AlreadyExists(document.name.clone()));
    }

    let created = client.create_connector(document).await?;
    tracing::info!(connector = %created.name, "connector created");
    Ok(created)
}

/// Load, validate and submit a document file
///
/// Malformed JSON and schema violations fail before any request is made.
pub async fn create_from_file(client: &ApiClient, path: &std::path::Path) -> CliResult<ConnectorInfo> {
    let document = validation::load_document(path)?;
    submit(client, &document).await
}

/// Build a document by prompting, then submit it
pub async fn create_interactively<P: Prompter>(
    client: &ApiClient,
    prompter: &mut P,
) -> CliResult<ConnectorInfo> {
    let document = InteractiveBuilder::new(client, prompter).build().await?;
    submit(client, &document).await
}

/// Execute the create command
pub async fn execute(ctx: &Context, args: CreateArgs) -> CliResult<()> {
    let created = match args.json_file {
        Some(path) if args.validate => {
            let report = validate_file(&path)?;
            print_success(&format!("{} is a valid {} document", path.display(), report.plugin));
            return print_json(&report);
        }
        Some(path) => create_from_file(&ctx.client, &path).await?,
        None => {
            require_interactive()?;
            create_interactively(&ctx.client, &mut TerminalPrompter).await?
        }
    };

    print_success(&format!("Connector {} created", created.name));
    print_json(&created)
}
