//! Listing commands - connector names and installed plugins

use crate::commands::Context;
use crate::error::CliResult;
use crate::models::{PluginInfo, PluginRole};
use crate::output::print_json;
use clap::Args;
use serde::Serialize;

/// Arguments for the plugins command
#[derive(Args, Debug)]
pub struct PluginsArgs {
    /// Include type, version and inferred role for each plugin
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Debug, Serialize)]
struct PluginOutput {
    class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<PluginRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl From<PluginInfo> for PluginOutput {
    fn from(plugin: PluginInfo) -> Self {
        Self {
            role: plugin.role(),
            class: plugin.class,
            version: plugin.version,
        }
    }
}

/// Execute the list command
pub async fn execute_list(ctx: &Context) -> CliResult<()> {
    let names = ctx.client.list_connectors().await?;
    print_json(&names)
}

/// Execute the plugins command
pub async fn execute_plugins(ctx: &Context, args: PluginsArgs) -> CliResult<()> {
    if args.detailed {
        let plugins: Vec<PluginOutput> = ctx
            .client
            .list_plugins()
            .await?
            .into_iter()
            .map(PluginOutput::from)
            .collect();
        print_json(&plugins)
    } else {
        print_json(&ctx.client.list_plugin_classes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plugin_output_infers_role() {
        let plugin = PluginInfo {
            class: "org.apache.kafka.connect.file.FileStreamSourceConnector".to_string(),
            plugin_type: None,
            version: Some("3.7.0".to_string()),
        };
        let output = serde_json::to_value(PluginOutput::from(plugin)).unwrap();
        assert_eq!(
            output,
            json!({
                "class": "org.apache.kafka.connect.file.FileStreamSourceConnector",
                "role": "source",
                "version": "3.7.0"
            })
        );
    }
}
