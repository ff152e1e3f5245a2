//! Plugin registry API client methods

use crate::api::client::transport_error;
use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::PluginInfo;
use reqwest::StatusCode;

impl ApiClient {
    /// List the connector plugins installed on the worker
    pub async fn list_plugins(&self) -> CliResult<Vec<PluginInfo>> {
        let response = self.get("/connector-plugins").await?;

        if response.status() == StatusCode::OK {
            response.json().await.map_err(Into::into)
        } else {
            Err(transport_error(response).await)
        }
    }

    /// List installed plugin class identifiers, in registry order
    pub async fn list_plugin_classes(&self) -> CliResult<Vec<String>> {
        Ok(self
            .list_plugins()
            .await?
            .into_iter()
            .map(|p| p.class)
            .collect())
    }
}
