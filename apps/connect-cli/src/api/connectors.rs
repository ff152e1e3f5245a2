//! Connector API client methods

use crate::actions::ConnectorAction;
use crate::api::client::{failure_reason, transport_error};
use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::{ConnectorConfig, ConnectorInfo, ConnectorStatus, TaskInfo};
use reqwest::StatusCode;
use std::collections::BTreeMap;

/// Connector path with the name percent-encoded as a single segment
fn connector_path(name: &str) -> String {
    format!("/connectors/{}", urlencoding::encode(name))
}

impl ApiClient {
    /// List connector names
    pub async fn list_connectors(&self) -> CliResult<Vec<String>> {
        let response = self.get("/connectors").await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else {
            Err(transport_error(response).await)
        }
    }

    /// Fail with `UnknownConnector` unless the connector exists
    pub async fn ensure_exists(&self, name: &str) -> CliResult<()> {
        if self.exists(name).await? {
            Ok(())
        } else {
            Err(CliError::UnknownConnector(name.to_string()))
        }
    }

    /// Check whether a connector exists
    ///
    /// Network failures are returned as errors, every completed non-2xx
    /// answer counts as "does not exist".
    pub async fn exists(&self, name: &str) -> CliResult<bool> {
        let response = self.get(&connector_path(name)).await?;
        Ok(response.status().is_success())
    }

    /// Get a connector with its configuration and task ids
    pub async fn get_connector(&self, name: &str) -> CliResult<ConnectorInfo> {
        let response = self.get(&connector_path(name)).await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else {
            Err(CliError::UnknownConnector(name.to_string()))
        }
    }

    /// Get the configuration of a connector
    pub async fn get_config(&self, name: &str) -> CliResult<BTreeMap<String, String>> {
        let response = self.get(&format!("{}/config", connector_path(name))).await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else if response.status() == StatusCode::NOT_FOUND {
            Err(CliError::UnknownConnector(name.to_string()))
        } else {
            Err(transport_error(response).await)
        }
    }

    /// List the tasks of a connector
    pub async fn list_tasks(&self, name: &str) -> CliResult<Vec<TaskInfo>> {
        let response = self.get(&format!("{}/tasks", connector_path(name))).await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else if response.status() == StatusCode::NOT_FOUND {
            Err(CliError::UnknownConnector(name.to_string()))
        } else {
            Err(transport_error(response).await)
        }
    }

    /// Get the runtime status of a connector and its tasks
    pub async fn get_status(&self, name: &str) -> CliResult<ConnectorStatus> {
        let response = self.get(&format!("{}/status", connector_path(name))).await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else if response.status() == StatusCode::NOT_FOUND {
            Err(CliError::UnknownConnector(name.to_string()))
        } else {
            Err(transport_error(response).await)
        }
    }

    /// Create a new connector
    pub async fn create_connector(&self, document: &ConnectorConfig) -> CliResult<ConnectorInfo> {
        let body = serde_json::to_value(document)?;
        let response = self.post("/connectors", Some(&body)).await?;

        match response.status() {
            StatusCode::CREATED => response.json().await.map_err(Into::into),
            StatusCode::CONFLICT => Err(CliError::AlreadyExists(document.name.clone())),
            _ => Err(transport_error(response).await),
        }
    }

    /// Delete a connector
    ///
    /// Succeeds only on the configured deletion status code.
    pub async fn delete_connector(&self, name: &str) -> CliResult<()> {
        let response = self.delete(&connector_path(name)).await?;
        let code = response.status().as_u16();

        if code == self.config().delete_success_code {
            Ok(())
        } else {
            Err(CliError::ActionFailed {
                code,
                reason: failure_reason(response).await,
            })
        }
    }

    /// Issue a pause, resume or restart request
    ///
    /// Delete has its own endpoint; use [`ApiClient::delete_connector`].
    pub async fn apply_action(&self, name: &str, action: ConnectorAction) -> CliResult<()> {
        let path = format!("{}/{}", connector_path(name), action.as_str());
        let response = match action {
            ConnectorAction::Pause | ConnectorAction::Resume => self.put(&path).await?,
            ConnectorAction::Restart => self.post(&path, None).await?,
            ConnectorAction::Delete => return self.delete_connector(name).await,
        };

        let code = response.status().as_u16();
        if Some(code) == action.success_code() {
            Ok(())
        } else {
            Err(CliError::ActionFailed {
                code,
                reason: failure_reason(response).await,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_path_plain_name() {
        assert_eq!(connector_path("local-file-sink"), "/connectors/local-file-sink");
    }

    #[test]
    fn test_connector_path_encodes_reserved_characters() {
        assert_eq!(connector_path("a b/c"), "/connectors/a%20b%2Fc");
        assert_eq!(connector_path("sink?x=1#y"), "/connectors/sink%3Fx%3D1%23y");
        assert_eq!(connector_path("v1.2_a~b"), "/connectors/v1.2_a~b");
    }
}
