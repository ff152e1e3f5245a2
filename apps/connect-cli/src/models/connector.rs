//! Connector data models for the CLI

use crate::actions::ConnectorAction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key holding the plugin class inside a connector config
pub const CONNECTOR_CLASS_KEY: &str = "connector.class";

/// Document submitted to create a connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub name: String,
    pub config: BTreeMap<String, String>,
}

impl ConnectorConfig {
    /// Start an empty document for the given connector name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: BTreeMap::new(),
        }
    }

    /// The declared plugin class, if any
    pub fn connector_class(&self) -> Option<&str> {
        self.config.get(CONNECTOR_CLASS_KEY).map(String::as_str)
    }

    /// Set a config entry, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.config.insert(key.into(), value.into());
    }
}

/// Connector as returned by `GET /connectors/{name}` and `POST /connectors`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorInfo {
    pub name: String,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
    #[serde(default)]
    pub tasks: Vec<TaskId>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<String>,
}

/// Identifier of a task within a connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskId {
    pub connector: String,
    pub task: u32,
}

/// Task as returned by `GET /connectors/{name}/tasks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInfo {
    pub id: TaskId,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

/// Lifecycle state reported by the control plane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectorState {
    Running,
    Paused,
    Restarting,
    Unassigned,
    Failed,
    Deleted,
    Unknown(String),
}

impl ConnectorState {
    /// Whether the state can never change again
    pub fn is_terminal(&self) -> bool {
        matches!(self, ConnectorState::Deleted)
    }

    /// Whether the state machine allows `action` from this state
    ///
    /// Models the documented transitions only. Dispatch never consults it;
    /// the control plane decides whether an action applies.
    pub fn can_apply(&self, action: ConnectorAction) -> bool {
        match (self, action) {
            (ConnectorState::Deleted, _) => false,
            (_, ConnectorAction::Delete) => true,
            (ConnectorState::Running, ConnectorAction::Pause) => true,
            (ConnectorState::Paused, ConnectorAction::Resume) => true,
            (ConnectorState::Running | ConnectorState::Failed, ConnectorAction::Restart) => true,
            _ => false,
        }
    }

    /// State the connector is expected to reach after `action`
    pub fn after(&self, action: ConnectorAction) -> Option<ConnectorState> {
        if !self.can_apply(action) {
            return None;
        }
        Some(match action {
            ConnectorAction::Pause => ConnectorState::Paused,
            ConnectorAction::Resume => ConnectorState::Running,
            ConnectorAction::Restart => ConnectorState::Restarting,
            ConnectorAction::Delete => ConnectorState::Deleted,
        })
    }
}

impl From<String> for ConnectorState {
    fn from(s: String) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "RUNNING" => ConnectorState::Running,
            "PAUSED" => ConnectorState::Paused,
            "RESTARTING" => ConnectorState::Restarting,
            "UNASSIGNED" => ConnectorState::Unassigned,
            "FAILED" => ConnectorState::Failed,
            "DELETED" => ConnectorState::Deleted,
            _ => ConnectorState::Unknown(s),
        }
    }
}

impl From<ConnectorState> for String {
    fn from(state: ConnectorState) -> Self {
        state.to_string()
    }
}

impl fmt::Display for ConnectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorState::Running => write!(f, "RUNNING"),
            ConnectorState::Paused => write!(f, "PAUSED"),
            ConnectorState::Restarting => write!(f, "RESTARTING"),
            ConnectorState::Unassigned => write!(f, "UNASSIGNED"),
            ConnectorState::Failed => write!(f, "FAILED"),
            ConnectorState::Deleted => write!(f, "DELETED"),
            ConnectorState::Unknown(s) => write!(f, "{s}"),
        }
    }
}

/// Connector-level part of a status report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorStateInfo {
    pub state: ConnectorState,
    #[serde(default)]
    pub worker_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Task-level part of a status report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: u32,
    pub state: ConnectorState,
    #[serde(default)]
    pub worker_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Response of `GET /connectors/{name}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorStatus {
    pub name: String,
    pub connector: ConnectorStateInfo,
    #[serde(default)]
    pub tasks: Vec<TaskStatus>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<String>,
}

impl ConnectorStatus {
    /// Whether the connector or any of its tasks reports FAILED
    pub fn has_failures(&self) -> bool {
        self.connector.state == ConnectorState::Failed
            || self.tasks.iter().any(|t| t.state == ConnectorState::Failed)
    }
}

/// Error body returned by the control plane on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connector_config_serializes_as_document() {
        let mut doc = ConnectorConfig::new("local-file-sink");
        doc.set(CONNECTOR_CLASS_KEY, "FileStreamSink");
        doc.set("topics", "connect-test");

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "local-file-sink",
                "config": {"connector.class": "FileStreamSink", "topics": "connect-test"}
            })
        );
        assert_eq!(doc.connector_class(), Some("FileStreamSink"));
    }

    #[test]
    fn test_connector_info_deserializes() {
        let info: ConnectorInfo = serde_json::from_value(json!({
            "name": "splunk1",
            "config": {"connector.class": "SplunkHttpSinkConnector"},
            "tasks": [{"connector": "splunk1", "task": 0}],
            "type": "sink"
        }))
        .unwrap();
        assert_eq!(info.tasks.len(), 1);
        assert_eq!(info.connector_type.as_deref(), Some("sink"));
    }

    #[test]
    fn test_status_deserializes_states() {
        let status: ConnectorStatus = serde_json::from_value(json!({
            "name": "c1",
            "connector": {"state": "RUNNING", "worker_id": "10.0.0.1:8083"},
            "tasks": [
                {"id": 0, "state": "RUNNING", "worker_id": "10.0.0.1:8083"},
                {"id": 1, "state": "FAILED", "worker_id": "10.0.0.2:8083", "trace": "boom"}
            ]
        }))
        .unwrap();
        assert_eq!(status.connector.state, ConnectorState::Running);
        assert!(status.has_failures());
    }

    #[test]
    fn test_unknown_state_round_trips_text() {
        let state = ConnectorState::from("DRAINING".to_string());
        assert_eq!(state, ConnectorState::Unknown("DRAINING".to_string()));
        assert_eq!(state.to_string(), "DRAINING");
    }

    #[test]
    fn test_state_machine_transitions() {
        use ConnectorAction::*;
        assert_eq!(ConnectorState::Running.after(Pause), Some(ConnectorState::Paused));
        assert_eq!(ConnectorState::Paused.after(Resume), Some(ConnectorState::Running));
        assert_eq!(ConnectorState::Failed.after(Restart), Some(ConnectorState::Restarting));
        assert_eq!(ConnectorState::Paused.after(Delete), Some(ConnectorState::Deleted));
        assert_eq!(ConnectorState::Paused.after(Pause), None);
        assert_eq!(ConnectorState::Running.after(Resume), None);
        assert_eq!(ConnectorState::Deleted.after(Delete), None);
        assert!(ConnectorState::Deleted.is_terminal());
    }
}
