//! Data models for the Connect REST API

pub mod connector;
pub mod plugin;

pub use connector::{
    ConnectorConfig, ConnectorInfo, ConnectorState, ConnectorStatus, RemoteError, TaskId,
    TaskInfo, CONNECTOR_CLASS_KEY,
};
pub use plugin::{PluginInfo, PluginKind, PluginRole, Question};
