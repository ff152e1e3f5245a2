//! Connector state-transition actions
//!
//! Each action maps to exactly one request against the control plane and one
//! expected success code. The only pre-check is that the connector exists;
//! whether the transition is legal from the current state is left to the
//! control plane.

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Action that moves a connector between lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorAction {
    Pause,
    Resume,
    Restart,
    Delete,
}

impl ConnectorAction {
    pub const ALL: [ConnectorAction; 4] = [
        ConnectorAction::Pause,
        ConnectorAction::Resume,
        ConnectorAction::Restart,
        ConnectorAction::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectorAction::Pause => "pause",
            ConnectorAction::Resume => "resume",
            ConnectorAction::Restart => "restart",
            ConnectorAction::Delete => "delete",
        }
    }

    /// Fixed success status code, `None` for delete (configured per deployment)
    pub fn success_code(&self) -> Option<u16> {
        match self {
            ConnectorAction::Pause | ConnectorAction::Resume => Some(202),
            ConnectorAction::Restart => Some(200),
            ConnectorAction::Delete => None,
        }
    }

    /// Past tense used in operator messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            ConnectorAction::Pause => "paused",
            ConnectorAction::Resume => "resumed",
            ConnectorAction::Restart => "restarted",
            ConnectorAction::Delete => "deleted",
        }
    }
}

impl fmt::Display for ConnectorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectorAction {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pause" => Ok(ConnectorAction::Pause),
            "resume" => Ok(ConnectorAction::Resume),
            "restart" => Ok(ConnectorAction::Restart),
            "delete" => Ok(ConnectorAction::Delete),
            other => Err(CliError::InvalidAction(other.to_string())),
        }
    }
}

/// Result of a successfully dispatched action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub connector: String,
    pub action: ConnectorAction,
    pub result: &'static str,
}

/// Apply `action` to the named connector
///
/// Fails with `UnknownConnector` without issuing the action request when the
/// connector does not exist.
pub async fn dispatch(
    client: &ApiClient,
    name: &str,
    action: ConnectorAction,
) -> CliResult<ActionOutcome> {
    client.ensure_exists(name).await?;
    client.apply_action(name, action).await?;

    tracing::info!(connector = name, %action, "action applied");
    Ok(ActionOutcome {
        connector: name.to_string(),
        action,
        result: action.past_tense(),
    })
}

/// Parse an action name, then dispatch it
///
/// Invalid names fail before any network call.
pub async fn dispatch_named(client: &ApiClient, name: &str, action: &str) -> CliResult<ActionOutcome> {
    let action: ConnectorAction = action.parse()?;
    dispatch(client, name, action).await
}
