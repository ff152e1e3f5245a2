//! CLI error types and exit codes

use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error (I/O, configuration, input)
/// - 2: Usage error
/// - 10-16: Connector, plugin and document errors
/// - 20-22: Control plane errors
/// - 130: Interrupted
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Connector {0} not found")]
    UnknownConnector(String),

    #[error("Unknown connector plugin: {0}")]
    UnknownPlugin(String),

    #[error("Invalid action '{0}'. Expected one of: pause, resume, restart, delete")]
    InvalidAction(String),

    #[error("Connector {0} already exists")]
    AlreadyExists(String),

    #[error("Connector document missing required key: {0}")]
    MissingKey(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },

    #[error("Control plane error (status {status}): {message}")]
    Transport { status: u16, message: String },

    #[error("Action failed: {code} - {reason}")]
    ActionFailed { code: u16, reason: String },

    #[error("{operation} failed for {failed} of {total} connectors")]
    BatchFailed {
        operation: String,
        failed: usize,
        total: usize,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check that the Connect worker is running\n  - Verify --host and --port point at its REST listener")]
    ConnectionFailed(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Operation interrupted")]
    Interrupted,
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) | CliError::Config(_) | CliError::InputError(_) => 1,
            CliError::Validation(_) => 2,
            CliError::UnknownConnector(_) => 10,
            CliError::UnknownPlugin(_) => 11,
            CliError::InvalidAction(_) => 12,
            CliError::AlreadyExists(_) => 13,
            CliError::MissingKey(_) => 14,
            CliError::InvalidSelection(_) => 15,
            CliError::InvalidJson { .. } => 16,
            CliError::Transport { .. } | CliError::Network(_) | CliError::ConnectionFailed(_) => {
                20
            }
            CliError::ActionFailed { .. } => 21,
            CliError::BatchFailed { .. } => 22,
            CliError::Interrupted => 130,
        }
    }

    /// Short machine-readable name of the error kind, used in batch reports
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::UnknownConnector(_) => "unknown_connector",
            CliError::UnknownPlugin(_) => "unknown_plugin",
            CliError::InvalidAction(_) => "invalid_action",
            CliError::AlreadyExists(_) => "already_exists",
            CliError::MissingKey(_) => "missing_key",
            CliError::InvalidSelection(_) => "invalid_selection",
            CliError::InvalidJson { .. } => "invalid_json",
            CliError::Transport { .. } | CliError::Network(_) | CliError::ConnectionFailed(_) => {
                "transport"
            }
            CliError::ActionFailed { .. } => "action_failed",
            CliError::BatchFailed { .. } => "batch_failed",
            CliError::Validation(_) => "validation",
            CliError::Config(_) => "config",
            CliError::Io(_) => "io",
            CliError::InputError(_) => "input",
            CliError::Interrupted => "interrupted",
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::UnknownConnector(_) => Some("Run 'connect-cli list' to see existing connectors."),
            CliError::UnknownPlugin(_) => {
                Some("Run 'connect-cli plugins' to see the plugins installed on the worker.")
            }
            CliError::MissingKey(_) | CliError::InvalidJson { .. } => {
                Some("Check the document with 'connect-cli create --json-file <FILE> --validate'.")
            }
            CliError::ConnectionFailed(_) => Some("Check your network connection and try again."),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            CliError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            CliError::Network("Request timed out".to_string())
        } else if e.is_decode() {
            CliError::Transport {
                status: e.status().map(|s| s.as_u16()).unwrap_or(0),
                message: format!("Unexpected response body: {e}"),
            }
        } else {
            CliError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("JSON error: {}", e))
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::InputError(format!("Dialog error: {}", e))
    }
}
