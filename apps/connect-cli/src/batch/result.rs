//! Batch operation result types
//!
//! Types for tracking per-connector outcomes of an "all connectors" command.

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};

/// Status of a single batch item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchItemStatus {
    /// Operation completed successfully
    Success,
    /// Operation failed
    Failed,
    /// Not attempted (batch cancelled or past its deadline)
    Skipped,
}

/// Result for a single connector in a batch operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItemResult {
    /// Position in the connector listing (0-based)
    pub index: usize,
    /// Connector name
    pub name: String,
    /// Result status
    pub status: BatchItemStatus,
    /// Payload returned by the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    /// Error message if failed or skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Error kind if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl BatchItemResult {
    /// Create a successful result
    pub fn success(index: usize, name: String, output: serde_json::Value) -> Self {
        Self {
            index,
            name,
            status: BatchItemStatus::Success,
            output: Some(output),
            error: None,
            error_kind: None,
        }
    }

    /// Create a failed result
    pub fn failed(index: usize, name: String, error: &CliError) -> Self {
        Self {
            index,
            name,
            status: BatchItemStatus::Failed,
            output: None,
            error: Some(error.to_string()),
            error_kind: Some(error.kind().to_string()),
        }
    }

    /// Create a skipped result
    pub fn skipped(index: usize, name: String, reason: String) -> Self {
        Self {
            index,
            name,
            status: BatchItemStatus::Skipped,
            output: None,
            error: Some(reason),
            error_kind: None,
        }
    }
}

/// Summary of a completed batch operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Operation performed on each connector
    pub operation: String,
    /// Connectors in the snapshot
    pub total: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub skipped_count: usize,
    /// Per-connector results, in listing order
    pub items: Vec<BatchItemResult>,
    /// Total operation duration in milliseconds
    pub duration_ms: u64,
    /// Whether the batch stopped issuing calls early
    pub interrupted: bool,
}

impl BatchResult {
    /// Create a new empty batch result
    pub fn new(operation: &str, total: usize) -> Self {
        Self {
            operation: operation.to_string(),
            total,
            success_count: 0,
            failure_count: 0,
            skipped_count: 0,
            items: Vec::with_capacity(total),
            duration_ms: 0,
            interrupted: false,
        }
    }

    /// Add a successful item
    pub fn add_success(&mut self, index: usize, name: String, output: serde_json::Value) {
        self.success_count += 1;
        self.items.push(BatchItemResult::success(index, name, output));
    }

    /// Add a failed item
    pub fn add_failure(&mut self, index: usize, name: String, error: &CliError) {
        self.failure_count += 1;
        self.items.push(BatchItemResult::failed(index, name, error));
    }

    /// Add a skipped item
    pub fn add_skipped(&mut self, index: usize, name: String, reason: String) {
        self.skipped_count += 1;
        self.items.push(BatchItemResult::skipped(index, name, reason));
    }

    /// Mark the batch as interrupted
    pub fn set_interrupted(&mut self) {
        self.interrupted = true;
    }

    /// Set the duration
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    /// Check if all items succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failure_count == 0 && self.skipped_count == 0 && !self.interrupted
    }

    /// Check if any items failed
    pub fn has_failures(&self) -> bool {
        self.failure_count > 0
    }

    /// Get only the successful items
    pub fn successful_items(&self) -> impl Iterator<Item = &BatchItemResult> {
        self.items
            .iter()
            .filter(|i| i.status == BatchItemStatus::Success)
    }

    /// Get only the failed items
    pub fn failed_items(&self) -> impl Iterator<Item = &BatchItemResult> {
        self.items
            .iter()
            .filter(|i| i.status == BatchItemStatus::Failed)
    }

    /// Payloads of the successful items, in listing order
    pub fn outputs(&self) -> Vec<serde_json::Value> {
        self.successful_items()
            .filter_map(|i| i.output.clone())
            .collect()
    }

    /// Turn the aggregate into the command outcome
    ///
    /// Failures win over interruption so every failed run exits with the
    /// batch failure code.
    pub fn into_outcome(self) -> CliResult<Self> {
        if self.has_failures() {
            Err(CliError::BatchFailed {
                operation: self.operation,
                failed: self.failure_count,
                total: self.total,
            })
        } else if self.interrupted {
            Err(CliError::Interrupted)
        } else {
            Ok(self)
        }
    }
}
