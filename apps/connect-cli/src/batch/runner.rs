//! Fan-out of a single-connector operation over every connector
//!
//! The connector list is read once at the start; connectors created or
//! deleted by someone else during the batch are not picked up. Operations
//! run with bounded concurrency and results are collected in listing order.
//! A failing connector never stops the others.

use crate::api::ApiClient;
use crate::batch::progress::BatchProgress;
use crate::batch::result::BatchResult;
use crate::error::{CliError, CliResult};
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared flag that stops a batch from starting new calls once set
pub type CancelFlag = Arc<AtomicBool>;

/// Install a Ctrl+C handler that sets the returned flag
///
/// The first interrupt lets in-flight calls finish and skips the rest; a
/// second one exits immediately with status 130.
pub fn install_interrupt_handler() -> CancelFlag {
    let cancel: CancelFlag = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    let result = ctrlc::set_handler(move || {
        if flag.swap(true, Ordering::SeqCst) {
            std::process::exit(CliError::Interrupted.exit_code());
        }
        eprintln!("Interrupted; waiting for in-flight calls (press Ctrl+C again to abort)");
    });
    if let Err(e) = result {
        tracing::debug!(error = %e, "could not install Ctrl+C handler");
    }
    cancel
}

/// Runs an operation against every connector
pub struct BatchRunner {
    client: ApiClient,
    concurrency: usize,
    cancel: CancelFlag,
    deadline: Option<Instant>,
    show_progress: bool,
}

impl BatchRunner {
    /// Create a runner using the client's configured concurrency
    pub fn new(client: ApiClient) -> Self {
        let concurrency = client.config().batch_concurrency.max(1);
        Self {
            client,
            concurrency,
            cancel: Arc::new(AtomicBool::new(false)),
            deadline: None,
            show_progress: false,
        }
    }

    /// Use a caller-owned cancellation flag
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Stop starting new calls once `deadline` has passed
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Override the concurrency limit (minimum 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Show a progress bar on stderr while running
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn cancel_flag(&self) -> CancelFlag {
        Arc::clone(&self.cancel)
    }

    fn should_stop(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Resolve the current connector list and apply `op` to each connector
    pub async fn run_for_all<F, Fut>(&self, operation: &str, op: F) -> CliResult<BatchResult>
    where
        F: Fn(ApiClient, String) -> Fut,
        Fut: Future<Output = CliResult<serde_json::Value>>,
    {
        let names = self.client.list_connectors().await?;
        tracing::info!(operation, connectors = names.len(), "starting batch");
        Ok(self.run_for_each(operation, names, op).await)
    }

    /// Apply `op` to each name of an explicit snapshot
    pub async fn run_for_each<F, Fut>(&self, operation: &str, names: Vec<String>, op: F) -> BatchResult
    where
        F: Fn(ApiClient, String) -> Fut,
        Fut: Future<Output = CliResult<serde_json::Value>>,
    {
        let start = Instant::now();
        let mut result = BatchResult::new(operation, names.len());
        let progress = BatchProgress::new(names.len() as u64, operation, self.show_progress);
        let progress = &progress;
        let op = &op;

        let outcomes: Vec<(usize, String, Option<CliResult<serde_json::Value>>)> =
            stream::iter(names.into_iter().enumerate())
                .map(|(index, name)| {
                    // Evaluated when a concurrency slot frees up, right before the call starts
                    let call = if self.should_stop() {
                        None
                    } else {
                        Some(op(self.client.clone(), name.clone()))
                    };
                    async move {
                        let outcome = match call {
                            Some(call) => Some(call.await),
                            None => None,
                        };
                        progress.inc();
                        (index, name, outcome)
                    }
                })
                .buffered(self.concurrency)
                .collect()
                .await;

        for (index, name, outcome) in outcomes {
            match outcome {
                Some(Ok(output)) => {
                    tracing::info!(operation, connector = %name, "succeeded");
                    result.add_success(index, name, output);
                }
                Some(Err(error)) => {
                    tracing::warn!(operation, connector = %name, error = %error, "failed");
                    result.add_failure(index, name, &error);
                }
                None => {
                    result.add_skipped(index, name, "cancelled".to_string());
                    result.set_interrupted();
                }
            }
        }

        progress.finish_and_clear();
        result.set_duration(start.elapsed().as_millis() as u64);
        result
    }
}
