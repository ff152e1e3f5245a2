//! CLI command implementations
//!
//! Every command that accepts `--connector` runs either against one named
//! connector or, for the default target `all`, against a snapshot of every
//! connector through the [`BatchRunner`].

pub mod create;
pub mod inspect;
pub mod lifecycle;
pub mod list;

use crate::api::ApiClient;
use crate::batch::{BatchResult, BatchRunner, CancelFlag};
use crate::error::CliResult;
use crate::output::{print_batch_failures, print_json};
use clap::Args;
use std::future::Future;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Pseudo connector name selecting every connector
pub const ALL_CONNECTORS: &str = "all";

/// Which connectors a command applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    All,
    Connector(String),
}

impl Target {
    pub fn parse(name: &str) -> Self {
        if name == ALL_CONNECTORS {
            Target::All
        } else {
            Target::Connector(name.to_string())
        }
    }
}

/// `--connector` argument shared by targeted commands
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Connector name, or "all" for every connector
    #[arg(long, short = 'c', default_value = ALL_CONNECTORS)]
    pub connector: String,
}

impl TargetArgs {
    pub fn target(&self) -> Target {
        Target::parse(&self.connector)
    }
}

/// Everything a command needs besides its arguments
#[derive(Clone)]
pub struct Context {
    pub client: ApiClient,
    pub cancel: CancelFlag,
    pub show_progress: bool,
}

impl Context {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cancel: Arc::new(AtomicBool::new(false)),
            show_progress: false,
        }
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn batch_runner(&self) -> BatchRunner {
        BatchRunner::new(self.client.clone())
            .with_cancel_flag(Arc::clone(&self.cancel))
            .with_progress(self.show_progress)
    }
}

/// Output of a targeted command
#[derive(Debug)]
pub enum TargetOutput {
    Single(serde_json::Value),
    Batch(BatchResult),
}

/// Run `op` against the target without printing
pub async fn run_targeted<F, Fut>(
    ctx: &Context,
    target: &Target,
    operation: &str,
    op: F,
) -> CliResult<TargetOutput>
where
    F: Fn(ApiClient, String) -> Fut,
    Fut: Future<Output = CliResult<serde_json::Value>>,
{
    match target {
        Target::Connector(name) => {
            let value = op(ctx.client.clone(), name.clone()).await?;
            Ok(TargetOutput::Single(value))
        }
        Target::All => {
            let result = ctx.batch_runner().run_for_all(operation, op).await?;
            Ok(TargetOutput::Batch(result))
        }
    }
}

/// Print a targeted command's output and turn batch failures into an error
pub fn render(output: TargetOutput) -> CliResult<()> {
    match output {
        TargetOutput::Single(value) => print_json(&value),
        TargetOutput::Batch(result) => {
            print_json(&result)?;
            print_batch_failures(&result);
            result.into_outcome().map(|_| ())
        }
    }
}
