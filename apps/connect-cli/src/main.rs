//! connect-cli - Command-line administration for a Kafka Connect cluster
//!
//! This CLI enables operators to:
//! - List connectors and installed plugins
//! - Inspect connector configuration, tasks and status
//! - Create connectors from JSON files or interactive prompts
//! - Pause, resume, restart and delete one or all connectors

use clap::{Parser, Subcommand};

use connect_cli::actions::ConnectorAction;
use connect_cli::api::ApiClient;
use connect_cli::batch::install_interrupt_handler;
use connect_cli::commands::{create, inspect, lifecycle, list, Context, TargetArgs};
use connect_cli::config::{Config, ConfigPaths};
use connect_cli::error::CliResult;
use connect_cli::logging::{self, LogLevel};

/// connect-cli - Kafka Connect administration
#[derive(Parser)]
#[command(name = "connect-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Connect REST host (overrides config and CONNECT_REST_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Connect REST port (overrides config and CONNECT_REST_PORT)
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Maximum concurrent requests when targeting all connectors
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// Log progress of each request
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Log request details and module targets
    #[arg(long, global = true)]
    debug: bool,

    /// Hide the progress bar for batch operations
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List connector names
    List,

    /// List installed connector plugins
    Plugins(list::PluginsArgs),

    /// Show the tasks of a connector
    Tasks(TargetArgs),

    /// Show the configuration of a connector
    Config(TargetArgs),

    /// Show the runtime status of a connector
    Status(TargetArgs),

    /// Create a connector from a JSON file or interactively
    Create(create::CreateArgs),

    /// Pause a connector
    Pause(TargetArgs),

    /// Resume a paused connector
    Resume(TargetArgs),

    /// Restart a connector
    Restart(TargetArgs),

    /// Delete a connector
    Delete(lifecycle::DeleteArgs),
}

impl Commands {
    /// Commands that may fan out over every connector
    fn is_batch_capable(&self) -> bool {
        !matches!(self, Commands::List | Commands::Plugins(_) | Commands::Create(_))
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(LogLevel::from_flags(cli.verbose, cli.debug));

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let config = Config::load(&paths)?.with_overrides(cli.host, cli.port, cli.concurrency)?;
    tracing::debug!(base_url = %config.base_url(), "using Connect REST API");

    let mut ctx = Context::new(ApiClient::new(config)?).with_progress(!cli.no_progress);
    if cli.command.is_batch_capable() {
        ctx = ctx.with_cancel_flag(install_interrupt_handler());
    }

    match cli.command {
        Commands::List => list::execute_list(&ctx).await,
        Commands::Plugins(args) => list::execute_plugins(&ctx, args).await,
        Commands::Tasks(args) => inspect::execute_tasks(&ctx, args).await,
        Commands::Config(args) => inspect::execute_config(&ctx, args).await,
        Commands::Status(args) => inspect::execute_status(&ctx, args).await,
        Commands::Create(args) => create::execute(&ctx, args).await,
        Commands::Pause(args) => lifecycle::execute(&ctx, args, ConnectorAction::Pause).await,
        Commands::Resume(args) => lifecycle::execute(&ctx, args, ConnectorAction::Resume).await,
        Commands::Restart(args) => lifecycle::execute(&ctx, args, ConnectorAction::Restart).await,
        Commands::Delete(args) => lifecycle::execute_delete(&ctx, args).await,
    }
}
