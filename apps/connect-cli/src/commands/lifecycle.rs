//! State-transition commands: pause, resume, restart, delete

use crate::actions::{self, ConnectorAction};
use crate::api::ApiClient;
use crate::commands::{render, run_targeted, Context, Target, TargetArgs, TargetOutput};
use crate::error::{CliError, CliResult};
use crate::interactive::{is_interactive_terminal, Prompter, TerminalPrompter};
use crate::output::print_success;
use clap::Args;

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Skip the confirmation prompt when deleting all connectors
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Apply `action` to the target without printing
pub async fn run_action(
    ctx: &Context,
    target: &Target,
    action: ConnectorAction,
) -> CliResult<TargetOutput> {
    run_targeted(ctx, target, action.as_str(), move |client: ApiClient, name: String| async move {
        let outcome = actions::dispatch(&client, &name, action).await?;
        Ok::<_, CliError>(serde_json::to_value(outcome)?)
    })
    .await
}

/// Execute pause, resume or restart
pub async fn execute(ctx: &Context, args: TargetArgs, action: ConnectorAction) -> CliResult<()> {
    let target = args.target();
    let output = run_action(ctx, &target, action).await?;
    if let Target::Connector(name) = &target {
        print_success(&format!("{name} {}", action.past_tense()));
    }
    render(output)
}

/// Execute the delete command
pub async fn execute_delete(ctx: &Context, args: DeleteArgs) -> CliResult<()> {
    let target = args.target.target();
    if target == Target::All && !args.force {
        if !is_interactive_terminal() {
            return Err(CliError::Validation(
                "Refusing to delete all connectors without --force".to_string(),
            ));
        }
        confirm_delete_all(&mut TerminalPrompter)?;
    }
    execute(ctx, args.target, ConnectorAction::Delete).await
}

/// Ask before deleting every connector; declining aborts the command
pub fn confirm_delete_all<P: Prompter + ?Sized>(prompter: &mut P) -> CliResult<()> {
    if prompter.confirm("Delete ALL connectors? This cannot be undone", false)? {
        Ok(())
    } else {
        Err(CliError::Validation("Delete cancelled".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::ScriptedPrompter;

    #[test]
    fn test_confirm_delete_all_defaults_to_no() {
        let mut prompter = ScriptedPrompter::new([""]);
        // ScriptedPrompter treats empty input as the default
        assert!(confirm_delete_all(&mut prompter).is_err());

        let mut prompter = ScriptedPrompter::new(["y"]);
        assert!(confirm_delete_all(&mut prompter).is_ok());
    }
}
