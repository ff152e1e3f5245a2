//! Menu-driven assembly of a connector document

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::interactive::prompts::{ask_yes_no, Prompter};
use crate::models::{ConnectorConfig, PluginKind, Question, CONNECTOR_CLASS_KEY};

/// Builds a [`ConnectorConfig`] by asking the operator
///
/// The builder never submits the document; the caller validates and creates it.
pub struct InteractiveBuilder<'a, P: Prompter> {
    client: &'a ApiClient,
    prompter: &'a mut P,
    max_attempts: u32,
}

impl<'a, P: Prompter> InteractiveBuilder<'a, P> {
    pub fn new(client: &'a ApiClient, prompter: &'a mut P) -> Self {
        let max_attempts = client.config().max_prompt_attempts;
        Self {
            client,
            prompter,
            max_attempts,
        }
    }

    /// Run the full question flow
    pub async fn build(&mut self) -> CliResult<ConnectorConfig> {
        self.prompter.message("Name for new connector");
        let name = self.prompter.input(" >>")?.trim().to_string();
        if name.is_empty() {
            return Err(CliError::MissingKey("name".to_string()));
        }
        if self.client.exists(&name).await? {
            return Err(CliError::AlreadyExists(name));
        }

        let classes = self.client.list_plugin_classes().await?;
        let class = select_plugin(&mut *self.prompter, &classes)?;
        let kind = PluginKind::from_class(&class);
        if !kind.is_known() {
            return Err(CliError::UnknownPlugin(class));
        }

        let mut document = ConnectorConfig::new(name);
        document.set(CONNECTOR_CLASS_KEY, class);
        answer_questions(&mut *self.prompter, kind.questions(), self.max_attempts, &mut document)?;

        tracing::debug!(connector = %document.name, %kind, "assembled connector document");
        Ok(document)
    }
}

/// Show the plugin menu and return the chosen class
pub fn select_plugin<P: Prompter + ?Sized>(prompter: &mut P, classes: &[String]) -> CliResult<String> {
    if classes.is_empty() {
        return Err(CliError::InvalidSelection(
            "the control plane reports no installed plugins".to_string(),
        ));
    }

    prompter.message("Select Connector Plugin:");
    for (i, class) in classes.iter().enumerate() {
        prompter.message(&format!("{}. {}", i + 1, class));
    }

    let choice = prompter.input(" >>")?;
    choice
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| classes.get(i))
        .cloned()
        .ok_or_else(|| CliError::InvalidSelection(format!("'{}' is not a menu entry", choice.trim())))
}

/// Ask each question in turn and store the answers in `document`
pub fn answer_questions<P: Prompter + ?Sized>(
    prompter: &mut P,
    questions: &[Question],
    max_attempts: u32,
    document: &mut ConnectorConfig,
) -> CliResult<()> {
    for question in questions {
        let value = match *question {
            Question::YesNo {
                prompt, default, ..
            } => ask_yes_no(prompter, prompt, default, max_attempts)?.to_string(),
            Question::Text {
                prompt,
                default: Some(default),
                ..
            } => {
                let answer = prompter.input(&format!("{prompt} [{default}]:"))?;
                let answer = answer.trim();
                if answer.is_empty() {
                    default.to_string()
                } else {
                    answer.to_string()
                }
            }
            Question::Text {
                key,
                prompt,
                default: None,
            } => ask_required(prompter, key, prompt, max_attempts)?,
        };
        document.set(question.key(), value);
    }
    Ok(())
}

fn ask_required<P: Prompter + ?Sized>(
    prompter: &mut P,
    key: &str,
    prompt: &str,
    max_attempts: u32,
) -> CliResult<String> {
    for _ in 0..max_attempts.max(1) {
        let answer = prompter.input(&format!("{prompt}:"))?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        prompter.message("A value is required");
    }
    Err(CliError::MissingKey(key.to_string()))
}
