//! Prompt abstraction for interactive CLI commands.
//!
//! The builder talks to a [`Prompter`] so the question flow can run against a
//! real terminal (dialoguer) or a scripted list of answers.

use std::collections::VecDeque;
use std::io::IsTerminal;

use dialoguer::{Confirm, Input};

use crate::error::{CliError, CliResult};

/// Checks if both stdin and stdout are connected to a terminal.
///
/// Returns `true` if running in an interactive TTY environment,
/// `false` if running in a pipe or CI environment.
pub fn is_interactive_terminal() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Requires an interactive terminal, returning an error if not available.
pub fn require_interactive() -> CliResult<()> {
    if !is_interactive_terminal() {
        return Err(CliError::Validation(
            "Interactive mode requires a terminal.\n\
             Use --json-file <FILE> for scripting."
                .into(),
        ));
    }
    Ok(())
}

/// Source of operator answers
pub trait Prompter {
    /// Show `prompt` and read one line of free text (may be empty)
    fn input(&mut self, prompt: &str) -> CliResult<String>;

    /// Show an informational line, such as a menu entry
    fn message(&mut self, text: &str);

    /// Ask a yes/no question with a default
    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool>;
}

/// Prompter backed by the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> CliResult<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(Into::into)
    }

    fn message(&mut self, text: &str) {
        eprintln!("{text}");
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(Into::into)
    }
}

/// Prompter that replays a fixed list of answers
///
/// Running out of answers is an input error, so a flow that asks more
/// questions than expected fails instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Every prompt shown, in order
    pub prompts: Vec<String>,
    /// Every informational line shown, in order
    pub messages: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> CliResult<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| CliError::InputError(format!("no scripted answer for '{prompt}'")))
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool> {
        let answer = self.input(prompt)?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            _ => Ok(false),
        }
    }
}

/// Ask a yes/no question, re-asking on unrecognised answers
///
/// Empty input takes `default`. After `max_attempts` unrecognised answers
/// the question fails with `InvalidSelection`.
pub fn ask_yes_no<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    default: bool,
    max_attempts: u32,
) -> CliResult<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let full_prompt = format!("{prompt} {hint}?");

    let mut last = String::new();
    for _ in 0..max_attempts.max(1) {
        let answer = prompter.input(&full_prompt)?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                prompter.message("Invalid selection");
                last = answer;
            }
        }
    }

    Err(CliError::InvalidSelection(format!(
        "'{}' is not a yes/no answer for '{prompt}'",
        last.trim()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_default_on_empty() {
        let mut prompter = ScriptedPrompter::new([""]);
        assert!(ask_yes_no(&mut prompter, "SSL enabled", true, 3).unwrap());
        assert_eq!(prompter.prompts, vec!["SSL enabled [Y/n]?"]);
    }

    #[test]
    fn test_yes_no_accepts_both_cases() {
        let mut prompter = ScriptedPrompter::new(["N", "yes"]);
        assert!(!ask_yes_no(&mut prompter, "q", true, 3).unwrap());
        assert!(ask_yes_no(&mut prompter, "q", false, 3).unwrap());
    }

    #[test]
    fn test_yes_no_retries_then_succeeds() {
        let mut prompter = ScriptedPrompter::new(["maybe", "n"]);
        assert!(!ask_yes_no(&mut prompter, "q", true, 3).unwrap());
        assert_eq!(prompter.messages, vec!["Invalid selection"]);
    }

    #[test]
    fn test_yes_no_gives_up_after_cap() {
        let mut prompter = ScriptedPrompter::new(["a", "b", "c", "y"]);
        let err = ask_yes_no(&mut prompter, "q", true, 3).unwrap_err();
        assert!(matches!(err, CliError::InvalidSelection(_)));
        assert_eq!(prompter.remaining(), 1);
    }

    #[test]
    fn test_scripted_prompter_exhausted() {
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        assert!(matches!(prompter.input("x"), Err(CliError::InputError(_))));
    }

    #[test]
    fn test_scripted_confirm() {
        let mut prompter = ScriptedPrompter::new(["", "n"]);
        assert!(prompter.confirm("Delete?", true).unwrap());
        assert!(!prompter.confirm("Delete?", true).unwrap());
    }
}
