//! Interactive collection of plugin answers.
//! Asks one question per answer field and re-asks until the answer
//! satisfies the field's constraint.

use dialoguer::Input;
use log::debug;

use crate::answers::{
    validate_credential_name, validate_plugin_name, validate_required, RawAnswers,
};
use crate::error::{Error, Result};

/// Source of answers to free-text questions.
pub trait Prompter {
    /// Asks a single question and returns the raw answer.
    fn input(&self, message: &str) -> Result<String>;

    /// Tells the user why the previous answer was rejected.
    fn reject(&self, reason: &Error);
}

/// Terminal prompter backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, message: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn reject(&self, reason: &Error) {
        eprintln!("{reason}");
    }
}

type Validator = fn(&str) -> Result<()>;

fn required_platform_name(value: &str) -> Result<()> {
    validate_required("platform name", value)
}

fn optional(_: &str) -> Result<()> {
    Ok(())
}

/// Asks until the trimmed answer passes `validate`.
fn ask(prompter: &dyn Prompter, message: &str, validate: Validator) -> Result<String> {
    loop {
        let answer = prompter.input(message)?.trim().to_string();
        match validate(&answer) {
            Ok(()) => return Ok(answer),
            Err(err @ Error::ValidationError(_)) => {
                debug!("Rejected answer {:?}: {}", answer, err);
                prompter.reject(&err);
            }
            Err(err) => return Err(err),
        }
    }
}

/// Asks once and keeps the answer exactly as entered.
fn ask_verbatim(prompter: &dyn Prompter, message: &str) -> Result<String> {
    prompter.input(message)
}

/// Prompts for every answer field in order.
///
/// # Returns
/// * `Result<RawAnswers>` - Answers satisfying every field constraint
///
/// # Errors
/// * `Error::PromptError` if the terminal interaction fails
pub fn prompt_answers(prompter: &dyn Prompter) -> Result<RawAnswers> {
    let name = ask(
        prompter,
        r#"Plugin name (e.g. "aws" or "github") [required]"#,
        validate_plugin_name,
    )?;
    let platform_name = ask(
        prompter,
        r#"Platform name (e.g. "AWS" or "GitHub") [required]"#,
        required_platform_name,
    )?;
    let executable = ask(prompter, r#"Executable name (e.g. "aws" or "gh")"#, optional)?;
    let credential_name = ask(
        prompter,
        r#"Name of the credential type (e.g. "Access Key" or "Personal Access Token")"#,
        validate_credential_name,
    )?;
    let example_credential = ask_verbatim(prompter, "Paste in an example credential")?;

    Ok(RawAnswers { name, platform_name, executable, credential_name, example_credential })
}
