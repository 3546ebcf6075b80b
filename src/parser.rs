//! Non-interactive answer loading.
//! Reads a complete answer document as JSON or YAML instead of prompting.

use std::io::Read;

use log::debug;

use crate::answers::RawAnswers;
use crate::error::{Error, Result};

/// Parses an answer document, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the document is neither valid JSON nor valid YAML
/// * `Error::ValidationError` if the answers violate a field constraint
pub fn parse_answers(content: &str) -> Result<RawAnswers> {
    let answers: RawAnswers = match serde_json::from_str(content) {
        Ok(answers) => answers,
        Err(e) => {
            debug!("Answers are not JSON ({}), trying YAML", e);
            serde_yaml::from_str(content)
                .map_err(|e| Error::ConfigError(format!("Invalid answers format: {e}")))?
        }
    };
    answers.validate()?;
    Ok(answers)
}

/// Reads the whole of `reader` and parses it as an answer document.
pub fn load_answers<R: Read>(mut reader: R) -> Result<RawAnswers> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_answers(buffer.trim())
}

/// Reads an answer document from stdin.
pub fn load_from_stdin() -> Result<RawAnswers> {
    load_answers(std::io::stdin().lock())
}
