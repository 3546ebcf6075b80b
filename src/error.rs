//! Error handling for the plugin scaffolder.
//! Defines the error type and result alias used throughout the generation pipeline.

use std::io;
use thiserror::Error;

/// Custom error types for scaffolding operations.
///
/// Validation errors are recoverable while prompting; every other variant
/// aborts the generation run.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during directory creation or file writes
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors in a template definition or its rendered output
    #[error("Template error: {0}")]
    TemplateError(String),

    /// Represents errors raised by the MiniJinja engine while parsing or rendering
    #[error("Template error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents validation failures in user input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Represents failures while interacting with the terminal
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// Represents errors while reading a non-interactive answer document
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
