//! plugin-scaffold generates the source files of a new credential-provider plugin.
//! It collects a handful of answers, derives identifiers from them, infers the
//! shape of an example credential and renders the matching plugin templates.

/// Derived-field resolution of user answers
pub mod answers;

/// Command-line interface module
pub mod cli;

/// Structural analysis of example credential values
pub mod composition;

/// Common constants
pub mod constants;

/// Writes rendered files to disk
pub mod emitter;

/// Error types and handling
pub mod error;

/// Logger initialization
pub mod logger;

/// Non-interactive answer loading from JSON or YAML documents
pub mod parser;

/// Core generation orchestration
/// Combines all components to generate the final output
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// MiniJinja-based rendering of template definitions
pub mod renderer;

/// Template definitions and selection
pub mod template;
