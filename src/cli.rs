//! Command-line interface implementation for the plugin scaffolder.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_PLUGINS_DIR;

/// Command-line arguments structure.
///
/// Every argument is optional: a bare invocation starts the interactive questionnaire.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate the sources of a new credential-provider plugin",
    long_about = None
)]
pub struct Args {
    /// Base directory receiving the generated plugin directory
    #[arg(short = 'o', long, value_name = "DIR", default_value = DEFAULT_PLUGINS_DIR)]
    pub plugins_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read answers as a JSON or YAML document from stdin instead of prompting
    #[arg(short, long)]
    pub stdin: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
