//! Common constants used throughout the plugin scaffolder.

/// Samples shorter than this are never inspected for a token prefix
pub const MIN_PREFIX_SAMPLE_LEN: usize = 20;

/// Number of leading characters searched for a token prefix
pub const PREFIX_WINDOW_LEN: usize = 15;

/// Characters that terminate a token prefix, e.g. `ghp_` or `glpat-`
pub const PREFIX_DELIMITERS: [char; 2] = ['_', '-'];

/// Base directory that receives one sub-directory per generated plugin
pub const DEFAULT_PLUGINS_DIR: &str = "plugins";
