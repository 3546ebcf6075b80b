//! Entry point of the plugin scaffolder.
//! Handles argument parsing, answer collection and coordinates the
//! generation pipeline.

use plugin_scaffold::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    parser::load_from_stdin,
    processor::{generate, plugin_dir},
    prompt::{prompt_answers, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects answers from stdin or the interactive questionnaire
/// 2. Resolves derived fields and selects templates
/// 3. Renders every template
/// 4. Writes the rendered files into `<plugins-dir>/<name>`
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();

    let answers = if args.stdin {
        load_from_stdin()?
    } else {
        prompt_answers(&DialoguerPrompter::new())?
    };

    let output_dir = plugin_dir(&args.plugins_dir, &answers)?;
    for path in generate(&engine, &answers, &output_dir)? {
        println!("Created: '{}'", path.display());
    }

    println!("Plugin generation completed successfully in {}.", output_dir.display());
    Ok(())
}
