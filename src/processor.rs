//! Core generation orchestration.
//! Runs resolution, template selection, rendering and emission in order.

use std::path::{Path, PathBuf};

use log::debug;

use crate::answers::{resolve, validate_plugin_name, RawAnswers};
use crate::emitter::emit;
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::template::select_templates;

/// Returns the directory a plugin is generated into: `<plugins_dir>/<name>`.
///
/// # Errors
/// * `Error::ValidationError` if the name is not a plain directory name
pub fn plugin_dir<P: AsRef<Path>>(plugins_dir: P, raw: &RawAnswers) -> Result<PathBuf> {
    validate_plugin_name(&raw.name)?;
    Ok(plugins_dir.as_ref().join(&raw.name))
}

/// Generates the plugin sources for `raw` into `output_dir`.
///
/// Every selected template is rendered before anything is written, so a
/// rendering failure produces no files.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths of the generated files
pub fn generate<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    raw: &RawAnswers,
    output_dir: P,
) -> Result<Vec<PathBuf>> {
    let answers = resolve(raw);
    let templates = select_templates(raw);

    let files = templates
        .iter()
        .map(|template| engine.render(template, &answers))
        .collect::<Result<Vec<_>>>()?;

    debug!("Rendered {} files", files.len());
    emit(output_dir, files)
}
