//! Writes rendered files into the plugin directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::renderer::RenderedFile;

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Creates `output_dir` and writes every file into it.
///
/// Existing files are overwritten. The first failed write aborts the
/// remaining ones; files written before it are left in place.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths of the written files, in order
pub fn emit<P: AsRef<Path>>(output_dir: P, files: Vec<RenderedFile>) -> Result<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();
    debug!("Creating output directory: {}", output_dir.display());
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target = output_dir.join(&file.path);
        debug!("Writing file: {}", target.display());
        write_file(&target, &file.content)?;
        written.push(target);
    }
    Ok(written)
}
