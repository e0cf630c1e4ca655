//! Creation of the project directory tree and boilerplate files.

use std::path::Path;

use crate::constants::PROJECT_SUBDIRS;
use crate::error::Result;
use crate::ioutils::{create_dir_all, write_file};
use crate::renderer::{BoilerplateContext, BoilerplateRenderer, BOILERPLATE_FILES};

/// Creates the project directory, its fixed subdirectories, and the five
/// boilerplate files.
///
/// Re-running against an existing directory is not an error: directories
/// are reused and file contents are overwritten in place.
pub fn scaffold_project(
    project_dir: &Path,
    renderer: &BoilerplateRenderer,
    context: &BoilerplateContext,
) -> Result<()> {
    for subdir in PROJECT_SUBDIRS {
        create_dir_all(project_dir.join(subdir))?;
    }

    for &(rel_path, _) in BOILERPLATE_FILES {
        let content = renderer.render(rel_path, context)?;
        write_file(&content, project_dir.join(rel_path))?;
        log::debug!("Wrote '{rel_path}'.");
    }

    Ok(())
}
