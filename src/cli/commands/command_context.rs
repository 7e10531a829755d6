use anyhow::Result;

use super::super::args::CommonArgs;
use crate::project::Project;

/// Load the project described by the common arguments.
pub fn load_project(common: &CommonArgs) -> Result<Project> {
    let project = Project::load(&common.path, &common.overrides())?;
    tracing::debug!(
        dataset = %project.dataset_path.display(),
        locales = %project.locales_root.display(),
        records = project.dataset.len(),
        overlay_entries = project.overlays.len(),
        "project loaded"
    );
    Ok(project)
}
