use anyhow::Result;

use super::super::{args::OverlaysCommand, exit_status::ExitStatus, report::print_overlay_issues};
use super::command_context::load_project;
use crate::overlay::overlay_counts;

pub fn overlays(cmd: OverlaysCommand) -> Result<ExitStatus> {
    let project = load_project(&cmd.common)?;

    for (language, count) in overlay_counts(&project.overlays) {
        tracing::debug!("{}: {} overlay entries", language, count);
    }

    let issues = project.overlays.key_issues();
    print_overlay_issues(&issues, project.overlays.len());

    Ok(ExitStatus::from_issues(!issues.is_empty()))
}
