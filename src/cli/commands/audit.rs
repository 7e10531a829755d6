use anyhow::Result;

use super::super::{
    args::{AuditCommand, OutputFormat},
    exit_status::ExitStatus,
    report::{print_audit, print_json},
};
use super::command_context::load_project;
use crate::audit::audit as audit_dataset;

pub fn audit(cmd: AuditCommand) -> Result<ExitStatus> {
    let project = load_project(&cmd.common)?;
    let report = audit_dataset(&project.dataset, &project.languages(), project.options());

    tracing::debug!(
        missing = report.missing_translations,
        tagged = report.tagged_placeholders,
        duplicates = report.duplicates,
        "audit finished"
    );

    match cmd.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_audit(&report),
    }

    Ok(ExitStatus::from_issues(report.has_gaps()))
}
