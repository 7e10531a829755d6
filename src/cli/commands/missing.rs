use anyhow::Result;

use super::super::{
    args::MissingCommand,
    exit_status::ExitStatus,
    report::{print_json, print_missing_translations},
};
use super::command_context::load_project;
use crate::{
    audit::{list_missing, strict_gaps},
    resolve::Resolver,
};

pub fn missing(cmd: MissingCommand) -> Result<ExitStatus> {
    let project = load_project(&cmd.common)?;
    let reference = project.options().reference;

    if cmd.language == reference {
        tracing::warn!(
            "'{}' is the reference language; every record with reference text counts as translated",
            reference
        );
    }

    let list = list_missing(&project.dataset, &project.overlays, cmd.language, reference);
    print_json(&list)?;

    let mut has_issues = cmd.fail_on_missing && list.count > 0;
    if cmd.strict {
        let resolver = Resolver::new(&project.overlays, project.options());
        let gaps = strict_gaps(&project.dataset, &resolver, cmd.language);
        print_missing_translations(&gaps);
        has_issues |= !gaps.is_empty();
    }

    Ok(ExitStatus::from_issues(has_issues))
}
