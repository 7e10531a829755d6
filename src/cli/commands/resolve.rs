use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use super::super::{args::ResolveCommand, exit_status::ExitStatus, report::print_json_line_to};
use super::command_context::load_project;
use crate::{dataset::Category, language::Language};

/// One resolved record, printed as a JSON line.
#[derive(Debug, Serialize)]
struct ResolvedLine<'a> {
    topic: usize,
    category: Category,
    index: usize,
    text: &'a str,
}

pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let project = load_project(&cmd.common)?;
    let resolver = project.resolver();

    if Language::from_code(&cmd.language).is_none() {
        tracing::warn!(
            "unsupported language code \"{}\", resolving through the fallback chain",
            cmd.language
        );
    }

    if let Some(topic) = cmd.topic
        && topic >= project.dataset.topics.len()
    {
        anyhow::bail!(
            "Topic index {} is out of range (dataset has {} topics)",
            topic,
            project.dataset.topics.len()
        );
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (topic_index, topic) in project.dataset.topics.iter().enumerate() {
        if cmd.topic.is_some_and(|wanted| wanted != topic_index) {
            continue;
        }
        for category in Category::ALL {
            if cmd.category.is_some_and(|wanted| wanted != category) {
                continue;
            }
            for (index, record) in topic.records(category).iter().enumerate() {
                let text = resolver.resolve_code(record, &cmd.language);
                let line = ResolvedLine {
                    topic: topic_index,
                    category,
                    index,
                    text: &text,
                };
                print_json_line_to(&line, &mut out)?;
            }
        }
    }

    out.flush().context("Failed to write output")?;
    Ok(ExitStatus::Success)
}
