use anyhow::Result;
use rand::{SeedableRng, rngs::StdRng};

use super::super::{args::DrawCommand, exit_status::ExitStatus, report::print_drawn};
use super::command_context::load_project;
use crate::{draw::draw as draw_question, language::Language};

pub fn draw(cmd: DrawCommand) -> Result<ExitStatus> {
    let project = load_project(&cmd.common)?;
    let resolver = project.resolver();

    let language = match Language::from_code(&cmd.language) {
        Some(language) => language,
        None => {
            tracing::warn!(
                "unsupported language code \"{}\", using '{}'",
                cmd.language,
                resolver.options().fallback
            );
            resolver.options().fallback
        }
    };

    let mut rng = match cmd.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match draw_question(&project.dataset, &resolver, language, &mut rng) {
        Some(drawn) => {
            print_drawn(&drawn);
            Ok(ExitStatus::Success)
        }
        None => {
            eprintln!("Error: the dataset has no questions to draw from");
            Ok(ExitStatus::Failure)
        }
    }
}
