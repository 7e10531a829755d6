use anyhow::Result;

use super::super::{exit_status::ExitStatus, report::print_languages};

pub fn languages() -> Result<ExitStatus> {
    print_languages();
    Ok(ExitStatus::Success)
}
