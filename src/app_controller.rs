use anyhow::{Context, Result};

use crate::{
    engine::{config_file::ConfigFile, model::ScaffoldReport, scaffold::Scaffolder},
    ui::{
        cli::Cli,
        config::{ProcessEnv, build_config_builder, project_name},
        output,
    },
};

/// The primary orchestration function for the application.
///
/// validate → load config → check-absence → create → copy → install → report.
/// Nothing touches the filesystem until the project name and template have
/// both been resolved.
pub fn run(args: Cli) -> Result<ScaffoldReport> {
    // Fail on a missing name before reading any config.
    project_name(&args)?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let cfg_file = ConfigFile::load()?;

    let config = build_config_builder(&args, &cfg_file, &ProcessEnv, &cwd)?
        .build()
        .context("Failed to build configuration for scaffold")?;

    let report = Scaffolder::new(config).run_with(|m| output::print_milestone(&m))?;

    output::print_success(&report);
    Ok(report)
}
