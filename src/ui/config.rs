use std::path::{Path, PathBuf};

use crate::engine::{
    config::ScaffoldConfigBuilder,
    config_file::ConfigFile,
    error::ScaffoldError,
    install::InstallCommand,
    template::{DirTemplateSource, TemplateSource, builtin_candidates},
};
use crate::ui::cli::Cli;

pub const TEMPLATE_DIR_ENV: &str = "SCAFFOLD_TEMPLATE_DIR";
pub const INSTALL_CMD_ENV: &str = "SCAFFOLD_INSTALL_CMD";

/// Environment lookup, injectable so the layering can be tested without
/// touching the process environment.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}

/// The project name is required; an empty one counts as missing.
pub fn project_name(args: &Cli) -> Result<String, ScaffoldError> {
    args.project_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
        .ok_or(ScaffoldError::MissingProjectName)
}

/// Search order: environment, config file, built-in locations.
pub fn template_candidates(env: &impl Env, cfg_file: &ConfigFile) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(dir) = env.var(TEMPLATE_DIR_ENV) {
        out.push(PathBuf::from(dir));
    }
    if let Some(dir) = &cfg_file.template_dir {
        out.push(dir.clone());
    }
    out.extend(builtin_candidates());
    out
}

pub fn install_command(
    env: &impl Env,
    cfg_file: &ConfigFile,
) -> Result<InstallCommand, ScaffoldError> {
    match env.var(INSTALL_CMD_ENV).or_else(|| cfg_file.install_command.clone()) {
        Some(line) => InstallCommand::parse(&line),
        None => Ok(InstallCommand::default()),
    }
}

pub fn build_config_builder(
    args: &Cli,
    cfg_file: &ConfigFile,
    env: &impl Env,
    base_dir: &Path,
) -> Result<ScaffoldConfigBuilder, ScaffoldError> {
    let name = project_name(args)?;
    let template_dir = DirTemplateSource {
        candidates: template_candidates(env, cfg_file),
    }
    .locate()?;

    let mut b = ScaffoldConfigBuilder::default();
    b.project_name(name)
        .base_dir(base_dir.to_path_buf())
        .template_dir(template_dir)
        .install_command(install_command(env, cfg_file)?);
    Ok(b)
}
