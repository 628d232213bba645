use std::{fs, path::Path};

#[cfg(feature = "logging")]
use log::{debug, info};

use crate::engine::{
    config::ScaffoldConfig,
    copy::copy_tree,
    error::ScaffoldError,
    install::{InstallCommand, Installer},
    model::{CopySummary, ScaffoldReport},
};

/// Progress points reported while a scaffold runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone<'a> {
    CreatingTarget(&'a Path),
    CopyingTemplate(&'a Path),
    Installing,
}

/// Holds configuration for one scaffold “run”.
#[derive(Debug)]
pub struct Scaffolder<I: Installer = InstallCommand> {
    pub config: ScaffoldConfig,
    installer: I,
}

impl Scaffolder<InstallCommand> {
    pub fn new(config: ScaffoldConfig) -> Self {
        let installer = config.install_command.clone();
        Self { config, installer }
    }
}

impl<I: Installer> Scaffolder<I> {
    pub fn with_installer(config: ScaffoldConfig, installer: I) -> Self {
        Self { config, installer }
    }

    // ──────────────────────────────────────────────────────────
    // Individual steps
    // ──────────────────────────────────────────────────────────
    pub fn ensure_target_absent(&self) -> Result<(), ScaffoldError> {
        let target = self.config.target_dir();
        // symlink_metadata so that a dangling link also counts as taken
        if fs::symlink_metadata(&target).is_ok() {
            return Err(ScaffoldError::TargetExists(target));
        }
        Ok(())
    }

    pub fn create_target(&self) -> Result<(), ScaffoldError> {
        let target = self.config.target_dir();
        fs::create_dir(&target).map_err(|e| ScaffoldError::fs("create directory", &target, e))
    }

    pub fn copy_template(&self) -> Result<CopySummary, ScaffoldError> {
        copy_tree(&self.config.template_dir, &self.config.target_dir())
    }

    pub fn install(&self) -> Result<(), ScaffoldError> {
        self.installer.install(&self.config.target_dir())
    }

    // ──────────────────────────────────────────────────────────
    // Whole pipeline
    // ──────────────────────────────────────────────────────────
    pub fn run(&self) -> Result<ScaffoldReport, ScaffoldError> {
        self.run_with(|_| {})
    }

    /// check-absence → create → copy → install, stopping at the first error.
    pub fn run_with(
        &self,
        mut on_milestone: impl FnMut(Milestone<'_>),
    ) -> Result<ScaffoldReport, ScaffoldError> {
        let target = self.config.target_dir();
        #[cfg(feature = "logging")]
        debug!(
            "Scaffolding {} from {}",
            target.display(),
            self.config.template_dir.display()
        );

        self.ensure_target_absent()?;

        on_milestone(Milestone::CreatingTarget(&target));
        self.create_target()?;

        on_milestone(Milestone::CopyingTemplate(&self.config.template_dir));
        let copied = self.copy_template()?;
        #[cfg(feature = "logging")]
        info!(
            "Copied {} files and {} directories",
            copied.files(),
            copied.directories()
        );

        on_milestone(Milestone::Installing);
        self.install()?;

        Ok(ScaffoldReport { target, copied })
    }
}
