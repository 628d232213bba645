use std::{
    fmt,
    path::Path,
    process::{Command, Stdio},
};

#[cfg(feature = "logging")]
use log::debug;

use crate::engine::error::ScaffoldError;

#[cfg(windows)]
const DEFAULT_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
const DEFAULT_PROGRAM: &str = "npm";

/// Installs dependencies into a freshly populated project directory.
pub trait Installer {
    fn install(&self, project_dir: &Path) -> Result<(), ScaffoldError>;
}

/// An external program run with the project directory as its working
/// directory and the parent's stdio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for InstallCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
            args: vec!["install".into()],
        }
    }
}

impl InstallCommand {
    /// Splits a command line on whitespace. No shell quoting is understood.
    pub fn parse(line: &str) -> Result<Self, ScaffoldError> {
        let mut parts = line.split_whitespace().map(str::to_owned);
        let program = parts.next().ok_or(ScaffoldError::EmptyInstallCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl Installer for InstallCommand {
    fn install(&self, project_dir: &Path) -> Result<(), ScaffoldError> {
        #[cfg(feature = "logging")]
        debug!("Running `{self}` in {}", project_dir.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ScaffoldError::InstallSpawn {
                command: self.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::InstallFailed {
                command: self.to_string(),
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_program_and_args() {
        let cmd = InstallCommand::parse("  pnpm install   --frozen-lockfile ").unwrap();
        assert_eq!(cmd.program, "pnpm");
        assert_eq!(cmd.args, vec!["install", "--frozen-lockfile"]);
        assert_eq!(cmd.to_string(), "pnpm install --frozen-lockfile");
    }

    #[test]
    fn parse_rejects_blank_line() {
        assert!(matches!(
            InstallCommand::parse("   "),
            Err(ScaffoldError::EmptyInstallCommand)
        ));
    }

    #[test]
    fn default_is_npm_install() {
        let cmd = InstallCommand::default();
        assert!(cmd.program.starts_with("npm"));
        assert_eq!(cmd.args, vec!["install"]);
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = InstallCommand::parse("scaffold-no-such-program-xyz install").unwrap();
        let err = cmd.install(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InstallSpawn { .. }));
        assert_eq!(err.category(), "install");
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_decides_success() {
        let dir = tempfile::tempdir().unwrap();
        assert!(InstallCommand::parse("true").unwrap().install(dir.path()).is_ok());

        let err = InstallCommand::parse("false")
            .unwrap()
            .install(dir.path())
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::InstallFailed { .. }));
    }
}
