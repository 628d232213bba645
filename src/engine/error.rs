//! Error types for the scaffolding pipeline.

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Every way a scaffold run can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Please provide a project name.")]
    MissingProjectName,

    #[error(
        "Folder already exists: {}. Please choose a different project name.",
        .0.display()
    )]
    TargetExists(PathBuf),

    #[error("Template directory not found (looked in: {})", format_candidates(.0))]
    TemplateNotFound(Vec<PathBuf>),

    #[error("Failed to {action} {}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk template tree")]
    Walk(#[from] ignore::Error),

    #[error("Install command is empty")]
    EmptyInstallCommand,

    #[error("Failed to launch `{command}`")]
    InstallSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    InstallFailed { command: String, status: ExitStatus },
}

impl ScaffoldError {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Short label for the error class, shown in front of the message.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingProjectName => "usage",
            Self::TargetExists(_) => "conflict",
            Self::TemplateNotFound(_) | Self::Filesystem { .. } | Self::Walk(_) => "filesystem",
            Self::EmptyInstallCommand | Self::InstallSpawn { .. } | Self::InstallFailed { .. } => {
                "install"
            }
        }
    }
}

fn format_candidates(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_error_class() {
        assert_eq!(ScaffoldError::MissingProjectName.category(), "usage");
        assert_eq!(
            ScaffoldError::TargetExists(PathBuf::from("demo")).category(),
            "conflict"
        );
        let fs_err = ScaffoldError::fs(
            "create directory",
            "demo",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(fs_err.category(), "filesystem");
        assert_eq!(fs_err.to_string(), "Failed to create directory demo");
        assert_eq!(ScaffoldError::EmptyInstallCommand.category(), "install");
    }

    #[test]
    fn template_not_found_lists_candidates() {
        let err = ScaffoldError::TemplateNotFound(vec![
            PathBuf::from("/opt/a"),
            PathBuf::from("/opt/b"),
        ]);
        assert_eq!(
            err.to_string(),
            "Template directory not found (looked in: /opt/a, /opt/b)"
        );
    }
}
