//! Locating the template tree that gets copied into new projects.

use std::path::{Path, PathBuf};

use crate::engine::error::ScaffoldError;

/// Name of the template directory shipped next to the executable.
pub const TEMPLATE_DIR_NAME: &str = "template";

/// A trait for sources that can provide the template tree.
pub trait TemplateSource {
    /// Returns the root directory of the template tree.
    fn locate(&self) -> Result<PathBuf, ScaffoldError>;
}

/// Picks the first candidate that is an existing directory.
pub struct DirTemplateSource {
    pub candidates: Vec<PathBuf>,
}

impl TemplateSource for DirTemplateSource {
    fn locate(&self) -> Result<PathBuf, ScaffoldError> {
        self.candidates
            .iter()
            .find(|p| p.is_dir())
            .cloned()
            .ok_or_else(|| ScaffoldError::TemplateNotFound(self.candidates.clone()))
    }
}

/// Built-in locations, in search order: beside the running binary, then the
/// template directory of the source checkout this binary was built from.
pub fn builtin_candidates() -> Vec<PathBuf> {
    let mut out = Vec::new();
    let exe = std::env::current_exe().ok();
    if let Some(dir) = exe.as_deref().and_then(Path::parent) {
        out.push(dir.join(TEMPLATE_DIR_NAME));
    }
    out.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn first_existing_directory_wins() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("missing");
        let file = tmp.path().join("file");
        std::fs::write(&file, "").unwrap();
        let first = tmp.path().join("first");
        let second = tmp.path().join("second");
        std::fs::create_dir(&first).unwrap();
        std::fs::create_dir(&second).unwrap();

        let source = DirTemplateSource {
            candidates: vec![missing, file, first.clone(), second],
        };
        assert_eq!(source.locate().unwrap(), first);
    }

    #[test]
    fn no_candidate_is_an_error() {
        let tmp = tempdir().unwrap();
        let source = DirTemplateSource {
            candidates: vec![tmp.path().join("nope")],
        };
        let err = source.locate().unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateNotFound(ref c) if c.len() == 1));
    }

    #[test]
    fn bundled_template_is_a_candidate() {
        let candidates = builtin_candidates();
        let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("template");
        assert_eq!(candidates.last(), Some(&bundled));
        assert!(bundled.join("package.json").is_file());
    }
}
