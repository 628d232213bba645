// src/engine/config.rs

use derive_builder::Builder;
use std::path::{Component, Path, PathBuf};

use crate::engine::install::InstallCommand;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(name = "build_internal"), derive(Debug))]
pub struct ScaffoldConfig {
    /// Joined under `base_dir` as given, minus any root or drive prefix.
    pub project_name: String,

    #[builder(default = "PathBuf::from(\".\")")]
    pub base_dir: PathBuf,

    pub template_dir: PathBuf,

    #[builder(default)]
    pub install_command: InstallCommand,
}

impl ScaffoldConfig {
    /// Always lands under `base_dir`: an absolute name is re-rooted there
    /// instead of replacing it.
    pub fn target_dir(&self) -> PathBuf {
        let relative: PathBuf = Path::new(&self.project_name)
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect();
        self.base_dir.join(relative)
    }
}

impl ScaffoldConfigBuilder {
    pub fn build(&self) -> Result<ScaffoldConfig, ScaffoldConfigBuilderError> {
        self.build_internal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str) -> ScaffoldConfig {
        ScaffoldConfigBuilder::default()
            .project_name(name)
            .base_dir(PathBuf::from("/work"))
            .template_dir(PathBuf::from("/tpl"))
            .build()
            .unwrap()
    }

    #[test]
    fn relative_name_joins_base_dir() {
        assert_eq!(config("demo").target_dir(), PathBuf::from("/work/demo"));
        assert_eq!(config("a/b").target_dir(), PathBuf::from("/work/a/b"));
    }

    #[cfg(unix)]
    #[test]
    fn absolute_name_stays_under_base_dir() {
        assert_eq!(
            config("/tmp/escaped").target_dir(),
            PathBuf::from("/work/tmp/escaped")
        );
    }

    #[test]
    fn builder_is_debuggable() {
        let mut b = ScaffoldConfigBuilder::default();
        b.project_name("demo");
        assert!(format!("{b:?}").contains("demo"));
    }
}
