//! Resource-location configuration with sensible defaults.
//!
//! [`TwinConfig`] says where the four resource files live and converts into a
//! [`ResourceDir`] loader via [`resource_dir`](TwinConfig::resource_dir).

use std::path::PathBuf;

use crate::resources::ResourceDir;

/// Where to find the twin's resources on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwinConfig {
    /// Directory holding the resource files. Default: `"resources"`.
    pub resources_dir: PathBuf,
    /// Facts JSON file name. Default: `"facts.json"`.
    pub facts_file: String,
    /// Summary notes file name. Default: `"summary.txt"`.
    pub summary_file: String,
    /// LinkedIn profile file name. Default: `"linkedin.txt"`.
    pub linkedin_file: String,
    /// Communication style notes file name. Default: `"style.txt"`.
    pub style_file: String,
}

impl Default for TwinConfig {
    fn default() -> Self {
        Self {
            resources_dir: PathBuf::from("resources"),
            facts_file: "facts.json".to_string(),
            summary_file: "summary.txt".to_string(),
            linkedin_file: "linkedin.txt".to_string(),
            style_file: "style.txt".to_string(),
        }
    }
}

impl TwinConfig {
    pub fn new(resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            resources_dir: resources_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_facts_file(mut self, name: impl Into<String>) -> Self {
        self.facts_file = name.into();
        self
    }

    pub fn with_summary_file(mut self, name: impl Into<String>) -> Self {
        self.summary_file = name.into();
        self
    }

    pub fn with_linkedin_file(mut self, name: impl Into<String>) -> Self {
        self.linkedin_file = name.into();
        self
    }

    pub fn with_style_file(mut self, name: impl Into<String>) -> Self {
        self.style_file = name.into();
        self
    }

    /// Build the directory loader for this configuration.
    pub fn resource_dir(&self) -> ResourceDir {
        ResourceDir::new(&self.resources_dir).with_file_names(
            &self.facts_file,
            &self.summary_file,
            &self.linkedin_file,
            &self.style_file,
        )
    }
}
