//! The four text resources the twin prompt is built from.
//!
//! [`Resources`] is an explicitly constructed, immutable value: build it in
//! memory (tests, embedding applications) or load it from a directory with
//! [`ResourceDir`]. Both implement [`ResourceSource`], the seam the binary
//! and callers load through.
//!
//! On-disk layout for [`ResourceDir`] (file names configurable):
//!
//! ```text
//! resources/
//!   facts.json     {"full_name": "Jane Doe", "name": "Jane", ...}
//!   summary.txt
//!   linkedin.txt
//!   style.txt
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{PromptError, ResourceError};

/// Biographical key/value facts about the represented person.
///
/// Keys keep the order they were inserted or written in `facts.json`, so the
/// rendered block is deterministic and mirrors the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Facts(Map<String, Value>);

impl Facts {
    /// Parse a flat JSON object of string values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set a fact. A new key goes last; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Value::String(value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Look up a key that must be present.
    pub fn require(&self, key: &str) -> Result<&str, PromptError> {
        self.get(key).ok_or_else(|| PromptError::MissingFact {
            key: key.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Render as a pretty-printed JSON object.
    pub fn render(&self) -> String {
        format!("{:#}", Value::Object(self.0.clone()))
    }
}

impl TryFrom<Map<String, Value>> for Facts {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        if let Some((key, _)) = map.iter().find(|(_, v)| !v.is_string()) {
            return Err(format!("fact `{key}` must be a string"));
        }
        Ok(Self(map))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Facts {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut facts = Self::default();
        for (k, v) in iter {
            facts.insert(k, v);
        }
        facts
    }
}

/// Everything the composer reads besides the clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources {
    pub facts: Facts,
    pub summary: String,
    pub linkedin: String,
    pub style: String,
}

impl Resources {
    pub fn new(
        facts: Facts,
        summary: impl Into<String>,
        linkedin: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            facts,
            summary: summary.into(),
            linkedin: linkedin.into(),
            style: style.into(),
        }
    }
}

/// Something that can produce a [`Resources`] value.
pub trait ResourceSource {
    fn load(&self) -> Result<Resources, ResourceError>;
}

impl ResourceSource for Resources {
    fn load(&self) -> Result<Resources, ResourceError> {
        Ok(self.clone())
    }
}

/// Loads resources from files in a directory.
#[derive(Debug, Clone)]
pub struct ResourceDir {
    root: PathBuf,
    facts_file: String,
    summary_file: String,
    linkedin_file: String,
    style_file: String,
}

impl ResourceDir {
    /// Use the default file names under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            facts_file: "facts.json".to_string(),
            summary_file: "summary.txt".to_string(),
            linkedin_file: "linkedin.txt".to_string(),
            style_file: "style.txt".to_string(),
        }
    }

    pub fn with_file_names(
        mut self,
        facts: impl Into<String>,
        summary: impl Into<String>,
        linkedin: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        self.facts_file = facts.into();
        self.summary_file = summary.into();
        self.linkedin_file = linkedin.into();
        self.style_file = style.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_text(&self, file: &str) -> Result<String, ResourceError> {
        let path = self.root.join(file);
        let text = fs::read_to_string(&path).map_err(|source| ResourceError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded resource");
        if text.trim().is_empty() {
            warn!(path = %path.display(), "resource is empty; its prompt section will be blank");
        }
        Ok(text)
    }
}

impl ResourceSource for ResourceDir {
    fn load(&self) -> Result<Resources, ResourceError> {
        let facts_path = self.root.join(&self.facts_file);
        let raw = self.read_text(&self.facts_file)?;
        let facts = Facts::from_json(&raw).map_err(|source| ResourceError::Facts {
            path: facts_path,
            source,
        })?;

        Ok(Resources {
            facts,
            summary: self.read_text(&self.summary_file)?,
            linkedin: self.read_text(&self.linkedin_file)?,
            style: self.read_text(&self.style_file)?,
        })
    }
}
