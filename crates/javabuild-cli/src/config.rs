//! Resource set declarations loaded from TOML.
//!
//! ```toml
//! workdir = "~/src/project"
//!
//! [[resource]]
//! origin = "src/main/resources"
//! target = "META-INF"
//! files = ["app.properties", "*.xml"]
//! action = "exclude"
//! filtering = false
//! scope = "main"
//! ```
//!
//! Relative origins resolve against the working directory. Every key except
//! `origin` is optional.

use std::path::{Path, PathBuf};

use javabuild_core::util::paths::expand_tilde;
use javabuild_core::{ResourceAction, ResourceDirs, ResourceScope, ResourceSpec};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level declaration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeConfig {
    /// Project working directory (supports `~`). Defaults to `.`.
    #[serde(default)]
    pub workdir: Option<String>,

    /// Declared resource sets, in order.
    #[serde(default, rename = "resource")]
    pub resources: Vec<ResourceDecl>,
}

/// One `[[resource]]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDecl {
    /// Origin directory (supports `~`; relative paths join the workdir).
    pub origin: String,

    /// Target directory under the compiled output tree.
    #[serde(default)]
    pub target: Option<String>,

    /// Literal file names or wildcard patterns.
    #[serde(default)]
    pub files: Vec<String>,

    /// Whether `files` are included or excluded.
    #[serde(default)]
    pub action: ResourceAction,

    /// Whether the build asked for filtering.
    #[serde(default)]
    pub filtering: bool,

    /// Main or test resources.
    #[serde(default)]
    pub scope: ResourceScope,
}

impl RecipeConfig {
    /// Load a declaration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse a declaration document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Working directory, preferring an explicit override over the file's
    /// `workdir` key.
    pub fn resolve_workdir(&self, workdir_override: Option<&Path>) -> PathBuf {
        match (workdir_override, &self.workdir) {
            (Some(dir), _) => dir.to_path_buf(),
            (None, Some(dir)) => expand_tilde(dir),
            (None, None) => PathBuf::from("."),
        }
    }

    /// Build the main and test resource collections, validating each
    /// declaration against the filesystem.
    pub fn resource_dirs(&self, workdir: &Path) -> (ResourceDirs, ResourceDirs) {
        let mut main = ResourceDirs::new(ResourceScope::Main);
        let mut test = ResourceDirs::new(ResourceScope::Test);
        for decl in &self.resources {
            let spec = decl.to_spec(workdir);
            match decl.scope {
                ResourceScope::Main => main.push(spec),
                ResourceScope::Test => test.push(spec),
            }
        }
        (main, test)
    }
}

impl ResourceDecl {
    /// Origin path with `~` expanded and relative paths joined to `workdir`.
    pub fn origin_path(&self, workdir: &Path) -> PathBuf {
        let origin = expand_tilde(&self.origin);
        if origin.is_relative() {
            workdir.join(origin)
        } else {
            origin
        }
    }

    /// Build a resource set; rejected origins and files are dropped.
    pub fn to_spec(&self, workdir: &Path) -> ResourceSpec {
        let mut spec = ResourceSpec::new()
            .with_origin(self.origin_path(workdir))
            .with_action(self.action)
            .with_filtering(self.filtering);
        if let Some(target) = &self.target {
            spec.set_target(target);
        }
        for rejection in spec.add_files(self.files.iter().cloned()) {
            log::debug!("Resource set '{}': {rejection}", self.origin);
        }
        spec
    }
}
