//! Recipe variables collecting every resource set of one scope.
//!
//! The packaging recipe names all main resource sets in
//! `JAVA_RESOURCE_DIRS` and all test resource sets in
//! `JAVA_TEST_RESOURCE_DIRS`, each as a space-separated list of serialized
//! [`ResourceSpec`]s.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::OutputContext;
use crate::error::Result;
use crate::resource::ResourceSpec;

/// Recipe variable listing main resource sets.
pub const JAVA_RESOURCE_DIRS: &str = "JAVA_RESOURCE_DIRS";

/// Recipe variable listing test resource sets.
pub const JAVA_TEST_RESOURCE_DIRS: &str = "JAVA_TEST_RESOURCE_DIRS";

/// Which part of the build a resource set belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceScope {
    /// Resources packaged with the main artifact.
    #[default]
    Main,
    /// Resources only visible to tests.
    Test,
}

impl ResourceScope {
    /// Recipe variable that lists resource sets of this scope.
    pub fn variable_name(self) -> &'static str {
        match self {
            ResourceScope::Main => JAVA_RESOURCE_DIRS,
            ResourceScope::Test => JAVA_TEST_RESOURCE_DIRS,
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceScope::Main => "main",
            ResourceScope::Test => "test",
        }
    }
}

impl fmt::Display for ResourceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered resource sets of one scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDirs {
    scope: ResourceScope,
    specs: Vec<ResourceSpec>,
}

impl ResourceDirs {
    /// Create an empty collection for `scope`.
    pub fn new(scope: ResourceScope) -> Self {
        Self {
            scope,
            specs: Vec::new(),
        }
    }

    /// Append a resource set. Declaration order is preserved.
    pub fn push(&mut self, spec: ResourceSpec) {
        self.specs.push(spec);
    }

    /// Get the scope.
    pub fn scope(&self) -> ResourceScope {
        self.scope
    }

    /// Number of resource sets.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the collection holds no resource sets.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate the resource sets in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResourceSpec> {
        self.specs.iter()
    }

    /// Serialize every resource set into the space-separated value of the
    /// scope's recipe variable.
    ///
    /// Resource sets without a valid origin are skipped. Returns `None`
    /// when nothing remains.
    pub fn render_value<C>(&self, ctx: &mut C) -> Result<Option<String>>
    where
        C: OutputContext + ?Sized,
    {
        let mut rendered = Vec::with_capacity(self.specs.len());
        for (index, spec) in self.specs.iter().enumerate() {
            match spec.serialize(&mut *ctx)? {
                Some(value) => rendered.push(value),
                None => log::warn!(
                    "Skipping {} resource set #{}: no valid origin directory",
                    self.scope,
                    index + 1
                ),
            }
        }

        if rendered.is_empty() {
            return Ok(None);
        }
        Ok(Some(rendered.join(" ")))
    }

    /// Render the recipe assignment, e.g. `JAVA_RESOURCE_DIRS="res res2:out"`.
    pub fn render<C>(&self, ctx: &mut C) -> Result<Option<String>>
    where
        C: OutputContext + ?Sized,
    {
        Ok(self
            .render_value(ctx)?
            .map(|value| format!("{}=\"{value}\"", self.scope.variable_name())))
    }
}

impl Extend<ResourceSpec> for ResourceDirs {
    fn extend<T: IntoIterator<Item = ResourceSpec>>(&mut self, iter: T) {
        self.specs.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ResourceDirs {
    type Item = &'a ResourceSpec;
    type IntoIter = std::slice::Iter<'a, ResourceSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
