//! A single declared resource set.
//!
//! `ResourceSpec` records where resources come from (the origin directory),
//! where they land under the compiled output tree (the target directory),
//! which files are meant, and whether the build asked for filtering.
//! Values are validated against the filesystem as they are offered:
//!
//! - an origin is kept only if it is an existing directory with at least
//!   one entry;
//! - a file entry is kept only if it is a wildcard pattern or names a
//!   regular file under the current origin.
//!
//! Rejected values leave the resource set untouched. Mutators report the
//! rejection as a [`ResourceError`]; the builder-style `with_*` methods
//! drop it.
//!
//! # Serialized form
//!
//! ```text
//! RELORIGIN
//! RELORIGIN:TARGET
//! RELORIGIN:TARGET:entryA|entryB      (include)
//! RELORIGIN:TARGET:!entryA|!entryB    (exclude)
//! ```
//!
//! `RELORIGIN` is the origin relative to the working directory and `TARGET`
//! is empty when no target was set. Entries are always sorted ascending.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::context::OutputContext;
use crate::error::{ResourceError, Result};
use crate::resource::ResourceAction;
use crate::util::paths::{has_wildcard, is_empty_dir, relativize};

/// Warning written to the diagnostic sink for resource sets that request
/// filtering.
pub const FILTERING_WARNING: &str = "\
WARNING: a resource set requests filtering (variable replacement inside
resource files). Filtering is not supported by the recipe generator, so
the resources are packaged verbatim. Replace the placeholders manually in
the packaging recipe, for example in src_prepare().
";

/// One declared resource directory and its packaging rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Validated origin directory; `None` until a valid one is offered.
    origin: Option<PathBuf>,
    /// Destination under the compiled output tree; `None` maps to its root.
    target: Option<PathBuf>,
    /// Accepted entries, deduplicated and sorted.
    files: BTreeSet<String>,
    action: ResourceAction,
    filtering: bool,
}

impl ResourceSpec {
    /// Create an empty resource set with no origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin directory, dropping it if it fails validation.
    pub fn with_origin(mut self, origin: impl AsRef<Path>) -> Self {
        let _ = self.set_origin(origin);
        self
    }

    /// Set the target directory.
    pub fn with_target(mut self, target: impl AsRef<Path>) -> Self {
        self.set_target(target);
        self
    }

    /// Add file entries, dropping those that fail validation.
    ///
    /// Literal entries are checked against the origin, so set the origin
    /// first.
    pub fn with_files<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let _ = self.add_files(entries);
        self
    }

    /// Set the include/exclude mode.
    pub fn with_action(mut self, action: ResourceAction) -> Self {
        self.set_action(action);
        self
    }

    /// Set the filtering flag.
    pub fn with_filtering(mut self, filtering: bool) -> Self {
        self.set_filtering(filtering);
        self
    }

    /// Replace the origin directory.
    ///
    /// The path must name an existing directory with at least one entry.
    /// On rejection the previous origin is kept.
    pub fn set_origin(
        &mut self,
        origin: impl AsRef<Path>,
    ) -> std::result::Result<(), ResourceError> {
        let origin = origin.as_ref();
        match validate_origin(origin) {
            Ok(()) => {
                self.origin = Some(origin.to_path_buf());
                Ok(())
            }
            Err(rejection) => {
                log::debug!("Ignoring resource origin: {rejection}");
                Err(rejection)
            }
        }
    }

    /// Replace the target directory.
    ///
    /// An empty path clears the target, mapping resources to the root of
    /// the output tree.
    pub fn set_target(&mut self, target: impl AsRef<Path>) {
        let target = target.as_ref();
        self.target = if target.as_os_str().is_empty() {
            None
        } else {
            Some(target.to_path_buf())
        };
    }

    /// Add one file entry.
    ///
    /// Wildcard patterns (containing `*` or `?`) are always accepted.
    /// Literal entries must name a regular file under the current origin.
    /// Adding an entry that is already present is a no-op.
    pub fn add_file(
        &mut self,
        entry: impl Into<String>,
    ) -> std::result::Result<(), ResourceError> {
        let entry = entry.into();
        match self.check_entry(&entry) {
            Ok(()) => {
                self.files.insert(entry);
                Ok(())
            }
            Err(rejection) => {
                log::debug!("Ignoring resource file: {rejection}");
                Err(rejection)
            }
        }
    }

    /// Add several file entries, returning the rejections.
    ///
    /// Accepted entries are kept even when others are rejected.
    pub fn add_files<I, S>(&mut self, entries: I) -> Vec<ResourceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        entries
            .into_iter()
            .filter_map(|entry| self.add_file(entry).err())
            .collect()
    }

    /// Set the include/exclude mode.
    pub fn set_action(&mut self, action: ResourceAction) {
        self.action = action;
    }

    /// Set whether the declaration asked for filtering.
    ///
    /// Filtering is never performed; the flag only triggers a warning at
    /// serialization time.
    pub fn set_filtering(&mut self, filtering: bool) {
        self.filtering = filtering;
    }

    /// Get the validated origin directory.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Get the target directory.
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Iterate the accepted file entries in ascending order.
    pub fn files(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.files.iter().map(String::as_str)
    }

    /// Get the include/exclude mode.
    pub fn action(&self) -> ResourceAction {
        self.action
    }

    /// Whether the declaration asked for filtering.
    pub fn filtering(&self) -> bool {
        self.filtering
    }

    /// The filtering warning, if this resource set needs one.
    pub fn filtering_warning(&self) -> Option<&'static str> {
        self.filtering.then_some(FILTERING_WARNING)
    }

    /// Render the recipe string with origins relative to `workdir`.
    ///
    /// Returns `None` when no valid origin has been set. This has no side
    /// effects; see [`serialize`](Self::serialize) for the variant that
    /// also reports the filtering warning.
    pub fn render(&self, workdir: &Path) -> Option<String> {
        let origin = self.origin.as_deref()?;
        let rel_origin = relativize(workdir, origin);
        let rel_origin = rel_origin.to_string_lossy();

        let target = self
            .target
            .as_deref()
            .map(|t| t.to_string_lossy().into_owned());

        if self.files.is_empty() {
            return Some(match target {
                None => rel_origin.into_owned(),
                Some(target) => format!("{rel_origin}:{target}"),
            });
        }

        let target = target.unwrap_or_default();
        let entries: Vec<&str> = self.files().collect();
        let entries = match self.action {
            ResourceAction::Include => entries.join("|"),
            ResourceAction::Exclude => format!("!{}", entries.join("|!")),
        };

        Some(format!("{rel_origin}:{target}:{entries}"))
    }

    /// Write the filtering warning (if any) to the context's diagnostic
    /// sink, then render against the context's working directory.
    ///
    /// The warning is written before rendering, whether or not the result
    /// is `None`. Only a failing sink produces an error.
    pub fn serialize<C>(&self, ctx: &mut C) -> Result<Option<String>>
    where
        C: OutputContext + ?Sized,
    {
        if let Some(warning) = self.filtering_warning() {
            ctx.diagnostics().write_all(warning.as_bytes())?;
        }
        Ok(self.render(ctx.workdir()))
    }

    fn check_entry(&self, entry: &str) -> std::result::Result<(), ResourceError> {
        if has_wildcard(entry) {
            return Ok(());
        }

        let Some(origin) = self.origin.as_deref() else {
            return Err(ResourceError::OriginUnset {
                entry: entry.to_string(),
            });
        };

        if origin.join(entry).is_file() {
            Ok(())
        } else {
            Err(ResourceError::FileNotFound {
                entry: entry.to_string(),
                origin: origin.to_path_buf(),
            })
        }
    }
}

fn validate_origin(path: &Path) -> std::result::Result<(), ResourceError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ResourceError::OriginNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ResourceError::OriginUnreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(ResourceError::OriginNotDirectory {
            path: path.to_path_buf(),
        });
    }

    match is_empty_dir(path) {
        Ok(false) => Ok(()),
        Ok(true) => Err(ResourceError::OriginEmpty {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(ResourceError::OriginUnreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::context::Workdir;
    use tempfile::TempDir;

    /// Working directory with `res/` holding `a.txt` and `b.txt`.
    fn fixture() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let res = temp_dir.path().join("res");
        fs::create_dir(&res).unwrap();
        fs::write(res.join("a.txt"), "a").unwrap();
        fs::write(res.join("b.txt"), "b").unwrap();
        temp_dir
    }

    fn res(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("res")
    }

    // ------------------------------------------------------------------------
    // Origin validation
    // ------------------------------------------------------------------------

    #[test]
    fn test_new_has_no_origin() {
        let spec = ResourceSpec::new();
        assert!(spec.origin().is_none());
        assert!(spec.target().is_none());
        assert_eq!(spec.files().len(), 0);
        assert_eq!(spec.action(), ResourceAction::Include);
        assert!(!spec.filtering());
    }

    #[test]
    fn test_set_origin_valid() {
        let temp_dir = fixture();
        let mut spec = ResourceSpec::new();
        spec.set_origin(res(&temp_dir)).unwrap();
        assert_eq!(spec.origin(), Some(res(&temp_dir).as_path()));
    }

    #[test]
    fn test_set_origin_missing() {
        let temp_dir = fixture();
        let mut spec = ResourceSpec::new();
        let err = spec.set_origin(temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ResourceError::OriginNotFound { .. }));
        assert!(spec.origin().is_none());
    }

    #[test]
    fn test_set_origin_empty_dir() {
        let temp_dir = fixture();
        let empty = temp_dir.path().join("empty");
        fs::create_dir(&empty).unwrap();

        let mut spec = ResourceSpec::new();
        let err = spec.set_origin(&empty).unwrap_err();
        assert!(matches!(err, ResourceError::OriginEmpty { .. }));
        assert!(spec.origin().is_none());
    }

    #[test]
    fn test_set_origin_file() {
        let temp_dir = fixture();
        let mut spec = ResourceSpec::new();
        let err = spec.set_origin(res(&temp_dir).join("a.txt")).unwrap_err();
        assert!(matches!(err, ResourceError::OriginNotDirectory { .. }));
    }

    #[test]
    fn test_rejected_origin_keeps_previous() {
        let temp_dir = fixture();
        let mut spec = ResourceSpec::new().with_origin(res(&temp_dir));
        assert!(spec.set_origin(temp_dir.path().join("missing")).is_err());
        assert_eq!(spec.origin(), Some(res(&temp_dir).as_path()));
    }

    #[test]
    fn test_with_origin_drops_invalid() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new().with_origin(temp_dir.path().join("missing"));
        assert!(spec.origin().is_none());
    }

    // ------------------------------------------------------------------------
    // Target and flags
    // ------------------------------------------------------------------------

    #[test]
    fn test_set_target() {
        let mut spec = ResourceSpec::new();
        spec.set_target("META-INF");
        assert_eq!(spec.target(), Some(Path::new("META-INF")));
    }

    #[test]
    fn test_set_target_empty_clears() {
        let mut spec = ResourceSpec::new().with_target("out");
        spec.set_target("");
        assert!(spec.target().is_none());
    }

    #[test]
    fn test_target_not_validated() {
        let spec = ResourceSpec::new().with_target("/does/not/exist");
        assert_eq!(spec.target(), Some(Path::new("/does/not/exist")));
    }

    #[test]
    fn test_action_and_filtering_setters() {
        let spec = ResourceSpec::new()
            .with_action(ResourceAction::Exclude)
            .with_filtering(true);
        assert_eq!(spec.action(), ResourceAction::Exclude);
        assert!(spec.filtering());
    }

    // ------------------------------------------------------------------------
    // File entries
    // ------------------------------------------------------------------------

    #[test]
    fn test_add_existing_file() {
        let temp_dir = fixture();
        let mut spec = ResourceSpec::new().with_origin(res(&temp_dir));
        spec.add_file("a.txt").unwrap();
        assert_eq!(spec.files().collect::<Vec<_>>(), vec!["a.txt"]);
    }

    #[test]
    fn test_add_missing_file_rejected() {
        let temp_dir = fixture();
        let mut spec = ResourceSpec::new().with_origin(res(&temp_dir));
        let err = spec.add_file("c.txt").unwrap_err();
        assert!(matches!(err, ResourceError::FileNotFound { ref entry, .. } if entry == "c.txt"));
        assert_eq!(spec.files().len(), 0);
    }

    #[test]
    fn test_add_directory_entry_rejected() {
        let temp_dir = fixture();
        fs::create_dir(res(&temp_dir).join("nested")).unwrap();
        let mut spec = ResourceSpec::new().with_origin(res(&temp_dir));
        assert!(spec.add_file("nested").is_err());
    }

    #[test]
    fn test_add_file_without_origin_rejected() {
        let mut spec = ResourceSpec::new();
        let err = spec.add_file("a.txt").unwrap_err();
        assert!(matches!(err, ResourceError::OriginUnset { .. }));
    }

    #[test]
    fn test_wildcard_bypasses_existence_check() {
        let mut spec = ResourceSpec::new();
        spec.add_file("*.properties").unwrap();
        spec.add_file("log?.xml").unwrap();
        assert_eq!(
            spec.files().collect::<Vec<_>>(),
            vec!["*.properties", "log?.xml"]
        );
    }

    #[test]
    fn test_add_files_sorted_and_deduplicated() {
        let temp_dir = fixture();
        let mut spec = ResourceSpec::new().with_origin(res(&temp_dir));
        let rejected = spec.add_files(["b.txt", "a.txt", "b.txt", "missing.txt", "*.xml"]);
        assert_eq!(rejected.len(), 1);
        assert_eq!(
            spec.files().collect::<Vec<_>>(),
            vec!["*.xml", "a.txt", "b.txt"]
        );
    }

    #[test]
    fn test_nested_literal_entry() {
        let temp_dir = fixture();
        fs::create_dir(res(&temp_dir).join("conf")).unwrap();
        fs::write(res(&temp_dir).join("conf/app.xml"), "<app/>").unwrap();

        let spec = ResourceSpec::new()
            .with_origin(res(&temp_dir))
            .with_files(["conf/app.xml"]);
        assert_eq!(spec.files().collect::<Vec<_>>(), vec!["conf/app.xml"]);
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_origin_only() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new().with_origin(res(&temp_dir));
        assert_eq!(spec.render(temp_dir.path()).as_deref(), Some("res"));
    }

    #[test]
    fn test_render_with_target() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new()
            .with_origin(res(&temp_dir))
            .with_target("out");
        assert_eq!(spec.render(temp_dir.path()).as_deref(), Some("res:out"));
    }

    #[test]
    fn test_render_include() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new()
            .with_origin(res(&temp_dir))
            .with_target("out")
            .with_files(["b.txt", "a.txt"])
            .with_action(ResourceAction::Include);
        assert_eq!(
            spec.render(temp_dir.path()).as_deref(),
            Some("res:out:a.txt|b.txt")
        );
    }

    #[test]
    fn test_render_exclude() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new()
            .with_origin(res(&temp_dir))
            .with_target("out")
            .with_files(["b.txt", "a.txt"])
            .with_action(ResourceAction::Exclude);
        assert_eq!(
            spec.render(temp_dir.path()).as_deref(),
            Some("res:out:!a.txt|!b.txt")
        );
    }

    #[test]
    fn test_render_files_without_target() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new()
            .with_origin(res(&temp_dir))
            .with_files(["a.txt"]);
        assert_eq!(spec.render(temp_dir.path()).as_deref(), Some("res::a.txt"));

        let spec = spec.with_action(ResourceAction::Exclude);
        assert_eq!(spec.render(temp_dir.path()).as_deref(), Some("res::!a.txt"));
    }

    #[test]
    fn test_render_single_wildcard() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new()
            .with_origin(res(&temp_dir))
            .with_files(["*.properties"]);
        assert_eq!(
            spec.render(temp_dir.path()).as_deref(),
            Some("res::*.properties")
        );
    }

    #[test]
    fn test_render_without_origin_is_none() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new()
            .with_origin(temp_dir.path().join("missing"))
            .with_target("out")
            .with_files(["*.xml"])
            .with_action(ResourceAction::Exclude);
        assert!(spec.render(temp_dir.path()).is_none());
    }

    #[test]
    fn test_render_outside_workdir() {
        let temp_dir = fixture();
        let workdir = temp_dir.path().join("module");
        let spec = ResourceSpec::new().with_origin(res(&temp_dir));
        assert_eq!(spec.render(&workdir).as_deref(), Some("../res"));
    }

    #[test]
    fn test_render_workdir_with_parent_component() {
        let temp_dir = fixture();
        let workdir = temp_dir.path().join("module").join("..");
        let spec = ResourceSpec::new().with_origin(res(&temp_dir));
        assert_eq!(spec.render(&workdir).as_deref(), Some("res"));
    }

    #[test]
    fn test_render_relative_workdir_absolute_origin() {
        let temp_dir = fixture();
        let cwd = std::env::current_dir().unwrap();
        let workdir = relativize(&cwd, temp_dir.path());
        assert!(workdir.is_relative());
        let spec = ResourceSpec::new().with_origin(res(&temp_dir));
        assert_eq!(spec.render(&workdir).as_deref(), Some("res"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new()
            .with_origin(res(&temp_dir))
            .with_files(["a.txt", "*.cfg"]);
        assert_eq!(spec.render(temp_dir.path()), spec.render(temp_dir.path()));
    }

    // ------------------------------------------------------------------------
    // Serialization with diagnostics
    // ------------------------------------------------------------------------

    #[test]
    fn test_serialize_without_filtering_writes_nothing() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new().with_origin(res(&temp_dir));
        let mut ctx = Workdir::new(temp_dir.path(), Vec::new());

        assert_eq!(spec.serialize(&mut ctx).unwrap().as_deref(), Some("res"));
        assert!(ctx.sink().is_empty());
    }

    #[test]
    fn test_serialize_filtering_warns_once_per_call() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new()
            .with_origin(res(&temp_dir))
            .with_target("out")
            .with_filtering(true);
        let mut ctx = Workdir::new(temp_dir.path(), Vec::new());

        let first = spec.serialize(&mut ctx).unwrap();
        assert_eq!(first.as_deref(), Some("res:out"));
        assert_eq!(String::from_utf8_lossy(ctx.sink()), FILTERING_WARNING);

        let second = spec.serialize(&mut ctx).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8_lossy(ctx.sink()),
            FILTERING_WARNING.repeat(2)
        );
    }

    #[test]
    fn test_serialize_filtering_warns_even_without_origin() {
        let temp_dir = fixture();
        let spec = ResourceSpec::new().with_filtering(true);
        let mut ctx = Workdir::new(temp_dir.path(), Vec::new());

        assert!(spec.serialize(&mut ctx).unwrap().is_none());
        assert_eq!(String::from_utf8_lossy(ctx.sink()), FILTERING_WARNING);
    }

    #[test]
    fn test_serialize_propagates_sink_failure() {
        struct BrokenSink;

        impl io::Write for BrokenSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let spec = ResourceSpec::new().with_filtering(true);
        let mut ctx = Workdir::new("/work", BrokenSink);
        assert!(spec.serialize(&mut ctx).is_err());
    }

    #[test]
    fn test_filtering_warning_text() {
        assert!(ResourceSpec::new().filtering_warning().is_none());
        let warning = ResourceSpec::new()
            .with_filtering(true)
            .filtering_warning()
            .unwrap();
        assert!(warning.lines().count() > 1);
        assert!(warning.contains("not supported"));
    }
}
