//! Generic path utilities.
//!
//! Helpers shared by the resource model and the configuration loader:
//! expressing one path relative to another, checking that a directory has
//! content, expanding `~` in user-supplied paths, and recognizing wildcard
//! file patterns.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Characters that mark a resource file entry as a pattern rather than a
/// literal file name.
pub const WILDCARD_CHARS: [char; 2] = ['*', '?'];

/// Express `path` relative to `base`.
///
/// Both paths are first made absolute against the current directory and
/// normalized (`.` dropped, `..` folded into its parent). Symlinks are not
/// followed. The result climbs out of `base` with `..` components as
/// needed; `path == base` yields an empty path.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use javabuild_core::util::paths::relativize;
///
/// assert_eq!(
///     relativize(Path::new("/work"), Path::new("/work/src/main/resources")),
///     PathBuf::from("src/main/resources")
/// );
/// assert_eq!(
///     relativize(Path::new("/work/app"), Path::new("/work/shared/res")),
///     PathBuf::from("../shared/res")
/// );
/// assert_eq!(
///     relativize(Path::new("/work/app/.."), Path::new("/work/res")),
///     PathBuf::from("res")
/// );
/// ```
pub fn relativize(base: &Path, path: &Path) -> PathBuf {
    let base = resolve(base);
    let path = resolve(path);

    let base_parts: Vec<Component<'_>> = base.components().collect();
    let path_parts: Vec<Component<'_>> = path.components().collect();

    let common = base_parts
        .iter()
        .zip(&path_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in &base_parts[common..] {
        relative.push(Component::ParentDir);
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }
    relative
}

/// Make `path` absolute and normalize it lexically.
///
/// Falls back to the path as given when the current directory is
/// unavailable.
pub fn resolve(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize(&absolute)
}

/// Drop `.` components and fold each `..` into the preceding component.
///
/// A `..` directly under the root stays at the root; leading `..` of a
/// relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Check whether a directory contains at least one entry.
///
/// Returns an error if `path` cannot be listed (including when it does not
/// exist or is not a directory).
pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    let mut entries = fs::read_dir(path)?;
    Ok(entries.next().is_none())
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading tilde are returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Check whether a resource file entry is a wildcard pattern.
///
/// ```
/// use javabuild_core::has_wildcard;
///
/// assert!(has_wildcard("**/*.properties"));
/// assert!(has_wildcard("log?.xml"));
/// assert!(!has_wildcard("log4j.xml"));
/// ```
pub fn has_wildcard(entry: &str) -> bool {
    entry.contains(WILDCARD_CHARS)
}
