//! Working directory and diagnostic output collaborator.
//!
//! Resource sets are rendered relative to the project working directory,
//! and the few diagnostics they produce (currently only the unsupported
//! filtering warning) go to a text sink owned by the caller.
//! [`OutputContext`] bundles the two; [`Workdir`] is the standard
//! implementation.
//!
//! Access to the sink goes through `&mut`, so a batch of resource sets
//! rendered against one context writes its diagnostics strictly in order.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Root path and diagnostic sink used while serializing resource sets.
pub trait OutputContext {
    /// Directory that origin paths are made relative to.
    fn workdir(&self) -> &Path;

    /// Sink for human-readable diagnostics.
    fn diagnostics(&mut self) -> &mut dyn Write;
}

/// An [`OutputContext`] over a fixed root path and an owned writer.
#[derive(Debug)]
pub struct Workdir<W> {
    root: PathBuf,
    sink: W,
}

impl<W: Write> Workdir<W> {
    /// Create a context rooted at `root` that writes diagnostics to `sink`.
    pub fn new(root: impl Into<PathBuf>, sink: W) -> Self {
        Self {
            root: root.into(),
            sink,
        }
    }

    /// Borrow the diagnostic sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the context, returning the diagnostic sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl Workdir<io::Stderr> {
    /// Create a context that writes diagnostics to standard error.
    pub fn stderr(root: impl Into<PathBuf>) -> Self {
        Self::new(root, io::stderr())
    }
}

impl<W: Write> OutputContext for Workdir<W> {
    fn workdir(&self) -> &Path {
        &self.root
    }

    fn diagnostics(&mut self) -> &mut dyn Write {
        &mut self.sink
    }
}
