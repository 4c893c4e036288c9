//! javabuild Core — resource set model, recipe serialization, and path utilities.
//!
//! This crate provides the types the recipe generator uses to describe
//! resource directories. It has no internal javabuild dependencies
//! (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types, resource rejection reasons, and Result alias
//! - [`context`]: Working directory and diagnostic sink collaborator
//! - [`resource`]: Resource sets and their serialized recipe form
//! - [`util`]: Path utilities

#![doc = include_str!("../README.md")]

pub mod context;
pub mod error;
pub mod resource;
pub mod util;

// Re-export key types at crate root for convenience
pub use context::{OutputContext, Workdir};
pub use error::{Error, ResourceError, Result};
pub use resource::{ResourceAction, ResourceDirs, ResourceScope, ResourceSpec};

// Convenience re-exports from util
pub use util::paths::{has_wildcard, relativize};
