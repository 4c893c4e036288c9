//! Utility modules for path handling.
//!
//! # Modules
//!
//! - [`paths`]: Path relativization, directory probing, tilde expansion,
//!   and wildcard detection

pub mod paths;
