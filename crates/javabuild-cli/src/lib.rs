//! # javabuild-cli
//!
//! Command-line front end for the javabuild recipe generator.
//!
//! This crate provides:
//! - TOML declaration of resource sets ([`config`])
//! - Rendering of the `JAVA_RESOURCE_DIRS` / `JAVA_TEST_RESOURCE_DIRS`
//!   recipe variables ([`commands`])
//! - Argument parsing ([`cli`]) and logging setup ([`logging`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
