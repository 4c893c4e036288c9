//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use javabuild_core::ResourceAction;

/// javabuild - packaging recipe generator
#[derive(Parser, Debug)]
#[command(name = "javabuild")]
#[command(author, version, about = "Render resource directories for packaging recipes", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resource directory variables for every declared resource set
    Resources {
        /// Resource declaration file (TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Working directory, overriding the file's `workdir`
        #[arg(short, long)]
        workdir: Option<PathBuf>,
    },

    /// Print the serialized form of a single resource set
    Resource(ResourceArgs),
}

/// Arguments describing one resource set.
#[derive(Args, Debug, Clone)]
pub struct ResourceArgs {
    /// Origin directory (relative paths resolve against the working directory)
    #[arg(long)]
    pub origin: PathBuf,

    /// Target directory under the compiled output tree
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// File name or wildcard pattern (repeatable)
    #[arg(long = "file", value_name = "ENTRY")]
    pub files: Vec<String>,

    /// Whether the listed files are included or excluded
    #[arg(long, default_value = "include")]
    pub action: ResourceAction,

    /// The build requested filtering (reported, never performed)
    #[arg(long)]
    pub filtering: bool,

    /// Working directory that the origin is expressed relative to
    #[arg(short, long, default_value = ".")]
    pub workdir: PathBuf,
}
