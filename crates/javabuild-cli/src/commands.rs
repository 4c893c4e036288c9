//! Handler functions for the CLI subcommands.
//!
//! Each handler has a writer-generic core (`render_*`) used by tests and a
//! thin `cmd_*` wrapper bound to standard output and standard error.

use std::io::{self, Write};
use std::path::Path;

use javabuild_core::{OutputContext, ResourceSpec, Workdir};

use crate::cli::{Command, ResourceArgs};
use crate::config::RecipeConfig;
use crate::error::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Run a parsed subcommand.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Resources { config, workdir } => cmd_resources(&config, workdir.as_deref()),
        Command::Resource(args) => cmd_resource(&args),
    }
}

// ============================================================================
// resources
// ============================================================================

/// Print the recipe variables for every resource set declared in a file.
pub fn cmd_resources(config_path: &Path, workdir: Option<&Path>) -> Result<()> {
    let config = RecipeConfig::load(config_path)?;
    let mut ctx = Workdir::stderr(config.resolve_workdir(workdir));
    let lines = render_recipe_variables(&config, &mut ctx)?;

    let mut stdout = io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// Render the `JAVA_RESOURCE_DIRS` and `JAVA_TEST_RESOURCE_DIRS` lines,
/// omitting a variable whose scope has no usable resource set.
///
/// Filtering warnings go to the context's diagnostic sink, main scope
/// first, then test scope, each in declaration order.
pub fn render_recipe_variables<C>(config: &RecipeConfig, ctx: &mut C) -> Result<Vec<String>>
where
    C: OutputContext + ?Sized,
{
    let (main, test) = config.resource_dirs(ctx.workdir());
    tracing::debug!(
        main = main.len(),
        test = test.len(),
        workdir = %ctx.workdir().display(),
        "Rendering resource directories"
    );

    let mut lines = Vec::with_capacity(2);
    for dirs in [&main, &test] {
        if let Some(line) = dirs.render(&mut *ctx)? {
            lines.push(line);
        }
    }
    Ok(lines)
}

// ============================================================================
// resource
// ============================================================================

/// Print the serialized form of a single resource set.
///
/// Fails with [`Error::AbsentResource`] when the origin is rejected, so the
/// process exits non-zero.
pub fn cmd_resource(args: &ResourceArgs) -> Result<()> {
    let mut ctx = Workdir::stderr(&args.workdir);
    let value = render_resource(args, &mut ctx)?;
    writeln!(io::stdout().lock(), "{value}")?;
    Ok(())
}

/// Build and serialize one resource set from command-line arguments.
pub fn render_resource<C>(args: &ResourceArgs, ctx: &mut C) -> Result<String>
where
    C: OutputContext + ?Sized,
{
    let origin = if args.origin.is_relative() {
        ctx.workdir().join(&args.origin)
    } else {
        args.origin.clone()
    };

    let mut spec = ResourceSpec::new()
        .with_action(args.action)
        .with_filtering(args.filtering);
    if let Err(rejection) = spec.set_origin(&origin) {
        log::warn!("{rejection}");
    }
    if let Some(target) = &args.target {
        spec.set_target(target);
    }
    for rejection in spec.add_files(args.files.iter().cloned()) {
        log::warn!("{rejection}");
    }

    spec.serialize(ctx)?.ok_or(Error::AbsentResource { origin })
}
