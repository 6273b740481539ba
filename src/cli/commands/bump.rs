//! bump command - Increment the header version and write metadata

use crate::cli::Reported;
use crate::core::config::Config;
use crate::engine::{runner, BumpRequest, Context};
use crate::pipeline::{self, Pipeline};
use crate::ui::output;
use anyhow::Result;

/// Bump the version using the pipeline detected from the environment.
pub fn bump(
    ctx: &Context,
    index_file: Option<String>,
    metadata_file: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let pipeline = pipeline::detect();
    bump_with(ctx, &*pipeline, index_file, metadata_file, dry_run)
}

/// Bump the version, reporting to the given pipeline.
///
/// Failures are reported through the pipeline and returned as [`Reported`].
pub fn bump_with(
    ctx: &Context,
    pipeline: &dyn Pipeline,
    index_file: Option<String>,
    metadata_file: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let config = match Config::load(&ctx.root()) {
        Ok(config) => config,
        Err(err) => {
            let message = err.to_string();
            pipeline.set_failed(&message)?;
            return Err(Reported(message).into());
        }
    };
    if let Some(path) = config.path() {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let request = BumpRequest {
        index_file,
        metadata_file,
        dry_run,
    };

    let outcome = runner::run_bump(ctx, &config, &request, pipeline)
        .map_err(|err| Reported(err.to_string()))?;

    if dry_run {
        output::warn("dry run, no files were written", ctx.verbosity());
    } else {
        output::success(
            format!(
                "Bumped {} -> {}",
                outcome.previous_version, outcome.version
            ),
            ctx.verbosity(),
        );
    }

    Ok(())
}
