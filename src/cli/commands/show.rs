//! show command - Print the current and next version without writing

use crate::core::config::Config;
use crate::core::record::encode;
use crate::engine::{runner, BumpPlan, BumpRequest, Context};
use crate::pipeline;
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Show what a bump would produce.
pub fn show(ctx: &Context, index_file: Option<String>, header: bool) -> Result<()> {
    let config = Config::load(&ctx.root()).context("Failed to load config")?;
    let pipeline = pipeline::detect();

    let request = BumpRequest {
        index_file,
        ..Default::default()
    };
    // show is read-only, so keep progress lines out of the way
    let quiet_ctx = Context {
        quiet: true,
        ..ctx.clone()
    };
    let plan = runner::plan_bump(&quiet_ctx, &config, &request, &*pipeline)
        .context("Failed to read version")?;

    println!("{}", render(&plan, header)?);
    Ok(())
}

/// Render a plan for display.
fn render(plan: &BumpPlan, header: bool) -> Result<String> {
    if header {
        let Some(dialect) = plan.dialect else {
            bail!("{} is a manifest and has no header comment", plan.target);
        };
        return Ok(encode(&plan.record, dialect));
    }

    let summary = output::format_fields(
        &[
            ("file", plan.source_path.display().to_string()),
            ("current", plan.previous_version.clone()),
            ("next", plan.version.clone()),
        ],
        "",
    );
    let json = plan
        .record
        .to_json_pretty()
        .context("Failed to serialize metadata")?;
    Ok(format!("{}\n{}", summary, json))
}
