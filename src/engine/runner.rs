//! engine::runner
//!
//! The single entry point for a version bump.
//!
//! # Lifecycle
//!
//! ```text
//! ResolveTarget -> ReadAndNormalize -> ExtractAndBumpVersion -> Substitute -> PersistOutputs
//! ```
//!
//! [`plan_bump`] runs the first four states and touches nothing on disk.
//! [`run_bump`] adds PersistOutputs and talks to the pipeline: on success
//! the new version is reported as the `version` output, on failure the
//! error message is reported once and returned.
//!
//! # Invariants
//!
//! - The header is replaced by byte span, never by searching for its text
//! - The manifest is never written
//! - A failed run never reports a version
//! - Nothing is written before the new version has been computed

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use super::Context;
use crate::core::config::Config;
use crate::core::content::{read_normalized, write_text, ContentError};
use crate::core::header::{extract_header, Dialect, HeaderError};
use crate::core::manifest::{companion_manifest_path, read_manifest_version, ManifestError};
use crate::core::record::{decode, MetadataRecord};
use crate::core::target::Target;
use crate::core::version::{bump_header_version, increment_version, VersionError};
use crate::pipeline::{Pipeline, PipelineError, INDEX_FILE_INPUT, VERSION_OUTPUT};
use crate::ui::output;

/// Errors from a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("cannot extract header from '{path}': {source}")]
    Header { path: PathBuf, source: HeaderError },

    #[error("cannot bump version from '{path}': {source}")]
    Version { path: PathBuf, source: VersionError },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Orchestrator states, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    ResolveTarget,
    ReadAndNormalize,
    ExtractAndBumpVersion,
    Substitute,
    PersistOutputs,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunState::ResolveTarget => "resolve-target",
            RunState::ReadAndNormalize => "read-and-normalize",
            RunState::ExtractAndBumpVersion => "extract-and-bump-version",
            RunState::Substitute => "substitute",
            RunState::PersistOutputs => "persist-outputs",
        };
        write!(f, "{}", name)
    }
}

/// What the caller asked for. Unset fields fall back to the pipeline input
/// and then to the config file.
#[derive(Debug, Clone, Default)]
pub struct BumpRequest {
    /// Index file given on the command line.
    pub index_file: Option<String>,
    /// Metadata output path given on the command line.
    pub metadata_file: Option<String>,
    /// Compute everything but write nothing and report nothing.
    pub dry_run: bool,
}

/// Everything a bump would do, computed without side effects.
#[derive(Debug, Clone)]
pub struct BumpPlan {
    /// The resolved target.
    pub target: Target,
    /// Where the version was read from.
    pub source_path: PathBuf,
    /// Version found in the file.
    pub previous_version: String,
    /// Incremented version.
    pub version: String,
    /// Header dialect; `None` in manifest mode.
    pub dialect: Option<Dialect>,
    /// Rewritten file content; `None` in manifest mode (nothing to rewrite).
    pub new_content: Option<String>,
    /// Metadata derived from the bumped header, with `is_plugin` set.
    pub record: MetadataRecord,
    /// Where the metadata is written.
    pub metadata_path: PathBuf,
}

/// Result of a completed bump.
#[derive(Debug, Clone)]
pub struct BumpOutcome {
    /// The incremented version.
    pub version: String,
    /// The version before the bump.
    pub previous_version: String,
    /// The metadata that was (or would be) written.
    pub record: MetadataRecord,
    /// Files written, in write order. Empty on a dry run.
    pub written: Vec<PathBuf>,
}

/// Pick the index file: command line, then pipeline input, then config.
fn resolve_target(
    request: &BumpRequest,
    config: &Config,
    pipeline: &dyn Pipeline,
) -> Result<Target, RunError> {
    let input = match &request.index_file {
        Some(flag) => Some(flag.clone()),
        None => pipeline
            .input(INDEX_FILE_INPUT)?
            .or_else(|| config.index_file().map(str::to_string)),
    };
    Ok(Target::resolve(input.as_deref()))
}

/// Run every state except PersistOutputs.
pub fn plan_bump(
    ctx: &Context,
    config: &Config,
    request: &BumpRequest,
    pipeline: &dyn Pipeline,
) -> Result<BumpPlan, RunError> {
    debug!(state = %RunState::ResolveTarget, "entering state");
    let target = resolve_target(request, config, pipeline)?;
    let metadata_file = request
        .metadata_file
        .as_deref()
        .unwrap_or_else(|| config.metadata_file());
    let metadata_path = ctx.resolve(metadata_file);
    info!(index = %target, manifest = target.is_manifest(), "resolved target");

    if target.is_manifest() {
        return plan_manifest(ctx, target, metadata_path);
    }

    let source_path = ctx.resolve(target.path());
    output::print(format!("Reading file: {}", target), ctx.verbosity());

    debug!(state = %RunState::ReadAndNormalize, path = %source_path.display(), "entering state");
    let content = read_normalized(&source_path)?;

    debug!(state = %RunState::ExtractAndBumpVersion, "entering state");
    let header = extract_header(&content).map_err(|source| RunError::Header {
        path: source_path.clone(),
        source,
    })?;
    let bump = bump_header_version(header.text()).map_err(|source| RunError::Version {
        path: source_path.clone(),
        source,
    })?;
    debug!(dialect = %header.dialect(), from = %bump.previous, to = %bump.next, "bumped version");

    debug!(state = %RunState::Substitute, "entering state");
    let bumped = header.with_text(bump.text);
    let new_content = header.splice_into(&content, bumped.text());

    let mut record = decode(bumped.text(), bumped.dialect());
    record.set_is_plugin(target.is_plugin());

    Ok(BumpPlan {
        target,
        source_path,
        previous_version: bump.previous,
        version: bump.next,
        dialect: Some(bumped.dialect()),
        new_content: Some(new_content),
        record,
        metadata_path,
    })
}

/// Manifest mode: read and increment the manifest version, rewrite nothing.
fn plan_manifest(
    ctx: &Context,
    target: Target,
    metadata_path: PathBuf,
) -> Result<BumpPlan, RunError> {
    let source_path = ctx.resolve(companion_manifest_path(target.as_str()));
    output::print(
        format!("Reading manifest: {}", source_path.display()),
        ctx.verbosity(),
    );

    debug!(state = %RunState::ReadAndNormalize, path = %source_path.display(), "entering state");
    let previous_version = read_manifest_version(&source_path)?;

    debug!(state = %RunState::ExtractAndBumpVersion, "entering state");
    let version = increment_version(&previous_version).map_err(|source| RunError::Version {
        path: source_path.clone(),
        source,
    })?;

    let mut record = MetadataRecord::new();
    record.insert("version", version.clone());
    record.set_is_plugin(target.is_plugin());

    Ok(BumpPlan {
        target,
        source_path,
        previous_version,
        version,
        dialect: None,
        new_content: None,
        record,
        metadata_path,
    })
}

/// Write the planned files, in order: source file, then metadata.
fn persist(ctx: &Context, plan: &BumpPlan) -> Result<Vec<PathBuf>, RunError> {
    debug!(state = %RunState::PersistOutputs, "entering state");
    let mut written = Vec::with_capacity(2);

    if let Some(content) = &plan.new_content {
        write_text(&plan.source_path, content)?;
        output::success(format!("Updated {}", plan.target), ctx.verbosity());
        written.push(plan.source_path.clone());
    }

    let json = plan.record.to_json_pretty()?;
    write_text(&plan.metadata_path, &json)?;
    output::success(
        format!("Generated {}", plan.metadata_path.display()),
        ctx.verbosity(),
    );
    written.push(plan.metadata_path.clone());

    Ok(written)
}

fn execute(
    ctx: &Context,
    config: &Config,
    request: &BumpRequest,
    pipeline: &dyn Pipeline,
) -> Result<BumpOutcome, RunError> {
    let plan = plan_bump(ctx, config, request, pipeline)?;
    output::print(format!("New version: {}", plan.version), ctx.verbosity());

    let written = if request.dry_run {
        info!("dry run, nothing written");
        Vec::new()
    } else {
        let written = persist(ctx, &plan)?;
        pipeline.set_output(VERSION_OUTPUT, &plan.version)?;
        written
    };

    Ok(BumpOutcome {
        version: plan.version,
        previous_version: plan.previous_version,
        record: plan.record,
        written,
    })
}

/// Run a full bump and report the result to the pipeline.
///
/// # Errors
///
/// Any failure is reported once through [`Pipeline::set_failed`] and then
/// returned. If reporting itself fails, the original error is still the
/// one returned.
pub fn run_bump(
    ctx: &Context,
    config: &Config,
    request: &BumpRequest,
    pipeline: &dyn Pipeline,
) -> Result<BumpOutcome, RunError> {
    match execute(ctx, config, request, pipeline) {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            if let Err(report_err) = pipeline.set_failed(&err.to_string()) {
                tracing::warn!(error = %report_err, "failed to report failure to pipeline");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::MemoryPipeline;
    use std::fs;
    use tempfile::TempDir;

    fn quiet_ctx(dir: &TempDir) -> Context {
        Context {
            cwd: Some(dir.path().to_path_buf()),
            quiet: true,
            debug: false,
        }
    }

    fn request(index: Option<&str>) -> BumpRequest {
        BumpRequest {
            index_file: index.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn php_plugin_end_to_end() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("plugin.php"),
            "<?php\n/**\n* Version: 1.0.0\n* Author: Jane\n*/\n// code",
        )
        .unwrap();
        let pipeline = MemoryPipeline::new();

        let outcome = run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &request(Some("plugin.php")),
            &pipeline,
        )
        .unwrap();

        assert_eq!(outcome.version, "1.0.1");
        assert_eq!(outcome.previous_version, "1.0.0");
        assert_eq!(
            fs::read_to_string(dir.path().join("plugin.php")).unwrap(),
            "<?php\n/**\n* Version: 1.0.1\n* Author: Jane\n*/\n// code"
        );
        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("metadata.json")).unwrap())
                .unwrap();
        assert_eq!(
            meta,
            serde_json::json!({"version": "1.0.1", "author": "Jane", "is_plugin": true})
        );
        assert_eq!(pipeline.output("version").as_deref(), Some("1.0.1"));
        assert!(pipeline.failures().is_empty());
    }

    #[test]
    fn default_target_is_style_css() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("style.css"),
            "/*\nTheme Name: Twenty\nVersion: 2.3\n*/\nbody {}\n",
        )
        .unwrap();
        let pipeline = MemoryPipeline::new();

        let outcome =
            run_bump(&quiet_ctx(&dir), &Config::default(), &request(None), &pipeline).unwrap();

        assert_eq!(outcome.version, "2.4");
        assert_eq!(outcome.record.is_plugin(), Some(false));
        assert_eq!(
            fs::read_to_string(dir.path().join("style.css")).unwrap(),
            "/*\nTheme Name: Twenty\nVersion: 2.4\n*/\nbody {}\n"
        );
    }

    #[test]
    fn pipeline_input_used_when_no_flag() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("p.php"), "<?php\n/**\n* Version: 4\n*/").unwrap();
        let pipeline = MemoryPipeline::new().with_input("indexFile", "p.php");

        let outcome =
            run_bump(&quiet_ctx(&dir), &Config::default(), &request(None), &pipeline).unwrap();
        assert_eq!(outcome.version, "5");
        assert_eq!(outcome.record.is_plugin(), Some(true));
    }

    #[test]
    fn flag_overrides_pipeline_input() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.php"), "<?php\n/**\n* Version: 1\n*/").unwrap();
        let pipeline = MemoryPipeline::new().with_input("indexFile", "missing.php");

        let outcome = run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &request(Some("a.php")),
            &pipeline,
        )
        .unwrap();
        assert_eq!(outcome.version, "2");
    }

    #[test]
    fn manifest_mode_does_not_rewrite_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = r#"{"name":"demo","version":"3.2.0"}"#;
        fs::write(dir.path().join("package.json"), manifest).unwrap();
        let pipeline = MemoryPipeline::new();

        let outcome = run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &request(Some("./package.json")),
            &pipeline,
        )
        .unwrap();

        assert_eq!(outcome.version, "3.2.1");
        assert_eq!(pipeline.output("version").as_deref(), Some("3.2.1"));
        assert_eq!(
            fs::read_to_string(dir.path().join("package.json")).unwrap(),
            manifest
        );
        assert_eq!(outcome.written, vec![dir.path().join("metadata.json")]);
    }

    #[test]
    fn missing_version_line_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let original = "<?php\n/**\n* Plugin Name: Demo\n*/\n";
        fs::write(dir.path().join("p.php"), original).unwrap();
        let pipeline = MemoryPipeline::new();

        let err = run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &request(Some("p.php")),
            &pipeline,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            RunError::Version {
                source: VersionError::NotFound,
                ..
            }
        ));
        assert_eq!(fs::read_to_string(dir.path().join("p.php")).unwrap(), original);
        assert!(!dir.path().join("metadata.json").exists());
        assert_eq!(pipeline.failures().len(), 1);
        assert!(pipeline.output("version").is_none());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let pipeline = MemoryPipeline::new();

        let err = run_bump(&quiet_ctx(&dir), &Config::default(), &request(None), &pipeline)
            .unwrap_err();
        assert!(matches!(err, RunError::Content(ContentError::Unreadable { .. })));
        assert!(pipeline.failures()[0].contains("style.css"));
    }

    #[test]
    fn header_not_at_start_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("style.css"), "body {}\n/*\nVersion: 1\n*/").unwrap();

        let err = run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &request(None),
            &MemoryPipeline::new(),
        )
        .unwrap_err();
        assert!(matches!(err, RunError::Header { .. }));
        assert!(err.to_string().contains("style.css"));
    }

    #[test]
    fn dry_run_writes_and_reports_nothing() {
        let dir = TempDir::new().unwrap();
        let original = "/*\nVersion: 1.0\n*/\n";
        fs::write(dir.path().join("style.css"), original).unwrap();
        let pipeline = MemoryPipeline::new();

        let outcome = run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &BumpRequest {
                dry_run: true,
                ..Default::default()
            },
            &pipeline,
        )
        .unwrap();

        assert_eq!(outcome.version, "1.1");
        assert!(outcome.written.is_empty());
        assert_eq!(fs::read_to_string(dir.path().join("style.css")).unwrap(), original);
        assert!(!dir.path().join("metadata.json").exists());
        assert!(pipeline.outputs().is_empty());
    }

    #[test]
    fn crlf_is_normalized_on_rewrite() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("style.css"),
            "/*\r\nVersion: 1\r\n*/\r\nbody {}\r\n",
        )
        .unwrap();

        run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &request(None),
            &MemoryPipeline::new(),
        )
        .unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("style.css")).unwrap(),
            "/*\nVersion: 2\n*/\nbody {}\n"
        );
    }

    #[test]
    fn recurring_header_text_only_replaced_at_start() {
        let dir = TempDir::new().unwrap();
        let header = "/*\nVersion: 1\n*/";
        fs::write(
            dir.path().join("style.css"),
            format!("{}\n{}\n", header, header),
        )
        .unwrap();

        run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &request(None),
            &MemoryPipeline::new(),
        )
        .unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("style.css")).unwrap(),
            "/*\nVersion: 2\n*/\n/*\nVersion: 1\n*/\n"
        );
    }

    #[test]
    fn metadata_write_failure_keeps_source_and_reports_once() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("p.php"), "<?php\n/**\n* Version: 1.0.0\n*/\n").unwrap();
        let pipeline = MemoryPipeline::new();

        let err = run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &BumpRequest {
                index_file: Some("p.php".into()),
                metadata_file: Some("missing-dir/meta.json".into()),
                dry_run: false,
            },
            &pipeline,
        )
        .unwrap_err();

        assert!(matches!(err, RunError::Content(ContentError::Unwritable { .. })));
        // no rollback: the source rewrite stays
        assert_eq!(
            fs::read_to_string(dir.path().join("p.php")).unwrap(),
            "<?php\n/**\n* Version: 1.0.1\n*/\n"
        );
        assert!(!dir.path().join("missing-dir").exists());
        assert_eq!(pipeline.failures().len(), 1);
        assert!(pipeline.failures()[0].contains("meta.json"));
        assert!(pipeline.outputs().is_empty());
    }

    #[test]
    fn metadata_path_from_request() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("style.css"), "/*\nVersion: 1\n*/").unwrap();

        let outcome = run_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &BumpRequest {
                metadata_file: Some("meta.json".into()),
                ..Default::default()
            },
            &MemoryPipeline::new(),
        )
        .unwrap();
        assert!(dir.path().join("meta.json").exists());
        assert_eq!(outcome.written.last(), Some(&dir.path().join("meta.json")));
    }

    #[test]
    fn plan_touches_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("style.css"), "/*!\nVersion: 0.9\n*/").unwrap();

        let plan = plan_bump(
            &quiet_ctx(&dir),
            &Config::default(),
            &request(None),
            &MemoryPipeline::new(),
        )
        .unwrap();
        assert_eq!(plan.version, "0.10");
        assert_eq!(plan.dialect, Some(Dialect::Block));
        assert_eq!(plan.new_content.as_deref(), Some("/*!\nVersion: 0.10\n*/"));
        assert!(!dir.path().join("metadata.json").exists());
    }

    #[test]
    fn state_names() {
        assert_eq!(RunState::ResolveTarget.to_string(), "resolve-target");
        assert_eq!(RunState::PersistOutputs.to_string(), "persist-outputs");
    }
}
