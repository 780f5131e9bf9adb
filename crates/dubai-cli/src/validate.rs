//! # Validate Subcommand
//!
//! Loads the content tree, validates every file against its collection's
//! schema, checks cross-collection references, and prints a report.
//!
//! Exit codes: 0 when every record is valid and every reference resolves,
//! 1 when any problem is found. Operational errors (missing content
//! directory, unreadable config) surface as `Err` and also exit 1.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{json, Value};

use dubai_content::{ContentConfig, ContentLoader, LoadReport, RecordError};
use dubai_core::Collection;
use dubai_schema::SchemaRegistry;

/// Arguments for the `dubai validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Content root holding one directory per collection. Overrides the config file.
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Skip the developer reference check.
    #[arg(long)]
    pub skip_references: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: ContentConfig) -> ContentConfig {
        if let Some(dir) = &self.content_dir {
            config = config.with_content_dir(dir);
        }
        if self.skip_references {
            config = config.with_reference_check(false);
        }
        config
    }
}

/// Execute the validate subcommand.
pub fn run_validate(
    args: &ValidateArgs,
    config: ContentConfig,
    registry: &SchemaRegistry,
) -> Result<u8> {
    let config = args.apply(config);
    let root = config.content_dir.clone();
    tracing::info!(content_dir = %root.display(), "validating content");

    let report = ContentLoader::new(registry, config)
        .load()
        .context("failed to load content")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render_json(&report, &root))?);
    } else {
        print!("{}", render_text(&report, &root));
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// Human-readable report.
pub fn render_text(report: &LoadReport, root: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Content: {} record(s)", report.set.len());
    for collection in Collection::all() {
        let _ = writeln!(out, "  {:<18} {}", collection.as_str(), report.set.count(*collection));
    }

    for failure in &report.failures {
        let _ = writeln!(
            out,
            "  FAIL: {} [{}]",
            relative(&failure.path, root).display(),
            failure.collection
        );
        for line in failure.error.to_string().lines() {
            let _ = writeln!(out, "    {}", line.trim_start());
        }
    }
    for dangling in &report.dangling {
        let _ = writeln!(
            out,
            "  DANGLING: {} {} {:?} does not match any {} id",
            relative(&dangling.path, root).display(),
            dangling.field,
            dangling.target_id.as_str(),
            dangling.target_collection,
        );
    }

    if report.is_clean() {
        let _ = writeln!(out, "\nAll content valid.");
    } else {
        let _ = writeln!(
            out,
            "\n{} problem(s): {} invalid file(s), {} dangling reference(s).",
            report.problem_count(),
            report.failures.len(),
            report.dangling.len()
        );
    }
    out
}

/// Machine-readable report.
pub fn render_json(report: &LoadReport, root: &Path) -> Value {
    let records: serde_json::Map<String, Value> = Collection::all()
        .iter()
        .map(|c| (c.as_str().to_string(), json!(report.set.count(*c))))
        .collect();

    let failures: Vec<Value> = report
        .failures
        .iter()
        .map(|failure| {
            let mut entry = json!({
                "path": relative(&failure.path, root),
                "collection": failure.collection,
                "error": failure.error.to_string(),
            });
            if let RecordError::Invalid(e) = &failure.error {
                if let Some(violations) = e.violations() {
                    entry["violations"] = json!(violations);
                }
            }
            entry
        })
        .collect();

    let dangling: Vec<Value> = report
        .dangling
        .iter()
        .map(|d| {
            json!({
                "path": relative(&d.path, root),
                "collection": d.collection,
                "record_id": d.record_id,
                "field": d.field,
                "target_collection": d.target_collection,
                "target_id": d.target_id,
            })
        })
        .collect();

    json!({
        "clean": report.is_clean(),
        "records": records,
        "failures": failures,
        "dangling": dangling,
    })
}
