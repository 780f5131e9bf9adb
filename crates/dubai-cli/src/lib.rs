//! # dubai-cli: Build-Time CLI for the Content Schemas
//!
//! Provides the `dubai` command-line interface run by the site build
//! before pages are generated.
//!
//! ## Subcommands
//!
//! - `dubai validate`: Load and validate every content file, then check
//!   cross-collection references. Exits non-zero on any problem.
//! - `dubai collections`: List the registered collection names.
//! - `dubai schema <collection>`: Print a collection's JSON Schema.
//!
//! ```bash
//! dubai validate
//! dubai validate --content-dir site/src/content --json
//! dubai --config dubai.yaml validate --skip-references
//! dubai schema developer_reports > developer_reports.schema.json
//! ```

pub mod collections;
pub mod schema;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use dubai_content::ContentConfig;

/// Load the loader configuration from `path`, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<ContentConfig> {
    match path {
        Some(path) => ContentConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ContentConfig::default()),
    }
}
