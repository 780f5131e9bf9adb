//! # Content Loader
//!
//! Walks a content tree laid out as `<content_dir>/<collection>/**/<file>`,
//! validates every file through the schema registry, and assembles the
//! results into a [`LoadReport`].
//!
//! - Sub-directories that do not name a collection are skipped with a warning.
//! - Files and directories whose name starts with `_` or `.` are skipped,
//!   so drafts and partials can live next to published content.
//! - Files whose extension is not configured are skipped.
//! - A file that cannot be read, fails validation, or reuses an id is
//!   recorded as a [`RecordFailure`]; loading continues with the next file.
//!
//! Once every file is processed, the reference check runs over the full
//! set (unless disabled in [`ContentConfig`]).

use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::{DirEntry, WalkDir};

use dubai_core::Collection;
use dubai_schema::SchemaRegistry;

use crate::config::ContentConfig;
use crate::document::read_document;
use crate::error::{ContentError, RecordError};
use crate::integrity::{check_references, DanglingReference};
use crate::set::{ContentSet, LoadedRecord};

/// A content file that did not make it into the set.
#[derive(Debug)]
pub struct RecordFailure {
    pub path: PathBuf,
    pub collection: Collection,
    pub error: RecordError,
}

/// Outcome of loading a content tree.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Every record that validated.
    pub set: ContentSet,
    /// Every file that failed, in walk order.
    pub failures: Vec<RecordFailure>,
    /// Every dangling cross-collection reference. Empty when the check is disabled.
    pub dangling: Vec<DanglingReference>,
}

impl LoadReport {
    /// True when every file validated and every reference resolved.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.dangling.is_empty()
    }

    /// Total number of problems found.
    pub fn problem_count(&self) -> usize {
        self.failures.len() + self.dangling.len()
    }
}

/// Loads and validates a content tree.
#[derive(Debug)]
pub struct ContentLoader<'a> {
    registry: &'a SchemaRegistry,
    config: ContentConfig,
}

impl<'a> ContentLoader<'a> {
    pub fn new(registry: &'a SchemaRegistry, config: ContentConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Load every collection under the configured content directory.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::MissingContentDir` if the content directory
    /// does not exist and `ContentError::Io` if it cannot be listed.
    /// Problems with individual files are reported in the [`LoadReport`].
    pub fn load(&self) -> Result<LoadReport, ContentError> {
        let root = &self.config.content_dir;
        if !root.is_dir() {
            return Err(ContentError::MissingContentDir { path: root.clone() });
        }

        let mut report = LoadReport::default();
        for (collection, dir) in self.collection_dirs(root)? {
            self.load_collection(collection, &dir, &mut report);
            tracing::info!(
                collection = %collection,
                records = report.set.count(collection),
                "loaded collection"
            );
        }

        if self.config.check_references {
            report.dangling = check_references(&report.set);
            for dangling in &report.dangling {
                tracing::warn!("dangling reference: {dangling}");
            }
        } else {
            tracing::debug!("reference check disabled");
        }

        Ok(report)
    }

    /// Validate a single raw record and add it to `set`.
    pub fn add_record(
        &self,
        set: &mut ContentSet,
        collection: Collection,
        path: &Path,
        raw: &Value,
    ) -> Result<(), RecordError> {
        let record = self.registry.validate_collection(collection, raw)?;
        set.insert(LoadedRecord {
            path: path.to_path_buf(),
            record,
        })
    }

    /// Top-level collection directories, sorted by collection.
    fn collection_dirs(&self, root: &Path) -> Result<Vec<(Collection, PathBuf)>, ContentError> {
        let entries = std::fs::read_dir(root).map_err(|source| ContentError::Io {
            path: root.to_path_buf(),
            source,
        })?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ContentError::Io {
                path: root.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !path.is_dir() {
                tracing::debug!(path = %path.display(), "skipping file outside collection directories");
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if is_ignored_name(name) {
                continue;
            }
            match name.parse::<Collection>() {
                Ok(collection) => dirs.push((collection, path)),
                Err(_) => {
                    tracing::warn!(dir = %path.display(), "skipping directory that is not a collection");
                }
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    fn load_collection(&self, collection: Collection, dir: &Path, report: &mut LoadReport) {
        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(dir).to_path_buf();
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                    report.failures.push(RecordFailure {
                        path: path.clone(),
                        collection,
                        error: RecordError::Read(ContentError::Io { path, source }),
                    });
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.config.accepts(entry.path()) {
                continue;
            }

            let path = entry.path();
            tracing::debug!(collection = %collection, path = %path.display(), "validating");
            let outcome = read_document(path)
                .map_err(RecordError::from)
                .and_then(|raw| self.add_record(&mut report.set, collection, path, &raw));

            if let Err(error) = outcome {
                tracing::warn!(path = %path.display(), "{error}");
                report.failures.push(RecordFailure {
                    path: path.to_path_buf(),
                    collection,
                    error,
                });
            }
        }
    }
}

fn is_ignored_name(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('.')
}

fn is_ignored(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(is_ignored_name)
}
