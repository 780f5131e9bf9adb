//! # Content Set
//!
//! Validated records grouped by collection and keyed by id. Ids are unique
//! within a collection; the same id may appear in different collections.

use std::collections::BTreeMap;
use std::path::PathBuf;

use dubai_core::{Collection, RecordId};
use dubai_schema::{Developer, DeveloperReport, ValidatedRecord};

use crate::error::RecordError;

/// A validated record and the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecord {
    pub path: PathBuf,
    pub record: ValidatedRecord,
}

/// Every validated record of a content tree.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    collections: BTreeMap<Collection, BTreeMap<RecordId, LoadedRecord>>,
}

impl ContentSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::DuplicateId` if the record's collection already
    /// holds a record with the same id. The set is left unchanged.
    pub fn insert(&mut self, loaded: LoadedRecord) -> Result<(), RecordError> {
        let collection = loaded.record.collection();
        let id = loaded.record.id().clone();
        let records = self.collections.entry(collection).or_default();
        if let Some(existing) = records.get(&id) {
            return Err(RecordError::DuplicateId {
                id,
                first: existing.path.clone(),
            });
        }
        records.insert(id, loaded);
        Ok(())
    }

    /// Look a record up by collection and id.
    pub fn get(&self, collection: Collection, id: &RecordId) -> Option<&LoadedRecord> {
        self.collections.get(&collection)?.get(id)
    }

    pub fn contains(&self, collection: Collection, id: &RecordId) -> bool {
        self.get(collection, id).is_some()
    }

    /// Records of one collection, ordered by id.
    pub fn records(&self, collection: Collection) -> impl Iterator<Item = &LoadedRecord> {
        self.collections
            .get(&collection)
            .into_iter()
            .flat_map(|records| records.values())
    }

    /// Every record, ordered by collection then id.
    pub fn iter(&self) -> impl Iterator<Item = &LoadedRecord> {
        self.collections.values().flat_map(|records| records.values())
    }

    /// Number of records in one collection.
    pub fn count(&self, collection: Collection) -> usize {
        self.collections.get(&collection).map_or(0, BTreeMap::len)
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.collections.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn developers(&self) -> impl Iterator<Item = &Developer> {
        self.records(Collection::Developers)
            .filter_map(|loaded| match &loaded.record {
                ValidatedRecord::Developer(dev) => Some(dev),
                _ => None,
            })
    }

    /// Developer reports paired with their source file.
    pub fn developer_reports(&self) -> impl Iterator<Item = (&DeveloperReport, &PathBuf)> {
        self.records(Collection::DeveloperReports)
            .filter_map(|loaded| match &loaded.record {
                ValidatedRecord::DeveloperReport(report) => Some((report, &loaded.path)),
                _ => None,
            })
    }
}
