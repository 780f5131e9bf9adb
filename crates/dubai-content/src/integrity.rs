//! # Cross-Collection Integrity
//!
//! A developer report's `developer_id` must name a record in the
//! `developers` collection. The per-record validator cannot see other
//! collections, so this check runs once over the complete content set.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use dubai_core::{Collection, RecordId};

use crate::set::ContentSet;

/// A reference field naming a record that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Collection of the referring record.
    pub collection: Collection,
    /// Id of the referring record.
    pub record_id: RecordId,
    /// File of the referring record.
    pub path: PathBuf,
    /// Name of the reference field.
    pub field: &'static str,
    /// Collection the field points into.
    pub target_collection: Collection,
    /// The id that was not found.
    pub target_id: RecordId,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}): {} {:?} does not match any {} id",
            self.collection,
            self.record_id,
            self.path.display(),
            self.field,
            self.target_id.as_str(),
            self.target_collection,
        )
    }
}

/// Find every reference in `set` whose target is missing.
pub fn check_references(set: &ContentSet) -> Vec<DanglingReference> {
    set.developer_reports()
        .filter(|(report, _)| !set.contains(Collection::Developers, &report.developer_id))
        .map(|(report, path)| DanglingReference {
            collection: Collection::DeveloperReports,
            record_id: report.id.clone(),
            path: path.clone(),
            field: "developer_id",
            target_collection: Collection::Developers,
            target_id: report.developer_id.clone(),
        })
        .collect()
}
