//! # Collection Names: Single Source of Truth
//!
//! Defines the `Collection` enum naming the six content collections. The
//! wire spelling (`as_str`) is the directory name under the content root
//! and the key the site generator uses to look a schema up.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DubaiError;

/// A named group of content records sharing one schema.
///
/// | Collection | Record kind |
/// |------------|-------------|
/// | `projects` | Off-plan and ready residential projects |
/// | `developers` | Property developers |
/// | `reports` | Market reports (quarterly, annual, special) |
/// | `developer_reports` | Developer credit reports |
/// | `guides` | Buyer guides (tax, legal, visa, finance) |
/// | `policies` | Regulatory policy summaries |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Real-estate projects.
    Projects,
    /// Property developers.
    Developers,
    /// Market reports.
    Reports,
    /// Developer credit reports.
    DeveloperReports,
    /// Buyer guides.
    Guides,
    /// Regulatory policies.
    Policies,
}

/// Number of registered collections.
pub const COLLECTION_COUNT: usize = 6;

impl Collection {
    /// Returns every collection in registration order.
    pub fn all() -> &'static [Collection] {
        &[
            Self::Projects,
            Self::Developers,
            Self::Reports,
            Self::DeveloperReports,
            Self::Guides,
            Self::Policies,
        ]
    }

    /// Returns the collection name as used in content directories.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Developers => "developers",
            Self::Reports => "reports",
            Self::DeveloperReports => "developer_reports",
            Self::Guides => "guides",
            Self::Policies => "policies",
        }
    }

    fn names() -> Vec<&'static str> {
        Self::all().iter().map(Collection::as_str).collect()
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = DubaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DubaiError::unknown_variant("collection", s, &Self::names()))
    }
}
