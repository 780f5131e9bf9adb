//! # Typed Content Records
//!
//! One struct per collection. Every optional field carries its default
//! through `#[serde(default)]`, so decoding a structurally valid raw record
//! yields a fully populated value. Optional fields without a default are
//! `Option` and are omitted again on serialization, which keeps
//! `validate(serialize(record)) == record`.
//!
//! Keys not declared here are dropped during decoding.

use serde::{Deserialize, Serialize};

use dubai_core::numeric::{serialize_number, serialize_option_number};
use dubai_core::{
    Collection, ContentDate, CredibilityScore, GuideCategory, PolicyAuthority, ProjectStatus,
    PublicationStatus, Quarter, RecordId, ReportType,
};

/// Default `file_format` of a report.
pub const DEFAULT_FILE_FORMAT: &str = "PDF";

fn default_file_format() -> String {
    DEFAULT_FILE_FORMAT.to_string()
}

/// A citation backing a record's claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    /// Absolute URI, checked by the schema's `uri` format.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Free text; not coerced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// One unit configuration offered by a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitType {
    /// e.g. "2-3 Bedroom Apartments".
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#yield: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Map position of a project. Both members are required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A residential project, off-plan or ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub id: RecordId,
    pub developer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    /// Co-branding partner, e.g. an automotive or fashion house.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_partner: Option<String>,
    #[serde(
        default,
        serialize_with = "serialize_option_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub launch_year: Option<f64>,
    #[serde(
        default,
        serialize_with = "serialize_option_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub handover_year: Option<f64>,
    /// Display text, e.g. "4-6%".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_range: Option<String>,
    /// Display text, e.g. "AED 3M-20M+".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(
        default,
        serialize_with = "serialize_option_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub floors: Option<f64>,
    #[serde(default)]
    pub unit_types: Vec<UnitType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub golden_visa_eligible: bool,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<ContentDate>,
}

/// A property developer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub title: String,
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility_score: Option<CredibilityScore>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<ContentDate>,
}

/// A market report. `year` is required for every report type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub id: RecordId,
    #[serde(default)]
    pub report_type: ReportType,
    #[serde(serialize_with = "serialize_number")]
    pub year: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<Quarter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<ContentDate>,
    #[serde(
        default,
        serialize_with = "serialize_option_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_count: Option<f64>,
    #[serde(default = "default_file_format")]
    pub file_format: String,
    #[serde(default)]
    pub status: PublicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<ContentDate>,
}

/// Assessment block of a developer credit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperMetrics {
    pub financial_health: String,
    pub on_time_delivery: String,
    pub quality_assessment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_satisfaction: Option<String>,
    pub risk_profile: String,
}

/// A credit report on one developer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperReport {
    pub title: String,
    pub id: RecordId,
    /// Must name a record in the `developers` collection. Checked by the
    /// content loader's integrity pass, not here.
    pub developer_id: RecordId,
    /// Letter grade, e.g. "AAA" or "BBB".
    pub rating: String,
    /// e.g. "Minimal Risk".
    pub risk_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<ContentDate>,
    #[serde(default)]
    pub status: PublicationStatus,
    pub summary: String,
    pub metrics: DeveloperMetrics,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<ContentDate>,
}

/// A buyer guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub title: String,
    pub id: RecordId,
    #[serde(default)]
    pub category: GuideCategory,
    #[serde(default)]
    pub status: PublicationStatus,
    pub summary: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<ContentDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<ContentDate>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// A regulatory policy summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub title: String,
    pub id: RecordId,
    #[serde(default)]
    pub authority: PolicyAuthority,
    /// e.g. "Dubai Land Department (DLD) Regulations".
    pub section: String,
    pub summary: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    /// e.g. "Updated January 2026".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_label: Option<String>,
    #[serde(default)]
    pub status: PublicationStatus,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<ContentDate>,
}

/// A record that passed validation, tagged by its collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidatedRecord {
    Project(Project),
    Developer(Developer),
    Report(Report),
    DeveloperReport(DeveloperReport),
    Guide(Guide),
    Policy(Policy),
}

impl ValidatedRecord {
    /// The collection this record belongs to.
    pub fn collection(&self) -> Collection {
        match self {
            Self::Project(_) => Collection::Projects,
            Self::Developer(_) => Collection::Developers,
            Self::Report(_) => Collection::Reports,
            Self::DeveloperReport(_) => Collection::DeveloperReports,
            Self::Guide(_) => Collection::Guides,
            Self::Policy(_) => Collection::Policies,
        }
    }

    pub fn id(&self) -> &RecordId {
        match self {
            Self::Project(r) => &r.id,
            Self::Developer(r) => &r.id,
            Self::Report(r) => &r.id,
            Self::DeveloperReport(r) => &r.id,
            Self::Guide(r) => &r.id,
            Self::Policy(r) => &r.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Project(r) => &r.title,
            Self::Developer(r) => &r.title,
            Self::Report(r) => &r.title,
            Self::DeveloperReport(r) => &r.title,
            Self::Guide(r) => &r.title,
            Self::Policy(r) => &r.title,
        }
    }

    pub fn sources(&self) -> &[Source] {
        match self {
            Self::Project(r) => &r.sources,
            Self::Developer(r) => &r.sources,
            Self::Report(r) => &r.sources,
            Self::DeveloperReport(r) => &r.sources,
            Self::Guide(r) => &r.sources,
            Self::Policy(r) => &r.sources,
        }
    }

    pub fn last_updated(&self) -> Option<&ContentDate> {
        match self {
            Self::Project(r) => r.last_updated.as_ref(),
            Self::Developer(r) => r.last_updated.as_ref(),
            Self::Report(r) => r.last_updated.as_ref(),
            Self::DeveloperReport(r) => r.last_updated.as_ref(),
            Self::Guide(r) => r.last_updated.as_ref(),
            Self::Policy(r) => r.last_updated.as_ref(),
        }
    }
}
