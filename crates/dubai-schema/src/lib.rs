//! # dubai-schema: Content Schema Registry
//!
//! Declares, for each of the six content collections, a validator that
//! accepts a raw structured record (typically parsed from a Markdown file's
//! front matter) and either returns a fully typed, defaulted record or
//! reports every field that broke a constraint.
//!
//! ## Registry (`registry`)
//!
//! - [`SchemaRegistry::validate`]: validate a raw record by collection name.
//! - [`list_collections`]: the registered collection names.
//! - [`SchemaRegistry::schema`]: the JSON Schema behind a collection, for
//!   export to editors and CMS tooling.
//!
//! ## Records (`records`)
//!
//! Typed structs for every collection, with defaults applied on decode.
//!
//! ## Crate Policy
//!
//! - Depends only on `dubai-core` internally.
//! - Validation is pure: no I/O, no mutable state.
//! - Enum spellings in the embedded schemas must match the enums in
//!   `dubai-core` exactly; `tests/schema_consistency.rs` enforces this.
//! - Referential integrity across collections is out of scope here; see
//!   `dubai-content`.

pub mod records;
pub mod registry;
pub mod validate;

pub use records::{
    Coordinates, Developer, DeveloperMetrics, DeveloperReport, Guide, Policy, Project, Report,
    Source, UnitType, ValidatedRecord, DEFAULT_FILE_FORMAT,
};
pub use registry::{date_fields, list_collections, SchemaRegistry, SCHEMA_URI_PREFIX};
pub use validate::{SchemaValidationError, ValidationViolations, Violation, ViolationKind};
