//! # dubai-core: Foundational Types for the Content Schemas
//!
//! Defines the type-system primitives shared by the schema registry, the
//! content loader and the CLI. Every other crate in the workspace depends
//! on `dubai-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for enumerated fields.** `ProjectStatus`,
//!    `PublicationStatus`, `ReportType`, `Quarter`, `GuideCategory` and
//!    `PolicyAuthority` carry the exact wire spelling of every allowed
//!    value. Exhaustive `match` everywhere.
//!
//! 2. **Range-checked value types.** `CredibilityScore` cannot hold a value
//!    outside `[0, 100]`.
//!
//! 3. **One date type.** `ContentDate` is the only way a date enters a typed
//!    record. Lenient coercion happens once, at the validation boundary.
//!
//! 4. **Single `Collection` enum.** The six collection names are defined
//!    here and nowhere else.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dubai-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod collection;
pub mod domain;
pub mod error;
pub mod identity;
pub mod numeric;
pub mod score;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use collection::{Collection, COLLECTION_COUNT};
pub use domain::{
    GuideCategory, PolicyAuthority, ProjectStatus, PublicationStatus, Quarter, ReportType,
};
pub use error::DubaiError;
pub use identity::RecordId;
pub use score::CredibilityScore;
pub use temporal::ContentDate;
