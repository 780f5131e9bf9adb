//! # dubai-content: Content Loading and Integrity Checks
//!
//! Build-time pipeline that feeds the schema registry from a content tree:
//!
//! 1. **Discover**: `<content_dir>/<collection>/**/<file>` per [`ContentConfig`].
//! 2. **Parse**: front matter from Markdown, whole-file YAML/JSON ([`document`]).
//! 3. **Validate**: each raw record through [`dubai_schema::SchemaRegistry`].
//! 4. **Assemble**: validated records into a [`ContentSet`], rejecting
//!    duplicate ids within a collection.
//! 5. **Check references**: every `developer_id` must name a loaded
//!    developer ([`integrity`]).
//!
//! The result is a [`LoadReport`]: the set plus every failure and every
//! dangling reference, so an author sees all problems in one run.
//!
//! ## Crate Policy
//!
//! - A bad file never aborts the load; only an unreadable content root does.
//! - Logging goes through `tracing`; the caller installs the subscriber.

pub mod config;
pub mod document;
pub mod error;
pub mod integrity;
pub mod loader;
pub mod set;

pub use config::ContentConfig;
pub use document::{parse_document, read_document, DocumentFormat};
pub use error::{ContentError, RecordError};
pub use integrity::{check_references, DanglingReference};
pub use loader::{ContentLoader, LoadReport, RecordFailure};
pub use set::{ContentSet, LoadedRecord};
