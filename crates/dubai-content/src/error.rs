//! # Error Types
//!
//! `ContentError` covers reading and parsing content files and the loader
//! configuration. `RecordError` is the per-file outcome recorded in a
//! load report: a file that could not be read, a record that failed
//! validation, or a record whose id is already taken in its collection.

use std::path::PathBuf;

use thiserror::Error;

use dubai_core::RecordId;
use dubai_schema::SchemaValidationError;

/// Error reading content files or configuration.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The configured content directory does not exist.
    #[error("content directory not found: {}", path.display())]
    MissingContentDir {
        /// The configured directory.
        path: PathBuf,
    },

    /// A file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A Markdown file opens a front matter block that never closes.
    #[error("unterminated front matter in {}: no closing '---' line", path.display())]
    UnterminatedFrontMatter {
        /// Path of the file.
        path: PathBuf,
    },

    /// YAML front matter or a YAML data file could not be parsed.
    #[error("invalid YAML in {}: {reason}", path.display())]
    Yaml {
        /// Path of the file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A JSON data file could not be parsed.
    #[error("invalid JSON in {}: {reason}", path.display())]
    Json {
        /// Path of the file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The file extension is not a recognized content format.
    #[error("unsupported content file extension: {}", path.display())]
    UnsupportedExtension {
        /// Path of the file.
        path: PathBuf,
    },

    /// The loader configuration file is invalid.
    #[error("invalid content config {}: {reason}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Reason the configuration was rejected.
        reason: String,
    },
}

/// Why a single content file did not make it into the content set.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The file could not be read or parsed.
    #[error(transparent)]
    Read(#[from] ContentError),

    /// The record failed schema validation.
    #[error(transparent)]
    Invalid(#[from] SchemaValidationError),

    /// Another record in the same collection already uses this id.
    #[error("duplicate id {id:?} (first defined in {})", first.display())]
    DuplicateId {
        /// The contested id.
        id: RecordId,
        /// File that defined the id first.
        first: PathBuf,
    },
}
