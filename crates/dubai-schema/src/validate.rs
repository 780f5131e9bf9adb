//! # Violations and Validation Errors
//!
//! Structured failure reporting for the schema registry. A record is
//! either fully valid or rejected with every violation found, each naming
//! the offending field (as a JSON Pointer into the raw record) and the
//! kind of constraint it broke.
//!
//! ## Violation taxonomy
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | `MissingRequiredField` | `required` |
//! | `TypeMismatch` | `type`, and any structural keyword not listed below |
//! | `EnumValueNotAllowed` | `enum` |
//! | `NumericOutOfRange` | `minimum`, `maximum` |
//! | `MalformedUri` | `format: uri` |
//! | `MalformedDate` | date coercion after the structural pass |
//!
//! ## Schema Resolution
//!
//! Collection schemas `$ref` shared definitions in `common.schema.json`
//! by relative URI. [`LocalSchemaRetriever`] resolves those references
//! from the embedded schemas, so validation never touches the network.

use std::collections::HashMap;
use std::fmt;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Retrieve, Uri, ValidationError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use dubai_core::Collection;

/// Local retriever that resolves `$ref` URIs to embedded schemas.
#[derive(Debug, Clone)]
pub(crate) struct LocalSchemaRetriever {
    /// Map from URI string (and bare filename) to schema value.
    schemas_by_uri: HashMap<String, Value>,
}

impl LocalSchemaRetriever {
    pub(crate) fn new(schemas_by_uri: HashMap<String, Value>) -> Self {
        Self { schemas_by_uri }
    }
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();

        if let Some(value) = self.schemas_by_uri.get(uri_str) {
            return Ok(value.clone());
        }

        // Fall back to the filename so a schema moved under another base
        // URI still resolves.
        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
        self.schemas_by_uri
            .get(filename)
            .cloned()
            .ok_or_else(|| format!("unknown schema reference: {uri_str}").into())
    }
}

/// Error returned by the schema registry.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The collection name is not one of the registered collections.
    #[error("unknown collection {name:?} (expected one of: {allowed})")]
    UnknownCollection {
        /// The name that was looked up.
        name: String,
        /// Comma-separated registered names.
        allowed: String,
    },

    /// The record did not conform to its collection's schema.
    #[error("validation failed for collection '{collection}':\n{violations}")]
    ValidationFailed {
        /// Collection whose schema rejected the record.
        collection: Collection,
        /// Every violation found in the record.
        violations: ValidationViolations,
    },

    /// An embedded schema could not be parsed or compiled.
    #[error("schema build error for '{schema_name}': {reason}")]
    SchemaBuild {
        /// Schema filename.
        schema_name: String,
        /// Reason the schema could not be built.
        reason: String,
    },
}

impl SchemaValidationError {
    /// The violations carried by a `ValidationFailed` error, if any.
    pub fn violations(&self) -> Option<&ValidationViolations> {
        match self {
            Self::ValidationFailed { violations, .. } => Some(violations),
            _ => None,
        }
    }
}

/// The constraint a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    MissingRequiredField,
    TypeMismatch,
    EnumValueNotAllowed,
    NumericOutOfRange,
    MalformedUri,
    MalformedDate,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingRequiredField => "missing required field",
            Self::TypeMismatch => "type mismatch",
            Self::EnumValueNotAllowed => "enum value not allowed",
            Self::NumericOutOfRange => "numeric out of range",
            Self::MalformedUri => "malformed URI",
            Self::MalformedDate => "malformed date",
        };
        f.write_str(s)
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// The constraint that was broken.
    pub kind: ViolationKind,
    /// JSON Pointer to the offending field in the raw record. For a
    /// missing field this points at where the field should have been.
    pub instance_path: String,
    /// JSON Pointer within the schema that triggered the error. Empty for
    /// violations raised outside the schema (date coercion, decoding).
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    /// The last segment of `instance_path`, i.e. the field name or array index.
    pub fn field(&self) -> &str {
        self.instance_path.rsplit('/').next().unwrap_or("")
    }

    /// Classify a `jsonschema` error into the violation taxonomy.
    pub(crate) fn from_schema_error(error: &ValidationError<'_>) -> Self {
        let path = error.instance_path.to_string();
        let (kind, instance_path) = match &error.kind {
            ValidationErrorKind::Required { property } => {
                let name = property
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| property.to_string());
                (
                    ViolationKind::MissingRequiredField,
                    format!("{path}/{}", escape_pointer_token(&name)),
                )
            }
            ValidationErrorKind::Enum { .. } | ValidationErrorKind::Constant { .. } => {
                (ViolationKind::EnumValueNotAllowed, path)
            }
            ValidationErrorKind::Minimum { .. }
            | ValidationErrorKind::Maximum { .. }
            | ValidationErrorKind::ExclusiveMinimum { .. }
            | ValidationErrorKind::ExclusiveMaximum { .. } => {
                (ViolationKind::NumericOutOfRange, path)
            }
            ValidationErrorKind::Format { format } if format == "uri" => {
                (ViolationKind::MalformedUri, path)
            }
            _ => (ViolationKind::TypeMismatch, path),
        };

        Self {
            kind,
            instance_path,
            schema_path: error.schema_path.to_string(),
            message: error.to_string(),
        }
    }
}

fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {} ({})", self.message, self.kind)
        } else {
            write!(f, "  {}: {} ({})", self.instance_path, self.message, self.kind)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns true if some violation of `kind` points at `instance_path`.
    pub fn contains(&self, kind: ViolationKind, instance_path: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.kind == kind && v.instance_path == instance_path)
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
