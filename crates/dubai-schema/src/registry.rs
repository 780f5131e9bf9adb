//! # Content Schema Registry
//!
//! Maps each [`Collection`] to a compiled JSON Schema (Draft 2020-12) and a
//! typed decoder. Validation runs in three steps:
//!
//! 1. **Structure.** The raw record is checked against the collection's
//!    schema: required fields, types, enum membership, numeric bounds and
//!    URI format. Every violation is collected.
//! 2. **Date coercion.** Each date field that is present and passed the
//!    type check is coerced through [`ContentDate::coerce`] and rewritten
//!    in canonical RFC 3339 form. Failures are `MalformedDate` violations.
//! 3. **Typed decode.** The normalized value is decoded into the
//!    collection's record struct, which fills in every default.
//!
//! A record is rejected if any step reports a violation. Cross-collection
//! references (`developer_id`) are not checked here.
//!
//! The schemas are embedded at compile time and compiled once in
//! [`SchemaRegistry::new`]. The registry holds no mutable state and is
//! `Send + Sync`.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use jsonschema::Validator;
use serde::de::DeserializeOwned;
use serde_json::Value;

use dubai_core::{Collection, ContentDate};

use crate::records::{
    Developer, DeveloperReport, Guide, Policy, Project, Report, ValidatedRecord,
};
use crate::validate::{
    LocalSchemaRetriever, SchemaValidationError, ValidationViolations, Violation, ViolationKind,
};

/// Base URI of every embedded schema's `$id`.
pub const SCHEMA_URI_PREFIX: &str = "https://schemas.dubai-estate.org/content/";

/// Shared definitions referenced by the collection schemas.
const COMMON_SCHEMA: (&str, &str) = (
    "common.schema.json",
    include_str!("../schemas/common.schema.json"),
);

/// Schema source for a collection.
fn embedded_schema(collection: Collection) -> (&'static str, &'static str) {
    match collection {
        Collection::Projects => (
            "projects.schema.json",
            include_str!("../schemas/projects.schema.json"),
        ),
        Collection::Developers => (
            "developers.schema.json",
            include_str!("../schemas/developers.schema.json"),
        ),
        Collection::Reports => (
            "reports.schema.json",
            include_str!("../schemas/reports.schema.json"),
        ),
        Collection::DeveloperReports => (
            "developer_reports.schema.json",
            include_str!("../schemas/developer_reports.schema.json"),
        ),
        Collection::Guides => (
            "guides.schema.json",
            include_str!("../schemas/guides.schema.json"),
        ),
        Collection::Policies => (
            "policies.schema.json",
            include_str!("../schemas/policies.schema.json"),
        ),
    }
}

/// Top-level fields of a collection that hold dates.
pub fn date_fields(collection: Collection) -> &'static [&'static str] {
    match collection {
        Collection::Projects | Collection::Developers | Collection::Policies => &["last_updated"],
        Collection::Reports | Collection::DeveloperReports | Collection::Guides => {
            &["published_date", "last_updated"]
        }
    }
}

/// Names of every registered collection.
pub fn list_collections() -> BTreeSet<&'static str> {
    Collection::all().iter().map(Collection::as_str).collect()
}

struct RegisteredSchema {
    schema_name: &'static str,
    schema: Value,
    validator: Validator,
}

/// Registry of compiled collection schemas.
pub struct SchemaRegistry {
    schemas: BTreeMap<Collection, RegisteredSchema>,
    common: Value,
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("collections", &self.schemas.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn parse_schema(name: &str, source: &str) -> Result<Value, SchemaValidationError> {
    serde_json::from_str(source).map_err(|e| SchemaValidationError::SchemaBuild {
        schema_name: name.to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}

impl SchemaRegistry {
    /// Parse and compile every embedded schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::SchemaBuild` if a schema is not valid
    /// JSON, is not a valid Draft 2020-12 schema, or has an unresolvable `$ref`.
    pub fn new() -> Result<Self, SchemaValidationError> {
        let mut parsed: Vec<(Collection, &'static str, Value)> = Vec::new();
        for &collection in Collection::all() {
            let (name, source) = embedded_schema(collection);
            parsed.push((collection, name, parse_schema(name, source)?));
        }
        let (common_name, common_source) = COMMON_SCHEMA;
        let common = parse_schema(common_name, common_source)?;

        // Register every schema under its canonical URI, its own `$id`, and
        // its bare filename.
        let mut schemas_by_uri: HashMap<String, Value> = HashMap::new();
        let all_schemas = parsed
            .iter()
            .map(|(_, name, value)| (*name, value))
            .chain(std::iter::once((common_name, &common)));
        for (name, value) in all_schemas {
            schemas_by_uri.insert(format!("{SCHEMA_URI_PREFIX}{name}"), value.clone());
            if let Some(id) = value.get("$id").and_then(Value::as_str) {
                schemas_by_uri.insert(id.to_string(), value.clone());
            }
            schemas_by_uri.insert(name.to_string(), value.clone());
        }
        let retriever = LocalSchemaRetriever::new(schemas_by_uri);

        let mut schemas = BTreeMap::new();
        for (collection, schema_name, schema) in parsed {
            let mut opts = jsonschema::options();
            opts.with_draft(jsonschema::Draft::Draft202012)
                .should_validate_formats(true)
                .with_retriever(retriever.clone());
            let validator =
                opts.build(&schema)
                    .map_err(|e| SchemaValidationError::SchemaBuild {
                        schema_name: schema_name.to_string(),
                        reason: e.to_string(),
                    })?;
            schemas.insert(
                collection,
                RegisteredSchema {
                    schema_name,
                    schema,
                    validator,
                },
            );
        }

        Ok(Self { schemas, common })
    }

    /// Names of every registered collection.
    pub fn list_collections(&self) -> BTreeSet<&'static str> {
        self.schemas.keys().map(Collection::as_str).collect()
    }

    /// The JSON Schema backing a collection.
    pub fn schema(&self, collection: Collection) -> Option<&Value> {
        self.schemas.get(&collection).map(|s| &s.schema)
    }

    /// The shared definitions schema (`common.schema.json`).
    pub fn common_schema(&self) -> &Value {
        &self.common
    }

    /// The embedded schema filename of a collection.
    pub fn schema_name(&self, collection: Collection) -> Option<&'static str> {
        self.schemas.get(&collection).map(|s| s.schema_name)
    }

    /// Validate a raw record against the schema of the named collection.
    ///
    /// # Errors
    ///
    /// - `UnknownCollection` if `collection_name` is not registered.
    /// - `ValidationFailed` listing every violation in the record.
    pub fn validate(
        &self,
        collection_name: &str,
        raw: &Value,
    ) -> Result<ValidatedRecord, SchemaValidationError> {
        let collection: Collection =
            collection_name
                .parse()
                .map_err(|_| SchemaValidationError::UnknownCollection {
                    name: collection_name.to_string(),
                    allowed: Collection::all()
                        .iter()
                        .map(Collection::as_str)
                        .collect::<Vec<_>>()
                        .join(", "),
                })?;
        self.validate_collection(collection, raw)
    }

    /// Validate a raw record against a collection's schema.
    pub fn validate_collection(
        &self,
        collection: Collection,
        raw: &Value,
    ) -> Result<ValidatedRecord, SchemaValidationError> {
        let registered = self.schemas.get(&collection).ok_or_else(|| {
            SchemaValidationError::UnknownCollection {
                name: collection.as_str().to_string(),
                allowed: self.list_collections().into_iter().collect::<Vec<_>>().join(", "),
            }
        })?;

        let mut violations: Vec<Violation> = registered
            .validator
            .iter_errors(raw)
            .map(|e| Violation::from_schema_error(&e))
            .collect();

        let mut normalized = raw.clone();
        coerce_dates(collection, &mut normalized, &mut violations);

        if !violations.is_empty() {
            return Err(failed(collection, violations));
        }

        let decoded = match collection {
            Collection::Projects => decode::<Project>(normalized).map(ValidatedRecord::Project),
            Collection::Developers => {
                decode::<Developer>(normalized).map(ValidatedRecord::Developer)
            }
            Collection::Reports => decode::<Report>(normalized).map(ValidatedRecord::Report),
            Collection::DeveloperReports => {
                decode::<DeveloperReport>(normalized).map(ValidatedRecord::DeveloperReport)
            }
            Collection::Guides => decode::<Guide>(normalized).map(ValidatedRecord::Guide),
            Collection::Policies => decode::<Policy>(normalized).map(ValidatedRecord::Policy),
        };

        decoded.map_err(|violation| failed(collection, vec![violation]))
    }
}

fn failed(collection: Collection, violations: Vec<Violation>) -> SchemaValidationError {
    SchemaValidationError::ValidationFailed {
        collection,
        violations: ValidationViolations::new(violations),
    }
}

/// Rewrite each present date field in canonical form, recording a
/// `MalformedDate` violation for any that cannot be coerced. Values of the
/// wrong JSON type are left alone; the structural pass already reported them.
fn coerce_dates(collection: Collection, record: &mut Value, violations: &mut Vec<Violation>) {
    let Some(object) = record.as_object_mut() else {
        return;
    };
    for &field in date_fields(collection) {
        let Some(value) = object.get_mut(field) else {
            continue;
        };
        if !(value.is_string() || value.is_number()) {
            continue;
        }
        match ContentDate::coerce(value) {
            Ok(date) => *value = Value::String(date.to_rfc3339()),
            Err(e) => violations.push(Violation {
                kind: ViolationKind::MalformedDate,
                instance_path: format!("/{field}"),
                schema_path: String::new(),
                message: e.to_string(),
            }),
        }
    }
}

/// Decode a structurally valid value. A failure here means the schema and
/// the record struct disagree; it is reported against the whole record.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Violation> {
    serde_json::from_value(value).map_err(|e| Violation {
        kind: ViolationKind::TypeMismatch,
        instance_path: String::new(),
        schema_path: String::new(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new().unwrap()
    }

    #[test]
    fn test_all_collections_registered() {
        let reg = registry();
        assert_eq!(reg.list_collections(), list_collections());
        assert_eq!(reg.list_collections().len(), dubai_core::COLLECTION_COUNT);
        for c in Collection::all() {
            assert!(reg.schema(*c).is_some());
        }
    }

    #[test]
    fn test_schema_ids_use_canonical_prefix() {
        let reg = registry();
        for c in Collection::all() {
            let id = reg.schema(*c).unwrap()["$id"].as_str().unwrap();
            let name = reg.schema_name(*c).unwrap();
            assert_eq!(id, format!("{SCHEMA_URI_PREFIX}{name}"));
        }
    }

    #[test]
    fn test_unknown_collection() {
        let err = registry().validate("listings", &json!({})).unwrap_err();
        match err {
            SchemaValidationError::UnknownCollection { name, allowed } => {
                assert_eq!(name, "listings");
                assert!(allowed.contains("policies"));
            }
            other => panic!("Expected UnknownCollection, got: {other}"),
        }
    }

    #[test]
    fn test_date_fields_per_collection() {
        assert_eq!(date_fields(Collection::Projects), &["last_updated"]);
        assert_eq!(date_fields(Collection::Guides), &["published_date", "last_updated"]);
    }

    #[test]
    fn test_dates_are_normalized() {
        let record = registry()
            .validate(
                "guides",
                &json!({
                    "title": "Mortgage basics",
                    "id": "mortgage-basics",
                    "summary": "LTV limits.",
                    "published_date": "2026-01-15",
                    "last_updated": "2026-02-01T10:00:00+04:00"
                }),
            )
            .unwrap();
        match record {
            ValidatedRecord::Guide(g) => {
                assert_eq!(g.published_date.unwrap().to_rfc3339(), "2026-01-15T00:00:00Z");
                assert_eq!(g.last_updated.unwrap().to_rfc3339(), "2026-02-01T06:00:00Z");
            }
            other => panic!("Expected Guide, got: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_typed_date_reported_once() {
        let err = registry()
            .validate(
                "developers",
                &json!({"title": "Emaar", "id": "emaar", "last_updated": true}),
            )
            .unwrap_err();
        let violations = err.violations().unwrap();
        assert_eq!(violations.len(), 1);
        assert!(violations.contains(ViolationKind::TypeMismatch, "/last_updated"));
    }

    #[test]
    fn test_year_accepts_any_finite_number() {
        let record = registry()
            .validate(
                "reports",
                &json!({"title": "T", "id": "t", "year": 1e12, "summary": "S"}),
            )
            .unwrap();
        let ValidatedRecord::Report(report) = record else {
            panic!("Expected Report");
        };
        assert_eq!(report.year, 1e12);
    }

    #[test]
    fn test_non_object_record_rejected() {
        let err = registry().validate("policies", &json!(["not", "a", "record"])).unwrap_err();
        let violations = err.violations().unwrap();
        assert!(violations.contains(ViolationKind::TypeMismatch, ""));
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchemaRegistry>();
    }
}
