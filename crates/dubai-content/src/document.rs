//! # Content Documents
//!
//! Turns the text of a content file into the raw, untyped record the
//! schema registry validates.
//!
//! - Markdown (`.md`, `.mdx`, `.markdown`): the record is the YAML front
//!   matter between an opening `---` line at the very top of the file and
//!   the next `---` line. The body is not part of the record. A file
//!   without front matter yields an empty mapping.
//! - YAML (`.yaml`, `.yml`) and JSON (`.json`) data files: the whole file
//!   is the record.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ContentError;

const FENCE: &str = "---";

/// On-disk format of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Markdown,
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "md" | "mdx" | "markdown" => Some(Self::Markdown),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Split a Markdown document into its front matter and body.
///
/// Returns `Ok(None)` when the document does not start with a `---` line.
pub fn split_front_matter<'a>(
    path: &Path,
    text: &'a str,
) -> Result<Option<(&'a str, &'a str)>, ContentError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok(None);
    };
    if first.trim_end() != FENCE {
        return Ok(None);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FENCE {
            let front = &text[start..offset];
            let body = &text[offset + line.len()..];
            return Ok(Some((front, body)));
        }
        offset += line.len();
    }

    Err(ContentError::UnterminatedFrontMatter {
        path: path.to_path_buf(),
    })
}

/// Parse a content file's text into a raw record.
pub fn parse_document(
    path: &Path,
    text: &str,
    format: DocumentFormat,
) -> Result<Value, ContentError> {
    match format {
        DocumentFormat::Markdown => match split_front_matter(path, text)? {
            Some((front, _body)) => parse_yaml(path, front),
            None => Ok(Value::Object(serde_json::Map::new())),
        },
        DocumentFormat::Yaml => parse_yaml(path, text),
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| ContentError::Json {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

/// Read and parse a content file, inferring its format from the extension.
pub fn read_document(path: &Path) -> Result<Value, ContentError> {
    let format =
        DocumentFormat::from_path(path).ok_or_else(|| ContentError::UnsupportedExtension {
            path: path.to_path_buf(),
        })?;
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &text, format)
}

fn parse_yaml(path: &Path, text: &str) -> Result<Value, ContentError> {
    let yaml_error = |reason: String| ContentError::Yaml {
        path: PathBuf::from(path),
        reason,
    };

    // An empty front matter block is an empty record, not `null`.
    if text.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| yaml_error(e.to_string()))?;
    yaml_to_json_value(&yaml).map_err(yaml_error)
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Front matter uses the JSON-compatible subset of YAML. Non-string
/// mapping keys are stringified and tags are dropped.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
