//! # Loader Configuration
//!
//! `ContentConfig` tells the loader where content lives and which checks
//! to run. Defaults match the site's layout (`src/content/<collection>/`).
//! A YAML file can override any field:
//!
//! ```yaml
//! content_dir: src/content
//! extensions: [md, mdx, yaml]
//! check_references: true
//! ```
//!
//! A relative `content_dir` in a config file is resolved against the
//! directory containing that file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Default content root, relative to the site directory.
pub const DEFAULT_CONTENT_DIR: &str = "src/content";

/// Default accepted file extensions.
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "mdx", "markdown", "yaml", "yml", "json"];

/// Content loader configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Root directory holding one sub-directory per collection.
    pub content_dir: PathBuf,
    /// File extensions treated as content (without the dot, case-insensitive).
    pub extensions: Vec<String>,
    /// Run the cross-collection reference check after validation.
    pub check_references: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            check_references: true,
        }
    }
}

impl ContentConfig {
    /// Load a configuration from a YAML file, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be read and
    /// `ContentError::Config` if it is not valid YAML, has unknown keys, or
    /// lists an extension the loader cannot parse.
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&text).map_err(|e| ContentError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        };

        if config.content_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.content_dir = parent.join(&config.content_dir);
            }
        }

        config.validate().map_err(|reason| ContentError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    /// Replace the content directory.
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    /// Enable or disable the reference check.
    pub fn with_reference_check(mut self, enabled: bool) -> Self {
        self.check_references = enabled;
        self
    }

    /// Whether a path's extension is one of the configured content extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    fn validate(&self) -> Result<(), String> {
        if self.extensions.is_empty() {
            return Err("extensions must not be empty".to_string());
        }
        for ext in &self.extensions {
            if crate::document::DocumentFormat::from_extension(ext).is_none() {
                return Err(format!("unsupported extension {ext:?}"));
            }
        }
        Ok(())
    }
}
