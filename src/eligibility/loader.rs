//! Criteria and cart loading
//!
//! Reads criteria and carts from JSON or YAML files. The format follows the
//! file extension: `.yaml`/`.yml` is YAML, anything else is JSON.

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::criteria::Criteria;
use super::error::{EligibilityError, Result};

/// Document formats accepted by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// Loads criteria and carts from files
pub struct CriteriaLoader;

impl CriteriaLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and parse criteria from a file
    pub fn load_criteria<P: AsRef<Path>>(&self, path: P) -> Result<Criteria> {
        let path = path.as_ref();
        log::debug!("Loading criteria from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_criteria(&content, Format::from_path(path))
    }

    /// Load one or more carts from a file
    pub fn load_carts<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Value>> {
        let path = path.as_ref();
        log::debug!("Loading carts from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_carts(&content, Format::from_path(path))
    }

    /// Parse criteria from a document string
    pub fn parse_criteria(content: &str, format: Format) -> Result<Criteria> {
        let value = Self::parse_document(content, format)?;
        Criteria::parse(&value)
    }

    /// Parse carts from a document string: a single object or an array of objects
    pub fn parse_carts(content: &str, format: Format) -> Result<Vec<Value>> {
        let carts = match Self::parse_document(content, format)? {
            Value::Array(items) => items,
            single => vec![single],
        };

        if let Some(pos) = carts.iter().position(|c| !c.is_object()) {
            return Err(EligibilityError::invalid_input(format!(
                "cart {} must be an object",
                pos
            )));
        }

        Ok(carts)
    }

    fn parse_document(content: &str, format: Format) -> Result<Value> {
        let value = match format {
            Format::Json => serde_json::from_str(content)?,
            Format::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(value)
    }
}

impl Default for CriteriaLoader {
    fn default() -> Self {
        Self::new()
    }
}
