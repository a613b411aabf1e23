//! Property sources backing placeholder resolution
//!
//! A [`Properties`] table maps dotted keys to string values. Tables can be
//! built in code, collected from pairs, or loaded from TOML files in which
//! nested tables flatten to dotted keys (`[database] host = ".."` becomes
//! `database.host`) and arrays flatten to indexed keys (`servers.0`,
//! `servers.1`). Scalar values of any TOML type are stored as their string
//! form.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::expand::PlaceholderResolver;

/// Errors that can occur when loading property files
#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("failed to read property file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to parse property file TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// An ordered table of string properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Load properties from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PropertiesError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load properties from a TOML string, flattening nested tables and
    /// arrays into dotted keys
    pub fn from_toml_str(content: &str) -> Result<Self, PropertiesError> {
        let table: toml::Table = content.parse()?;
        let mut values = BTreeMap::new();
        for (key, value) in &table {
            flatten_value(key, value, &mut values);
        }
        Ok(Self { values })
    }

    /// Look up a property value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Overlay another table onto this one; the other table's values win on
    /// key collisions
    pub fn merge(&mut self, other: Properties) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PlaceholderResolver for Properties {
    fn resolve_placeholder(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten_value(key: &str, value: &toml::Value, out: &mut BTreeMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (k, v) in table {
                flatten_value(&format!("{key}.{k}"), v, out);
            }
        }
        toml::Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten_value(&format!("{key}.{i}"), v, out);
            }
        }
        toml::Value::String(s) => {
            out.insert(key.to_string(), s.clone());
        }
        toml::Value::Integer(n) => {
            out.insert(key.to_string(), n.to_string());
        }
        toml::Value::Float(f) => {
            out.insert(key.to_string(), f.to_string());
        }
        toml::Value::Boolean(b) => {
            out.insert(key.to_string(), b.to_string());
        }
        toml::Value::Datetime(dt) => {
            out.insert(key.to_string(), dt.to_string());
        }
    }
}
