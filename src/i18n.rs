use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::UiError;

const EMBEDDED_EN: &str = include_str!("../assets/i18n/en.json");

/// Flat label table keyed by dotted path (`history.tab_title`)
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// The built-in English labels
    pub fn english() -> Self {
        match Self::from_json(EMBEDDED_EN) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Embedded label catalog is invalid: {e}");
                Self::default()
            }
        }
    }

    pub fn from_json(source: &str) -> Result<Self, UiError> {
        let root: Value = serde_json::from_str(source)?;
        let mut entries = HashMap::new();
        flatten(&root, String::new(), &mut entries);
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, UiError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Overlay `other` on top of this catalog
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label for `key`, or the key itself when missing
    pub fn translate(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(label) => label.clone(),
            None => {
                log::warn!("Missing label for {key}");
                key.to_owned()
            }
        }
    }
}

fn flatten(value: &Value, prefix: String, entries: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(child, path, entries);
            }
        }
        Value::String(text) => {
            entries.insert(prefix, text.clone());
        }
        Value::Null => {}
        other => {
            entries.insert(prefix, other.to_string());
        }
    }
}
