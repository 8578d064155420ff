//! Catalog of compounding procedure templates.
//!
//! Sessions never share a [`Process`]: each one instantiates a fresh copy from
//! a template in this catalog. The catalog starts with the built-in procedures
//! and can be extended from a JSON document:
//!
//! ```json
//! {
//!   "default": "heparin",
//!   "templates": {
//!     "heparin": {
//!       "name": "Heparin Flush",
//!       "steps": [
//!         { "id": 1, "title": "Step 1", "description": "Swab the port." },
//!         { "id": 2, "title": "Step 2", "description": "Flush slowly.", "animation_tag": "word" }
//!       ]
//!     }
//!   }
//! }
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::Path,
};

use log::{debug, info};
use serde::Deserialize;

use crate::{
    error::{Result, RxError},
    models::{Process, ProcessStep},
};

/// Key of the template used when a scanned code names no template.
pub const DEFAULT_TEMPLATE: &str = "saline";

/// Named process templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, Process>,
    default_key: String,
}

#[derive(Deserialize)]
struct TemplateFile {
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    templates: BTreeMap<String, Process>,
}

impl TemplateCatalog {
    /// Catalog holding only the built-in procedures.
    pub fn builtin() -> Self {
        let mut templates = BTreeMap::new();
        templates.insert(
            DEFAULT_TEMPLATE.to_string(),
            standard_procedure("Saline Solution Dilution"),
        );
        templates.insert(
            "compounding".to_string(),
            standard_procedure("Compounding Medication"),
        );

        Self {
            templates,
            default_key: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Template registered under `key`.
    pub fn get(&self, key: &str) -> Option<&Process> {
        self.templates.get(key)
    }

    /// A fresh copy of the template registered under `key`.
    pub fn instantiate(&self, key: &str) -> Option<Process> {
        self.get(key).cloned()
    }

    /// Template keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Process)> {
        self.templates.iter().map(|(key, process)| (key.as_str(), process))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Picks the procedure for a scanned code.
    ///
    /// A code that matches a template key (ignoring case and surrounding
    /// whitespace) selects that template; anything else gets the default.
    pub fn resolve(&self, scanned_code: &str) -> Process {
        let key = normalize_key(scanned_code);
        if let Some(process) = self.instantiate(&key) {
            debug!("Code '{scanned_code}' selected template '{key}'");
            return process;
        }

        debug!(
            "Code '{scanned_code}' has no template, using '{}'",
            self.default_key
        );
        self.instantiate(&self.default_key)
            .unwrap_or_else(|| Process::new(self.default_key.clone(), Vec::new()))
    }

    /// Adds the templates of a JSON document, replacing existing keys.
    ///
    /// Keys and the `default` are normalised the way [`resolve`](Self::resolve)
    /// normalises scanned codes, so every loaded template is selectable.
    ///
    /// # Errors
    ///
    /// Returns `RxError::Serialization` for malformed JSON and
    /// `RxError::InvalidInput` for an invalid process, keys that collide once
    /// normalised, or an unknown default.
    pub fn extend_from_json(&mut self, json: &str) -> Result<()> {
        let file: TemplateFile = serde_json::from_str(json)?;

        let mut templates = BTreeMap::new();
        for (key, process) in file.templates {
            let normalized = normalize_key(&key);
            if normalized.is_empty() {
                return Err(RxError::invalid_input("templates")
                    .with_reason("Template key cannot be empty"));
            }
            process.validate()?;
            if templates.insert(normalized.clone(), process).is_some() {
                return Err(RxError::invalid_input("templates")
                    .with_reason(format!("Template key '{key}' duplicates '{normalized}'")));
            }
        }

        let default = file.default.as_deref().map(normalize_key);
        if let Some(default) = &default {
            if !templates.contains_key(default) && !self.templates.contains_key(default) {
                return Err(RxError::invalid_input("default")
                    .with_reason(format!("No template named '{default}'")));
            }
        }

        let loaded = templates.len();
        self.templates.extend(templates);
        if let Some(default) = default {
            self.default_key = default;
        }

        info!("Loaded {loaded} process template(s)");
        Ok(())
    }

    /// Reads a JSON template document from disk.
    ///
    /// # Errors
    ///
    /// Returns `RxError::FileSystem` if the file cannot be read, otherwise the
    /// errors of [`extend_from_json`](Self::extend_from_json).
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| RxError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.extend_from_json(&json)
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// Template keys are matched on trimmed, lowercased text.
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

// The four-step procedure shared by the built-in templates.
fn standard_procedure(name: &str) -> Process {
    Process::new(
        name,
        vec![
            ProcessStep::new(1, "Step 1", "Prepare the materials."),
            ProcessStep::new(2, "Step 2", "Mix the solution.").with_animation("animateCap"),
            ProcessStep::new(3, "Step 3", "Fill the IV bag.").with_animation("word"),
            ProcessStep::new(4, "Step 4", "Seal and label the bag.").with_animation("word"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const HEPARIN: &str = r#"{
        "default": "heparin",
        "templates": {
            "heparin": {
                "name": "Heparin Flush",
                "steps": [
                    { "id": 1, "title": "Step 1", "description": "Swab the port." },
                    { "id": 2, "title": "Step 2", "description": "Flush slowly.", "animation_tag": "word" }
                ]
            }
        }
    }"#;

    #[test]
    fn test_builtin_templates() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["compounding", "saline"]);
        assert_eq!(catalog.default_key(), DEFAULT_TEMPLATE);

        let saline = catalog.get("saline").expect("saline template");
        assert_eq!(saline.name, "Saline Solution Dilution");
        assert_eq!(saline.len(), 4);
        assert!(saline.step(0).and_then(|s| s.animation_tag.as_ref()).is_none());
        assert_eq!(
            saline.step(1).and_then(|s| s.animation_tag.as_deref()),
            Some("animateCap")
        );
        assert!(saline.validate().is_ok());
    }

    #[test]
    fn test_instantiate_returns_independent_copies() {
        let catalog = TemplateCatalog::builtin();
        let mut first = catalog.instantiate("saline").expect("saline template");
        first.mark_complete(1);

        let second = catalog.instantiate("saline").expect("saline template");
        assert_eq!(second.completed_count(), 0);
        assert_eq!(catalog.get("saline").map(Process::completed_count), Some(0));
    }

    #[test]
    fn test_resolve_matches_key_or_falls_back() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.resolve("  Compounding ").name, "Compounding Medication");
        assert_eq!(catalog.resolve("NDC-0409-4888").name, "Saline Solution Dilution");
    }

    #[test]
    fn test_extend_from_json() {
        let mut catalog = TemplateCatalog::builtin();
        catalog.extend_from_json(HEPARIN).expect("Failed to load templates");

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.default_key(), "heparin");
        assert_eq!(catalog.resolve("unknown").name, "Heparin Flush");
    }

    #[test]
    fn test_extend_overrides_builtin() {
        let mut catalog = TemplateCatalog::builtin();
        catalog
            .extend_from_json(r#"{"templates": {"saline": {"name": "Saline v2", "steps": []}}}"#)
            .expect("Failed to load templates");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("saline").map(|p| p.name.as_str()), Some("Saline v2"));
    }

    #[test]
    fn test_extend_rejects_invalid_documents() {
        let mut catalog = TemplateCatalog::builtin();

        let err = catalog.extend_from_json("{ not json").unwrap_err();
        assert!(matches!(err, RxError::Serialization { .. }));

        let err = catalog
            .extend_from_json(r#"{"default": "missing", "templates": {}}"#)
            .unwrap_err();
        assert!(matches!(err, RxError::InvalidInput { ref field, .. } if field == "default"));

        let duplicate = r#"{"templates": {"dup": {"name": "Dup", "steps": [
            {"id": 1, "title": "A", "description": "a"},
            {"id": 1, "title": "B", "description": "b"}
        ]}}}"#;
        assert!(catalog.extend_from_json(duplicate).is_err());
        assert!(catalog.get("dup").is_none());
    }

    #[test]
    fn test_extend_normalizes_keys_for_resolve() {
        let mut catalog = TemplateCatalog::builtin();
        catalog
            .extend_from_json(
                r#"{"default": " Heparin ", "templates": {" Heparin ": {"name": "Heparin Flush", "steps": [
                    {"id": 1, "title": "Swab", "description": "Swab the port."}
                ]}}}"#,
            )
            .expect("Failed to load templates");

        assert!(catalog.get("heparin").is_some());
        assert!(catalog.get(" Heparin ").is_none());
        assert_eq!(catalog.default_key(), "heparin");
        assert_eq!(catalog.resolve("Heparin").name, "Heparin Flush");
        assert_eq!(catalog.resolve("heparin").name, "Heparin Flush");
    }

    #[test]
    fn test_extend_rejects_colliding_keys() {
        let mut catalog = TemplateCatalog::builtin();
        let err = catalog
            .extend_from_json(
                r#"{"templates": {
                    "Heparin": {"name": "Upper", "steps": []},
                    "heparin": {"name": "Lower", "steps": []}
                }}"#,
            )
            .unwrap_err();

        assert!(matches!(err, RxError::InvalidInput { ref field, .. } if field == "templates"));
        assert!(catalog.get("heparin").is_none());
    }

    #[test]
    fn test_extend_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(HEPARIN.as_bytes())
            .expect("Failed to write templates");

        let mut catalog = TemplateCatalog::builtin();
        catalog
            .extend_from_file(file.path())
            .expect("Failed to load template file");
        assert!(catalog.get("heparin").is_some());

        let err = catalog
            .extend_from_file(file.path().with_extension("missing"))
            .unwrap_err();
        assert!(matches!(err, RxError::FileSystem { .. }));
    }
}
