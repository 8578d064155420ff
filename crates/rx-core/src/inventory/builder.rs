//! Builder for creating and configuring Inventory instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Inventory;
use crate::{
    db::Database,
    error::{Result, RxError},
    templates::TemplateCatalog,
};

/// Builder for creating and configuring Inventory instances.
#[derive(Debug, Clone, Default)]
pub struct InventoryBuilder {
    database_path: Option<PathBuf>,
    templates_path: Option<PathBuf>,
}

impl InventoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/augmented-rx/items.db` or
    /// `~/.local/share/augmented-rx/items.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads additional process templates from a JSON file.
    pub fn with_templates_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.templates_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured inventory.
    ///
    /// # Errors
    ///
    /// Returns `RxError::FileSystem` if the database directory cannot be
    /// created or the templates file cannot be read, `RxError::Database` if
    /// schema initialization fails, and template validation errors from
    /// [`TemplateCatalog::extend_from_file`].
    pub async fn build(self) -> Result<Inventory> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RxError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut catalog = TemplateCatalog::builtin();
        if let Some(path) = &self.templates_path {
            catalog.extend_from_file(path)?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .map_err(RxError::join)??;

        debug!("Inventory ready at {}", db_path.display());
        Ok(Inventory::new(db_path, catalog))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("augmented-rx")
            .place_data_file("items.db")
            .map_err(|e| RxError::XdgDirectory(e.to_string()))
    }
}
