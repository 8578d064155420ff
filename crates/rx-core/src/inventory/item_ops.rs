//! Item and session operations for the Inventory.

use tokio::task;

use super::Inventory;
use crate::{
    db::Database,
    display::Items,
    error::{Result, RxError},
    models::{item::DEFAULT_ASSET_REFERENCE, Process, ScannedItem},
    params::{Id, ScanItem},
    session::SessionController,
};

impl Inventory {
    /// Records a scanned code, filling in the default name and asset.
    ///
    /// # Errors
    ///
    /// Returns `RxError::InvalidInput` if the code is blank.
    pub async fn scan_item(&self, params: &ScanItem) -> Result<ScannedItem> {
        let code = params.code.trim().to_string();
        if code.is_empty() {
            return Err(RxError::invalid_input("code").with_reason("Scanned code cannot be empty"));
        }

        let display_name = params
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .unwrap_or_else(|| ScannedItem::default_display_name(&code));
        let asset_reference = params
            .asset_reference
            .as_deref()
            .map(str::trim)
            .filter(|asset| !asset.is_empty())
            .unwrap_or(DEFAULT_ASSET_REFERENCE)
            .to_string();
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_item(&display_name, &code, &asset_reference)
        })
        .await
        .map_err(RxError::join)?
    }

    /// All recorded items, oldest scan first.
    pub async fn list_items(&self) -> Result<Items> {
        let db_path = self.db_path.clone();

        let items = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_items()
        })
        .await
        .map_err(RxError::join)??;

        Ok(Items(items))
    }

    /// Retrieves a single item by its ID.
    pub async fn get_item(&self, params: &Id) -> Result<Option<ScannedItem>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_item(id)
        })
        .await
        .map_err(RxError::join)?
    }

    /// Removes an item, returning it for confirmation.
    ///
    /// # Errors
    ///
    /// Returns `RxError::ItemNotFound` if the item does not exist.
    pub async fn remove_item(&self, params: &Id) -> Result<ScannedItem> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.remove_item(id)
        })
        .await
        .map_err(RxError::join)?
    }

    /// A fresh copy of the template registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RxError::TemplateNotFound` for unknown keys.
    pub fn template(&self, key: &str) -> Result<Process> {
        self.catalog
            .instantiate(key)
            .ok_or_else(|| RxError::TemplateNotFound {
                key: key.to_string(),
            })
    }

    /// The procedure to walk through for an item.
    pub fn process_for(&self, item: &ScannedItem) -> Process {
        self.catalog.resolve(&item.scanned_code)
    }

    /// Looks up an item and opens an idle session over its procedure.
    ///
    /// # Errors
    ///
    /// Returns `RxError::ItemNotFound` if the item does not exist.
    pub async fn start_session(&self, params: &Id) -> Result<SessionController> {
        let item = self
            .get_item(params)
            .await?
            .ok_or(RxError::ItemNotFound { id: params.id })?;

        Ok(self.session_for(&item))
    }

    /// Opens an idle session for an item that has already been fetched.
    pub fn session_for(&self, item: &ScannedItem) -> SessionController {
        SessionController::new(self.process_for(item))
    }
}
