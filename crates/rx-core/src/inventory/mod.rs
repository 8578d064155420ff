//! Async facade over the item store and the template catalog.
//!
//! The [`Inventory`] replaces process-wide shared managers: it is built once
//! with an [`InventoryBuilder`] and handed to whoever needs it. SQLite work
//! runs on the blocking thread pool, one connection per operation.
//!
//! ```rust,no_run
//! use rx_core::{params::{Id, ScanItem}, InventoryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inventory = InventoryBuilder::new()
//!     .with_database_path(Some("items.db"))
//!     .build()
//!     .await?;
//!
//! let item = inventory.scan_item(&ScanItem::code("NS-0.9")).await?;
//! let mut session = inventory.start_session(&Id { id: item.id }).await?;
//! println!("{}", session.start().status_text);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod item_ops;

#[cfg(test)]
mod tests;

pub use builder::InventoryBuilder;

use crate::templates::TemplateCatalog;

/// Scanned items plus the procedures they map to.
pub struct Inventory {
    pub(crate) db_path: PathBuf,
    pub(crate) catalog: TemplateCatalog,
}

impl Inventory {
    pub(crate) fn new(db_path: PathBuf, catalog: TemplateCatalog) -> Self {
        Self { db_path, catalog }
    }

    /// Path of the backing SQLite file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }
}
