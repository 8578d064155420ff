//! Scanned item CRUD operations and queries.

use jiff::Timestamp;
use log::info;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, RxError},
    models::ScannedItem,
};

const INSERT_ITEM_SQL: &str = "INSERT INTO scanned_items (display_name, scanned_code, asset_reference, timestamp) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ITEM_SQL: &str = "SELECT id, display_name, scanned_code, asset_reference, timestamp FROM scanned_items WHERE id = ?1";
const LIST_ITEMS_SQL: &str = "SELECT id, display_name, scanned_code, asset_reference, timestamp FROM scanned_items ORDER BY timestamp ASC, id ASC";
const DELETE_ITEM_SQL: &str = "DELETE FROM scanned_items WHERE id = ?1";
const COUNT_ITEMS_SQL: &str = "SELECT COUNT(*) FROM scanned_items";

impl super::Database {
    /// Records a scanned code with the current time.
    pub fn add_item(
        &mut self,
        display_name: &str,
        scanned_code: &str,
        asset_reference: &str,
    ) -> Result<ScannedItem> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_ITEM_SQL,
            params![display_name, scanned_code, asset_reference, format_timestamp(&now)],
        )
        .db_context("Failed to insert item")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        info!("Item added: {display_name} (ID {id})");

        Ok(ScannedItem {
            id,
            display_name: display_name.to_string(),
            scanned_code: scanned_code.to_string(),
            asset_reference: asset_reference.to_string(),
            timestamp: now,
        })
    }

    /// Retrieves an item by its ID.
    pub fn get_item(&self, id: u64) -> Result<Option<ScannedItem>> {
        let Some(row_id) = to_row_id(id) else {
            return Ok(None);
        };

        self.connection
            .query_row(SELECT_ITEM_SQL, params![row_id], item_from_row)
            .optional()
            .db_context("Failed to query item")
    }

    /// Lists all items, oldest scan first.
    pub fn list_items(&self) -> Result<Vec<ScannedItem>> {
        let mut stmt = self
            .connection
            .prepare(LIST_ITEMS_SQL)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map([], item_from_row)
            .db_context("Failed to query items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read item row")?;

        Ok(items)
    }

    /// Deletes an item and returns what was removed.
    ///
    /// # Errors
    ///
    /// Returns `RxError::ItemNotFound` if no item has this ID.
    pub fn remove_item(&mut self, id: u64) -> Result<ScannedItem> {
        let row_id = to_row_id(id).ok_or(RxError::ItemNotFound { id })?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let item = tx
            .query_row(SELECT_ITEM_SQL, params![row_id], item_from_row)
            .optional()
            .db_context("Failed to query item")?
            .ok_or(RxError::ItemNotFound { id })?;

        tx.execute(DELETE_ITEM_SQL, params![row_id])
            .db_context("Failed to delete item")?;

        tx.commit().db_context("Failed to commit transaction")?;

        info!("Item removed: {} (ID {id})", item.display_name);
        Ok(item)
    }

    pub fn count_items(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_ITEMS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as u64)
            .db_context("Failed to count items")
    }
}

// SQLite rowids are signed; larger ids cannot name a stored item.
fn to_row_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

// Fixed nanosecond precision keeps the stored text sortable.
fn format_timestamp(timestamp: &Timestamp) -> String {
    format!("{timestamp:.9}")
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<ScannedItem> {
    Ok(ScannedItem {
        id: row.get::<_, i64>(0)? as u64,
        display_name: row.get(1)?,
        scanned_code: row.get(2)?,
        asset_reference: row.get(3)?,
        timestamp: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?,
    })
}
