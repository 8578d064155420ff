//! Tests for the inventory module.

use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use super::*;
use crate::{
    error::RxError,
    models::SessionPhase,
    params::{Id, ScanItem},
};

/// Helper function to create a test inventory
async fn create_test_inventory() -> (TempDir, Inventory) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let inventory = InventoryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create inventory");
    (temp_dir, inventory)
}

#[tokio::test]
async fn test_build_creates_database_in_nested_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("items.db");

    let inventory = InventoryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create inventory");

    assert!(db_path.exists());
    assert_eq!(inventory.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_scan_item_applies_defaults() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let item = inventory
        .scan_item(&ScanItem::code("  NS-0.9 "))
        .await
        .expect("Failed to scan item");

    assert!(item.id > 0);
    assert_eq!(item.scanned_code, "NS-0.9");
    assert_eq!(item.display_name, "NS-0.9 Instruction");
    assert_eq!(item.asset_reference, "bottle");
}

#[tokio::test]
async fn test_scan_item_with_overrides() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let item = inventory
        .scan_item(&ScanItem {
            code: "compounding".to_string(),
            display_name: Some("Ceftriaxone 1g".to_string()),
            asset_reference: Some("vial".to_string()),
        })
        .await
        .expect("Failed to scan item");

    assert_eq!(item.display_name, "Ceftriaxone 1g");
    assert_eq!(item.asset_reference, "vial");
}

#[tokio::test]
async fn test_scan_item_rejects_blank_code() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let err = inventory
        .scan_item(&ScanItem::code("   "))
        .await
        .unwrap_err();
    assert!(matches!(err, RxError::InvalidInput { ref field, .. } if field == "code"));
}

#[tokio::test]
async fn test_list_get_and_remove_items() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let first = inventory
        .scan_item(&ScanItem::code("first"))
        .await
        .expect("Failed to scan item");
    let second = inventory
        .scan_item(&ScanItem::code("second"))
        .await
        .expect("Failed to scan item");

    let items = inventory.list_items().await.expect("Failed to list items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, first.id);
    assert_eq!(items[1].id, second.id);

    let fetched = inventory
        .get_item(&Id { id: second.id })
        .await
        .expect("Failed to get item")
        .expect("Item should exist");
    assert_eq!(fetched.scanned_code, "second");

    let removed = inventory
        .remove_item(&Id { id: first.id })
        .await
        .expect("Failed to remove item");
    assert_eq!(removed.id, first.id);

    assert!(inventory
        .get_item(&Id { id: first.id })
        .await
        .expect("Failed to get item")
        .is_none());

    let err = inventory.remove_item(&Id { id: first.id }).await.unwrap_err();
    assert!(matches!(err, RxError::ItemNotFound { id } if id == first.id));
}

#[tokio::test]
async fn test_start_session_uses_template_for_code() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let item = inventory
        .scan_item(&ScanItem::code("COMPOUNDING"))
        .await
        .expect("Failed to scan item");

    let mut session = inventory
        .start_session(&Id { id: item.id })
        .await
        .expect("Failed to start session");

    assert_eq!(session.current_phase(), SessionPhase::Idle);
    assert_eq!(session.process().name, "Compounding Medication");
    assert_eq!(session.start().status_text, "Step 1");
}

#[tokio::test]
async fn test_sessions_do_not_share_progress() {
    let (_temp_dir, inventory) = create_test_inventory().await;
    let item = inventory
        .scan_item(&ScanItem::code("NS-0.9"))
        .await
        .expect("Failed to scan item");

    let mut first = inventory
        .start_session(&Id { id: item.id })
        .await
        .expect("Failed to start session");
    first.start();
    first.advance();
    assert_eq!(first.process().completed_count(), 1);

    let second = inventory
        .start_session(&Id { id: item.id })
        .await
        .expect("Failed to start session");
    assert_eq!(second.process().completed_count(), 0);
}

#[tokio::test]
async fn test_session_for_fetched_item() {
    let (_temp_dir, inventory) = create_test_inventory().await;
    let item = inventory
        .scan_item(&ScanItem::code("compounding"))
        .await
        .expect("Failed to scan item");

    let session = inventory.session_for(&item);
    assert_eq!(session.current_phase(), SessionPhase::Idle);
    assert_eq!(session.process().name, "Compounding Medication");

    let started = inventory
        .start_session(&Id { id: item.id })
        .await
        .expect("Failed to start session");
    assert_eq!(started.process(), session.process());
}

#[tokio::test]
async fn test_start_session_missing_item() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    let err = inventory.start_session(&Id { id: 42 }).await.unwrap_err();
    assert!(matches!(err, RxError::ItemNotFound { id: 42 }));
}

#[tokio::test]
async fn test_template_lookup() {
    let (_temp_dir, inventory) = create_test_inventory().await;

    assert_eq!(
        inventory.template("saline").expect("saline template").name,
        "Saline Solution Dilution"
    );
    let err = inventory.template("insulin").unwrap_err();
    assert!(matches!(err, RxError::TemplateNotFound { ref key } if key == "insulin"));
}

#[tokio::test]
async fn test_build_with_templates_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut templates = NamedTempFile::new().expect("Failed to create temp file");
    templates
        .write_all(
            br#"{"templates": {"insulin": {"name": "Insulin Drip", "steps": [
                {"id": 1, "title": "Step 1", "description": "Check the order."}
            ]}}}"#,
        )
        .expect("Failed to write templates");

    let inventory = InventoryBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_templates_file(Some(templates.path()))
        .build()
        .await
        .expect("Failed to create inventory");

    assert_eq!(
        inventory.template("insulin").expect("insulin template").len(),
        1
    );
}

#[tokio::test]
async fn test_build_with_invalid_templates_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = InventoryBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_templates_file(Some(temp_dir.path().join("missing.json")))
        .build()
        .await;

    assert!(matches!(result, Err(RxError::FileSystem { .. })));
}
