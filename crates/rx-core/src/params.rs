//! Parameter structures for core operations.
//!
//! These carry no framework derives so that each interface (the CLI today)
//! can wrap them with its own argument types and convert via `From`.

/// Record a scanned code.
#[derive(Debug, Clone)]
pub struct ScanItem {
    /// Raw payload of the scanned code
    pub code: String,
    /// Name to show in listings; defaults to `"{code} Instruction"`
    pub display_name: Option<String>,
    /// Asset to overlay for this item; defaults to `"bottle"`
    pub asset_reference: Option<String>,
}

impl ScanItem {
    /// Scan parameters using the default name and asset.
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: None,
            asset_reference: None,
        }
    }
}

/// Identify an item by ID.
#[derive(Debug, Clone, Copy)]
pub struct Id {
    pub id: u64,
}
