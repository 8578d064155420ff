//! Scanned item model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Display name suffix given to a scan when no name is supplied.
pub const DEFAULT_NAME_SUFFIX: &str = "Instruction";

/// Asset reference given to a scan when none is supplied.
pub const DEFAULT_ASSET_REFERENCE: &str = "bottle";

/// A locally recorded scan of a medication code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScannedItem {
    /// Store-assigned identifier
    pub id: u64,

    /// Name shown in item listings
    pub display_name: String,

    /// Raw payload of the scanned code
    pub scanned_code: String,

    /// Identifier of the 3D asset the display layer overlays for this item
    pub asset_reference: String,

    /// When the code was scanned (UTC)
    pub timestamp: Timestamp,
}

impl ScannedItem {
    /// Display name used when a scan is recorded without one.
    pub fn default_display_name(scanned_code: &str) -> String {
        format!("{scanned_code} {DEFAULT_NAME_SUFFIX}")
    }
}
