//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{models::ScannedItem, templates::TemplateCatalog};

/// Newtype wrapper for displaying recorded items.
///
/// ```rust
/// use rx_core::{display::Items, models::ScannedItem};
/// use jiff::Timestamp;
///
/// let items = Items(vec![ScannedItem {
///     id: 1,
///     display_name: "NS-0.9 Instruction".to_string(),
///     scanned_code: "NS-0.9".to_string(),
///     asset_reference: "bottle".to_string(),
///     timestamp: Timestamp::now(),
/// }]);
/// assert!(items.to_string().contains("## 1. NS-0.9 Instruction"));
/// assert_eq!(Items(vec![]).to_string(), "No items available.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Items(pub Vec<ScannedItem>);

impl Items {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&ScannedItem> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScannedItem> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = ScannedItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Items {
    type Item = ScannedItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a ScannedItem;
    type IntoIter = std::slice::Iter<'a, ScannedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No items available.");
        }
        for item in &self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Compact listing of a template catalog, one line per template.
pub struct Templates<'a>(pub &'a TemplateCatalog);

impl fmt::Display for Templates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No templates available.");
        }
        for (key, process) in self.0.iter() {
            let marker = if key == self.0.default_key() {
                " (default)"
            } else {
                ""
            };
            writeln!(
                f,
                "- **{key}**: {} ({} steps){marker}",
                process.name,
                process.len()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_listing_marks_default() {
        let catalog = TemplateCatalog::builtin();
        let output = Templates(&catalog).to_string();

        assert!(output.contains("- **compounding**: Compounding Medication (4 steps)\n"));
        assert!(output.contains("- **saline**: Saline Solution Dilution (4 steps) (default)\n"));
    }
}
