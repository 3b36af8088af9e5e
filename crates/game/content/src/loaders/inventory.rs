//! Inventory loader.

use std::collections::HashSet;
use std::path::Path;

use matrix_core::CollectibleItem;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Inventory structure for RON files. Slot order is significant: the leading
/// slots are the protected ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFile {
    pub slots: Vec<Option<CollectibleItem>>,
}

/// Loader for inventories from RON files.
pub struct InventoryLoader;

impl InventoryLoader {
    /// Load inventory slots from a RON file containing an [`InventoryFile`].
    pub fn load(path: &Path) -> LoadResult<Vec<Option<CollectibleItem>>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse inventory slots from RON text.
    ///
    /// An item id may appear in at most one slot.
    pub fn parse(content: &str) -> LoadResult<Vec<Option<CollectibleItem>>> {
        let inventory: InventoryFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse inventory RON: {}", e))?;

        let mut seen = HashSet::new();
        for (index, slot) in inventory.slots.iter().enumerate() {
            let Some(item) = slot else {
                continue;
            };
            if !seen.insert(item.id()) {
                anyhow::bail!("Duplicate {} in inventory slot {}", item.id(), index);
            }
        }
        tracing::debug!(
            slots = inventory.slots.len(),
            occupied = seen.len(),
            "loaded inventory"
        );

        Ok(inventory.slots)
    }
}
