//! Grid snapshot loader.
//!
//! A snapshot lists occupied sockets only. Loading replays them through the
//! grid's placement operations, so a snapshot that places one item twice or
//! names a slot outside the matrix is rejected the same way a live placement
//! would be.

use std::path::Path;

use matrix_core::{Chassis, CollectibleItem, GridError, LegendaryModule, SocketGrid};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A legendary module and the hex socket it sits in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexPlacement {
    pub slot: usize,
    pub module: LegendaryModule,
}

/// A collectible item and the item socket it sits in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub slot: usize,
    pub item: CollectibleItem,
}

/// Grid snapshot structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSnapshot {
    pub chassis: Option<String>,
    pub hexes: Vec<HexPlacement>,
    pub items: Vec<ItemPlacement>,
}

impl GridSnapshot {
    /// Captures the occupied sockets of `grid`.
    pub fn capture(grid: &SocketGrid) -> Self {
        Self {
            chassis: grid.chassis().map(|chassis| chassis.0.clone()),
            hexes: grid
                .hexes()
                .map(|(slot, module)| HexPlacement {
                    slot: slot.index(),
                    module: *module,
                })
                .collect(),
            items: grid
                .items()
                .map(|(slot, item)| ItemPlacement {
                    slot: slot.index(),
                    item: item.clone(),
                })
                .collect(),
        }
    }

    /// Replays the snapshot onto an empty grid.
    pub fn into_grid(self) -> Result<SocketGrid, GridError> {
        let mut grid = SocketGrid::new();
        grid.set_chassis(self.chassis.map(Chassis));
        for placement in self.hexes {
            grid.set_hex_slot(placement.slot, Some(placement.module))?;
        }
        for placement in self.items {
            grid.set_item_slot(placement.slot, Some(placement.item))?;
        }
        Ok(grid)
    }
}

/// Loader for grid snapshots from RON files.
pub struct GridLoader;

impl GridLoader {
    /// Load a grid from a RON file containing a [`GridSnapshot`].
    pub fn load(path: &Path) -> LoadResult<SocketGrid> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a grid from RON text.
    pub fn parse(content: &str) -> LoadResult<SocketGrid> {
        let snapshot: GridSnapshot = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse grid snapshot RON: {}", e))?;
        tracing::debug!(
            hexes = snapshot.hexes.len(),
            items = snapshot.items.len(),
            "loaded grid snapshot"
        );

        snapshot
            .into_grid()
            .map_err(|e| anyhow::anyhow!("Invalid grid snapshot: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_core::{GlobalModifiers, ItemId, ItemSlot, ModuleKind, Origin, resolve};
    use std::io::Write;

    const SNAPSHOT: &str = r#"
(
    chassis: Some("vanguard"),
    hexes: [
        (slot: 0, module: (id: ModuleId(1), kind: EcoDmg, level: 3)),
        (slot: 1, module: (id: ModuleId(2), kind: EcoXp, level: 2)),
    ],
    items: [
        (
            slot: 0,
            item: (
                id: ItemId(10),
                quality: Damaged,
                rarity: Quantum,
                origin: "ECONOMIC HEX",
                perks: [
                    (id: "base_efficiency", value: 5.0, range: (min: 2.0, max: 5.0)),
                    (id: "neighbor_any_all", value: 4.0),
                    (id: "pair_eco_eco", value: 10.0),
                ],
            ),
        ),
        (slot: 1, item: (id: ItemId(11), quality: Broken, rarity: Scrap, origin: "UNKNOWN SECTOR")),
        (slot: 6, item: (id: ItemId(12), quality: Pristine, rarity: Void, origin: "def")),
    ],
)
"#;

    #[test]
    fn test_parse_snapshot_into_grid() {
        let grid = GridLoader::parse(SNAPSHOT).expect("snapshot parses");

        assert_eq!(grid.chassis().map(|c| c.0.as_str()), Some("vanguard"));
        assert_eq!(grid.hexes().count(), 2);
        assert_eq!(grid.items().count(), 3);

        let unknown = grid.item(ItemSlot::new(1).unwrap()).unwrap();
        assert_eq!(unknown.origin(), None);
        let defensive = grid.item(ItemSlot::new(6).unwrap()).unwrap();
        assert_eq!(defensive.origin(), Some(Origin::Defensive));
        assert_eq!(
            grid.hex(matrix_core::HexSlot::new(0).unwrap()).map(|m| m.kind()),
            Some(ModuleKind::EcoDmg)
        );
    }

    #[test]
    fn test_loaded_grid_resolves() {
        let grid = GridLoader::parse(SNAPSHOT).expect("snapshot parses");
        let report = resolve(&grid, 0, &GlobalModifiers::NONE).expect("valid slot");
        // 5 + 4 * 2 + 10 * 1
        assert!((report.total_boost - 0.23).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_item_is_rejected() {
        let snapshot = r#"
(
    items: [
        (slot: 0, item: (id: ItemId(1), quality: Damaged, rarity: Scrap)),
        (slot: 3, item: (id: ItemId(1), quality: Damaged, rarity: Scrap)),
    ],
)
"#;
        let err = GridLoader::parse(snapshot).unwrap_err();
        assert!(err.to_string().contains("Invalid grid snapshot"), "{err}");
    }

    #[test]
    fn test_out_of_range_slot_is_rejected() {
        let snapshot = r#"(items: [(slot: 12, item: (id: ItemId(1), quality: Damaged, rarity: Scrap))])"#;
        assert!(GridLoader::parse(snapshot).is_err());
    }

    #[test]
    fn test_invalid_module_level_is_rejected() {
        let snapshot = r#"(hexes: [(slot: 2, module: (id: ModuleId(1), kind: ComCrit, level: 6))])"#;
        let err = GridLoader::parse(snapshot).unwrap_err();
        assert!(err.to_string().contains("Failed to parse grid snapshot RON"), "{err}");
    }

    #[test]
    fn test_capture_round_trips_through_file() {
        let grid = GridLoader::parse(SNAPSHOT).expect("snapshot parses");
        let text = ron::to_string(&GridSnapshot::capture(&grid)).expect("snapshot serializes");

        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(text.as_bytes()).expect("write snapshot");
        let reloaded = GridLoader::load(file.path()).expect("snapshot reloads");

        assert_eq!(reloaded, grid);
        assert_eq!(reloaded.find_item(ItemId(12)).map(|s| s.index()), Some(6));
    }
}
