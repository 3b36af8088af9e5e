//! The socket grid: six hex sockets, twelve item sockets, and the chassis core.
//!
//! The host application owns the grid and mutates it through the `set_*`
//! operations below. The resolver and matcher only ever borrow it.

use std::fmt;

use crate::config::MatrixConfig;
use crate::state::{CollectibleItem, GridError, ItemId, LegendaryModule, ModuleId};
use crate::topology::{HexSlot, ItemSlot};

/// Chassis selection held by the core slot. Carries no perks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chassis(pub String);

impl fmt::Display for Chassis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current occupancy of every socket.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SocketGrid {
    hexes: [Option<LegendaryModule>; MatrixConfig::HEX_SLOTS],
    items: [Option<CollectibleItem>; MatrixConfig::ITEM_SLOTS],
    chassis: Option<Chassis>,
}

impl SocketGrid {
    /// Creates an empty grid (session start).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self, slot: ItemSlot) -> Option<&CollectibleItem> {
        self.items[slot.index()].as_ref()
    }

    pub fn hex(&self, slot: HexSlot) -> Option<&LegendaryModule> {
        self.hexes[slot.index()].as_ref()
    }

    pub fn chassis(&self) -> Option<&Chassis> {
        self.chassis.as_ref()
    }

    /// Places or clears an item socket, returning the previous occupant.
    ///
    /// Placing an item whose id already sits in a different slot is
    /// rejected; move it by clearing the old slot first.
    pub fn set_item_slot(
        &mut self,
        index: usize,
        item: Option<CollectibleItem>,
    ) -> Result<Option<CollectibleItem>, GridError> {
        let slot = ItemSlot::new(index)?;
        if let Some(incoming) = &item {
            match self.find_item(incoming.id()) {
                Some(existing) if existing != slot => {
                    return Err(GridError::ItemAlreadySocketed {
                        item: incoming.id(),
                        slot: existing,
                    });
                }
                _ => {}
            }
        }
        Ok(core::mem::replace(&mut self.items[slot.index()], item))
    }

    /// Places or clears a hex socket, returning the previous occupant.
    pub fn set_hex_slot(
        &mut self,
        index: usize,
        module: Option<LegendaryModule>,
    ) -> Result<Option<LegendaryModule>, GridError> {
        let slot = HexSlot::new(index)?;
        if let Some(incoming) = &module {
            match self.find_module(incoming.id()) {
                Some(existing) if existing != slot => {
                    return Err(GridError::ModuleAlreadySocketed {
                        module: incoming.id(),
                        slot: existing,
                    });
                }
                _ => {}
            }
        }
        Ok(core::mem::replace(&mut self.hexes[slot.index()], module))
    }

    /// Replaces the chassis selection, returning the previous one.
    pub fn set_chassis(&mut self, chassis: Option<Chassis>) -> Option<Chassis> {
        core::mem::replace(&mut self.chassis, chassis)
    }

    /// Clears the unseen marker of a socketed item. Returns true if it was set.
    pub fn mark_item_seen(&mut self, slot: ItemSlot) -> bool {
        self.items[slot.index()]
            .as_mut()
            .is_some_and(CollectibleItem::mark_seen)
    }

    pub fn find_item(&self, id: ItemId) -> Option<ItemSlot> {
        self.items()
            .find(|(_, item)| item.id() == id)
            .map(|(slot, _)| slot)
    }

    pub fn find_module(&self, id: ModuleId) -> Option<HexSlot> {
        self.hexes()
            .find(|(_, module)| module.id() == id)
            .map(|(slot, _)| slot)
    }

    /// Occupied item sockets in index order.
    pub fn items(&self) -> impl Iterator<Item = (ItemSlot, &CollectibleItem)> {
        ItemSlot::all().filter_map(|slot| self.item(slot).map(|item| (slot, item)))
    }

    /// Occupied hex sockets in index order.
    pub fn hexes(&self) -> impl Iterator<Item = (HexSlot, &LegendaryModule)> {
        HexSlot::all().filter_map(|slot| self.hex(slot).map(|module| (slot, module)))
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Option::is_none) && self.hexes.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ModuleKind, Origin, Quality, Rarity};
    use crate::topology::SlotError;

    fn item(id: u64) -> CollectibleItem {
        CollectibleItem::new(
            ItemId(id),
            Quality::Damaged,
            Rarity::Astral,
            Some(Origin::Combat),
        )
    }

    fn module(id: u32) -> LegendaryModule {
        LegendaryModule::new(ModuleId(id), ModuleKind::EcoDmg, 1).unwrap()
    }

    #[test]
    fn starts_empty() {
        let grid = SocketGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.items().count(), 0);
        assert!(grid.chassis().is_none());
    }

    #[test]
    fn set_item_slot_returns_previous_occupant() {
        let mut grid = SocketGrid::new();
        assert_eq!(grid.set_item_slot(3, Some(item(1))).unwrap(), None);
        let previous = grid.set_item_slot(3, Some(item(2))).unwrap();
        assert_eq!(previous.map(|i| i.id()), Some(ItemId(1)));
        let cleared = grid.set_item_slot(3, None).unwrap();
        assert_eq!(cleared.map(|i| i.id()), Some(ItemId(2)));
        assert!(grid.is_empty());
    }

    #[test]
    fn rejects_same_item_in_two_slots() {
        let mut grid = SocketGrid::new();
        grid.set_item_slot(0, Some(item(9))).unwrap();
        let err = grid.set_item_slot(7, Some(item(9))).unwrap_err();
        assert_eq!(
            err,
            GridError::ItemAlreadySocketed {
                item: ItemId(9),
                slot: ItemSlot::new(0).unwrap(),
            }
        );
        // Re-placing into the same slot is a plain replacement.
        assert!(grid.set_item_slot(0, Some(item(9))).is_ok());
    }

    #[test]
    fn rejects_same_module_on_two_hexes() {
        let mut grid = SocketGrid::new();
        grid.set_hex_slot(1, Some(module(4))).unwrap();
        assert!(matches!(
            grid.set_hex_slot(2, Some(module(4))),
            Err(GridError::ModuleAlreadySocketed { .. })
        ));
    }

    #[test]
    fn out_of_range_index_fails_fast() {
        let mut grid = SocketGrid::new();
        assert_eq!(
            grid.set_item_slot(12, Some(item(1))),
            Err(GridError::Slot(SlotError::ItemSlotOutOfRange { index: 12 }))
        );
        assert_eq!(
            grid.set_hex_slot(6, None),
            Err(GridError::Slot(SlotError::HexSlotOutOfRange { index: 6 }))
        );
    }

    #[test]
    fn mark_item_seen_touches_only_the_flag() {
        let mut grid = SocketGrid::new();
        grid.set_item_slot(4, Some(item(1).unseen())).unwrap();
        let slot = ItemSlot::new(4).unwrap();
        assert!(grid.mark_item_seen(slot));
        assert!(!grid.item(slot).unwrap().is_unseen());
        assert!(!grid.mark_item_seen(ItemSlot::new(5).unwrap()));
    }
}
