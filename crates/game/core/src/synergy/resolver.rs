//! Synergy resolver: total and per-perk boost for one item slot.
//!
//! Resolution reads the grid, never writes it, and touches only the slot's
//! neighborhood (three item neighbors, two hexes, three hex pairs), so it is
//! cheap enough to run for every visible slot on every frame.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use super::{GlobalModifiers, PerkResult, SynergyReport};
use crate::config::MatrixConfig;
use crate::perk::PerkKind;
use crate::state::{CollectibleItem, LegendaryModule, SocketGrid};
use crate::topology::{self, ItemSlot, SlotError};

/// Resolves the boost of the item in slot `index` (0..12).
///
/// An empty slot yields [`SynergyReport::empty`]. An index outside the item
/// slots is a caller bug and is rejected.
pub fn resolve(
    grid: &SocketGrid,
    index: usize,
    modifiers: &GlobalModifiers,
) -> Result<SynergyReport, SlotError> {
    let slot = ItemSlot::new(index)?;
    Ok(resolve_slot(grid, slot, modifiers))
}

/// Resolves an already validated slot.
pub fn resolve_slot(
    grid: &SocketGrid,
    slot: ItemSlot,
    modifiers: &GlobalModifiers,
) -> SynergyReport {
    let Some(item) = grid.item(slot) else {
        return SynergyReport::empty();
    };

    let neighborhood = Neighborhood::gather(grid, slot);
    let mut perk_results: BTreeMap<PerkKind, PerkResult> = BTreeMap::new();
    let mut total_pct = 0.0;

    for perk in item.perks() {
        let Some(kind) = perk.kind() else {
            continue;
        };
        let count = neighborhood.count(item, kind);
        let active_value = (perk.value() + modifiers.resonance_pct) * f64::from(count);
        total_pct += active_value;

        let entry = perk_results.entry(kind).or_default();
        entry.count = count;
        entry.active_value += active_value;
    }

    if modifiers.overdrive {
        total_pct += MatrixConfig::OVERDRIVE_BONUS_PCT;
    }

    SynergyReport {
        total_boost: total_pct / 100.0,
        perk_results,
    }
}

/// Reports for every occupied item slot, in index order.
pub fn resolve_grid(
    grid: &SocketGrid,
    modifiers: &GlobalModifiers,
) -> Vec<(ItemSlot, SynergyReport)> {
    grid.items()
        .map(|(slot, _)| (slot, resolve_slot(grid, slot, modifiers)))
        .collect()
}

/// Combined boost the chassis core draws from its neighbors (the inner ring).
pub fn chassis_resonance(grid: &SocketGrid, modifiers: &GlobalModifiers) -> f64 {
    topology::chassis_item_neighbors()
        .into_iter()
        .filter(|slot| grid.item(*slot).is_some())
        .map(|slot| resolve_slot(grid, slot, modifiers).total_boost)
        .sum()
}

/// Occupied neighbors of one item slot.
struct Neighborhood<'a> {
    items: ArrayVec<&'a CollectibleItem, 3>,
    hexes: ArrayVec<&'a LegendaryModule, { MatrixConfig::ITEM_HEX_NEIGHBORS }>,
    pairs: ArrayVec<(&'a LegendaryModule, &'a LegendaryModule), { MatrixConfig::ITEM_HEX_PAIRS }>,
}

impl<'a> Neighborhood<'a> {
    fn gather(grid: &'a SocketGrid, slot: ItemSlot) -> Self {
        let items = topology::item_neighbors(slot)
            .into_iter()
            .filter_map(|neighbor| grid.item(neighbor))
            .collect();
        let hexes = topology::item_hex_neighbors(slot)
            .into_iter()
            .filter_map(|hex| grid.hex(hex))
            .collect();
        let pairs = topology::item_hex_pairs(slot)
            .into_iter()
            .filter_map(|(a, b)| Some((grid.hex(a)?, grid.hex(b)?)))
            .collect();
        Self {
            items,
            hexes,
            pairs,
        }
    }

    /// Number of matches for `kind` on behalf of `holder`.
    fn count(&self, holder: &CollectibleItem, kind: PerkKind) -> u32 {
        let matches = match kind {
            PerkKind::BaseEfficiency => 1,
            PerkKind::NeighborAny => self.items.len(),
            PerkKind::NeighborOrigin(origin) => self
                .items
                .iter()
                .filter(|item| item.origin() == Some(origin))
                .count(),
            PerkKind::NeighborCondition { quality, origin } => self
                .items
                .iter()
                .filter(|item| item.origin() == Some(origin) && item.quality() == quality)
                .count(),
            PerkKind::LegendaryAny => self.hexes.len(),
            PerkKind::LegendaryOrigin(origin) => self
                .hexes
                .iter()
                .filter(|module| module.category() == origin)
                .count(),
            PerkKind::Pair(pair) => self
                .pairs
                .iter()
                .filter(|(a, b)| pair.matches(a.category(), b.category()))
                .count(),
            PerkKind::PairSameLevel(pair) => self
                .pairs
                .iter()
                .filter(|(a, b)| pair.matches(a.category(), b.category()) && a.level() == b.level())
                .count(),
            PerkKind::MatrixSameTypeRarity => self
                .items
                .iter()
                .filter(|item| item.rarity() == holder.rarity() && item.shares_origin_with(holder))
                .count(),
        };
        // At most three neighbors or pairs, always fits.
        matches as u32
    }
}
