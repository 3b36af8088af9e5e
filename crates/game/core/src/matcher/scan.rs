//! Bulk inventory selection.
//!
//! The inventory screen's "keep matching" and "discard matching" actions
//! select slot indices here; the host performs the actual moves. The
//! storage sort reorders unprotected slots in place.

use core::cmp::Reverse;

use super::ItemFilter;
use crate::config::MatrixConfig;
use crate::state::{CollectibleItem, Rarity};

/// Indices of occupied, unprotected slots that pass `filter`.
pub fn select_matching(
    inventory: &[Option<CollectibleItem>],
    filter: &ItemFilter,
    config: &MatrixConfig,
) -> Vec<usize> {
    select(inventory, config, |item| filter.matches(Some(item)))
}

/// Indices of occupied, unprotected slots that fail `filter`.
pub fn select_rejected(
    inventory: &[Option<CollectibleItem>],
    filter: &ItemFilter,
    config: &MatrixConfig,
) -> Vec<usize> {
    select(inventory, config, |item| !filter.matches(Some(item)))
}

/// Reorders the unprotected tail of `inventory` in place.
///
/// Matching items come first, then the rest; each group runs from rarest
/// to most common and keeps its existing order on ties. Empty slots move
/// to the end. Protected slots and the inventory length are unchanged.
pub fn sort_inventory(
    inventory: &mut [Option<CollectibleItem>],
    filter: &ItemFilter,
    config: &MatrixConfig,
) {
    let Some(storage) = inventory.get_mut(config.protected_slots..) else {
        return;
    };
    storage.sort_by_cached_key(|slot| sort_key(slot.as_ref(), filter));
}

fn sort_key(
    slot: Option<&CollectibleItem>,
    filter: &ItemFilter,
) -> (bool, bool, Reverse<Rarity>) {
    match slot {
        Some(item) => (false, !filter.matches(Some(item)), Reverse(item.rarity())),
        None => (true, true, Reverse(Rarity::Scrap)),
    }
}

fn select(
    inventory: &[Option<CollectibleItem>],
    config: &MatrixConfig,
    mut keep: impl FnMut(&CollectibleItem) -> bool,
) -> Vec<usize> {
    inventory
        .iter()
        .enumerate()
        .skip(config.protected_slots)
        .filter_map(|(index, slot)| slot.as_ref().filter(|item| keep(item)).map(|_| index))
        .collect()
}
