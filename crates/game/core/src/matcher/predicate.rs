use super::{CoreFilter, PerkFilter, PerkFilters};
use crate::perk::{PerkInstance, PerkLevel};
use crate::state::CollectibleItem;

/// First perk on `item` at `level` that `filter` admits.
///
/// Perks are searched in the item's own order, so an item carrying two
/// perks of the same level is judged by the first admitted one.
pub fn locate_perk<'a>(
    item: &'a CollectibleItem,
    level: PerkLevel,
    filter: &PerkFilter,
) -> Option<&'a PerkInstance> {
    item.perks().iter().find(|perk| {
        perk.kind()
            .is_some_and(|kind| kind.level() == level && filter.admits(&kind))
    })
}

/// Decides whether an inventory item satisfies both filter halves.
///
/// A `None` item always matches; empty slots are the scan's concern.
/// Active perk levels are conjunctive: each one needs an admitted perk whose
/// value reaches the threshold.
pub fn matches(item: Option<&CollectibleItem>, core: &CoreFilter, perks: &PerkFilters) -> bool {
    let Some(item) = item else {
        return true;
    };

    if !core.accepts(item) {
        return false;
    }

    perks.active().all(|(level, filter)| {
        locate_perk(item, level, filter).is_some_and(|perk| perk.value() >= filter.threshold)
    })
}
