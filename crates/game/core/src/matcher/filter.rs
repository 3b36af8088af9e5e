//! Filter configuration for bulk item selection.
//!
//! The host owns an [`ItemFilter`] and hands both halves to the matcher.
//! Every field is optional: `None` means "any" and never rejects.

use std::collections::BTreeMap;

use crate::config::MatrixConfig;
use crate::perk::{PerkKind, PerkLevel, PerkPair};
use crate::state::{CollectibleItem, Origin, Quality, Rarity};

/// Constraints on an item's own attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoreFilter {
    pub quality: Option<Quality>,
    pub rarity: Option<Rarity>,
    pub origin: Option<Origin>,
}

impl CoreFilter {
    /// True when every active constraint holds for `item`.
    ///
    /// An item with no recognized origin fails an active origin constraint.
    pub fn accepts(&self, item: &CollectibleItem) -> bool {
        self.quality.is_none_or(|quality| item.quality() == quality)
            && self.rarity.is_none_or(|rarity| item.rarity() == rarity)
            && self.origin.is_none_or(|origin| item.origin() == Some(origin))
    }

    pub fn is_active(&self) -> bool {
        self.quality.is_some() || self.rarity.is_some() || self.origin.is_some()
    }
}

/// Requirement on one perk level.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerkFilter {
    pub active: bool,
    /// Minimum perk value in percent.
    pub threshold: f64,
    /// Narrows levels 3, 4 and 6 to one origin; for pair levels 7 and 8 the
    /// pair must contain it.
    pub origin: Option<Origin>,
    /// Narrows level 4.
    pub quality: Option<Quality>,
    /// Narrows levels 7 and 8 to one exact pair.
    pub pair: Option<PerkPair>,
}

impl PerkFilter {
    /// Active filter requiring `value >= threshold`.
    pub fn at_least(threshold: f64) -> Self {
        Self {
            active: true,
            threshold,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    #[must_use]
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    #[must_use]
    pub fn with_pair(mut self, pair: PerkPair) -> Self {
        self.pair = Some(pair);
        self
    }

    /// True when a perk of `kind` is one this filter looks for.
    ///
    /// Narrowing fields only apply to the levels that carry the matching
    /// parameter; they are ignored everywhere else.
    pub fn admits(&self, kind: &PerkKind) -> bool {
        match *kind {
            PerkKind::NeighborOrigin(origin) | PerkKind::LegendaryOrigin(origin) => {
                self.origin.is_none_or(|wanted| wanted == origin)
            }
            PerkKind::NeighborCondition { quality, origin } => {
                self.origin.is_none_or(|wanted| wanted == origin)
                    && self.quality.is_none_or(|wanted| wanted == quality)
            }
            PerkKind::Pair(pair) | PerkKind::PairSameLevel(pair) => {
                self.origin.is_none_or(|wanted| pair.contains(wanted))
                    && self.pair.is_none_or(|wanted| wanted == pair)
            }
            PerkKind::BaseEfficiency
            | PerkKind::NeighborAny
            | PerkKind::LegendaryAny
            | PerkKind::MatrixSameTypeRarity => true,
        }
    }
}

/// Per-level perk requirements, one slot for each of the nine levels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "BTreeMap<PerkLevel, PerkFilter>",
        into = "BTreeMap<PerkLevel, PerkFilter>"
    )
)]
pub struct PerkFilters {
    levels: [PerkFilter; MatrixConfig::PERK_LEVELS],
}

impl PerkFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: PerkLevel) -> &PerkFilter {
        &self.levels[level.slot()]
    }

    pub fn set(&mut self, level: PerkLevel, filter: PerkFilter) {
        self.levels[level.slot()] = filter;
    }

    /// Sets one level (builder pattern).
    #[must_use]
    pub fn with(mut self, level: PerkLevel, filter: PerkFilter) -> Self {
        self.set(level, filter);
        self
    }

    /// Active levels in ascending order.
    pub fn active(&self) -> impl Iterator<Item = (PerkLevel, &PerkFilter)> {
        PerkLevel::ALL
            .into_iter()
            .zip(self.levels.iter())
            .filter(|(_, filter)| filter.active)
    }

    pub fn is_active(&self) -> bool {
        self.levels.iter().any(|filter| filter.active)
    }

    /// Deactivates and clears every level.
    pub fn reset(&mut self) {
        self.levels = Default::default();
    }
}

impl From<BTreeMap<PerkLevel, PerkFilter>> for PerkFilters {
    fn from(map: BTreeMap<PerkLevel, PerkFilter>) -> Self {
        map.into_iter()
            .fold(Self::default(), |filters, (level, filter)| filters.with(level, filter))
    }
}

impl From<PerkFilters> for BTreeMap<PerkLevel, PerkFilter> {
    fn from(filters: PerkFilters) -> Self {
        PerkLevel::ALL
            .into_iter()
            .zip(filters.levels)
            .filter(|(_, filter)| *filter != PerkFilter::default())
            .collect()
    }
}

/// Both filter halves, as held by the inventory screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemFilter {
    pub core: CoreFilter,
    pub perks: PerkFilters,
}

impl ItemFilter {
    pub fn new(core: CoreFilter, perks: PerkFilters) -> Self {
        Self { core, perks }
    }

    /// See [`super::matches`].
    pub fn matches(&self, item: Option<&CollectibleItem>) -> bool {
        super::matches(item, &self.core, &self.perks)
    }

    pub fn is_active(&self) -> bool {
        self.core.is_active() || self.perks.is_active()
    }

    pub fn reset(&mut self) {
        self.core = CoreFilter::default();
        self.perks.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemId;

    #[test]
    fn default_filters_are_inactive() {
        assert!(!CoreFilter::default().is_active());
        assert!(!PerkFilters::default().is_active());
        assert!(!ItemFilter::default().is_active());
    }

    #[test]
    fn core_filter_origin_rejects_unknown_origin() {
        let item = CollectibleItem::new(ItemId(1), Quality::Broken, Rarity::Void, None);
        let filter = CoreFilter {
            origin: Some(Origin::Combat),
            ..CoreFilter::default()
        };
        assert!(!filter.accepts(&item));
        assert!(CoreFilter::default().accepts(&item));
    }

    #[test]
    fn origin_narrowing_ignored_on_unparameterized_levels() {
        let filter = PerkFilter::at_least(1.0).with_origin(Origin::Defensive);
        assert!(filter.admits(&PerkKind::NeighborAny));
        assert!(filter.admits(&PerkKind::MatrixSameTypeRarity));
        assert!(!filter.admits(&PerkKind::NeighborOrigin(Origin::Economic)));
        assert!(filter.admits(&PerkKind::LegendaryOrigin(Origin::Defensive)));
    }

    #[test]
    fn pair_narrowing_uses_contains_and_exact_pair() {
        let eco_def = PerkPair::new(Origin::Defensive, Origin::Economic);
        let by_origin = PerkFilter::at_least(0.0).with_origin(Origin::Economic);
        assert!(by_origin.admits(&PerkKind::Pair(eco_def)));
        assert!(!by_origin.admits(&PerkKind::Pair(PerkPair::new(Origin::Combat, Origin::Defensive))));

        let by_pair = PerkFilter::at_least(0.0).with_pair(eco_def);
        assert!(by_pair.admits(&PerkKind::PairSameLevel(eco_def)));
        assert!(!by_pair.admits(&PerkKind::PairSameLevel(PerkPair::new(
            Origin::Economic,
            Origin::Economic
        ))));
    }

    #[test]
    fn reset_clears_everything() {
        let mut filter = ItemFilter::new(
            CoreFilter {
                rarity: Some(Rarity::Divine),
                ..CoreFilter::default()
            },
            PerkFilters::new().with(PerkLevel::Alpha, PerkFilter::at_least(10.0)),
        );
        assert!(filter.is_active());
        filter.reset();
        assert!(!filter.is_active());
        assert_eq!(filter, ItemFilter::default());
    }

    #[test]
    fn map_conversion_keeps_configured_levels() {
        let filters = PerkFilters::new()
            .with(PerkLevel::Base, PerkFilter::at_least(3.0))
            .with(PerkLevel::HarmonyPair, PerkFilter::at_least(12.0));
        let map: BTreeMap<PerkLevel, PerkFilter> = filters.into();
        assert_eq!(map.len(), 2);
        assert_eq!(PerkFilters::from(map), filters);
    }
}
