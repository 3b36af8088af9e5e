//! Collectible item types.
//!
//! Items are produced by loot generation (outside this crate) and are
//! immutable afterwards, except for the transient `unseen` marker the
//! inventory UI clears when the player first looks at them.

use super::{ItemId, Origin};
use crate::perk::PerkInstance;

/// Condition tier of an item, ordered best to worst.
///
/// `Corrupted` is the exception to the ordering: it is rarer and has higher
/// variance rather than being strictly worse than `Broken`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Quality {
    Pristine,
    Damaged,
    Broken,
    Corrupted,
}

impl Quality {
    pub const ALL: [Quality; 4] = [
        Quality::Pristine,
        Quality::Damaged,
        Quality::Broken,
        Quality::Corrupted,
    ];

    /// Code used inside perk ids.
    ///
    /// Pristine is written `new` in perk ids; `pri` (the filter label) is
    /// accepted on input so both spellings resolve to the same tier.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pristine => "new",
            Self::Damaged => "dam",
            Self::Broken => "bro",
            Self::Corrupted => "cor",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("pri") {
            return Some(Self::Pristine);
        }
        Self::ALL
            .into_iter()
            .find(|quality| quality.code().eq_ignore_ascii_case(code))
    }
}

/// Rarity tier, ordered from most common to rarest.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    Scrap,
    Anomalous,
    Quantum,
    Astral,
    Radiant,
    Void,
    Eternal,
    Divine,
    Singularity,
}

impl Rarity {
    pub const ALL: [Rarity; 9] = [
        Rarity::Scrap,
        Rarity::Anomalous,
        Rarity::Quantum,
        Rarity::Astral,
        Rarity::Radiant,
        Rarity::Void,
        Rarity::Eternal,
        Rarity::Divine,
        Rarity::Singularity,
    ];

    /// 1-based tier number (Scrap = 1, Singularity = 9).
    pub const fn tier(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_tier(tier: u8) -> Option<Self> {
        Self::ALL.get(usize::from(tier).checked_sub(1)?).copied()
    }
}

/// An item that can be socketed into the matrix.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectibleItem {
    id: ItemId,
    quality: Quality,
    rarity: Rarity,
    /// Arena the item was discovered in; `None` when the tag was not recognized.
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "crate::state::types::common::origin_tag")
    )]
    origin: Option<Origin>,
    #[cfg_attr(feature = "serde", serde(default))]
    perks: Vec<PerkInstance>,
    #[cfg_attr(feature = "serde", serde(default))]
    unseen: bool,
}

impl CollectibleItem {
    pub fn new(id: ItemId, quality: Quality, rarity: Rarity, origin: Option<Origin>) -> Self {
        Self {
            id,
            quality,
            rarity,
            origin,
            perks: Vec::new(),
            unseen: false,
        }
    }

    /// Appends a perk instance (builder pattern).
    #[must_use]
    pub fn with_perk(mut self, perk: PerkInstance) -> Self {
        self.perks.push(perk);
        self
    }

    #[must_use]
    pub fn with_perks(mut self, perks: impl IntoIterator<Item = PerkInstance>) -> Self {
        self.perks.extend(perks);
        self
    }

    /// Marks the item as not yet seen by the player (builder pattern).
    #[must_use]
    pub fn unseen(mut self) -> Self {
        self.unseen = true;
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    pub fn perks(&self) -> &[PerkInstance] {
        &self.perks
    }

    pub fn is_unseen(&self) -> bool {
        self.unseen
    }

    /// Clears the unseen marker. Returns true if it was set.
    pub fn mark_seen(&mut self) -> bool {
        core::mem::replace(&mut self.unseen, false)
    }

    /// True when both items come from the same recognized arena.
    pub fn shares_origin_with(&self, other: &CollectibleItem) -> bool {
        matches!((self.origin, other.origin), (Some(a), Some(b)) if a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_codes_accept_filter_alias() {
        assert_eq!(Quality::from_code("new"), Some(Quality::Pristine));
        assert_eq!(Quality::from_code("PRI"), Some(Quality::Pristine));
        assert_eq!(Quality::from_code("cor"), Some(Quality::Corrupted));
        assert_eq!(Quality::from_code("any"), None);
    }

    #[test]
    fn rarity_tiers_are_one_based() {
        assert_eq!(Rarity::Scrap.tier(), 1);
        assert_eq!(Rarity::Singularity.tier(), 9);
        assert_eq!(Rarity::from_tier(5), Some(Rarity::Radiant));
        assert_eq!(Rarity::from_tier(0), None);
        assert_eq!(Rarity::from_tier(10), None);
    }

    #[test]
    fn unseen_flag_clears_once() {
        let mut item =
            CollectibleItem::new(ItemId(1), Quality::Broken, Rarity::Void, None).unseen();
        assert!(item.is_unseen());
        assert!(item.mark_seen());
        assert!(!item.mark_seen());
    }

    #[test]
    fn unknown_origin_never_shares() {
        let a = CollectibleItem::new(ItemId(1), Quality::Broken, Rarity::Void, None);
        let b = CollectibleItem::new(ItemId(2), Quality::Broken, Rarity::Void, None);
        assert!(!a.shares_origin_with(&b));
    }
}
