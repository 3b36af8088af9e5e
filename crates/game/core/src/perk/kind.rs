//! Perk id grammar.
//!
//! Every perk id maps to exactly one [`PerkKind`]. This is the only parser
//! of perk ids in the crate; the resolver and the matcher both go through it,
//! so the two cannot disagree about what an id means.
//!
//! ```text
//! base_efficiency                 L1
//! neighbor_any_all                L2
//! neighbor_any_<origin>           L3   origin  = eco | com | def
//! neighbor_<quality>_<origin>     L4   quality = new | dam | bro | cor  (pri = new)
//! neighbor_leg_any                L5
//! neighbor_leg_<origin>           L6
//! pair_<origin>_<origin>          L7   unordered
//! pair_<origin>_<origin>_lvl      L8   unordered
//! matrix_same_type_rarity         L9
//! ```

use arrayvec::ArrayVec;
use core::fmt;
use core::str::FromStr;

use crate::state::{Origin, Quality};

/// Taxonomy level of a perk (1–9).
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
pub enum PerkLevel {
    /// Flat boost, always active.
    Base = 1,
    /// Per occupied item neighbor.
    Proximity = 2,
    /// Per item neighbor from one arena.
    Sector = 3,
    /// Per item neighbor with a given quality and arena.
    Condition = 4,
    /// Per occupied hex neighbor.
    Liaison = 5,
    /// Per hex neighbor of one category.
    Alpha = 6,
    /// Per adjacent module pair of given categories.
    SynergyPair = 7,
    /// Per adjacent module pair of given categories and equal level.
    HarmonyPair = 8,
    /// Per item neighbor with matching rarity and arena.
    Singularity = 9,
}

impl PerkLevel {
    pub const ALL: [PerkLevel; 9] = [
        PerkLevel::Base,
        PerkLevel::Proximity,
        PerkLevel::Sector,
        PerkLevel::Condition,
        PerkLevel::Liaison,
        PerkLevel::Alpha,
        PerkLevel::SynergyPair,
        PerkLevel::HarmonyPair,
        PerkLevel::Singularity,
    ];

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Zero-based position, for level-indexed tables.
    pub(crate) const fn slot(self) -> usize {
        self as usize - 1
    }
}

/// Unordered pair of module categories, stored lower category first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PerkPair {
    low: Origin,
    high: Origin,
}

impl PerkPair {
    pub fn new(a: Origin, b: Origin) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Every distinct pair: eco-eco, eco-com, eco-def, com-com, com-def, def-def.
    pub fn all() -> impl Iterator<Item = Self> {
        Origin::ALL.into_iter().flat_map(|a| {
            Origin::ALL
                .into_iter()
                .filter(move |&b| a <= b)
                .map(move |b| Self::new(a, b))
        })
    }

    pub fn categories(self) -> (Origin, Origin) {
        (self.low, self.high)
    }

    pub fn contains(self, origin: Origin) -> bool {
        self.low == origin || self.high == origin
    }

    /// True when two modules with these categories form this pair, in either order.
    pub fn matches(self, a: Origin, b: Origin) -> bool {
        Self::new(a, b) == self
    }
}

impl fmt::Display for PerkPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.low.code(), self.high.code())
    }
}

/// Error returned when a pair label is not two origin codes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid category pair `{0}` (expected e.g. `eco_com`)")]
pub struct ParsePairError(pub String);

impl FromStr for PerkPair {
    type Err = ParsePairError;

    /// Accepts `eco_com`, `eco-com`, or `ECO-COM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(['_', '-']);
        let pair = match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => {
                Origin::from_code(a).zip(Origin::from_code(b))
            }
            _ => None,
        };
        pair.map(|(a, b)| Self::new(a, b))
            .ok_or_else(|| ParsePairError(s.to_string()))
    }
}

/// Typed perk, one variant per taxonomy level.
///
/// Each variant carries only what its match rule needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PerkKind {
    BaseEfficiency,
    NeighborAny,
    NeighborOrigin(Origin),
    NeighborCondition { quality: Quality, origin: Origin },
    LegendaryAny,
    LegendaryOrigin(Origin),
    Pair(PerkPair),
    PairSameLevel(PerkPair),
    MatrixSameTypeRarity,
}

impl PerkKind {
    pub const fn level(self) -> PerkLevel {
        match self {
            Self::BaseEfficiency => PerkLevel::Base,
            Self::NeighborAny => PerkLevel::Proximity,
            Self::NeighborOrigin(_) => PerkLevel::Sector,
            Self::NeighborCondition { .. } => PerkLevel::Condition,
            Self::LegendaryAny => PerkLevel::Liaison,
            Self::LegendaryOrigin(_) => PerkLevel::Alpha,
            Self::Pair(_) => PerkLevel::SynergyPair,
            Self::PairSameLevel(_) => PerkLevel::HarmonyPair,
            Self::MatrixSameTypeRarity => PerkLevel::Singularity,
        }
    }

    /// Origin qualifier, for the levels that carry one.
    pub const fn origin(self) -> Option<Origin> {
        match self {
            Self::NeighborOrigin(origin)
            | Self::NeighborCondition { origin, .. }
            | Self::LegendaryOrigin(origin) => Some(origin),
            _ => None,
        }
    }

    /// Quality qualifier (level 4 only).
    pub const fn quality(self) -> Option<Quality> {
        match self {
            Self::NeighborCondition { quality, .. } => Some(quality),
            _ => None,
        }
    }

    /// Category pair (levels 7 and 8).
    pub const fn pair(self) -> Option<PerkPair> {
        match self {
            Self::Pair(pair) | Self::PairSameLevel(pair) => Some(pair),
            _ => None,
        }
    }

    /// Every recognized perk, in level order.
    pub fn catalog() -> Vec<PerkKind> {
        let mut kinds = vec![Self::BaseEfficiency, Self::NeighborAny];
        kinds.extend(Origin::ALL.map(Self::NeighborOrigin));
        for origin in Origin::ALL {
            for quality in Quality::ALL {
                kinds.push(Self::NeighborCondition { quality, origin });
            }
        }
        kinds.push(Self::LegendaryAny);
        kinds.extend(Origin::ALL.map(Self::LegendaryOrigin));
        kinds.extend(PerkPair::all().map(Self::Pair));
        kinds.extend(PerkPair::all().map(Self::PairSameLevel));
        kinds.push(Self::MatrixSameTypeRarity);
        kinds
    }
}

/// Parses a perk id. Unrecognized ids yield `None` and are inert.
pub fn parse_perk_id(id: &str) -> Option<PerkKind> {
    let mut parts: ArrayVec<&str, 4> = ArrayVec::new();
    for part in id.split('_') {
        parts.try_push(part).ok()?;
    }

    match parts.as_slice() {
        ["base", "efficiency"] => Some(PerkKind::BaseEfficiency),
        ["neighbor", "any", "all"] => Some(PerkKind::NeighborAny),
        ["neighbor", "any", origin] => Origin::from_code(origin).map(PerkKind::NeighborOrigin),
        ["neighbor", "leg", "any"] => Some(PerkKind::LegendaryAny),
        ["neighbor", "leg", origin] => Origin::from_code(origin).map(PerkKind::LegendaryOrigin),
        ["neighbor", quality, origin] => {
            let quality = Quality::from_code(quality)?;
            let origin = Origin::from_code(origin)?;
            Some(PerkKind::NeighborCondition { quality, origin })
        }
        ["pair", a, b] => pair_of(a, b).map(PerkKind::Pair),
        ["pair", a, b, "lvl"] => pair_of(a, b).map(PerkKind::PairSameLevel),
        ["matrix", "same", "type", "rarity"] => Some(PerkKind::MatrixSameTypeRarity),
        _ => None,
    }
}

fn pair_of(a: &str, b: &str) -> Option<PerkPair> {
    Some(PerkPair::new(Origin::from_code(a)?, Origin::from_code(b)?))
}

/// Error returned by [`PerkKind::from_str`] for unrecognized ids.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized perk id `{0}`")]
pub struct UnknownPerkId(pub String);

impl FromStr for PerkKind {
    type Err = UnknownPerkId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_perk_id(s).ok_or_else(|| UnknownPerkId(s.to_string()))
    }
}

impl fmt::Display for PerkKind {
    /// Writes the canonical perk id.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseEfficiency => f.write_str("base_efficiency"),
            Self::NeighborAny => f.write_str("neighbor_any_all"),
            Self::NeighborOrigin(origin) => write!(f, "neighbor_any_{}", origin.code()),
            Self::NeighborCondition { quality, origin } => {
                write!(f, "neighbor_{}_{}", quality.code(), origin.code())
            }
            Self::LegendaryAny => f.write_str("neighbor_leg_any"),
            Self::LegendaryOrigin(origin) => write!(f, "neighbor_leg_{}", origin.code()),
            Self::Pair(pair) => write!(f, "pair_{pair}"),
            Self::PairSameLevel(pair) => write!(f, "pair_{pair}_lvl"),
            Self::MatrixSameTypeRarity => f.write_str("matrix_same_type_rarity"),
        }
    }
}

// Perk kinds and pairs travel as their id strings so they can key JSON maps.
#[cfg(feature = "serde")]
mod serde_impls {
    use super::{PerkKind, PerkPair};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for PerkKind {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for PerkKind {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let id = String::deserialize(deserializer)?;
            id.parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for PerkPair {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for PerkPair {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let label = String::deserialize(deserializer)?;
            label.parse().map_err(D::Error::custom)
        }
    }
}
