use std::fmt;

/// Unique identifier of a collectible item.
///
/// Identity survives socket swaps; the grid uses it to enforce that an item
/// sits in at most one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Unique identifier of a legendary module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleId(pub u32);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module#{}", self.0)
    }
}

/// Sector category shared by item origins and legendary module categories.
///
/// Items record the arena they were discovered in; modules belong to the
/// matching category. The mapping is 1:1, so one enum serves both.
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
pub enum Origin {
    Economic,
    Combat,
    Defensive,
}

impl Origin {
    pub const ALL: [Origin; 3] = [Origin::Economic, Origin::Combat, Origin::Defensive];

    /// Three-letter code used inside perk ids (`eco`, `com`, `def`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Economic => "eco",
            Self::Combat => "com",
            Self::Defensive => "def",
        }
    }

    /// Parses a perk-id code. Case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|origin| origin.code().eq_ignore_ascii_case(code))
    }

    /// Lenient parse of a discovery tag.
    ///
    /// Accepts codes (`eco`), names (`economic`), and arena labels such as
    /// `"ECONOMIC HEX"` or `"DEFENCE HEX"`. Anything else is `None`, which
    /// never satisfies an origin-filtered perk.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if let Some(origin) = Self::from_code(tag) {
            return Some(origin);
        }
        if let Ok(origin) = tag.parse::<Self>() {
            return Some(origin);
        }
        let word = tag.split_whitespace().next()?;
        if word.eq_ignore_ascii_case("economic") {
            Some(Self::Economic)
        } else if word.eq_ignore_ascii_case("combat") {
            Some(Self::Combat)
        } else if word.eq_ignore_ascii_case("defence")
            || word.eq_ignore_ascii_case("defense")
            || word.eq_ignore_ascii_case("defensive")
        {
            Some(Self::Defensive)
        } else {
            None
        }
    }
}

/// Serde adapter for origin tags: unknown strings become `None` instead of
/// failing the whole document.
#[cfg(feature = "serde")]
pub(crate) mod origin_tag {
    use super::Origin;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(origin: &Option<Origin>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(origin.map_or("", |origin| origin.code()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Origin>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Origin::from_tag(&tag))
    }
}
