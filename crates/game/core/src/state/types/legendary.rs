//! Legendary modules socketed on the hex ring.

use super::{ModuleId, Origin};
use crate::config::MatrixConfig;
use crate::state::GridError;

/// Ability key of a legendary module. Each key belongs to one category.
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
pub enum ModuleKind {
    // Economic
    EcoDmg,
    EcoXp,
    EcoHp,

    // Combat
    ComLife,
    ComCrit,
    ComWave,

    // Defensive
    DefPuddle,
    DefEpi,
    CombShield,
}

impl ModuleKind {
    pub const fn category(self) -> Origin {
        match self {
            ModuleKind::EcoDmg | ModuleKind::EcoXp | ModuleKind::EcoHp => Origin::Economic,
            ModuleKind::ComLife | ModuleKind::ComCrit | ModuleKind::ComWave => Origin::Combat,
            ModuleKind::DefPuddle | ModuleKind::DefEpi | ModuleKind::CombShield => {
                Origin::Defensive
            }
        }
    }
}

/// A legendary module occupying a hex socket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "LegendaryRecord", into = "LegendaryRecord")
)]
pub struct LegendaryModule {
    id: ModuleId,
    kind: ModuleKind,
    category: Origin,
    level: u8,
}

impl LegendaryModule {
    /// Creates a module; the category follows from `kind`.
    pub fn new(id: ModuleId, kind: ModuleKind, level: u8) -> Result<Self, GridError> {
        if !(MatrixConfig::MIN_MODULE_LEVEL..=MatrixConfig::MAX_MODULE_LEVEL).contains(&level) {
            return Err(GridError::InvalidModuleLevel { module: id, level });
        }
        Ok(Self {
            id,
            kind,
            category: kind.category(),
            level,
        })
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn category(&self) -> Origin {
        self.category
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

/// On-disk shape of a module; validated into [`LegendaryModule`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LegendaryRecord {
    id: ModuleId,
    kind: ModuleKind,
    level: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<LegendaryRecord> for LegendaryModule {
    type Error = GridError;

    fn try_from(record: LegendaryRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.kind, record.level)
    }
}

#[cfg(feature = "serde")]
impl From<LegendaryModule> for LegendaryRecord {
    fn from(module: LegendaryModule) -> Self {
        Self {
            id: module.id,
            kind: module.kind,
            level: module.level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_follows_kind() {
        let module = LegendaryModule::new(ModuleId(1), ModuleKind::ComCrit, 2).unwrap();
        assert_eq!(module.category(), Origin::Combat);
        assert_eq!(ModuleKind::CombShield.category(), Origin::Defensive);
    }

    #[test]
    fn rejects_levels_outside_one_to_five() {
        assert_eq!(
            LegendaryModule::new(ModuleId(7), ModuleKind::EcoXp, 0),
            Err(GridError::InvalidModuleLevel {
                module: ModuleId(7),
                level: 0
            })
        );
        assert!(LegendaryModule::new(ModuleId(7), ModuleKind::EcoXp, 6).is_err());
        assert!(LegendaryModule::new(ModuleId(7), ModuleKind::EcoXp, 5).is_ok());
    }
}
