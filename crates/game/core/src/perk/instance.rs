use super::{PerkKind, parse_perk_id};

/// Rolled value range of a perk, in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkRange {
    pub min: f64,
    pub max: f64,
}

impl PerkRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One rolled perk on an item.
///
/// The raw id is kept as generated so that ids from newer content survive a
/// round trip; the typed kind is parsed once here and is `None` for ids the
/// grammar does not recognize.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PerkRecord", into = "PerkRecord"))]
pub struct PerkInstance {
    id: String,
    value: f64,
    range: PerkRange,
    kind: Option<PerkKind>,
}

impl PerkInstance {
    pub fn new(id: impl Into<String>, value: f64, range: PerkRange) -> Self {
        let id = id.into();
        let kind = parse_perk_id(&id);
        Self {
            id,
            value,
            range,
            kind,
        }
    }

    /// Builds an instance from a typed kind, writing its canonical id.
    pub fn from_kind(kind: PerkKind, value: f64, range: PerkRange) -> Self {
        Self {
            id: kind.to_string(),
            value,
            range,
            kind: Some(kind),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Percent value per match (e.g. `4.0` means +4% per match).
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> PerkRange {
        self.range
    }

    pub fn kind(&self) -> Option<PerkKind> {
        self.kind
    }

    pub fn is_recognized(&self) -> bool {
        self.kind.is_some()
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct PerkRecord {
    id: String,
    value: f64,
    #[serde(default)]
    range: PerkRange,
}

#[cfg(feature = "serde")]
impl From<PerkRecord> for PerkInstance {
    fn from(record: PerkRecord) -> Self {
        Self::new(record.id, record.value, record.range)
    }
}

#[cfg(feature = "serde")]
impl From<PerkInstance> for PerkRecord {
    fn from(perk: PerkInstance) -> Self {
        Self {
            id: perk.id,
            value: perk.value,
            range: perk.range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Origin;

    #[test]
    fn parses_kind_at_construction() {
        let perk = PerkInstance::new("neighbor_leg_com", 12.0, PerkRange::new(8.0, 20.0));
        assert_eq!(perk.kind(), Some(PerkKind::LegendaryOrigin(Origin::Combat)));
        assert!(perk.range().contains(perk.value()));
    }

    #[test]
    fn keeps_unrecognized_ids_verbatim() {
        let perk = PerkInstance::new("quantum_echo", 3.0, PerkRange::default());
        assert_eq!(perk.id(), "quantum_echo");
        assert!(!perk.is_recognized());
    }

    #[test]
    fn from_kind_writes_canonical_id() {
        let perk = PerkInstance::from_kind(PerkKind::MatrixSameTypeRarity, 9.0, PerkRange::new(5.0, 20.0));
        assert_eq!(perk.id(), "matrix_same_type_rarity");
    }
}
