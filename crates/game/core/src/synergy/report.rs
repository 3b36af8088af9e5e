use std::collections::BTreeMap;

use crate::perk::PerkKind;

/// Outcome of one perk on one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkResult {
    /// Number of matches found for the perk's rule (0 when inactive).
    pub count: u32,
    /// Contribution in percent (`value * count`).
    pub active_value: f64,
}

impl PerkResult {
    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

/// Total and per-perk boost for one item slot.
///
/// `total_boost` is a fraction: `0.23` means +23%.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynergyReport {
    pub total_boost: f64,
    pub perk_results: BTreeMap<PerkKind, PerkResult>,
}

impl SynergyReport {
    /// Result for an empty slot: no boost, no perks.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.perk_results.is_empty() && self.total_boost == 0.0
    }

    pub fn result(&self, kind: PerkKind) -> Option<&PerkResult> {
        self.perk_results.get(&kind)
    }

    /// Total boost in percent (`0.23` → `23.0`).
    pub fn total_boost_pct(&self) -> f64 {
        self.total_boost * 100.0
    }

    /// Perks with at least one match.
    pub fn active_perks(&self) -> impl Iterator<Item = (PerkKind, &PerkResult)> {
        self.perk_results
            .iter()
            .filter(|(_, result)| result.is_active())
            .map(|(kind, result)| (*kind, result))
    }
}
