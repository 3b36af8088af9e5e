//! Perk catalog: player-facing names, descriptions and roll ranges.
//!
//! Loaded from embedded RON data. The synergy rules never consult it; it
//! exists for tooltips and tooling.

use matrix_core::{PerkKind, PerkLevel, PerkRange};
use serde::{Deserialize, Serialize};

use crate::loaders::LoadResult;

/// Catalog entry for one perk level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerkLevelInfo {
    pub level: PerkLevel,
    pub name: String,
    /// Template with `{origin}`, `{quality}` and `{pair}` placeholders.
    pub description: String,
    pub base_range: PerkRange,
}

/// Registry of perk level entries, indexed by level.
#[derive(Debug, Clone)]
pub struct PerkCatalog {
    levels: Vec<PerkLevelInfo>,
}

impl PerkCatalog {
    /// Loads the catalog from the embedded `perks.ron`.
    pub fn load() -> LoadResult<Self> {
        Self::parse(include_str!("../data/perks.ron"))
    }

    /// Parses a catalog, requiring exactly one entry per level.
    pub fn parse(content: &str) -> LoadResult<Self> {
        let mut levels: Vec<PerkLevelInfo> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse perk catalog RON: {}", e))?;
        levels.sort_by_key(|info| info.level);

        for (expected, info) in PerkLevel::ALL.into_iter().zip(&levels) {
            if info.level != expected {
                anyhow::bail!("Perk catalog is missing level {} ({})", expected.number(), expected);
            }
        }
        if levels.len() != PerkLevel::ALL.len() {
            anyhow::bail!(
                "Perk catalog must list {} levels, found {}",
                PerkLevel::ALL.len(),
                levels.len()
            );
        }
        tracing::debug!(levels = levels.len(), "loaded perk catalog");

        Ok(Self { levels })
    }

    pub fn get(&self, level: PerkLevel) -> &PerkLevelInfo {
        // parse() guarantees one sorted entry per level.
        &self.levels[usize::from(level.number()) - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PerkLevelInfo> {
        self.levels.iter()
    }

    /// Display name of a perk kind (e.g. `SECTOR AMPLIFIER`).
    pub fn name(&self, kind: PerkKind) -> &str {
        &self.get(kind.level()).name
    }

    /// Description of a perk kind with its parameters filled in.
    pub fn describe(&self, kind: PerkKind) -> String {
        let template = &self.get(kind.level()).description;
        let origin = kind.origin().map(|origin| origin.as_ref().to_uppercase());
        let quality = kind.quality().map(|quality| quality.as_ref().to_uppercase());
        let pair = kind.pair().map(|pair| {
            let (a, b) = pair.categories();
            format!("{}-{}", a.as_ref().to_uppercase(), b.as_ref().to_uppercase())
        });

        let mut text = template.clone();
        for (placeholder, value) in [("{origin}", origin), ("{quality}", quality), ("{pair}", pair)] {
            if let Some(value) = value {
                text = text.replace(placeholder, &value);
            }
        }
        text
    }
}

/// Formats a percent value the way tooltips show it: one decimal, dropped
/// when the rounded value is whole (`4.0` → `4`, `4.25` → `4.3`).
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
