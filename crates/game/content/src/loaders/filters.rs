//! Filter preset loader.

use std::collections::BTreeMap;
use std::path::Path;

use matrix_core::ItemFilter;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Named filter presets for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterPresets {
    pub presets: BTreeMap<String, ItemFilter>,
}

impl FilterPresets {
    pub fn get(&self, name: &str) -> Option<&ItemFilter> {
        self.presets.get(name)
    }

    /// Looks up a preset, failing with the list of known names.
    pub fn require(&self, name: &str) -> LoadResult<&ItemFilter> {
        self.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.names().collect();
            anyhow::anyhow!("Unknown filter preset '{}' (known: {})", name, known.join(", "))
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Loader for filter presets from RON files.
pub struct FilterLoader;

impl FilterLoader {
    /// Load filter presets from a RON file containing [`FilterPresets`].
    pub fn load(path: &Path) -> LoadResult<FilterPresets> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse filter presets from RON text.
    pub fn parse(content: &str) -> LoadResult<FilterPresets> {
        let presets: FilterPresets = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse filter presets RON: {}", e))?;
        tracing::debug!(presets = presets.len(), "loaded filter presets");

        Ok(presets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_core::{Origin, PerkLevel, PerkPair, Quality};

    const PRESETS: &str = r#"
(
    presets: {
        "salvage": (
            core: (quality: Some(Broken)),
        ),
        "eco_pairs": (
            perks: {
                SynergyPair: (active: true, threshold: 8.0, pair: Some("com_eco")),
                Base: (active: true, threshold: 3.0),
            },
        ),
        "idle": (),
    },
)
"#;

    #[test]
    fn test_parse_presets() {
        let presets = FilterLoader::parse(PRESETS).expect("presets parse");
        assert_eq!(presets.names().collect::<Vec<_>>(), vec!["eco_pairs", "idle", "salvage"]);

        let salvage = presets.get("salvage").unwrap();
        assert_eq!(salvage.core.quality, Some(Quality::Broken));
        assert!(!salvage.perks.is_active());

        let pairs = presets.get("eco_pairs").unwrap();
        let pair = pairs.perks.get(PerkLevel::SynergyPair);
        assert!(pair.active);
        assert_eq!(pair.pair, Some(PerkPair::new(Origin::Economic, Origin::Combat)));
        assert_eq!(pairs.perks.active().count(), 2);

        assert!(!presets.get("idle").unwrap().is_active());
    }

    #[test]
    fn test_unknown_preset_lists_known_names() {
        let presets = FilterLoader::parse(PRESETS).expect("presets parse");
        let err = presets.require("keepers").unwrap_err();
        assert!(err.to_string().contains("eco_pairs, idle, salvage"), "{err}");
    }

    #[test]
    fn test_bad_pair_label_fails_to_parse() {
        let content = r#"(presets: {"x": (perks: {HarmonyPair: (active: true, pair: Some("eco_hex"))})})"#;
        assert!(FilterLoader::parse(content).is_err());
    }
}
