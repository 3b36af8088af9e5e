use std::path::Path;

use matrix_content::{ContentFactory, PerkCatalog};
use matrix_core::{GlobalModifiers, PerkKind, resolve, select_matching, select_rejected};

fn factory() -> ContentFactory {
    ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
}

/// Bulk scans over the bundled inventory honor the protected slots.
#[test]
fn test_salvage_preset_over_bundled_inventory() {
    let factory = factory();
    let config = factory.load_config().expect("config loads");
    let inventory = factory.load_inventory().expect("inventory loads");
    let presets = factory.load_filters().expect("presets load");
    let salvage = presets.require("salvage").expect("salvage preset");

    assert_eq!(select_matching(&inventory, salvage, &config), vec![10, 14]);
    assert_eq!(select_rejected(&inventory, salvage, &config), vec![11, 13, 15]);
}

#[test]
fn test_harmony_preset_only_reaches_unprotected_items() {
    let factory = factory();
    let config = factory.load_config().expect("config loads");
    let inventory = factory.load_inventory().expect("inventory loads");
    let presets = factory.load_filters().expect("presets load");
    let harmony = presets.require("defensive_harmony").expect("harmony preset");

    // The only def-def harmony perk sits in protected slot 7.
    assert!(harmony.matches(inventory[7].as_ref()));
    assert!(select_matching(&inventory, harmony, &config).is_empty());
}

/// The eco-pair grid: hexes 5, 0 (level 3) and 1 (level 2) are economic.
#[test]
fn test_eco_pairs_grid_resolves() {
    let grid = factory().load_grid("eco_pairs").expect("grid loads");
    let report = resolve(&grid, 0, &GlobalModifiers::NONE).expect("valid slot");

    let catalog = PerkCatalog::load().expect("catalog loads");
    let counts: Vec<(String, u32)> = report
        .perk_results
        .iter()
        .map(|(kind, result)| (catalog.name(*kind).to_string(), result.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("SYNERGY PAIR".to_string(), 2),
            ("HARMONY PAIR".to_string(), 1),
            ("SINGULARITY CORE".to_string(), 1),
        ]
    );
    // 12 * 2 + 15 * 1 + 8 * 1
    assert!((report.total_boost - 0.47).abs() < 1e-9);
    assert!(!report.perk_results.contains_key(&PerkKind::BaseEfficiency));
}
