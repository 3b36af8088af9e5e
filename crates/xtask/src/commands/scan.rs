//! Bulk keep/discard selection over an inventory
//!
//! Applies a named filter preset to an inventory file and lists the slots a
//! bulk action would touch, or the storage order a sort would produce.
//! The inventory file is never rewritten.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use matrix_content::{ConfigLoader, FilterLoader, InventoryLoader};
use matrix_core::{
    CollectibleItem, MatrixConfig, select_matching, select_rejected, sort_inventory,
};

use crate::utils;

/// Preview a bulk keep/discard or sort over an inventory
#[derive(Parser)]
pub struct Scan {
    /// Inventory RON file (defaults to `$MATRIX_DATA_DIR/inventory.ron`)
    #[arg(value_name = "INVENTORY")]
    inventory: Option<PathBuf>,

    /// Filter presets RON file (defaults to `$MATRIX_DATA_DIR/filters.ron`)
    #[arg(value_name = "FILTERS")]
    filters: Option<PathBuf>,

    /// Preset to apply; lists available presets when omitted
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// Matrix config TOML (defaults to `$MATRIX_DATA_DIR/config.toml` when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Which side of the filter to select, or sort storage by it
    #[arg(short, long, value_enum, default_value = "keep")]
    mode: ScanMode,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ScanMode {
    /// Slots whose items match the preset
    Keep,
    /// Slots whose items fail the preset
    Discard,
    /// Storage slots reordered: matching first, rarest first
    Sort,
}

impl Scan {
    pub fn execute(self) -> Result<()> {
        let data_dir = utils::data_dir();
        let inventory_path = self
            .inventory
            .unwrap_or_else(|| data_dir.join("inventory.ron"));
        let filters_path = self.filters.unwrap_or_else(|| data_dir.join("filters.ron"));

        let inventory = InventoryLoader::load(&inventory_path)?;
        let presets = FilterLoader::load(&filters_path)?;
        let config = load_config(self.config, &data_dir)?;

        let Some(name) = self.preset else {
            println!("{}", style("Available presets:").bold().yellow());
            for name in presets.names() {
                println!("  {}", name);
            }
            return Ok(());
        };
        let filter = presets.require(&name)?;

        let (inventory, selected) = match self.mode {
            ScanMode::Keep => {
                let selected = select_matching(&inventory, filter, &config);
                (inventory, selected)
            }
            ScanMode::Discard => {
                let selected = select_rejected(&inventory, filter, &config);
                (inventory, selected)
            }
            ScanMode::Sort => {
                let mut sorted = inventory;
                sort_inventory(&mut sorted, filter, &config);
                let storage = (config.protected_slots..sorted.len())
                    .filter(|&index| sorted[index].is_some())
                    .collect();
                (sorted, storage)
            }
        };
        tracing::info!(
            preset = %name,
            selected = selected.len(),
            protected = config.protected_slots,
            "scanned inventory"
        );

        print_selection(&inventory, &selected, &name, self.mode, &config);
        Ok(())
    }
}

fn load_config(path: Option<PathBuf>, data_dir: &std::path::Path) -> Result<MatrixConfig> {
    match path {
        Some(path) => ConfigLoader::load(&path),
        None => {
            let default_path = data_dir.join("config.toml");
            if default_path.exists() {
                ConfigLoader::load(&default_path)
            } else {
                tracing::debug!("no config.toml found, using defaults");
                Ok(MatrixConfig::default())
            }
        }
    }
}

fn print_selection(
    inventory: &[Option<CollectibleItem>],
    selected: &[usize],
    preset: &str,
    mode: ScanMode,
    config: &MatrixConfig,
) {
    let verb = match mode {
        ScanMode::Keep => "keep",
        ScanMode::Discard => "discard",
        ScanMode::Sort => "sort",
    };
    println!(
        "{} {} ({})",
        style("Preset:").bold().cyan(),
        preset,
        verb
    );
    println!(
        "{} {} of {} (first {} protected)",
        style("Slots:").bold().cyan(),
        selected.len(),
        inventory.len(),
        config.protected_slots
    );
    println!();

    for &index in selected {
        let Some(item) = inventory.get(index).and_then(Option::as_ref) else {
            continue;
        };
        let origin = item
            .origin()
            .map_or_else(|| "unknown".to_string(), |origin| origin.to_string());
        let perks: Vec<&str> = item.perks().iter().map(|perk| perk.id()).collect();
        println!(
            "  {} {} {} {} {}  [{}]",
            style(format!("#{:<3}", index)).yellow(),
            item.id(),
            item.rarity(),
            item.quality(),
            origin,
            perks.join(", ")
        );
    }
}
