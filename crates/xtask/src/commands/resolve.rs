//! Resolve synergy for a grid snapshot
//!
//! Loads a grid RON file and prints the boost of every occupied item slot.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use matrix_content::{PerkCatalog, format_percent};
use matrix_core::{
    GlobalModifiers, ItemSlot, SocketGrid, SynergyReport, chassis_resonance, resolve, resolve_grid,
};

use crate::utils;

/// Resolve synergy boosts for a grid snapshot
#[derive(Parser)]
pub struct Resolve {
    /// Grid snapshot: a RON file path, or a grid name under `$MATRIX_DATA_DIR/grids`
    #[arg(value_name = "GRID")]
    grid: String,

    /// Only resolve this item slot (0-11)
    #[arg(short, long, value_name = "INDEX")]
    slot: Option<usize>,

    /// Apply the matrix overdrive bonus
    #[arg(long)]
    overdrive: bool,

    /// Resonance bonus added to every perk value, in percent
    #[arg(long, value_name = "PCT", default_value_t = 0.0)]
    resonance: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Per-slot totals and perk breakdown
    Summary,
    /// Full JSON output
    Json,
}

impl Resolve {
    pub fn execute(self) -> Result<()> {
        let grid = utils::load_grid(&self.grid)?;
        let modifiers = GlobalModifiers::new()
            .with_overdrive(self.overdrive)
            .with_resonance(self.resonance);

        let reports = match self.slot {
            Some(index) => {
                let report = resolve(&grid, index, &modifiers)
                    .with_context(|| format!("Cannot resolve slot {}", index))?;
                vec![(ItemSlot::new(index)?, report)]
            }
            None => resolve_grid(&grid, &modifiers),
        };
        tracing::info!(
            grid = %self.grid,
            slots = reports.len(),
            overdrive = modifiers.overdrive,
            "resolved grid"
        );

        match self.format {
            OutputFormat::Summary => print_summary(&grid, &reports, &modifiers)?,
            OutputFormat::Json => print_json(&grid, &reports, &modifiers)?,
        }

        Ok(())
    }
}

fn print_summary(
    grid: &SocketGrid,
    reports: &[(ItemSlot, SynergyReport)],
    modifiers: &GlobalModifiers,
) -> Result<()> {
    let catalog = PerkCatalog::load()?;

    println!("{}", style("=== Matrix Synergy ===").bold().green());
    if let Some(chassis) = grid.chassis() {
        println!("{} {}", style("Chassis:").bold().cyan(), chassis);
    }
    println!(
        "{} {}",
        style("Modifiers:").bold().cyan(),
        describe_modifiers(modifiers)
    );
    println!();

    if reports.is_empty() {
        println!("{}", style("No items socketed.").dim());
        return Ok(());
    }

    for (slot, report) in reports {
        let item = match grid.item(*slot) {
            Some(item) => format!("{} ({} {})", item.id(), item.rarity(), item.quality()),
            None => "empty".to_string(),
        };
        println!(
            "{} {}  {}",
            style(format!("[{}]", slot)).bold().yellow(),
            item,
            style(format!("+{}%", format_percent(report.total_boost_pct()))).bold()
        );

        for (kind, result) in &report.perk_results {
            let line = format!(
                "    {:<20} {:<28} x{}  +{}%",
                catalog.name(*kind),
                kind.to_string(),
                result.count,
                format_percent(result.active_value)
            );
            if result.is_active() {
                println!("{}", line);
            } else {
                println!("{}", style(line).dim());
            }
        }
    }

    println!();
    println!(
        "{} +{}%",
        style("Chassis resonance:").bold().cyan(),
        format_percent(chassis_resonance(grid, modifiers) * 100.0)
    );

    Ok(())
}

fn print_json(
    grid: &SocketGrid,
    reports: &[(ItemSlot, SynergyReport)],
    modifiers: &GlobalModifiers,
) -> Result<()> {
    let slots: Vec<serde_json::Value> = reports
        .iter()
        .map(|(slot, report)| {
            serde_json::json!({
                "slot": slot.index(),
                "label": slot.to_string(),
                "report": report,
            })
        })
        .collect();
    let output = serde_json::json!({
        "modifiers": modifiers,
        "chassis_resonance": chassis_resonance(grid, modifiers),
        "slots": slots,
    });

    let json =
        serde_json::to_string_pretty(&output).context("Failed to serialize reports to JSON")?;
    println!("{}", json);
    Ok(())
}

fn describe_modifiers(modifiers: &GlobalModifiers) -> String {
    let mut parts = Vec::new();
    if modifiers.overdrive {
        parts.push("overdrive".to_string());
    }
    if modifiers.resonance_pct != 0.0 {
        parts.push(format!("resonance +{}%", format_percent(modifiers.resonance_pct)));
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}
