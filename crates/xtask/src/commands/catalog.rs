//! Print the perk catalog
//!
//! Lists every recognized perk id with its level, display name and roll range.

use anyhow::Result;
use clap::Parser;
use console::style;

use matrix_content::PerkCatalog;
use matrix_core::{PerkKind, PerkLevel};

/// List every recognized perk id
#[derive(Parser)]
pub struct Catalog {
    /// Only show one level (1-9)
    #[arg(short, long, value_name = "LEVEL")]
    level: Option<u8>,
}

impl Catalog {
    pub fn execute(self) -> Result<()> {
        let catalog = PerkCatalog::load()?;
        let only = match self.level {
            Some(number) => Some(
                PerkLevel::from_number(number)
                    .ok_or_else(|| anyhow::anyhow!("Perk level must be 1-9, got {}", number))?,
            ),
            None => None,
        };

        let kinds = PerkKind::catalog();
        for info in catalog.iter() {
            if only.is_some_and(|level| level != info.level) {
                continue;
            }
            println!(
                "{} {}  {}",
                style(format!("L{}", info.level.number())).bold().yellow(),
                style(&info.name).bold(),
                style(format!(
                    "({}-{}%)",
                    info.base_range.min, info.base_range.max
                ))
                .dim()
            );
            for kind in kinds.iter().filter(|kind| kind.level() == info.level) {
                println!("    {:<28} {}", kind.to_string(), catalog.describe(*kind));
            }
            println!();
        }

        tracing::debug!(ids = kinds.len(), "printed perk catalog");
        Ok(())
    }
}
