//! Content loaders for reading matrix data from files.
//!
//! Grids, inventories and filter presets are RON; configuration is TOML.

pub mod config;
pub mod factory;
pub mod filters;
pub mod grid;
pub mod inventory;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use filters::{FilterLoader, FilterPresets};
pub use grid::{GridLoader, GridSnapshot, HexPlacement, ItemPlacement};
pub use inventory::InventoryLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!(path = %path.display(), "reading content file");
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
