//! Data-driven matrix content and loaders.
//!
//! This crate houses static content and provides loaders for RON/TOML data files:
//! - Perk catalog: display names, descriptions and base ranges (embedded RON)
//! - Grid snapshots (data-driven via RON)
//! - Inventories (data-driven via RON)
//! - Filter presets (data-driven via RON)
//! - Matrix configuration (data-driven via TOML)
//!
//! Content feeds the host and tooling; the synergy rules in `matrix-core`
//! never read files.

#[cfg(feature = "loaders")]
pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use catalog::{PerkCatalog, PerkLevelInfo, format_percent};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, FilterLoader, FilterPresets, GridLoader, GridSnapshot,
    HexPlacement, InventoryLoader, ItemPlacement, LoadResult,
};
