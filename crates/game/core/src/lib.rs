//! Deterministic synergy rules for the module matrix.
//!
//! `matrix-core` defines the socket grid (six legendary hexes, twelve item
//! slots, one chassis core), the closed perk taxonomy, and two pure
//! consumers of the same perk grammar:
//!
//! - [`synergy`] resolves the boost an item receives from its neighborhood.
//! - [`matcher`] decides whether an item satisfies an inventory filter.
//!
//! Adjacency lives in [`topology`] and nowhere else. All state mutation goes
//! through [`SocketGrid`]'s placement operations; every other API is a read.
pub mod config;
pub mod error;
pub mod matcher;
pub mod perk;
pub mod state;
pub mod synergy;
pub mod topology;

pub use config::MatrixConfig;
pub use error::{CoreError, ErrorSeverity};
pub use matcher::{
    CoreFilter, ItemFilter, PerkFilter, PerkFilters, locate_perk, matches, select_matching,
    select_rejected, sort_inventory,
};
pub use perk::{PerkInstance, PerkKind, PerkLevel, PerkPair, PerkRange, parse_perk_id};
pub use state::{
    Chassis, CollectibleItem, GridError, ItemId, LegendaryModule, ModuleId, ModuleKind, Origin,
    Quality, Rarity, SocketGrid,
};
pub use synergy::{
    GlobalModifiers, PerkResult, SynergyReport, chassis_resonance, resolve, resolve_grid,
    resolve_slot,
};
pub use topology::{HexSlot, ItemSlot, SlotError};
