//! Authoritative matrix state.
//!
//! This module owns the socket grid and the item/module types it holds.
//! External collaborators mutate the grid through its placement operations;
//! the synergy engine only reads snapshots of it.
pub mod error;
pub mod grid;
pub mod types;

pub use error::GridError;
pub use grid::{Chassis, SocketGrid};
pub use types::{
    CollectibleItem, ItemId, LegendaryModule, ModuleId, ModuleKind, Origin, Quality, Rarity,
};
