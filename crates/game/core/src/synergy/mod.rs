//! Synergy resolution.
//!
//! Given a grid snapshot and a slot, the resolver evaluates every recognized
//! perk of the slotted item against its neighborhood and reports the total
//! boost and each perk's contribution.

mod modifiers;
mod report;
mod resolver;

pub use modifiers::GlobalModifiers;
pub use report::{PerkResult, SynergyReport};
pub use resolver::{chassis_resonance, resolve, resolve_grid, resolve_slot};
