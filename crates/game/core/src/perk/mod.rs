//! Perk taxonomy: the typed perk kinds, their id grammar, and rolled instances.

pub mod instance;
pub mod kind;

pub use instance::{PerkInstance, PerkRange};
pub use kind::{ParsePairError, PerkKind, PerkLevel, PerkPair, UnknownPerkId, parse_perk_id};
