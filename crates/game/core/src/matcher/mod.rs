//! Bulk predicate matching for inventory selection.
//!
//! The matcher answers "does this item satisfy the player's filter?" using
//! the same perk grammar as the synergy resolver.

mod filter;
mod predicate;
pub mod scan;

pub use filter::{CoreFilter, ItemFilter, PerkFilter, PerkFilters};
pub use predicate::{locate_perk, matches};
pub use scan::{select_matching, select_rejected, sort_inventory};
