pub mod common;
pub mod item;
pub mod legendary;

pub use common::{ItemId, ModuleId, Origin};
pub use item::{CollectibleItem, Quality, Rarity};
pub use legendary::{LegendaryModule, ModuleKind};
