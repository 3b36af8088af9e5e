//! Grid placement errors.
//!
//! Errors raised by the placement operations that external collaborators use
//! to mutate the socket grid. Reads never fail except on out-of-range input.

use crate::error::{CoreError, ErrorSeverity};
use crate::state::{ItemId, ModuleId};
use crate::topology::{HexSlot, ItemSlot, SlotError};

/// Errors that occur while mutating the socket grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Raw index did not name a slot.
    #[error(transparent)]
    Slot(#[from] SlotError),

    /// The item already occupies another slot.
    #[error("{item} is already socketed in item slot {slot}")]
    ItemAlreadySocketed {
        /// Item being placed.
        item: ItemId,
        /// Slot it currently occupies.
        slot: ItemSlot,
    },

    /// The module already occupies another hex.
    #[error("{module} is already socketed in {slot}")]
    ModuleAlreadySocketed {
        /// Module being placed.
        module: ModuleId,
        /// Hex it currently occupies.
        slot: HexSlot,
    },

    /// Module level outside the supported range.
    #[error("{module} has level {level} (expected 1..=5)")]
    InvalidModuleLevel {
        /// Module being constructed.
        module: ModuleId,
        /// Offending level.
        level: u8,
    },
}

impl CoreError for GridError {
    fn severity(&self) -> ErrorSeverity {
        use GridError::*;
        match self {
            Slot(err) => err.severity(),
            ItemAlreadySocketed { .. } | ModuleAlreadySocketed { .. } => ErrorSeverity::Conflict,
            InvalidModuleLevel { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use GridError::*;
        match self {
            Slot(err) => err.error_code(),
            ItemAlreadySocketed { .. } => "GRID_ITEM_ALREADY_SOCKETED",
            ModuleAlreadySocketed { .. } => "GRID_MODULE_ALREADY_SOCKETED",
            InvalidModuleLevel { .. } => "GRID_INVALID_MODULE_LEVEL",
        }
    }
}
