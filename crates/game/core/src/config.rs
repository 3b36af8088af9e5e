/// Matrix configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatrixConfig {
    /// Leading inventory slots that bulk scans never select (the "safe" slots).
    pub protected_slots: usize,
}

impl MatrixConfig {
    // ===== compile-time constants used as type parameters =====
    /// Slots per ring. Both the hex ring and each item ring hold this many slots.
    pub const RING_SIZE: usize = 6;
    /// Legendary module sockets around the matrix.
    pub const HEX_SLOTS: usize = Self::RING_SIZE;
    /// Item sockets: inner ring followed by edge ring.
    pub const ITEM_SLOTS: usize = Self::RING_SIZE * 2;
    /// Item slots adjacent to a single hex.
    pub const HEX_ITEM_NEIGHBORS: usize = 4;
    /// Hexes adjacent to a single item slot.
    pub const ITEM_HEX_NEIGHBORS: usize = 2;
    /// Distinct ring-adjacent hex pairs an item slot can touch.
    pub const ITEM_HEX_PAIRS: usize = 3;
    /// Number of perk levels in the taxonomy.
    pub const PERK_LEVELS: usize = 9;
    pub const MIN_MODULE_LEVEL: u8 = 1;
    pub const MAX_MODULE_LEVEL: u8 = 5;

    /// Flat boost granted to every slotted item while overdrive is active (+15%).
    pub const OVERDRIVE_BONUS_PCT: f64 = 15.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PROTECTED_SLOTS: usize = 10;

    pub fn new() -> Self {
        Self {
            protected_slots: Self::DEFAULT_PROTECTED_SLOTS,
        }
    }

    pub fn with_protected_slots(protected_slots: usize) -> Self {
        Self { protected_slots }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::new()
    }
}
