//! Matrix topology: which slots touch which.
//!
//! Adjacency is pure index arithmetic over two slot kinds:
//!
//! ```text
//!            hex ring (6)          item rings (6 + 6)
//!   hex h touches inner h, inner (h+5)%6, edge h+6, edge ((h+5)%6)+6
//!   inner i touches inner (i±1)%6 and its radial partner edge i+6
//!   edge  e touches edge  ((e-6)±1)%6 + 6 and its radial partner inner e-6
//! ```
//!
//! Nothing here is stored per instance. The resolver and matcher must ask
//! these functions rather than re-deriving neighbors themselves.

use arrayvec::ArrayVec;

use crate::config::MatrixConfig;
use crate::error::{CoreError, ErrorSeverity};

const RING: usize = MatrixConfig::RING_SIZE;

/// Raw slot index rejected by the slot constructors.
///
/// An out-of-range index is a caller bug rather than a game-state condition,
/// so it is reported instead of being wrapped into range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotError {
    #[error("item slot {index} is out of range (item slots: {max})", max = MatrixConfig::ITEM_SLOTS)]
    ItemSlotOutOfRange { index: usize },

    #[error("hex slot {index} is out of range (hex slots: {max})", max = MatrixConfig::HEX_SLOTS)]
    HexSlotOutOfRange { index: usize },
}

impl CoreError for SlotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemSlotOutOfRange { .. } => "SLOT_ITEM_OUT_OF_RANGE",
            Self::HexSlotOutOfRange { .. } => "SLOT_HEX_OUT_OF_RANGE",
        }
    }
}

/// Index of an item socket. Inner ring is 0..6, edge ring is 6..12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemSlot(u8);

impl ItemSlot {
    pub fn new(index: usize) -> Result<Self, SlotError> {
        if index < MatrixConfig::ITEM_SLOTS {
            Ok(Self(index as u8))
        } else {
            Err(SlotError::ItemSlotOutOfRange { index })
        }
    }

    /// Index is reduced into range by construction; only used by the
    /// arithmetic below where the result is known to be valid.
    const fn wrap(index: usize) -> Self {
        Self((index % MatrixConfig::ITEM_SLOTS) as u8)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_inner(self) -> bool {
        self.index() < RING
    }

    #[inline]
    pub const fn is_edge(self) -> bool {
        !self.is_inner()
    }

    /// Position around the ring (0..6), shared by an inner slot and its
    /// radial partner.
    #[inline]
    pub const fn ring_position(self) -> usize {
        self.index() % RING
    }

    /// All twelve item slots in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..MatrixConfig::ITEM_SLOTS).map(Self::wrap)
    }
}

impl TryFrom<usize> for ItemSlot {
    type Error = SlotError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl core::fmt::Display for ItemSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ring = if self.is_inner() { "inner" } else { "edge" };
        write!(f, "{}:{}", ring, self.ring_position())
    }
}

/// Index of a legendary module socket on the hex ring (0..6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HexSlot(u8);

impl HexSlot {
    pub fn new(index: usize) -> Result<Self, SlotError> {
        if index < MatrixConfig::HEX_SLOTS {
            Ok(Self(index as u8))
        } else {
            Err(SlotError::HexSlotOutOfRange { index })
        }
    }

    const fn wrap(index: usize) -> Self {
        Self((index % MatrixConfig::HEX_SLOTS) as u8)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..MatrixConfig::HEX_SLOTS).map(Self::wrap)
    }
}

impl TryFrom<usize> for HexSlot {
    type Error = SlotError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl core::fmt::Display for HexSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "hex:{}", self.0)
    }
}

/// Two cyclically adjacent slots within the same item ring.
pub fn item_ring_neighbors(slot: ItemSlot) -> [ItemSlot; 2] {
    let base = slot.index() - slot.ring_position();
    let pos = slot.ring_position();
    [
        ItemSlot::wrap(base + (pos + RING - 1) % RING),
        ItemSlot::wrap(base + (pos + 1) % RING),
    ]
}

/// The slot on the other ring at the same ring position.
pub fn item_radial_partner(slot: ItemSlot) -> ItemSlot {
    if slot.is_inner() {
        ItemSlot::wrap(slot.index() + RING)
    } else {
        ItemSlot::wrap(slot.index() - RING)
    }
}

/// Item-to-item neighborhood: both ring neighbors plus the radial partner.
pub fn item_neighbors(slot: ItemSlot) -> [ItemSlot; 3] {
    let [prev, next] = item_ring_neighbors(slot);
    [prev, next, item_radial_partner(slot)]
}

/// The four item slots touching a hex: two inner, two edge.
pub fn hex_item_neighbors(hex: HexSlot) -> [ItemSlot; MatrixConfig::HEX_ITEM_NEIGHBORS] {
    let h = hex.index();
    let prev = (h + RING - 1) % RING;
    [
        ItemSlot::wrap(h),
        ItemSlot::wrap(prev),
        ItemSlot::wrap(h + RING),
        ItemSlot::wrap(prev + RING),
    ]
}

/// Two cyclically adjacent hexes.
pub fn hex_ring_neighbors(hex: HexSlot) -> [HexSlot; 2] {
    let h = hex.index();
    [
        HexSlot::wrap((h + RING - 1) % RING),
        HexSlot::wrap((h + 1) % RING),
    ]
}

/// Hexes that list `slot` among their [`hex_item_neighbors`].
///
/// A hex `h` touches ring positions `h` and `h-1`, so ring position `p` is
/// touched by hexes `p` and `p+1`.
pub fn item_hex_neighbors(slot: ItemSlot) -> ArrayVec<HexSlot, { MatrixConfig::ITEM_HEX_NEIGHBORS }> {
    let pos = slot.ring_position();
    let mut hexes = ArrayVec::new();
    hexes.push(HexSlot::wrap(pos));
    hexes.push(HexSlot::wrap((pos + 1) % RING));
    hexes
}

/// Distinct ring-adjacent hex pairs with at least one hex touching `slot`.
///
/// Pairs are unordered and returned with the lower hex index first.
pub fn item_hex_pairs(slot: ItemSlot) -> ArrayVec<(HexSlot, HexSlot), { MatrixConfig::ITEM_HEX_PAIRS }> {
    let mut pairs = ArrayVec::new();
    for hex in item_hex_neighbors(slot) {
        for other in hex_ring_neighbors(hex) {
            let pair = if hex <= other { (hex, other) } else { (other, hex) };
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
    }
    pairs
}

/// Item slots touching the chassis core: the whole inner ring.
pub fn chassis_item_neighbors() -> [ItemSlot; RING] {
    core::array::from_fn(ItemSlot::wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(index: usize) -> ItemSlot {
        ItemSlot::new(index).unwrap()
    }

    fn hex(index: usize) -> HexSlot {
        HexSlot::new(index).unwrap()
    }

    fn indices<const N: usize>(slots: [ItemSlot; N]) -> [usize; N] {
        slots.map(ItemSlot::index)
    }

    #[test]
    fn rejects_out_of_range_indices() {
        assert_eq!(
            ItemSlot::new(12),
            Err(SlotError::ItemSlotOutOfRange { index: 12 })
        );
        assert_eq!(
            HexSlot::new(6),
            Err(SlotError::HexSlotOutOfRange { index: 6 })
        );
        assert!(ItemSlot::try_from(11).is_ok());
        assert!(HexSlot::try_from(5).is_ok());
    }

    #[test]
    fn inner_ring_neighbors_wrap_around() {
        assert_eq!(indices(item_ring_neighbors(slot(0))), [5, 1]);
        assert_eq!(indices(item_ring_neighbors(slot(3))), [2, 4]);
        assert_eq!(indices(item_ring_neighbors(slot(5))), [4, 0]);
    }

    #[test]
    fn edge_ring_neighbors_stay_on_edge_ring() {
        assert_eq!(indices(item_ring_neighbors(slot(6))), [11, 7]);
        assert_eq!(indices(item_ring_neighbors(slot(9))), [8, 10]);
        assert_eq!(indices(item_ring_neighbors(slot(11))), [10, 6]);
    }

    #[test]
    fn ring_adjacency_is_symmetric() {
        for a in ItemSlot::all() {
            for b in ItemSlot::all() {
                let a_sees_b = item_ring_neighbors(a).contains(&b);
                let b_sees_a = item_ring_neighbors(b).contains(&a);
                assert_eq!(a_sees_b, b_sees_a, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn radial_partner_is_an_involution() {
        for s in ItemSlot::all() {
            let partner = item_radial_partner(s);
            assert_ne!(partner.is_inner(), s.is_inner());
            assert_eq!(item_radial_partner(partner), s);
        }
        assert_eq!(item_radial_partner(slot(2)).index(), 8);
        assert_eq!(item_radial_partner(slot(8)).index(), 2);
    }

    #[test]
    fn hex_item_neighbors_match_layout() {
        let expected = [
            [0, 5, 6, 11],
            [1, 0, 7, 6],
            [2, 1, 8, 7],
            [3, 2, 9, 8],
            [4, 3, 10, 9],
            [5, 4, 11, 10],
        ];
        for (h, want) in expected.iter().enumerate() {
            assert_eq!(indices(hex_item_neighbors(hex(h))), *want, "hex {h}");
        }
    }

    #[test]
    fn hex_ring_neighbors_wrap_around() {
        let got = hex_ring_neighbors(hex(0)).map(HexSlot::index);
        assert_eq!(got, [5, 1]);
        let got = hex_ring_neighbors(hex(5)).map(HexSlot::index);
        assert_eq!(got, [4, 0]);
    }

    #[test]
    fn item_hex_neighbors_is_inverse_of_hex_item_neighbors() {
        for s in ItemSlot::all() {
            let mut expected: Vec<HexSlot> = HexSlot::all()
                .filter(|h| hex_item_neighbors(*h).contains(&s))
                .collect();
            let mut got: Vec<HexSlot> = item_hex_neighbors(s).into_iter().collect();
            expected.sort();
            got.sort();
            assert_eq!(got, expected, "item slot {s}");
            assert!(got.len() <= MatrixConfig::ITEM_HEX_NEIGHBORS);
        }
    }

    #[test]
    fn item_hex_pairs_are_distinct_and_touch_the_item() {
        for s in ItemSlot::all() {
            let pairs = item_hex_pairs(s);
            assert_eq!(pairs.len(), MatrixConfig::ITEM_HEX_PAIRS);
            let touching = item_hex_neighbors(s);
            for (a, b) in &pairs {
                assert!(a < b);
                assert!(hex_ring_neighbors(*a).contains(b));
                assert!(touching.contains(a) || touching.contains(b));
            }
        }
        let got: Vec<(usize, usize)> = item_hex_pairs(slot(0))
            .into_iter()
            .map(|(a, b)| (a.index(), b.index()))
            .collect();
        assert_eq!(got, vec![(0, 5), (0, 1), (1, 2)]);
    }

    #[test]
    fn chassis_touches_inner_ring_only() {
        let ring = chassis_item_neighbors();
        assert_eq!(indices(ring), [0, 1, 2, 3, 4, 5]);
        assert!(ring.iter().all(|s| s.is_inner()));
    }
}
