//! Packed-metadata codec for snow-covered blocks.
//!
//! A snowy cell's one metadata byte carries two fields: the low nibble holds
//! the layer count (and, for some variants, a rotation), the high nibble
//! holds a 4-bit slot index selecting the wrapped block from a per-type
//! mapping table built at registration time.

use snowcap_host::registry::BlockRegistry;
use snowcap_host::world::block::BlockId;

/// Ordered mapping from slot index to wrapped block id.
///
/// Built once per snowy block type from a contiguous candidate id range:
/// ids that are unregistered or explicitly excluded are skipped, the rest
/// get slots densely from 0 in ascending id order. Immutable afterwards.
///
/// The table may end up with more than 16 entries, but the slot field is 4
/// bits: entries past slot 15 are accepted by `contains` yet cannot be
/// encoded (see [`SlotCodec::encode`]).
pub struct SlotMapping {
    slots: Vec<BlockId>,
}

impl SlotMapping {
    pub fn build(registry: &BlockRegistry, min_id: u16, max_id: u16, excluded: &[BlockId]) -> Self {
        let mut slots = Vec::new();
        for raw in min_id..=max_id {
            let id = BlockId(raw);
            if !registry.is_registered(id) || excluded.contains(&id) {
                continue;
            }
            slots.push(id);
        }
        Self { slots }
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.slots.contains(&id)
    }

    pub fn slot_of(&self, id: BlockId) -> Option<usize> {
        self.slots.iter().position(|&s| s == id)
    }

    pub fn block_at(&self, slot: usize) -> Option<BlockId> {
        self.slots.get(slot).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// How a snowy block type derives its stored block and metadata from the
/// packed byte. One required method pair, overridden per variant -- the
/// generic table lookup is not hard-wired.
pub trait StoredCodec: Send + Sync {
    /// Can this block id be wrapped by this type at all?
    fn can_store(&self, id: BlockId) -> bool;

    /// Pack the wrapped block's identity (and whatever of its metadata the
    /// variant keeps) into a fresh metadata byte. Layer bits start at zero.
    fn encode(&self, id: BlockId, source_meta: u8) -> u8;

    /// The wrapped block a packed byte refers to.
    fn stored_block(&self, packed: u8) -> BlockId;

    /// The metadata the cell reverts to alongside [`stored_block`].
    fn stored_metadata(&self, packed: u8) -> u8;
}

/// The generic codec: high-nibble slot index into a [`SlotMapping`].
pub struct SlotCodec {
    mapping: SlotMapping,
}

impl SlotCodec {
    pub fn new(mapping: SlotMapping) -> Self {
        Self { mapping }
    }
}

impl StoredCodec for SlotCodec {
    fn can_store(&self, id: BlockId) -> bool {
        self.mapping.contains(id)
    }

    /// Unmapped ids, and mapped ids whose slot is past 15, silently encode
    /// as 0 (slot 0, zero layers). That collision is long-standing behavior
    /// callers rely on not to panic; it is pinned by a regression test
    /// rather than turned into an error.
    fn encode(&self, id: BlockId, _source_meta: u8) -> u8 {
        match self.mapping.slot_of(id) {
            Some(slot) if slot <= 0xF => (slot as u8) << 4,
            _ => 0,
        }
    }

    fn stored_block(&self, packed: u8) -> BlockId {
        let slot = ((packed >> 4) & 0xF) as usize;
        self.mapping.block_at(slot).unwrap_or(BlockId::AIR)
    }

    fn stored_metadata(&self, _packed: u8) -> u8 {
        0
    }
}

/// Rotation-aware codec for painted stairs: the stored block is a single
/// fixed id, and the source metadata's low two bits (the stairs rotation)
/// ride along in bits 2-3 of the packed byte instead of a slot lookup.
pub struct PaintedStairsCodec {
    stored: BlockId,
}

impl PaintedStairsCodec {
    pub fn new(stored: BlockId) -> Self {
        Self { stored }
    }

    /// Rotation field of a packed byte (bits 2-3).
    pub fn rotation(packed: u8) -> u8 {
        (packed >> 2) & 0b11
    }
}

impl StoredCodec for PaintedStairsCodec {
    fn can_store(&self, id: BlockId) -> bool {
        id == self.stored
    }

    fn encode(&self, _id: BlockId, source_meta: u8) -> u8 {
        let rotation = (source_meta & 0b11) << 2;
        (source_meta & 0b1111_0000) | rotation
    }

    fn stored_block(&self, _packed: u8) -> BlockId {
        self.stored
    }

    fn stored_metadata(&self, packed: u8) -> u8 {
        (packed & 0b1111_0000) | Self::rotation(packed)
    }
}
