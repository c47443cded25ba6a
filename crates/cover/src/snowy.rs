//! The snow-covered wrapper blocks and the plain layered-snow behavior.
//!
//! A snowy block takes the place of the block it covers; the wrapped block's
//! identity lives in the cell's packed metadata (see [`crate::codec`]) and is
//! restored when the snow goes away.

use snowcap_host::accumulation::GROUNDED_BIT;
use snowcap_host::behavior::{BlockBehavior, BreakCause, drop_block_with_cause};
use snowcap_host::items::ItemStack;
use snowcap_host::registry::BlockRegistry;
use snowcap_host::world::World;
use snowcap_host::world::block::BlockId;
use snowcap_host::world::position::BlockPos;

use crate::block::{ITEM_SNOWBALL, ITEM_SNOW_LAYER};
use crate::codec::{PaintedStairsCodec, SlotCodec, SlotMapping, StoredCodec};

/// Light level above which resting snow melts on its next tick.
pub const MELT_LIGHT_THRESHOLD: u8 = 11;

/// A block type that renders as snow resting on another block.
///
/// `four_layers` variants sit on half-height blocks and cap at four visual
/// layers, leaving the upper two low-nibble bits free for the codec.
pub struct SnowyBlock {
    name: &'static str,
    id: BlockId,
    codec: Box<dyn StoredCodec>,
    four_layers: bool,
}

impl SnowyBlock {
    /// A snowy type whose wrapped block is chosen from a contiguous id range
    /// scanned against the registry at construction time.
    pub fn covering(
        name: &'static str,
        id: BlockId,
        registry: &BlockRegistry,
        min_id: u16,
        max_id: u16,
        excluded: &[BlockId],
        four_layers: bool,
    ) -> Self {
        let mapping = SlotMapping::build(registry, min_id, max_id, excluded);
        tracing::debug!(
            block = name,
            slots = mapping.len(),
            "built slot mapping for snowy block"
        );
        Self {
            name,
            id,
            codec: Box::new(SlotCodec::new(mapping)),
            four_layers,
        }
    }

    /// A snowy type that always wraps one fixed block and keeps its rotation
    /// bits across the round trip.
    pub fn painted_stairs(
        name: &'static str,
        id: BlockId,
        stored: BlockId,
        four_layers: bool,
    ) -> Self {
        Self {
            name,
            id,
            codec: Box::new(PaintedStairsCodec::new(stored)),
            four_layers,
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Highest value the layer field can hold. Layer counts are stored
    /// off-by-one: a field of 0 is one visual layer.
    pub fn max_layers(&self) -> u8 {
        if self.four_layers { 3 } else { 7 }
    }

    /// Layer field of a packed byte.
    pub fn layers(&self, packed: u8) -> u8 {
        packed & self.max_layers()
    }

    /// Layer field shifted into the full-block scale: a four-layer variant
    /// starts half a block up, so its snow surface sits four layers higher
    /// than the field says.
    pub fn relative_layers(&self, packed: u8) -> u8 {
        let layers = self.layers(packed);
        if self.four_layers { layers + 4 } else { layers }
    }

    /// Can this type wrap the given block?
    pub fn can_replace(&self, id: BlockId) -> bool {
        self.codec.can_store(id)
    }

    pub fn encode(&self, id: BlockId, source_meta: u8) -> u8 {
        self.codec.encode(id, source_meta)
    }

    pub fn stored_block(&self, packed: u8) -> BlockId {
        self.codec.stored_block(packed)
    }

    pub fn stored_metadata(&self, packed: u8) -> u8 {
        self.codec.stored_metadata(packed)
    }

    /// Replace the cell's current block with this snowy type wrapping it,
    /// keeping the cell's current metadata. Returns false (cell untouched)
    /// when the block cannot be wrapped by this type.
    pub fn try_make_snowy(&self, world: &World, id: BlockId, pos: BlockPos) -> bool {
        let meta = world.get_metadata(pos);
        self.try_make_snowy_with(world, id, meta, pos)
    }

    /// As [`try_make_snowy`](Self::try_make_snowy), wrapping the given
    /// metadata instead of the cell's current byte.
    pub fn try_make_snowy_with(&self, world: &World, id: BlockId, meta: u8, pos: BlockPos) -> bool {
        if !self.codec.can_store(id) {
            return false;
        }
        world.set_block_and_metadata(pos, self.id, self.codec.encode(id, meta));
        true
    }

    /// Put the wrapped block back in place of this snowy cell.
    pub fn remove_snow(&self, world: &World, packed: u8, pos: BlockPos) {
        world.set_block_and_metadata(
            pos,
            self.codec.stored_block(packed),
            self.codec.stored_metadata(packed),
        );
    }
}

impl BlockBehavior for SnowyBlock {
    fn break_result(
        &self,
        world: &World,
        registry: &BlockRegistry,
        cause: BreakCause,
        pos: BlockPos,
        meta: u8,
    ) -> Option<Vec<ItemStack>> {
        let count = self.layers(meta) + 1;
        match cause {
            BreakCause::SilkTouch => Some(vec![ItemStack::new(ITEM_SNOW_LAYER, count)]),
            BreakCause::PickBlock => Some(vec![ItemStack::one(ITEM_SNOW_LAYER)]),
            BreakCause::ProperTool => Some(vec![ItemStack::new(ITEM_SNOWBALL, count)]),
            BreakCause::ImproperTool => None,
            // Environmental removal yields whatever the wrapped block would.
            BreakCause::World => {
                let stored = self.codec.stored_block(meta);
                match registry.behavior(stored) {
                    Some(behavior) => behavior.break_result(
                        world,
                        registry,
                        cause,
                        pos,
                        self.codec.stored_metadata(meta),
                    ),
                    None => Some(Vec::new()),
                }
            }
        }
    }

    /// Breaking the snow exposes the wrapped block instead of clearing the
    /// cell.
    fn on_destroyed_by_player(
        &self,
        world: &World,
        _registry: &BlockRegistry,
        pos: BlockPos,
        meta: u8,
    ) {
        self.remove_snow(world, meta, pos);
    }

    /// Melt checks. The light branch and the seasonal-cleanup branch run
    /// independently within one tick: when both hold, the cell is dropped
    /// and reverted twice, the second pass reading the metadata the first
    /// pass wrote. That double trigger is long-standing observable behavior
    /// and is kept as is.
    fn update_tick(&self, world: &World, registry: &BlockRegistry, pos: BlockPos) {
        if world.light_level(pos) > MELT_LIGHT_THRESHOLD {
            let meta = world.get_metadata(pos);
            drop_block_with_cause(world, registry, BreakCause::World, pos, meta, self);
            self.remove_snow(world, meta, pos);
            tracing::debug!(block = self.name, ?pos, "snow melted from light");
        }
        let warm = world
            .biome(pos)
            .is_some_and(|biome| !biome.has_surface_snow);
        let cleanup = world.season().is_some_and(|season| season.cleans_up_snow);
        if warm && cleanup {
            let meta = world.get_metadata(pos);
            drop_block_with_cause(world, registry, BreakCause::World, pos, meta, self);
            self.remove_snow(world, meta, pos);
            tracing::debug!(block = self.name, ?pos, "snow removed by seasonal cleanup");
        }
    }

    /// One more layer, up to the variant's cap. No-op at the cap.
    fn accumulate(&self, world: &World, _registry: &BlockRegistry, pos: BlockPos) {
        let meta = world.get_metadata(pos);
        if self.layers(meta) >= self.max_layers() {
            return;
        }
        world.set_metadata(pos, meta + 1);
        world.mark_needs_update(pos);
    }
}

/// The host's plain layered snow. Bits 0-2 hold the layer count (off by
/// one), bit 3 is [`GROUNDED_BIT`].
pub struct LayerSnow;

/// Layer field of a plain snow-layer cell.
pub const LAYER_MASK: u8 = 0b111;

impl BlockBehavior for LayerSnow {
    fn break_result(
        &self,
        _world: &World,
        _registry: &BlockRegistry,
        cause: BreakCause,
        _pos: BlockPos,
        meta: u8,
    ) -> Option<Vec<ItemStack>> {
        let count = (meta & LAYER_MASK) + 1;
        match cause {
            BreakCause::SilkTouch => Some(vec![ItemStack::new(ITEM_SNOW_LAYER, count)]),
            BreakCause::PickBlock => Some(vec![ItemStack::one(ITEM_SNOW_LAYER)]),
            BreakCause::ProperTool => Some(vec![ItemStack::new(ITEM_SNOWBALL, count)]),
            BreakCause::ImproperTool => None,
            BreakCause::World => Some(Vec::new()),
        }
    }

    /// Plain snow melts to nothing.
    fn update_tick(&self, world: &World, _registry: &BlockRegistry, pos: BlockPos) {
        if world.light_level(pos) > MELT_LIGHT_THRESHOLD {
            world.set_block(pos, BlockId::AIR);
        }
    }

    fn accumulate(&self, world: &World, _registry: &BlockRegistry, pos: BlockPos) {
        let meta = world.get_metadata(pos);
        if meta & LAYER_MASK >= LAYER_MASK {
            return;
        }
        world.set_metadata(pos, meta + 1);
        world.mark_needs_update(pos);
    }
}

/// A freshly placed grounded snow layer: one layer, eligible to grow.
pub const fn grounded_layer_meta() -> u8 {
    GROUNDED_BIT
}
