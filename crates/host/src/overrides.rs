//! Extension points for block packs that need to redirect narrow pieces of
//! host logic.
//!
//! The host's snow-accumulation and layered-placement routines contain
//! hard-coded cell reads. A pack can substitute those reads by registering a
//! hook here -- the sanctioned equivalent of patching the routine itself.
//! Hooks are plain `fn` pointers, registered once at startup, consulted
//! synchronously; a hook returning `None` falls through to the real read.

use crate::registry::BlockRegistry;
use crate::world::World;
use crate::world::block::BlockId;
use crate::world::position::BlockPos;

/// Replaces the reference `(id, metadata)` the accumulation routine reads
/// when deciding whether a cell can take more snow.
pub type AccumulationReferenceFn =
    fn(&World, &BlockRegistry, BlockPos) -> Option<(BlockId, u8)>;

/// Replaces the block id the placement-validity check uses when judging a
/// supporting neighbor's opacity.
pub type OpacityProbeFn = fn(&World, &BlockRegistry, BlockPos) -> Option<BlockId>;

#[derive(Default)]
pub struct HostOverrides {
    accumulation_reference: Option<AccumulationReferenceFn>,
    opacity_probe: Option<OpacityProbeFn>,
}

impl HostOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_accumulation_reference(&mut self, hook: AccumulationReferenceFn) {
        self.accumulation_reference = Some(hook);
    }

    pub fn set_opacity_probe(&mut self, hook: OpacityProbeFn) {
        self.opacity_probe = Some(hook);
    }

    /// The `(id, metadata)` the accumulation routine should treat a cell as.
    pub fn reference_cell(
        &self,
        world: &World,
        registry: &BlockRegistry,
        pos: BlockPos,
    ) -> (BlockId, u8) {
        self.accumulation_reference
            .and_then(|hook| hook(world, registry, pos))
            .unwrap_or_else(|| world.get_block_and_metadata(pos))
    }

    /// The block id the placement check should judge a neighbor's opacity by.
    pub fn neighbor_for_opacity(
        &self,
        world: &World,
        registry: &BlockRegistry,
        pos: BlockPos,
    ) -> BlockId {
        self.opacity_probe
            .and_then(|hook| hook(world, registry, pos))
            .unwrap_or_else(|| world.get_block(pos))
    }
}
