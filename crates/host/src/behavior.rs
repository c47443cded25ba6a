//! Block-behavior dispatch: the hooks the host calls on registered blocks.

use crate::items::{ItemId, ItemStack};
use crate::registry::BlockRegistry;
use crate::world::World;
use crate::world::position::BlockPos;

/// Why a block is being removed. Break-result rules branch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakCause {
    /// Broken with a silk-touch-enchanted tool.
    SilkTouch,
    /// Creative-mode pick block.
    PickBlock,
    /// Broken with the correct tool class.
    ProperTool,
    /// Broken with the wrong tool class.
    ImproperTool,
    /// Removed by the environment (melting, decay, explosions).
    World,
}

/// Behavior hooks a block pack registers per block id.
///
/// `break_result` distinguishes "explicitly nothing drops" (`None`) from a
/// result that happens to be empty: an improper tool yields `None`, while a
/// delegated rule may legitimately return `Some(vec![])`.
///
/// All hooks run synchronously on the simulation thread.
pub trait BlockBehavior: Send + Sync {
    /// What this block drops when removed for the given cause.
    fn break_result(
        &self,
        _world: &World,
        _registry: &BlockRegistry,
        _cause: BreakCause,
        _pos: BlockPos,
        _meta: u8,
    ) -> Option<Vec<ItemStack>> {
        Some(Vec::new())
    }

    /// Called after a player destroys this block, before the cell is cleared.
    fn on_destroyed_by_player(
        &self,
        _world: &World,
        _registry: &BlockRegistry,
        _pos: BlockPos,
        _meta: u8,
    ) {
    }

    /// Scheduled/random tick.
    fn update_tick(&self, _world: &World, _registry: &BlockRegistry, _pos: BlockPos) {}

    /// Called by the precipitation simulation when snow settles on this cell.
    fn accumulate(&self, _world: &World, _registry: &BlockRegistry, _pos: BlockPos) {}
}

/// The common case: a block that drops a single fixed item.
pub struct DropSelf {
    pub item: ItemId,
}

impl DropSelf {
    pub const fn new(item: ItemId) -> Self {
        Self { item }
    }
}

impl BlockBehavior for DropSelf {
    fn break_result(
        &self,
        _world: &World,
        _registry: &BlockRegistry,
        _cause: BreakCause,
        _pos: BlockPos,
        _meta: u8,
    ) -> Option<Vec<ItemStack>> {
        Some(vec![ItemStack::one(self.item)])
    }
}

/// Compute a block's break result and feed anything it yields to the world's
/// drop sink. A `None` result (explicitly nothing) records no drop.
pub fn drop_block_with_cause(
    world: &World,
    registry: &BlockRegistry,
    cause: BreakCause,
    pos: BlockPos,
    meta: u8,
    behavior: &dyn BlockBehavior,
) {
    if let Some(stacks) = behavior.break_result(world, registry, cause, pos, meta) {
        if !stacks.is_empty() {
            world.spawn_drops(pos, stacks);
        }
    }
}
