//! Placement validity for layered blocks (snow layers and the like).

use crate::overrides::HostOverrides;
use crate::registry::{BlockRegistry, OPACITY_FULL};
use crate::world::World;
use crate::world::block::BlockId;
use crate::world::position::BlockPos;

/// Whether a layered block may be placed at `pos`.
///
/// The cell itself must be empty and the cell below must be fully opaque.
/// The supporting neighbor's id is redirectable through [`HostOverrides`] so
/// packs can report an opaque stand-in for blocks whose real opacity would
/// reject placement.
pub fn can_place_layered_at(
    world: &World,
    registry: &BlockRegistry,
    overrides: &HostOverrides,
    pos: BlockPos,
) -> bool {
    if world.get_block(pos) != BlockId::AIR {
        return false;
    }
    let support = overrides.neighbor_for_opacity(world, registry, pos.below());
    registry.opacity(support) >= OPACITY_FULL
}
