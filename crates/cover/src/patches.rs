//! Host hooks that make snowy cells look right to the host's own snow
//! routines.

use snowcap_host::accumulation::GROUNDED_BIT;
use snowcap_host::overrides::HostOverrides;
use snowcap_host::registry::BlockRegistry;
use snowcap_host::world::World;
use snowcap_host::world::block::BlockId;
use snowcap_host::world::position::BlockPos;

use crate::block::{self, STONE};

/// Register the pack's hooks on the host.
pub fn install(overrides: &mut HostOverrides) {
    overrides.set_accumulation_reference(snowy_accumulation_reference);
    overrides.set_opacity_probe(snowy_opacity_probe);
    tracing::info!("snow-cover host hooks installed");
}

/// A snowy cell reports itself as a grounded layer stack so accumulation
/// keeps feeding it; layer bookkeeping happens in the snowy behavior, not in
/// the host's metadata read.
fn snowy_accumulation_reference(
    world: &World,
    _registry: &BlockRegistry,
    pos: BlockPos,
) -> Option<(BlockId, u8)> {
    let id = world.get_block(pos);
    if block::is_snowy(id) {
        Some((id, GROUNDED_BIT))
    } else {
        None
    }
}

/// A snowy cell wrapping a non-transparent block with layers on it counts as
/// fully opaque support for placement checks; stone stands in for "any full
/// opaque block".
fn snowy_opacity_probe(
    world: &World,
    registry: &BlockRegistry,
    pos: BlockPos,
) -> Option<BlockId> {
    let (id, meta) = world.get_block_and_metadata(pos);
    if block::is_snowy(id) && registry.opacity(id) != 0 && meta & 0b11 != 0 {
        Some(STONE)
    } else {
        None
    }
}
