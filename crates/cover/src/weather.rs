//! Precipitation: a simulation layer that settles snow on exposed surfaces.

use snowcap_host::accumulation;
use snowcap_host::overrides::HostOverrides;
use snowcap_host::placement::can_place_layered_at;
use snowcap_host::registry::BlockRegistry;
use snowcap_host::simulation::SimulationLayer;
use snowcap_host::world::World;
use snowcap_host::world::block::BlockId;
use snowcap_host::world::position::BlockPos;

use crate::block::{self, SNOW_LAYER, SnowyBlocks};
use crate::snowy::grounded_layer_meta;

/// Settles one unit of snow per tick on every surface column in a square
/// region around the origin.
///
/// Per column, topmost non-air cell first: an already-snowy cell (plain
/// layer or wrapper) accumulates; an exposed cell with full opaque support
/// takes a fresh grounded layer; anything else that one of the snowy types
/// can wrap gets wrapped. Columns with none of those stay untouched.
pub struct SnowfallLayer {
    blocks: SnowyBlocks,
    radius: i64,
    scan_top: i64,
    scan_bottom: i64,
}

impl SnowfallLayer {
    pub fn new(blocks: SnowyBlocks, radius: i64) -> Self {
        Self {
            blocks,
            radius,
            scan_top: 79,
            scan_bottom: 0,
        }
    }

    /// Restrict the vertical surface scan. Top must be >= bottom.
    pub fn with_scan_range(mut self, bottom: i64, top: i64) -> Self {
        self.scan_bottom = bottom;
        self.scan_top = top;
        self
    }

    /// Topmost non-air cell of a column within the scan range.
    fn surface(&self, world: &World, x: i64, z: i64) -> Option<BlockPos> {
        let mut y = self.scan_top;
        while y >= self.scan_bottom {
            let pos = BlockPos { x, y, z };
            if world.get_block(pos) != BlockId::AIR {
                return Some(pos);
            }
            y -= 1;
        }
        None
    }

    fn snow_column(
        &self,
        world: &World,
        registry: &BlockRegistry,
        overrides: &HostOverrides,
        x: i64,
        z: i64,
    ) {
        let Some(surface) = self.surface(world, x, z) else {
            return;
        };
        let id = world.get_block(surface);

        // Already snow-bearing: grow it through the host's grounded check.
        if id == SNOW_LAYER || block::is_snowy(id) {
            accumulation::tick(world, registry, overrides, surface);
            return;
        }

        // Full opaque support: start a plain layer stack above.
        let target = surface.above();
        if can_place_layered_at(world, registry, overrides, target) {
            world.set_block_and_metadata(target, SNOW_LAYER, grounded_layer_meta());
            world.mark_needs_update(target);
            return;
        }

        // No room for a plain layer: wrap the surface block itself.
        for snowy in [
            &self.blocks.painted_stairs,
            &self.blocks.slab,
            &self.blocks.cover,
        ] {
            if snowy.try_make_snowy(world, id, surface) {
                tracing::debug!(block = snowy.name(), ?surface, "covered surface block");
                return;
            }
        }
    }
}

impl SimulationLayer for SnowfallLayer {
    fn name(&self) -> &'static str {
        "snowfall"
    }

    fn tick(&self, world: &World, registry: &BlockRegistry, overrides: &HostOverrides) {
        for x in -self.radius..=self.radius {
            for z in -self.radius..=self.radius {
                self.snow_column(world, registry, overrides, x, z);
            }
        }
    }
}
