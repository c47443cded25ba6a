//! Ambient simulation framework.
//!
//! Each [`SimulationLayer`] is polled once per world tick on the simulation
//! thread. Layers are expected to be cheap per tick -- heavy work should be
//! amortized across ticks.

use crate::overrides::HostOverrides;
use crate::registry::BlockRegistry;
use crate::world::World;
use crate::world::position::BlockPos;

/// A pluggable simulation layer, ticked synchronously by the host.
pub trait SimulationLayer: Send + Sync {
    /// Human-readable name (used for logging).
    fn name(&self) -> &'static str;

    /// Inspect the world and apply this layer's per-tick effects.
    fn tick(&self, world: &World, registry: &BlockRegistry, overrides: &HostOverrides);
}

/// Run every layer once, in registration order.
pub fn run_layers(
    world: &World,
    registry: &BlockRegistry,
    overrides: &HostOverrides,
    layers: &[Box<dyn SimulationLayer>],
) {
    for layer in layers {
        layer.tick(world, registry, overrides);
        tracing::trace!("simulation layer '{}' ticked", layer.name());
    }
}

/// Dispatch a scheduled/random tick to the behavior registered for the block
/// at `pos`. Blocks without a behavior are inert.
pub fn block_tick(world: &World, registry: &BlockRegistry, pos: BlockPos) {
    let id = world.get_block(pos);
    if let Some(behavior) = registry.behavior(id) {
        behavior.update_tick(world, registry, pos);
    }
}
