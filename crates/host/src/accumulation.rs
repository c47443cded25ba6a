//! The host's layered-snow growth step.
//!
//! Precipitation calls [`tick`] once per settling cell. The eligibility read
//! is redirectable through [`HostOverrides`] so packs can make their own
//! blocks count as snow-layer cells.

use crate::overrides::HostOverrides;
use crate::registry::BlockRegistry;
use crate::world::World;
use crate::world::position::BlockPos;

/// Metadata bit the host sets on a snow-layer cell once it has confirmed
/// solid support underneath. Only grounded stacks keep accumulating.
pub const GROUNDED_BIT: u8 = 0b1000;

/// Let snow settle on one cell.
///
/// Reads the cell's reference `(id, metadata)` -- override first, actual
/// cell otherwise -- and, if the reference reports a grounded layer stack,
/// dispatches `accumulate` to the behavior registered for the reference id.
pub fn tick(world: &World, registry: &BlockRegistry, overrides: &HostOverrides, pos: BlockPos) {
    let (id, meta) = overrides.reference_cell(world, registry, pos);
    if meta & GROUNDED_BIT == 0 {
        return;
    }
    if let Some(behavior) = registry.behavior(id) {
        behavior.accumulate(world, registry, pos);
    }
}
