//! Host-hook tests: the opacity probe, the accumulation reference, and the
//! snowfall layer end to end.

use snowcap_cover::block::{
    self, SLAB_STONE, SNOWY_SLAB, SNOWY_STAIRS_PAINTED, SNOW_LAYER, STAIRS_PLANKS_PAINTED, STONE,
    SnowyBlocks,
};
use snowcap_cover::patches;
use snowcap_cover::weather::SnowfallLayer;
use snowcap_host::accumulation::{self, GROUNDED_BIT};
use snowcap_host::overrides::HostOverrides;
use snowcap_host::placement::can_place_layered_at;
use snowcap_host::registry::BlockRegistry;
use snowcap_host::simulation::SimulationLayer;
use snowcap_host::world::World;
use snowcap_host::world::position::BlockPos;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn setup() -> (World, BlockRegistry, SnowyBlocks, HostOverrides) {
    let mut registry = BlockRegistry::new();
    let blocks = block::register_blocks(&mut registry);
    let mut overrides = HostOverrides::new();
    patches::install(&mut overrides);
    (World::new(), registry, blocks, overrides)
}

// ---------------------------------------------------------------------------
// Opacity probe
// ---------------------------------------------------------------------------

#[test]
fn layered_snowy_slab_counts_as_solid_support() {
    let (world, registry, blocks, overrides) = setup();
    let support = BlockPos::new(0, 4, 0);
    world.set_block(support, SLAB_STONE);
    blocks.slab.try_make_snowy(&world, SLAB_STONE, support);
    // One layer on the slab: low state bits nonzero.
    world.set_metadata(support, world.get_metadata(support) | 1);

    assert!(
        can_place_layered_at(&world, &registry, &overrides, support.above()),
        "a layered snowy slab must vouch as full support"
    );

    let bare = HostOverrides::new();
    assert!(
        !can_place_layered_at(&world, &registry, &bare, support.above()),
        "without the hook the slab's real opacity rejects placement"
    );
}

#[test]
fn layerless_snowy_slab_is_not_solid_support() {
    let (world, registry, blocks, overrides) = setup();
    let support = BlockPos::new(0, 4, 0);
    world.set_block(support, SLAB_STONE);
    blocks.slab.try_make_snowy(&world, SLAB_STONE, support);

    assert_eq!(world.get_metadata(support) & 0b11, 0);
    assert!(!can_place_layered_at(
        &world, &registry, &overrides, support.above()
    ));
}

// ---------------------------------------------------------------------------
// Accumulation reference
// ---------------------------------------------------------------------------

#[test]
fn snowy_cells_grow_only_with_the_hook_installed() {
    let (world, registry, blocks, overrides) = setup();
    let pos = BlockPos::new(2, 4, 2);
    world.set_block(pos, STONE);
    blocks.cover.try_make_snowy(&world, STONE, pos);
    let fresh = world.get_metadata(pos);

    // Without the hook the packed metadata fails the grounded check.
    let bare = HostOverrides::new();
    accumulation::tick(&world, &registry, &bare, pos);
    assert_eq!(world.get_metadata(pos), fresh, "no hook, no growth");

    accumulation::tick(&world, &registry, &overrides, pos);
    assert_eq!(
        blocks.cover.layers(world.get_metadata(pos)),
        blocks.cover.layers(fresh) + 1
    );
}

// ---------------------------------------------------------------------------
// Snowfall layer, end to end
// ---------------------------------------------------------------------------

/// Stone floor at y=0 across a 3x3 region, a bare slab at one column and a
/// rotated painted stair at another.
fn snowfall_world() -> World {
    let world = World::new();
    for x in -1..=1 {
        for z in -1..=1 {
            world.set_block(BlockPos::new(x, 0, z), STONE);
        }
    }
    world.set_block(BlockPos::new(1, 1, 0), SLAB_STONE);
    world.set_block_and_metadata(BlockPos::new(-1, 1, 1), STAIRS_PLANKS_PAINTED, 3);
    world
}

#[test]
fn snowfall_places_layers_and_wraps_half_blocks() {
    let (_, registry, blocks, overrides) = setup();
    let world = snowfall_world();
    let layer = SnowfallLayer::new(blocks, 1).with_scan_range(0, 8);

    layer.tick(&world, &registry, &overrides);

    // Bare stone columns got a fresh grounded layer above the surface.
    let (id, meta) = world.get_block_and_metadata(BlockPos::new(0, 1, 0));
    assert_eq!(id, SNOW_LAYER);
    assert_eq!(meta & GROUNDED_BIT, GROUNDED_BIT, "fresh layers are grounded");

    // The slab column could not take a plain layer and got wrapped instead.
    assert_eq!(world.get_block(BlockPos::new(1, 1, 0)), SNOWY_SLAB);

    // The painted stair wrapped through its own variant, rotation intact.
    let (id, meta) = world.get_block_and_metadata(BlockPos::new(-1, 1, 1));
    assert_eq!(id, SNOWY_STAIRS_PAINTED);
    assert_eq!((meta >> 2) & 0b11, 3);
}

#[test]
fn repeated_snowfall_grows_every_kind_of_stack() {
    let (_, registry, blocks, overrides) = setup();
    let world = snowfall_world();
    let slab = std::sync::Arc::clone(&blocks.slab);
    let layer = SnowfallLayer::new(blocks, 1).with_scan_range(0, 8);

    for _ in 0..3 {
        layer.tick(&world, &registry, &overrides);
    }

    // Plain stack: placed on tick 1, grown on ticks 2 and 3.
    let meta = world.get_metadata(BlockPos::new(0, 1, 0));
    assert_eq!(meta & 0b111, 2);

    // Wrapped slab: wrapped on tick 1, grown on ticks 2 and 3.
    let meta = world.get_metadata(BlockPos::new(1, 1, 0));
    assert_eq!(world.get_block(BlockPos::new(1, 1, 0)), SNOWY_SLAB);
    assert_eq!(slab.layers(meta), 2);
}

#[test]
fn snowfall_skips_columns_it_cannot_serve() {
    let (_, registry, blocks, overrides) = setup();
    let world = World::new();
    // Plain stairs: too transparent for a layer, and no snowy type wraps
    // them.
    world.set_block(BlockPos::new(0, 0, 0), block::STAIRS_PLANKS);

    let layer = SnowfallLayer::new(blocks, 1).with_scan_range(0, 8);
    layer.tick(&world, &registry, &overrides);

    assert_eq!(world.get_block(BlockPos::new(0, 0, 0)), block::STAIRS_PLANKS);
    assert_eq!(
        world.get_block(BlockPos::new(0, 1, 0)),
        snowcap_host::world::block::BlockId::AIR
    );
}
