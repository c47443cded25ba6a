//! Melt-tick behavior: the light branch, the seasonal-cleanup branch, and
//! the pinned double trigger when both hold at once.

use snowcap_cover::block::{
    self, SLAB_PLANKS, SNOWY_COVER, SNOW_LAYER, STONE, SnowyBlocks,
};
use snowcap_cover::snowy::MELT_LIGHT_THRESHOLD;
use snowcap_host::items::ItemStack;
use snowcap_host::registry::BlockRegistry;
use snowcap_host::simulation;
use snowcap_host::world::World;
use snowcap_host::world::block::BlockId;
use snowcap_host::world::climate::{Biome, Season};
use snowcap_host::world::position::BlockPos;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const POS: BlockPos = BlockPos::new(3, 6, 3);

fn setup() -> (World, BlockRegistry, SnowyBlocks) {
    let mut registry = BlockRegistry::new();
    let blocks = block::register_blocks(&mut registry);
    (World::new(), registry, blocks)
}

fn warm_cleanup_climate(world: &World) {
    world.set_biome(POS.chunk(), Biome {
        name: "plains",
        has_surface_snow: false,
    });
    world.set_season(Some(Season {
        name: "spring",
        cleans_up_snow: true,
    }));
}

// ---------------------------------------------------------------------------
// Single branches
// ---------------------------------------------------------------------------

#[test]
fn bright_light_melts_back_to_the_wrapped_block() {
    let (world, registry, blocks) = setup();
    world.set_block(POS, SLAB_PLANKS);
    blocks.slab.try_make_snowy(&world, SLAB_PLANKS, POS);
    world.set_light(POS, MELT_LIGHT_THRESHOLD + 1);

    simulation::block_tick(&world, &registry, POS);

    assert_eq!(world.get_block_and_metadata(POS), (SLAB_PLANKS, 0));
    let drops = world.take_drops();
    assert_eq!(drops.len(), 1, "one melt, one drop event");
    assert_eq!(
        drops[0].1,
        vec![ItemStack::one(block::block_item(SLAB_PLANKS))],
        "environmental removal yields the wrapped block's own drops"
    );
}

#[test]
fn dim_light_keeps_the_snow() {
    let (world, registry, blocks) = setup();
    world.set_block(POS, SLAB_PLANKS);
    blocks.slab.try_make_snowy(&world, SLAB_PLANKS, POS);
    world.set_light(POS, MELT_LIGHT_THRESHOLD);
    world.set_biome(POS.chunk(), Biome {
        name: "tundra",
        has_surface_snow: true,
    });
    world.set_season(Some(Season {
        name: "winter",
        cleans_up_snow: false,
    }));

    let before = world.get_block_and_metadata(POS);
    simulation::block_tick(&world, &registry, POS);

    assert_eq!(world.get_block_and_metadata(POS), before);
    assert!(world.take_drops().is_empty());
}

#[test]
fn seasonal_cleanup_melts_without_light() {
    let (world, registry, blocks) = setup();
    world.set_block(POS, SLAB_PLANKS);
    blocks.slab.try_make_snowy(&world, SLAB_PLANKS, POS);
    warm_cleanup_climate(&world);

    simulation::block_tick(&world, &registry, POS);

    assert_eq!(world.get_block_and_metadata(POS), (SLAB_PLANKS, 0));
    assert_eq!(world.take_drops().len(), 1);
}

#[test]
fn cleanup_needs_both_a_snowless_biome_and_a_cleanup_season() {
    let (world, registry, blocks) = setup();
    world.set_block(POS, SLAB_PLANKS);
    blocks.slab.try_make_snowy(&world, SLAB_PLANKS, POS);

    // Cleanup season alone, no biome assigned: nothing happens.
    world.set_season(Some(Season {
        name: "spring",
        cleans_up_snow: true,
    }));
    simulation::block_tick(&world, &registry, POS);
    assert!(block::is_snowy(world.get_block(POS)));

    // Snowless biome alone, season without cleanup: still nothing.
    world.set_biome(POS.chunk(), Biome {
        name: "plains",
        has_surface_snow: false,
    });
    world.set_season(Some(Season {
        name: "winter",
        cleans_up_snow: false,
    }));
    simulation::block_tick(&world, &registry, POS);
    assert!(block::is_snowy(world.get_block(POS)));
    assert!(world.take_drops().is_empty());
}

// ---------------------------------------------------------------------------
// The pinned double trigger
// ---------------------------------------------------------------------------

#[test]
fn light_and_season_both_fire_in_one_tick() {
    let (world, registry, blocks) = setup();
    world.set_block(POS, STONE);
    blocks.cover.try_make_snowy(&world, STONE, POS);
    assert_eq!(world.get_block(POS), SNOWY_COVER);

    world.set_light(POS, MELT_LIGHT_THRESHOLD + 1);
    warm_cleanup_climate(&world);

    simulation::block_tick(&world, &registry, POS);

    // The cell reverts once; the second branch re-reads the already-reverted
    // metadata and reverts again, a no-op for a slot-0 block.
    assert_eq!(world.get_block_and_metadata(POS), (STONE, 0));

    let drops = world.take_drops();
    assert_eq!(
        drops.len(),
        2,
        "both branches run in the same tick and each records a drop"
    );
    for (_, stacks) in &drops {
        assert_eq!(stacks, &vec![ItemStack::one(block::block_item(STONE))]);
    }
}

// ---------------------------------------------------------------------------
// Plain layered snow
// ---------------------------------------------------------------------------

#[test]
fn plain_snow_layers_melt_to_air() {
    let (world, registry, _blocks) = setup();
    world.set_block_and_metadata(POS, SNOW_LAYER, 0b1010);
    world.set_light(POS, MELT_LIGHT_THRESHOLD + 1);

    simulation::block_tick(&world, &registry, POS);

    assert_eq!(world.get_block(POS), BlockId::AIR);
    assert!(world.take_drops().is_empty(), "melting plain snow drops nothing");
}
