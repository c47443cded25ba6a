use snowcap_cover::block::{self, SLAB_STONE, SNOW_LAYER, STAIRS_PLANKS_PAINTED, STONE};
use snowcap_cover::patches;
use snowcap_cover::weather::SnowfallLayer;
use snowcap_host::overrides::HostOverrides;
use snowcap_host::registry::BlockRegistry;
use snowcap_host::simulation::{self, SimulationLayer};
use snowcap_host::world::World;
use snowcap_host::world::block::BlockId;
use snowcap_host::world::climate::{Biome, Season};
use snowcap_host::world::position::BlockPos;

const SURFACE_Y: i64 = 4;

fn main() -> anyhow::Result<()> {
    let ticks: u32 = std::env::args()
        .skip_while(|a| a != "--ticks")
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    let radius: i64 = std::env::args()
        .skip_while(|a| a != "--radius")
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);
    let season_cleanup = std::env::args().any(|a| a == "--season-cleanup");

    anyhow::ensure!(radius >= 0, "--radius must be non-negative");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .init();

    tracing::info!("Snowcap -- snow-covered block demo");

    let mut registry = BlockRegistry::new();
    let blocks = block::register_blocks(&mut registry);
    tracing::info!("Registered {} block definitions", registry.len());

    let mut overrides = HostOverrides::new();
    patches::install(&mut overrides);

    let world = World::new();
    generate_flat_world(&world, radius);
    world.set_season(Some(Season {
        name: "winter",
        cleans_up_snow: false,
    }));
    tracing::info!("World ready: {} chunks", world.chunk_count());

    // ── Snowfall phase ───────────────────────────────────────────────────
    let layers: Vec<Box<dyn SimulationLayer>> = vec![Box::new(
        SnowfallLayer::new(blocks, radius).with_scan_range(0, 16),
    )];
    for tick in 0..ticks {
        simulation::run_layers(&world, &registry, &overrides, &layers);
        let updated = world.take_needs_update();
        tracing::info!(tick, cells = updated.len(), "snowfall tick");
    }

    report_surface(&world, radius);

    // ── Melt phase ───────────────────────────────────────────────────────
    if season_cleanup {
        tracing::info!("Switching to a snow-free climate with spring cleanup");
        for x in -radius..=radius {
            for z in -radius..=radius {
                world.set_biome(BlockPos::new(x, 0, z).chunk(), Biome {
                    name: "plains",
                    has_surface_snow: false,
                });
            }
        }
        world.set_season(Some(Season {
            name: "spring",
            cleans_up_snow: true,
        }));
    } else {
        tracing::info!("Raising light above the melt threshold");
        for pos in snow_cells(&world, radius) {
            world.set_light(pos, 12);
        }
    }

    for pos in snow_cells(&world, radius) {
        simulation::block_tick(&world, &registry, pos);
    }

    let drops = world.take_drops();
    tracing::info!("Melt produced {} drop events", drops.len());
    for (pos, stacks) in &drops {
        for stack in stacks {
            tracing::debug!(?pos, item = stack.item.0, count = stack.count, "drop");
        }
    }

    report_surface(&world, radius);
    Ok(())
}

/// Stone ground with a grass top, plus a slab and a painted stair so the
/// snowfall has something to wrap.
fn generate_flat_world(world: &World, radius: i64) {
    for x in -radius..=radius {
        for z in -radius..=radius {
            for y in 0..SURFACE_Y {
                world.set_block(BlockPos::new(x, y, z), STONE);
            }
            world.set_block(BlockPos::new(x, SURFACE_Y, z), block::GRASS);
        }
    }
    world.set_block(BlockPos::new(0, SURFACE_Y + 1, 0), SLAB_STONE);
    // Rotation 2 in the low bits, carried through the snowy round trip.
    world.set_block_and_metadata(BlockPos::new(1, SURFACE_Y + 1, 1), STAIRS_PLANKS_PAINTED, 2);
}

/// Every snow-bearing cell in the demo region.
fn snow_cells(world: &World, radius: i64) -> Vec<BlockPos> {
    let mut cells = Vec::new();
    for x in -radius..=radius {
        for z in -radius..=radius {
            for y in SURFACE_Y..=SURFACE_Y + 2 {
                let pos = BlockPos::new(x, y, z);
                let id = world.get_block(pos);
                if id == SNOW_LAYER || block::is_snowy(id) {
                    cells.push(pos);
                }
            }
        }
    }
    cells
}

fn report_surface(world: &World, radius: i64) {
    let mut plain = 0usize;
    let mut snowy = 0usize;
    let mut bare = 0usize;
    for pos in (-radius..=radius).flat_map(|x| (-radius..=radius).map(move |z| (x, z))) {
        let mut found = false;
        for y in (0..=SURFACE_Y + 2).rev() {
            let id = world.get_block(BlockPos::new(pos.0, y, pos.1));
            if id == BlockId::AIR {
                continue;
            }
            if id == SNOW_LAYER {
                plain += 1;
            } else if block::is_snowy(id) {
                snowy += 1;
            } else {
                bare += 1;
            }
            found = true;
            break;
        }
        if !found {
            bare += 1;
        }
    }
    tracing::info!(plain, snowy, bare, "surface summary");
}
