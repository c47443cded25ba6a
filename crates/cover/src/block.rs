//! Block and item ids for the snow-cover pack, plus registry wiring.

use snowcap_host::behavior::DropSelf;
use snowcap_host::items::ItemId;
use snowcap_host::registry::{BlockDef, BlockRegistry, OPACITY_FULL};
use snowcap_host::world::block::BlockId;
use std::sync::Arc;

use crate::snowy::SnowyBlock;

// -- Host block ids the pack builds on --

pub const AIR: BlockId = BlockId(0);
pub const STONE: BlockId = BlockId(1);
pub const GRASS: BlockId = BlockId(2);
pub const DIRT: BlockId = BlockId(3);
pub const COBBLESTONE: BlockId = BlockId(4);
pub const PLANKS: BlockId = BlockId(5);
pub const LOG: BlockId = BlockId(6);
pub const BRICKS: BlockId = BlockId(7);
pub const SAND: BlockId = BlockId(12);
pub const GRAVEL: BlockId = BlockId(13);
pub const SLAB_STONE: BlockId = BlockId(44);
pub const SLAB_PLANKS: BlockId = BlockId(45);
pub const STAIRS_PLANKS: BlockId = BlockId(53);
pub const STAIRS_PLANKS_PAINTED: BlockId = BlockId(54);
/// The host's own layered snow block.
pub const SNOW_LAYER: BlockId = BlockId(78);

// -- The pack's snow-covered blocks --

pub const SNOWY_COVER: BlockId = BlockId(900);
pub const SNOWY_SLAB: BlockId = BlockId(901);
pub const SNOWY_STAIRS_PAINTED: BlockId = BlockId(902);

// -- Item ids --

pub const ITEM_SNOW_LAYER: ItemId = ItemId(330);
pub const ITEM_SNOWBALL: ItemId = ItemId(331);

/// The item an ordinary block drops: same numeric id as the block.
pub const fn block_item(id: BlockId) -> ItemId {
    ItemId(id.0)
}

/// Is this one of the pack's snow-covered wrapper blocks?
pub fn is_snowy(id: BlockId) -> bool {
    matches!(id, SNOWY_COVER | SNOWY_SLAB | SNOWY_STAIRS_PAINTED)
}

/// The pack's three snowy block types, shared with the behavior registry.
pub struct SnowyBlocks {
    pub cover: Arc<SnowyBlock>,
    pub slab: Arc<SnowyBlock>,
    pub painted_stairs: Arc<SnowyBlock>,
}

/// Register the pack's block definitions and behaviors.
///
/// Vanilla-side defs go in first so the slot mappings (which scan the
/// registry for usable ids, ascending) see them. Falling blocks are excluded
/// from the coverable range: snow on top of them would detach mid-fall.
pub fn register_blocks(registry: &mut BlockRegistry) -> SnowyBlocks {
    let solids: [(BlockId, &'static str); 8] = [
        (STONE, "stone"),
        (GRASS, "grass"),
        (DIRT, "dirt"),
        (COBBLESTONE, "cobblestone"),
        (PLANKS, "planks"),
        (LOG, "log"),
        (BRICKS, "bricks"),
        (SAND, "sand"),
    ];
    for (id, name) in solids {
        registry.register(id, BlockDef::new(name, OPACITY_FULL));
        registry.attach_behavior(id, Arc::new(DropSelf::new(block_item(id))));
    }
    registry.register(GRAVEL, BlockDef::new("gravel", OPACITY_FULL));
    registry.attach_behavior(GRAVEL, Arc::new(DropSelf::new(block_item(GRAVEL))));

    registry.register(SLAB_STONE, BlockDef::new("slab_stone", 1));
    registry.register(SLAB_PLANKS, BlockDef::new("slab_planks", 1));
    registry.register(STAIRS_PLANKS, BlockDef::new("stairs_planks", 1));
    registry.register(STAIRS_PLANKS_PAINTED, BlockDef::new("stairs_planks_painted", 1));
    for id in [SLAB_STONE, SLAB_PLANKS, STAIRS_PLANKS, STAIRS_PLANKS_PAINTED] {
        registry.attach_behavior(id, Arc::new(DropSelf::new(block_item(id))));
    }

    registry.register(SNOW_LAYER, BlockDef::new("snow_layer", 0));
    registry.attach_behavior(SNOW_LAYER, Arc::new(crate::snowy::LayerSnow));

    // Snowy wrappers are built after the vanilla defs so their mappings see
    // every usable id in range.
    let cover = Arc::new(SnowyBlock::covering(
        "snowy_cover",
        SNOWY_COVER,
        registry,
        STONE.0,
        GRAVEL.0,
        &[SAND, GRAVEL],
        false,
    ));
    let slab = Arc::new(SnowyBlock::covering(
        "snowy_slab",
        SNOWY_SLAB,
        registry,
        SLAB_STONE.0,
        SLAB_PLANKS.0,
        &[],
        true,
    ));
    let painted_stairs = Arc::new(SnowyBlock::painted_stairs(
        "snowy_stairs_painted",
        SNOWY_STAIRS_PAINTED,
        STAIRS_PLANKS_PAINTED,
        true,
    ));

    // Non-full opacity: the wrapped block may be a slab or stairs.
    for snowy in [&cover, &slab, &painted_stairs] {
        registry.register(snowy.id(), BlockDef::new(snowy.name(), 1));
        let behavior: Arc<dyn snowcap_host::behavior::BlockBehavior> = snowy.clone();
        registry.attach_behavior(snowy.id(), behavior);
    }

    SnowyBlocks {
        cover,
        slab,
        painted_stairs,
    }
}
