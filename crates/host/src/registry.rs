use crate::behavior::BlockBehavior;
use crate::world::block::BlockId;
use std::collections::HashMap;
use std::sync::Arc;

/// Full opacity on the host's 0..=15 scale. Placement rules treat only
/// fully opaque cells as solid support.
pub const OPACITY_FULL: u8 = 15;

/// Static properties of a registered block.
#[derive(Debug, Clone)]
pub struct BlockDef {
    pub name: &'static str,
    /// Light opacity, 0 (transparent) ..= 15 (fully opaque).
    pub opacity: u8,
}

impl BlockDef {
    pub const fn new(name: &'static str, opacity: u8) -> Self {
        Self { name, opacity }
    }
}

/// The host's block registry: definitions plus optional behavior hooks.
///
/// Behaviors are the polymorphic dispatch surface -- the host consults them
/// for tick updates, break results, and accumulation instead of hard-coding
/// per-block logic.
#[derive(Default)]
pub struct BlockRegistry {
    defs: HashMap<BlockId, BlockDef>,
    behaviors: HashMap<BlockId, Arc<dyn BlockBehavior>>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: BlockId, def: BlockDef) {
        self.defs.insert(id, def);
    }

    pub fn is_registered(&self, id: BlockId) -> bool {
        self.defs.contains_key(&id)
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockDef> {
        self.defs.get(&id)
    }

    /// Light opacity of a block; unregistered ids read as transparent.
    pub fn opacity(&self, id: BlockId) -> u8 {
        self.defs.get(&id).map(|d| d.opacity).unwrap_or(0)
    }

    pub fn attach_behavior(&mut self, id: BlockId, behavior: Arc<dyn BlockBehavior>) {
        self.behaviors.insert(id, behavior);
    }

    pub fn behavior(&self, id: BlockId) -> Option<&Arc<dyn BlockBehavior>> {
        self.behaviors.get(&id)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
