pub mod block;
pub mod chunk;
pub mod climate;
pub mod position;

use block::BlockId;
use chunk::Chunk;
use climate::{Biome, Season};
use dashmap::{DashMap, DashSet};
use position::{BlockPos, ChunkPos};
use std::sync::{Mutex, RwLock};

use crate::items::ItemStack;

/// The block world, lock-sharded by chunk.
///
/// This is the spatial substrate only: a lattice of `(BlockId, metadata)`
/// cells plus the ambient queries block behaviors consult (light, biome,
/// season) and a drop sink standing in for item-entity spawning. Simulation
/// and behavior dispatch live elsewhere.
pub struct World {
    chunks: DashMap<ChunkPos, Chunk>,
    /// Cells whose visual/block state changed and need a client update.
    needs_update: DashSet<BlockPos>,
    /// Per-cell ambient light overrides (0..=15). Cells without an entry
    /// read back `default_light`.
    light: DashMap<BlockPos, u8>,
    default_light: u8,
    biomes: DashMap<ChunkPos, Biome>,
    season: RwLock<Option<Season>>,
    drops: Mutex<Vec<(BlockPos, Vec<ItemStack>)>>,
}

impl World {
    pub fn new() -> Self {
        Self::with_default_light(0)
    }

    /// A world whose unset cells report the given ambient light level.
    pub fn with_default_light(default_light: u8) -> Self {
        Self {
            chunks: DashMap::new(),
            needs_update: DashSet::new(),
            light: DashMap::new(),
            default_light,
            biomes: DashMap::new(),
            season: RwLock::new(None),
            drops: Mutex::new(Vec::new()),
        }
    }

    // ── Cells ────────────────────────────────────────────────────────────

    /// Read a block at an absolute position. Returns AIR for unloaded chunks.
    pub fn get_block(&self, pos: BlockPos) -> BlockId {
        self.get_block_and_metadata(pos).0
    }

    /// Read a cell's metadata byte. Returns 0 for unloaded chunks and AIR.
    pub fn get_metadata(&self, pos: BlockPos) -> u8 {
        self.get_block_and_metadata(pos).1
    }

    pub fn get_block_and_metadata(&self, pos: BlockPos) -> (BlockId, u8) {
        match self.chunks.get(&pos.chunk()) {
            Some(chunk) => chunk.get_cell(pos.local()),
            None => (BlockId::AIR, 0),
        }
    }

    /// Write a cell at an absolute position. Creates the chunk if needed.
    ///
    /// Takes `&self` (not `&mut self`) because `DashMap` provides interior
    /// mutability via per-shard locking.
    pub fn set_block_and_metadata(&self, pos: BlockPos, block: BlockId, meta: u8) {
        self.chunks
            .entry(pos.chunk())
            .or_default()
            .set_cell(pos.local(), block, meta);
    }

    pub fn set_block(&self, pos: BlockPos, block: BlockId) {
        self.set_block_and_metadata(pos, block, 0);
    }

    /// Rewrite a cell's metadata, keeping its block id.
    pub fn set_metadata(&self, pos: BlockPos, meta: u8) {
        let (block, _) = self.get_block_and_metadata(pos);
        self.set_block_and_metadata(pos, block, meta);
    }

    pub fn insert_chunk(&self, pos: ChunkPos, chunk: Chunk) {
        self.chunks.insert(pos, chunk);
    }

    pub fn has_chunk(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    // ── Update tracking ──────────────────────────────────────────────────

    /// Flag a cell so clients re-render it after an in-place state change.
    pub fn mark_needs_update(&self, pos: BlockPos) {
        self.needs_update.insert(pos);
    }

    /// Drain and return all cells flagged since the last call.
    pub fn take_needs_update(&self) -> Vec<BlockPos> {
        let mut flagged = Vec::new();
        for entry in self.needs_update.iter() {
            flagged.push(*entry);
        }
        for pos in &flagged {
            self.needs_update.remove(pos);
        }
        flagged
    }

    // ── Ambient queries ──────────────────────────────────────────────────

    /// Ambient light at a cell on the host's 0..=15 scale.
    pub fn light_level(&self, pos: BlockPos) -> u8 {
        self.light
            .get(&pos)
            .map(|l| *l)
            .unwrap_or(self.default_light)
    }

    pub fn set_light(&self, pos: BlockPos, level: u8) {
        self.light.insert(pos, level);
    }

    pub fn biome(&self, pos: BlockPos) -> Option<Biome> {
        self.biomes.get(&pos.chunk()).map(|b| b.clone())
    }

    pub fn set_biome(&self, pos: ChunkPos, biome: Biome) {
        self.biomes.insert(pos, biome);
    }

    pub fn season(&self) -> Option<Season> {
        self.season.read().expect("season lock poisoned").clone()
    }

    pub fn set_season(&self, season: Option<Season>) {
        *self.season.write().expect("season lock poisoned") = season;
    }

    // ── Drop sink ────────────────────────────────────────────────────────

    /// Record item drops at a cell. The real engine spawns item entities
    /// here; the boundary keeps an inspectable log instead.
    pub fn spawn_drops(&self, pos: BlockPos, stacks: Vec<ItemStack>) {
        self.drops.lock().expect("drop log poisoned").push((pos, stacks));
    }

    /// Drain and return every drop recorded since the last call.
    pub fn take_drops(&self) -> Vec<(BlockPos, Vec<ItemStack>)> {
        std::mem::take(&mut *self.drops.lock().expect("drop log poisoned"))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
