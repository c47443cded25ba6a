/// Opaque block identifier. The host stores these without interpreting them;
/// block packs assign meaning to specific IDs and register definitions for
/// them in the [`BlockRegistry`](crate::registry::BlockRegistry).
///
/// The only semantic the host enforces is that `BlockId::AIR` (0) is the
/// "empty" cell: chunk sections filled entirely with AIR are deallocated,
/// and an AIR cell always reads back metadata 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockId(pub u16);

impl BlockId {
    /// The universal "empty" block.
    pub const AIR: BlockId = BlockId(0);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}
