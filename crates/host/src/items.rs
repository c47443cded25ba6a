/// Opaque item identifier, same shape as [`BlockId`](crate::world::block::BlockId).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u16);

impl ItemId {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// A homogeneous stack of items, as produced by break-result rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u8,
}

impl ItemStack {
    pub const fn new(item: ItemId, count: u8) -> Self {
        Self { item, count }
    }

    pub const fn one(item: ItemId) -> Self {
        Self::new(item, 1)
    }
}
