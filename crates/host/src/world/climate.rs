/// Climate of a chunk column. The host assigns these at generation time;
/// block behaviors only read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Biome {
    pub name: &'static str,
    /// Whether standing snow persists on surfaces in this biome.
    pub has_surface_snow: bool,
}

/// The world's current season, if the host runs a seasonal cycle at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub name: &'static str,
    /// Whether the weather cycle is allowed to clear surface snow away.
    pub cleans_up_snow: bool,
}
