pub mod accumulation;
pub mod behavior;
pub mod items;
pub mod overrides;
pub mod placement;
pub mod registry;
pub mod simulation;
pub mod world;
