pub mod block;
pub mod codec;
pub mod patches;
pub mod snowy;
pub mod weather;
