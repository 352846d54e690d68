mod session_rng;

pub mod puzzle2048;

pub use session_rng::{SessionRng, TileRng};

#[cfg(test)]
pub(crate) use session_rng::ScriptedRng;
