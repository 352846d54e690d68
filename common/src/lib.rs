pub mod config;
pub mod games;
pub mod logger;
pub mod storage;

pub use games::puzzle2048;
pub use games::{SessionRng, TileRng};
