use super::board::{Board, Cell};
use crate::games::TileRng;

pub const TILE_2: u32 = 2;
pub const TILE_4: u32 = 4;
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;
pub const INITIAL_TILES: usize = 2;

/// Places new tiles: a uniformly chosen empty cell receives a 4 with
/// `four_probability`, otherwise a 2.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spawner {
    four_probability: f64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(DEFAULT_FOUR_PROBABILITY)
    }
}

impl Spawner {
    /// Clamps into `[0, 1]`; NaN falls back to `DEFAULT_FOUR_PROBABILITY`.
    pub fn new(four_probability: f64) -> Self {
        let four_probability = if four_probability.is_nan() {
            DEFAULT_FOUR_PROBABILITY
        } else {
            four_probability.clamp(0.0, 1.0)
        };
        Self { four_probability }
    }

    pub fn four_probability(&self) -> f64 {
        self.four_probability
    }

    /// Returns the cell that received the tile, or `None` on a full board.
    pub fn add_random_tile<R: TileRng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> Option<Cell> {
        let empty_cells = board.empty_cells();
        if empty_cells.is_empty() {
            return None;
        }

        let cell = empty_cells[rng.pick_index(empty_cells.len())];
        let value = if rng.chance(self.four_probability) {
            TILE_4
        } else {
            TILE_2
        };
        board.place(cell, value);
        Some(cell)
    }

    pub fn initialize<R: TileRng + ?Sized>(&self, size: usize, rng: &mut R) -> Board {
        let mut board = Board::empty(size);
        for _ in 0..INITIAL_TILES {
            self.add_random_tile(&mut board, rng);
        }
        board
    }
}

pub fn add_random_tile<R: TileRng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Cell> {
    Spawner::default().add_random_tile(board, rng)
}

pub fn initialize<R: TileRng + ?Sized>(size: usize, rng: &mut R) -> Board {
    Spawner::default().initialize(size, rng)
}
