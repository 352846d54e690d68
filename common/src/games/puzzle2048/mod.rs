mod board;
mod colors;
mod evaluator;
mod game_state;
mod input;
mod line;
mod move_engine;
mod settings;
mod spawner;
mod types;

pub use board::{Board, BoardError, Cell, DEFAULT_BOARD_SIZE, MAX_TILE, is_valid_tile};
pub use colors::{DARK_TEXT, DEFAULT_TILE, LIGHT_TEXT, Rgb, TileColors, tile_colors};
pub use evaluator::{
    DEFAULT_TARGET_VALUE, can_merge_adjacent, check_game_over, check_win, has_empty_cells,
};
pub use game_state::Puzzle2048GameState;
pub use input::{SWIPE_THRESHOLD, direction_from_key, direction_from_swipe};
pub use line::{LineReduction, reduce_line, tiles_merge};
pub use move_engine::{MoveEngine, MoveResult, move_named, move_tiles, slide};
pub use settings::{
    DEFAULT_BEST_SCORE_FILE, GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MIN_TARGET_VALUE,
};
pub use spawner::{
    DEFAULT_FOUR_PROBABILITY, INITIAL_TILES, Spawner, TILE_2, TILE_4, add_random_tile, initialize,
};
pub use types::{Axis, Direction, GameStatus};
