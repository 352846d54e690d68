use super::board::Board;
use super::evaluator::{check_game_over, check_win};
use super::move_engine::MoveEngine;
use super::settings::GameConfig;
use super::spawner::Spawner;
use super::types::{Direction, GameStatus};
use crate::games::TileRng;

/// One running game: the board plus everything the engine keeps outside it.
///
/// Reaching the target sets `Won` once. After `continue_playing` the game
/// goes on and the target no longer ends it; `Lost` is final until `reset`.
pub struct Puzzle2048GameState {
    board: Board,
    size: usize,
    score: u64,
    target_value: u32,
    status: GameStatus,
    has_won: bool,
    moves_made: u32,
    engine: MoveEngine,
}

impl Puzzle2048GameState {
    pub fn new<R: TileRng + ?Sized>(
        size: usize,
        target_value: u32,
        spawner: Spawner,
        rng: &mut R,
    ) -> Self {
        Self {
            board: spawner.initialize(size, rng),
            size,
            score: 0,
            target_value,
            status: GameStatus::InProgress,
            has_won: false,
            moves_made: 0,
            engine: MoveEngine::new(spawner),
        }
    }

    pub fn from_config<R: TileRng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        Self::new(config.board_size, config.target_value, config.spawner(), rng)
    }

    /// Returns `true` when the board changed. Moves are ignored while the
    /// game is won and not continued, or lost.
    pub fn apply_move<R: TileRng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }

        let result = self.engine.move_tiles(&self.board, direction, rng, true);
        if !result.moved {
            return false;
        }

        self.board = result.board;
        self.score = self.score.saturating_add(result.score_delta);
        self.moves_made += 1;

        let newly_won = !self.has_won && check_win(&self.board, self.target_value);
        if newly_won {
            self.has_won = true;
        }

        if check_game_over(&self.board) {
            self.status = GameStatus::Lost;
        } else if newly_won {
            self.status = GameStatus::Won;
        }

        true
    }

    /// Like `apply_move`, for input that still needs decoding. Unknown names do nothing.
    pub fn apply_named_move<R: TileRng + ?Sized>(&mut self, name: &str, rng: &mut R) -> bool {
        match Direction::from_name(name) {
            Some(direction) => self.apply_move(direction, rng),
            None => false,
        }
    }

    pub fn continue_playing(&mut self) -> bool {
        if self.status != GameStatus::Won {
            return false;
        }
        self.status = GameStatus::InProgress;
        true
    }

    pub fn reset<R: TileRng + ?Sized>(&mut self, rng: &mut R) {
        self.board = self.engine.spawner().initialize(self.size, rng);
        self.score = 0;
        self.status = GameStatus::InProgress;
        self.has_won = false;
        self.moves_made = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn highest_tile(&self) -> u32 {
        self.board.highest_tile()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn target_value(&self) -> u32 {
        self.target_value
    }

    #[cfg(test)]
    fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}
