use super::board::Board;
use super::line::reduce_line;
use super::spawner::Spawner;
use super::types::Direction;
use crate::games::TileRng;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MoveResult {
    pub board: Board,
    pub moved: bool,
    pub score_delta: u64,
}

impl MoveResult {
    fn unchanged(board: &Board) -> Self {
        Self {
            board: board.clone(),
            moved: false,
            score_delta: 0,
        }
    }
}

/// Applies directional moves to boards and spawns a tile after each move
/// that changed something.
#[derive(Clone, Copy, Default, Debug)]
pub struct MoveEngine {
    spawner: Spawner,
}

impl MoveEngine {
    pub fn new(spawner: Spawner) -> Self {
        Self { spawner }
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn move_tiles<R: TileRng + ?Sized>(
        &self,
        board: &Board,
        direction: Direction,
        rng: &mut R,
        spawn_on_move: bool,
    ) -> MoveResult {
        let mut result = slide(board, direction);
        if result.moved && spawn_on_move {
            self.spawner.add_random_tile(&mut result.board, rng);
        }
        result
    }

    /// Decodes `name` first; anything that is not a direction leaves the board as is.
    pub fn move_named<R: TileRng + ?Sized>(
        &self,
        board: &Board,
        name: &str,
        rng: &mut R,
        spawn_on_move: bool,
    ) -> MoveResult {
        match Direction::from_name(name) {
            Some(direction) => self.move_tiles(board, direction, rng, spawn_on_move),
            None => MoveResult::unchanged(board),
        }
    }
}

/// Moves every line of `board` toward the edge named by `direction`, without spawning.
pub fn slide(board: &Board, direction: Direction) -> MoveResult {
    let axis = direction.axis();
    let toward_start = direction.toward_start();

    let mut next = board.clone();
    let mut moved = false;
    let mut score_delta: u64 = 0;

    for index in 0..board.size() {
        let reduction = reduce_line(&board.line(axis, index), toward_start);
        if reduction.changed {
            moved = true;
            next.set_line(axis, index, &reduction.line);
        }
        score_delta += reduction.score;
    }

    MoveResult {
        board: next,
        moved,
        score_delta,
    }
}

pub fn move_tiles<R: TileRng + ?Sized>(
    board: &Board,
    direction: Direction,
    rng: &mut R,
    spawn_on_move: bool,
) -> MoveResult {
    MoveEngine::default().move_tiles(board, direction, rng, spawn_on_move)
}

pub fn move_named<R: TileRng + ?Sized>(
    board: &Board,
    name: &str,
    rng: &mut R,
    spawn_on_move: bool,
) -> MoveResult {
    MoveEngine::default().move_named(board, name, rng, spawn_on_move)
}
