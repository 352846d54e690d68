use super::board::Board;
use super::line::tiles_merge;

pub const DEFAULT_TARGET_VALUE: u32 = 2048;

/// Stateless: reports whether `target` is on the board right now.
pub fn check_win(board: &Board, target: u32) -> bool {
    board.cells().contains(&target)
}

pub fn has_empty_cells(board: &Board) -> bool {
    !board.is_full()
}

/// Neighbours in a row or column that would merge; no diagonals, no wraparound.
pub fn can_merge_adjacent(board: &Board) -> bool {
    let size = board.size();
    let cells = board.cells();

    for row in 0..size {
        for col in 0..size {
            let value = cells[row * size + col];
            if col + 1 < size && tiles_merge(value, cells[row * size + col + 1]) {
                return true;
            }
            if row + 1 < size && tiles_merge(value, cells[(row + 1) * size + col]) {
                return true;
            }
        }
    }

    false
}

pub fn check_game_over(board: &Board) -> bool {
    !has_empty_cells(board) && !can_merge_adjacent(board)
}
