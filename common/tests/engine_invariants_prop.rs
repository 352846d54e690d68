//! Invariants of the move engine that must hold for any well-formed board.
use proptest::prelude::*;
use puzzle2048_common::SessionRng;
use puzzle2048_common::puzzle2048::{
    Board, Direction, GameStatus, Puzzle2048GameState, Spawner, TILE_2, TILE_4, add_random_tile,
    can_merge_adjacent, check_game_over, reduce_line, slide,
};

fn tile(exponent: u32) -> u32 {
    if exponent == 0 { 0 } else { 1 << exponent }
}

fn board_strategy() -> impl Strategy<Value = Board> {
    (2usize..=6).prop_flat_map(|size| {
        let exponent = prop_oneof![4 => 0u32..12, 1 => 28u32..=31];
        prop::collection::vec(exponent, size * size).prop_map(move |exponents| {
            let cells = exponents.into_iter().map(tile).collect();
            Board::from_cells(size, cells).unwrap()
        })
    })
}

fn line_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec((0u32..6).prop_map(tile), 1..8)
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn sorted_tiles(values: &[u32]) -> Vec<u32> {
    let mut tiles: Vec<u32> = values.iter().copied().filter(|&v| v != 0).collect();
    tiles.sort_unstable();
    tiles
}

fn total(values: &[u32]) -> u64 {
    values.iter().map(|&v| v as u64).sum()
}

proptest! {
    #[test]
    fn empty_and_filled_cells_cover_the_board(board in board_strategy()) {
        let n = board.size();
        prop_assert_eq!(board.empty_cells().len() + board.count_non_zero(), n * n);
        prop_assert_eq!(board.is_full(), board.empty_cells().is_empty());
    }

    #[test]
    fn spawn_fills_one_empty_cell(board in board_strategy(), seed in any::<u64>()) {
        let mut rng = SessionRng::new(seed);
        let mut next = board.clone();
        let empty_before = board.empty_cells().len();
        let placed = add_random_tile(&mut next, &mut rng);

        if empty_before == 0 {
            prop_assert_eq!(placed, None);
            prop_assert_eq!(next, board);
        } else {
            let cell = placed.unwrap();
            prop_assert_eq!(board.get(cell), 0);
            prop_assert!([TILE_2, TILE_4].contains(&next.get(cell)));
            prop_assert_eq!(next.empty_cells().len(), empty_before - 1);
        }
    }

    #[test]
    fn slide_conserves_tile_sum(board in board_strategy(), direction in direction_strategy()) {
        let result = slide(&board, direction);
        prop_assert_eq!(total(result.board.cells()), total(board.cells()));
        if result.score_delta == 0 {
            prop_assert_eq!(sorted_tiles(result.board.cells()), sorted_tiles(board.cells()));
        }
    }

    #[test]
    fn moved_flag_matches_board_change(board in board_strategy(), direction in direction_strategy()) {
        let result = slide(&board, direction);
        prop_assert_eq!(result.moved, result.board != board);
        if !result.moved {
            prop_assert_eq!(result.score_delta, 0);
        }
    }

    #[test]
    fn repeating_a_stalled_move_changes_nothing(board in board_strategy(), direction in direction_strategy()) {
        let first = slide(&board, direction);
        let second = slide(&first.board, direction);
        if !second.moved {
            prop_assert_eq!(second.board, first.board);
            prop_assert_eq!(second.score_delta, 0);
        }
    }

    #[test]
    fn line_merge_always_changes_the_line(line in line_strategy(), toward_start in any::<bool>()) {
        let result = reduce_line(&line, toward_start);
        prop_assert_eq!(result.line.len(), line.len());
        prop_assert_eq!(total(&result.line), total(&line));
        if result.merges > 0 {
            prop_assert!(result.changed);
            prop_assert_ne!(&result.line, &line);
        }
        prop_assert_eq!(result.changed, result.line != line);
    }

    #[test]
    fn game_over_means_no_direction_moves(board in board_strategy()) {
        if check_game_over(&board) {
            for direction in Direction::ALL {
                prop_assert!(!slide(&board, direction).moved);
            }
        }
        if can_merge_adjacent(&board) {
            prop_assert!(Direction::ALL.iter().any(|&d| slide(&board, d).moved));
        }
    }
}

#[test]
fn rollout_keeps_score_and_tiles_consistent() {
    for seed in 0..20u64 {
        let mut rng = SessionRng::new(seed);
        let mut state = Puzzle2048GameState::new(4, 2048, Spawner::default(), &mut rng);
        let mut last_score = 0;

        for step in 0..2000usize {
            if state.status() == GameStatus::Lost {
                break;
            }
            if state.status() == GameStatus::Won {
                assert!(state.continue_playing());
            }
            let direction = Direction::ALL[(step + seed as usize) % 4];
            state.apply_move(direction, &mut rng);

            assert!(state.score() >= last_score);
            last_score = state.score();
            assert!(state.board().cells().iter().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())));
        }

        if state.status() == GameStatus::Lost {
            assert!(check_game_over(state.board()));
        }
    }
}
