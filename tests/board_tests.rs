//! Board tests - grid access, free-space rules and row clearing

use tui_blockfall::core::Board;
use tui_blockfall::types::{BlockColor, GRID_COLS, GRID_ROWS};

fn fill_row(board: &mut Board, y: i8, color: BlockColor) {
    for x in 0..GRID_COLS as i8 {
        board.set(x, y, Some(color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), GRID_COLS);
    assert_eq!(board.height(), GRID_ROWS);
    assert_eq!(board.cells().len(), 200);

    for y in 0..GRID_ROWS as i8 {
        for x in 0..GRID_COLS as i8 {
            assert!(board.is_free(x, y), "Cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(GRID_COLS as i8, 0), None);
    assert_eq!(board.get(0, GRID_ROWS as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(BlockColor::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(BlockColor::Purple)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_free(5, 10));

    assert!(!board.set(-1, 0, Some(BlockColor::Red)));
    assert!(!board.set(0, GRID_ROWS as i8, Some(BlockColor::Red)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_free_space_above_grid_and_walls() {
    let board = Board::new();

    assert!(board.is_free(0, -1));
    assert!(board.is_free(9, -20));
    assert!(!board.is_free(-1, -1));
    assert!(!board.is_free(GRID_COLS as i8, 5));
    assert!(!board.is_free(3, GRID_ROWS as i8));
}

#[test]
fn test_lock_cells_skips_rows_above_grid() {
    let mut board = Board::new();
    let written = board.lock_cells(&[(2, -1), (2, 0), (3, 19)], BlockColor::Green);

    assert_eq!(written, 2);
    assert_eq!(board.get(2, 0), Some(Some(BlockColor::Green)));
    assert_eq!(board.get(3, 19), Some(Some(BlockColor::Green)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
#[should_panic(expected = "outside")]
fn test_lock_cells_below_floor_panics() {
    let mut board = Board::new();
    board.lock_cells(&[(0, GRID_ROWS as i8)], BlockColor::Red);
}

#[test]
fn test_clear_single_line() {
    let mut board = Board::new();
    fill_row(&mut board, 19, BlockColor::Cyan);
    board.set(4, 18, Some(BlockColor::Red));

    assert_eq!(board.clear_lines(), 1);
    assert_eq!(board.get(4, 19), Some(Some(BlockColor::Red)));
    assert_eq!(board.occupied_count(), 1);
    for x in 0..GRID_COLS as i8 {
        assert_eq!(board.get(x, 18), Some(None));
    }
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::new();
    fill_row(&mut board, 19, BlockColor::Cyan);
    board.set(0, 18, Some(BlockColor::Red));
    fill_row(&mut board, 17, BlockColor::Cyan);
    board.set(1, 16, Some(BlockColor::Blue));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    assert_eq!(board.get(0, 19), Some(Some(BlockColor::Red)));
    assert_eq!(board.get(1, 18), Some(Some(BlockColor::Blue)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for y in 0..GRID_ROWS as i8 {
        fill_row(&mut board, y, BlockColor::Orange);
    }

    assert_eq!(board.clear_lines(), GRID_ROWS as usize);
    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board.cells().len(), 200);
}

#[test]
fn test_clear_lines_is_idempotent() {
    let mut board = Board::new();
    fill_row(&mut board, 19, BlockColor::Yellow);
    fill_row(&mut board, 10, BlockColor::Yellow);
    board.set(7, 12, Some(BlockColor::Green));

    assert_eq!(board.clear_lines(), 2);
    let after_first = board.clone();
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, after_first);
}

#[test]
fn test_partial_rows_are_not_cleared() {
    let mut board = Board::new();
    for x in 0..GRID_COLS as i8 - 1 {
        board.set(x, 19, Some(BlockColor::Cyan));
    }
    assert!(!board.is_row_full(19));
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board.occupied_count(), 9);
}

#[test]
fn test_occupied_iterator_reports_coordinates() {
    let mut board = Board::new();
    board.set(9, 0, Some(BlockColor::Red));
    board.set(0, 19, Some(BlockColor::Blue));

    let cells: Vec<_> = board.occupied().collect();
    assert_eq!(
        cells,
        vec![(9, 0, BlockColor::Red), (0, 19, BlockColor::Blue)]
    );

    board.clear();
    assert_eq!(board.occupied().count(), 0);
}
