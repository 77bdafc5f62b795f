//! Board tests - grid storage, collision and line clearing

use falling_blocks::core::{get_shape, Board, Piece};
use falling_blocks::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Cell::Filled);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Cell::Filled));
    assert_eq!(board.get(5, 10), Some(Cell::Filled));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, Cell::Empty));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(10, 0, Cell::Filled));
    assert!(!board.set(0, -1, Cell::Filled));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(Board::from_rows(&["#########"]).is_none());
    assert!(Board::from_rows(&["###########"]).is_none());
    assert!(Board::from_rows(&["####x#####"]).is_none());
    assert!(Board::from_rows(&[".........."; 21]).is_none());
    assert!(Board::from_rows(&[".........."; 20]).is_some());
}

#[test]
fn test_display_matches_rows() {
    let board = Board::from_rows(&["#........#"]).unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), BOARD_HEIGHT as usize);
    assert_eq!(lines[0], "..........");
    assert_eq!(lines[19], "#........#");
}

#[test]
fn test_collision_walls_and_floor() {
    let board = Board::new();
    let o = get_shape(PieceKind::O);

    assert!(!board.collides(&o, 0, 0));
    assert!(!board.collides(&o, 8, 18));
    assert!(board.collides(&o, -1, 0));
    assert!(board.collides(&o, 9, 0));
    assert!(board.collides(&o, 0, 19));
}

#[test]
fn test_collision_with_filled_cells() {
    let mut board = Board::new();
    board.set(4, 1, Cell::Filled);
    let t = get_shape(PieceKind::T);

    // T row 1 has only its middle cell.
    assert!(board.collides(&t, 3, 0));
    assert!(!board.collides(&t, 4, 0));
    assert!(!board.collides(&t, 2, 0));
}

#[test]
fn test_merge_piece_writes_cells() {
    let mut board = Board::new();
    let written = board.merge_piece(&Piece::at(PieceKind::S, 2, 10));
    assert_eq!(written, 4);
    for (x, y) in [(2, 10), (3, 10), (3, 11), (4, 11)] {
        assert!(board.is_occupied(x, y));
    }
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_merge_piece_drops_cells_above_top() {
    let mut board = Board::new();
    let piece = Piece::at(PieceKind::I, 0, -2).rotated();
    assert_eq!(board.merge_piece(&piece), 2);
    assert!(board.is_occupied(0, 0));
    assert!(board.is_occupied(0, 1));
}

#[test]
fn test_clear_no_rows() {
    let mut board = Board::from_rows(&["#########."]).unwrap();
    let before = board;
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_rows_two_and_five() {
    let mut board = Board::new();
    fill_row(&mut board, 2);
    fill_row(&mut board, 5);
    board.set(0, 0, Cell::Filled);
    board.set(3, 3, Cell::Filled);
    board.set(4, 4, Cell::Filled);
    board.set(9, 19, Cell::Filled);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.to_vec(), vec![2, 5]);

    // Two empty rows on top, the rest shifted down in order.
    assert!(board.row(0).iter().all(|c| !c.is_filled()));
    assert!(board.row(1).iter().all(|c| !c.is_filled()));
    assert!(board.is_occupied(0, 2));
    assert!(board.is_occupied(3, 4));
    assert!(board.is_occupied(4, 5));
    assert!(board.is_occupied(9, 19));
    assert_eq!(board.filled_count(), 4);
    assert!(!(0..BOARD_HEIGHT as usize).any(|y| board.is_row_full(y)));
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::from_rows(&["##########"; 20]).unwrap();
    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 20);
    assert_eq!(board, Board::new());
}
