//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (negative y) are never out of bounds for collision purposes.

use std::fmt;

use arrayvec::ArrayVec;

use crate::pieces::{Piece, Shape};
use crate::types::{Cell, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one clear pass, top to bottom
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Build a board from text rows of `#` (filled) and `.` (empty).
    ///
    /// Rows are aligned to the bottom of the board, so a preset only needs
    /// to list its lowest rows. Returns `None` for more than 20 rows, a row
    /// that is not exactly 10 characters wide, or any other character.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() > HEIGHT {
            return None;
        }
        let mut board = Self::new();
        let top = HEIGHT - rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.chars().count() != WIDTH {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::Filled,
                    '.' => Cell::Empty,
                    _ => return None,
                };
                board.cells[(top + i) * WIDTH + x] = cell;
            }
        }
        Some(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_filled())
    }

    /// Cells of row `y`, left to right. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Whether `shape` placed with its top-left corner at
    /// (`offset_x`, `offset_y`) would leave the board or hit a filled cell.
    ///
    /// A filled shape cell collides when its column is outside `[0, W)`, its
    /// row is at or below the floor, or it lands on a filled board cell.
    /// Rows above the top edge never collide.
    pub fn collides(&self, shape: &Shape, offset_x: i8, offset_y: i8) -> bool {
        shape.cells().any(|(r, c)| {
            let x = offset_x + c as i8;
            let y = offset_y + r as i8;
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write every filled cell of `piece` into the board.
    ///
    /// Cells above the top edge are dropped. Returns the number of cells written.
    pub fn merge_piece(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, Cell::Filled) {
                written += 1;
            }
        }
        written
    }

    /// Clear all full rows and return the row indices that were cleared (top to bottom)
    ///
    /// Surviving rows keep their relative order and are packed toward the
    /// floor; the freed rows at the top become empty. Uses a two-pointer pass
    /// with zero allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * WIDTH;
                    let dst_start = write_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * WIDTH].fill(Cell::Empty);

        cleared_rows.reverse();
        cleared_rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;
    use crate::types::PieceKind;
    use proptest::prelude::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_from_rows_bottom_aligned() {
        let board = Board::from_rows(&["#.........", "##########"]).unwrap();
        assert!(board.is_occupied(0, 18));
        assert!(!board.is_occupied(1, 18));
        assert!(board.is_row_full(19));
        assert_eq!(board.filled_count(), 11);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Board::from_rows(&["#########"]).is_none());
        assert!(Board::from_rows(&["#####x####"]).is_none());
        let too_many = vec![".........."; 21];
        assert!(Board::from_rows(&too_many).is_none());
    }

    #[test]
    fn test_collides_ignores_rows_above_top() {
        let board = Board::new();
        let i_vertical = get_shape(PieceKind::I).rotate_cw();
        assert!(!board.collides(&i_vertical, 0, -3));
        assert!(board.collides(&i_vertical, -1, -3));
    }

    #[test]
    fn test_merge_drops_cells_above_top() {
        let mut board = Board::new();
        let piece = Piece::at(PieceKind::O, 0, -1);
        assert_eq!(board.merge_piece(&piece), 2);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(1, 0));
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::from_rows(&["##........"]).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 20);
        assert_eq!(text.lines().last(), Some("##........"));
    }

    fn row_bits() -> impl Strategy<Value = u16> {
        prop_oneof![Just(0x3ffu16), 0u16..0x400]
    }

    proptest! {
        #[test]
        fn clear_leaves_no_full_rows(rows in proptest::collection::vec(row_bits(), 0..=HEIGHT)) {
            let mut board = Board::new();
            let top = HEIGHT - rows.len();
            for (i, bits) in rows.iter().enumerate() {
                for x in 0..WIDTH {
                    if *bits & (1u16 << x) != 0 {
                        board.set(x as i8, (top + i) as i8, Cell::Filled);
                    }
                }
            }
            let before = board.filled_count();
            let full = (0..HEIGHT).filter(|&y| board.is_row_full(y)).count();

            let cleared = board.clear_full_rows();
            prop_assert_eq!(cleared.len(), full);
            prop_assert!(cleared.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(board.filled_count(), before - full * WIDTH);
            prop_assert!(!(0..HEIGHT).any(|y| board.is_row_full(y)));
        }
    }
}
