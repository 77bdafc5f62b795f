//! Pieces module - tetromino shape matrices and the falling piece record
//!
//! A [`Shape`] is a rectangular binary matrix (at most 4x4) stored as one
//! bitmask per row. Rotation builds a new matrix instead of mutating, since
//! turning a piece swaps its bounding-box dimensions.
//!
//! Catalog (rows top to bottom):
//!
//! ```text
//! I: 1111      T: 111     O: 11     S: 110     Z: 011     L: 100     J: 001
//!                 010        11        011        110        111        111
//! ```

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest bounding-box side of any catalog shape
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular binary matrix describing which cells of a bounding box are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Bit `c` of `rows[r]` is the cell at row `r`, column `c`.
    rows: [u8; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Panics (at compile time for the catalog) on an empty, ragged, or
    /// oversized matrix.
    pub const fn from_matrix(matrix: &[&[u8]]) -> Self {
        let height = matrix.len();
        assert!(
            height > 0 && height <= MAX_SHAPE_DIM,
            "shape height out of range"
        );
        let width = matrix[0].len();
        assert!(
            width > 0 && width <= MAX_SHAPE_DIM,
            "shape width out of range"
        );

        let mut rows = [0u8; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < height {
            assert!(
                matrix[r].len() == width,
                "shape rows must have equal length"
            );
            let mut c = 0;
            while c < width {
                if matrix[r][c] != 0 {
                    rows[r] |= 1u8 << c;
                }
                c += 1;
            }
            r += 1;
        }

        Self {
            width: width as u8,
            height: height as u8,
            rows,
        }
    }

    /// Number of columns in the bounding box
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows in the bounding box
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (`row`, `col`) of the bounding box is filled.
    /// Cells outside the box are empty.
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.height && col < self.width && (self.rows[row as usize] >> col) & 1 == 1
    }

    /// Filled cells as `(row, col)` pairs, row-major
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height).flat_map(move |r| {
            (0..self.width)
                .filter(move |&c| self.is_filled(r, c))
                .map(move |c| (r, c))
        })
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// 90° clockwise rotation.
    ///
    /// An R×C input becomes a C×R output with `out[c][R-1-r] = in[r][c]`
    /// (reverse the row order, then transpose).
    pub fn rotate_cw(&self) -> Self {
        let mut rows = [0u8; MAX_SHAPE_DIM];
        let h = self.height;
        for (r, c) in self.cells() {
            rows[c as usize] |= 1u8 << (h - 1 - r);
        }
        Self {
            width: self.height,
            height: self.width,
            rows,
        }
    }
}

const I_SHAPE: Shape = Shape::from_matrix(&[&[1, 1, 1, 1]]);
const T_SHAPE: Shape = Shape::from_matrix(&[&[1, 1, 1], &[0, 1, 0]]);
const O_SHAPE: Shape = Shape::from_matrix(&[&[1, 1], &[1, 1]]);
const S_SHAPE: Shape = Shape::from_matrix(&[&[1, 1, 0], &[0, 1, 1]]);
const Z_SHAPE: Shape = Shape::from_matrix(&[&[0, 1, 1], &[1, 1, 0]]);
const L_SHAPE: Shape = Shape::from_matrix(&[&[1, 0, 0], &[1, 1, 1]]);
const J_SHAPE: Shape = Shape::from_matrix(&[&[0, 0, 1], &[1, 1, 1]]);

/// Get the spawn-orientation shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
    }
}

/// Column where a shape spawns: horizontally centered, rounding left.
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}

/// The falling piece: a shape and the board position of its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A fresh piece at its spawn position (centered, top row)
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// A spawn-orientation piece at an explicit position
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    /// Same position, shape turned 90° clockwise. Not validated.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Same shape, offset by (`dx`, `dy`). Not validated.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Absolute board coordinates `(x, y)` of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(r, c)| (self.x + c as i8, self.y + r as i8))
    }
}
