//! Tetromino module - piece kinds bound to a board position
//!
//! A `Piece` carries a shape matrix plus the board-relative offsets of the
//! matrix's top-left corner. It computes absolute cell positions but holds no
//! movement logic of its own: the engine mutates it, the board judges
//! legality, and external readers only ever see snapshot copies.

use arrayvec::ArrayVec;

use crate::core::matrix::{ShapeMatrix, MAX_DIM};
use crate::types::ShapeKind;

/// The canonical starting matrix for a shape kind
pub fn starting_matrix(kind: ShapeKind) -> ShapeMatrix {
    match kind {
        ShapeKind::O => ShapeMatrix::from_rows([[1, 1], [1, 1]]),
        ShapeKind::T => ShapeMatrix::from_rows([[1, 1, 1], [0, 1, 0], [0, 0, 0]]),
        ShapeKind::J => ShapeMatrix::from_rows([[0, 1, 0], [0, 1, 0], [1, 1, 0]]),
        ShapeKind::L => ShapeMatrix::from_rows([[0, 1, 0], [0, 1, 0], [0, 1, 1]]),
        ShapeKind::S => ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        ShapeKind::Z => ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        ShapeKind::I => ShapeMatrix::from_rows([
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
    }
}

/// A falling piece: shape kind, current orientation matrix, board offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub(crate) kind: ShapeKind,
    pub(crate) matrix: ShapeMatrix,
    pub(crate) x: i8,
    pub(crate) y: i8,
}

impl Piece {
    /// Create a piece in its canonical orientation at the given offsets
    pub fn new(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            matrix: starting_matrix(kind),
            x,
            y,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn matrix(&self) -> &ShapeMatrix {
        &self.matrix
    }

    /// Horizontal offset of the matrix's top-left corner
    pub fn x(&self) -> i8 {
        self.x
    }

    /// Vertical offset of the matrix's top-left corner
    pub fn y(&self) -> i8 {
        self.y
    }

    /// Absolute (x, y) board positions of every occupied matrix cell.
    /// Recomputed from the current offsets and matrix on every call.
    pub fn cells(&self) -> ArrayVec<(i8, i8), { MAX_DIM * MAX_DIM }> {
        self.matrix
            .occupied()
            .map(|(r, c)| (self.x + c as i8, self.y + r as i8))
            .collect()
    }
}
