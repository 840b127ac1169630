//! Board module - the landed-cell grid
//!
//! The board is the sole authority on what the playfield looks like and
//! whether a hypothetical piece placement is legal. Cells hold 0 for empty or
//! the shape number (1..=7) of the piece that locked there. Storage is a flat
//! row-major array for cache locality.
//!
//! Bounds checking is deliberately asymmetric: the bottom and both sides are
//! enforced, the top is not. Pieces spawn at row 0 and nothing ever needs to
//! exist above it.

use crate::core::tetromino::Piece;
use crate::types::RotationDirection;

/// The playfield grid, configurable size (reference 10x16)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<u8>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Calculate flat index from (x, y) coordinates
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Get cell value at (x, y). Returns None if out of range.
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell value at (x, y). Returns false if out of range.
    pub fn set(&mut self, x: i8, y: i8, value: u8) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at (x, y) holds a locked piece.
    /// Cells above the top of the board (negative y) are never occupied.
    fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(value) if value != 0)
    }

    /// Whether every occupied cell of the piece, after applying the extra
    /// offsets, stays inside the bottom and side bounds. The top is never
    /// checked: a cell above row 0 is in range.
    pub fn is_within_bounds(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece.cells().iter().all(|&(x, y)| {
            let x = x + dx;
            let y = y + dy;
            x >= 0 && x < self.width as i8 && y < self.height as i8
        })
    }

    /// Whether any occupied cell of the piece, after applying the extra
    /// offsets, coincides with a locked board cell
    pub fn has_collision(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece
            .cells()
            .iter()
            .any(|&(x, y)| self.is_occupied(x + dx, y + dy))
    }

    /// Whether the piece is free to shift or drop by (dx, dy)
    pub fn is_move_legal(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        self.is_within_bounds(piece, dx, dy) && !self.has_collision(piece, dx, dy)
    }

    /// Whether rotating the piece with the given horizontal kick would end up
    /// out of bounds or colliding. Works on a transient copy; the real piece
    /// is never mutated.
    pub fn would_collide_on_turn(
        &self,
        piece: &Piece,
        direction: RotationDirection,
        x_kick: i8,
    ) -> bool {
        let mut probe = *piece;
        probe.x += x_kick;
        probe.matrix = match direction {
            RotationDirection::Clockwise => probe.matrix.rotate_cw(),
            RotationDirection::CounterClockwise => probe.matrix.rotate_ccw(),
        };
        !self.is_within_bounds(&probe, 0, 0) || self.has_collision(&probe, 0, 0)
    }

    /// Write the piece's shape number into the board at its current position.
    /// No bounds checking: only called after a downward move has failed, so
    /// every cell is known to be in range.
    pub fn lock_piece(&mut self, piece: &Piece) {
        let number = piece.kind().number();
        for (x, y) in piece.cells() {
            let idx = y as usize * self.width as usize + x as usize;
            self.cells[idx] = number;
        }
    }

    /// Whether a row is completely filled
    fn is_row_full(&self, y: usize) -> bool {
        let start = y * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|&cell| cell != 0)
    }

    /// Zero the given row and shift every row above it down by one,
    /// backfilling row 0 empty
    fn remove_row(&mut self, y: usize) {
        let width = self.width as usize;
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            let dst = row * width;
            self.cells.copy_within(src..src + width, dst);
        }
        self.cells[..width].fill(0);
    }

    /// Clear every full row and compact the board. Returns the count of rows
    /// cleared in this call.
    ///
    /// Rows are processed in ascending index order; each removal shifts the
    /// rows above before the scan continues, so simultaneous clears (up to a
    /// 4-row tetris) come out right: when the scan reaches row y, everything
    /// above it has already been checked and compacted.
    pub fn clear_full_rows(&mut self) -> u8 {
        let mut cleared = 0;
        for y in 0..self.height as usize {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// A single row as a slice
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// The whole grid as nested arrays (snapshot encoding)
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize).map(|y| self.row(y).to_vec()).collect()
    }
}
