//! Snapshot module - the read model exposed to renderers and the relay
//!
//! Snapshots are plain serde values: nested arrays for grids, integers for
//! offsets. They carry enough to rebuild an equivalent view of the game on a
//! remote peer; matrices and offsets round-trip exactly.

use serde::{Deserialize, Serialize};

use crate::core::matrix::ShapeMatrix;
use crate::core::scoring::Score;
use crate::core::tetromino::Piece;
use crate::types::ShapeKind;

/// A piece frozen for rendering or transmission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    /// Orientation matrix as nested arrays, row-major
    pub matrix: Vec<Vec<u8>>,
    pub x: i8,
    pub y: i8,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            matrix: piece.matrix().to_grid(),
            x: piece.x(),
            y: piece.y(),
        }
    }
}

impl PieceSnapshot {
    /// Rebuild the orientation matrix. None if the snapshot grid is malformed.
    pub fn to_matrix(&self) -> Option<ShapeMatrix> {
        ShapeMatrix::from_grid(&self.matrix)
    }
}

/// Score counters frozen for rendering or transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub points: u32,
    pub level: u32,
    pub rows: u32,
}

impl From<&Score> for ScoreSnapshot {
    fn from(score: &Score) -> Self {
        Self {
            points: score.points(),
            level: score.level(),
            rows: score.rows(),
        }
    }
}

/// Complete read model of one engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board grid, rows x cols; 0 = empty, 1..=7 = locked shape number
    pub board: Vec<Vec<u8>>,
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub ghost: Option<PieceSnapshot>,
    pub score: ScoreSnapshot,
    pub paused: bool,
    pub game_over: bool,
    pub interval_ms: u64,
    pub seed: u32,
}
