//! Core types shared across the crate
//! This module contains pure data types with no game logic

use serde::{Deserialize, Serialize};

/// Reference board dimensions (columns x rows)
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 16;

/// Spawn position for new pieces (matrix top-left corner)
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// Starting gravity interval (milliseconds)
pub const START_INTERVAL_MS: u64 = 700;

/// Wall-kick offsets tried in priority order when rotating
pub const KICK_OFFSETS: [i8; 5] = [0, 1, -1, 2, -2];

/// Cleared rows required per level-up
pub const ROWS_PER_LEVEL: u32 = 10;

/// Line clear multipliers indexed by cleared-row count (4+ uses the last entry)
pub const CLEAR_MULTIPLIERS: [u32; 5] = [0, 40, 100, 300, 1200];

/// Tetromino shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    O,
    T,
    J,
    L,
    S,
    Z,
    I,
}

impl ShapeKind {
    /// All kinds, in numeric-identity order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::I,
    ];

    /// Numeric identity stored in board cells (1..=7)
    pub fn number(self) -> u8 {
        match self {
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::J => 3,
            ShapeKind::L => 4,
            ShapeKind::S => 5,
            ShapeKind::Z => 6,
            ShapeKind::I => 7,
        }
    }

    /// Inverse of `number`.
    ///
    /// Panics on anything outside 1..=7: board cells only ever hold values
    /// written from `number`, so an unknown value is a logic bug, not input.
    pub fn from_number(num: u8) -> Self {
        match num {
            1 => ShapeKind::O,
            2 => ShapeKind::T,
            3 => ShapeKind::J,
            4 => ShapeKind::L,
            5 => ShapeKind::S,
            6 => ShapeKind::Z,
            7 => ShapeKind::I,
            _ => panic!("invalid shape number: {num}"),
        }
    }
}

/// Rotation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Discrete commands issued by the hosting application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate(RotationDirection),
    SoftDrop,
    HardDrop,
    TogglePause,
    Restart,
}

/// Game configuration. Defaults match the reference playfield:
/// 10x16 board, spawn at column 4, 700ms starting gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_width: u8,
    pub board_height: u8,
    pub spawn_x: i8,
    pub start_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            spawn_x: SPAWN_X,
            start_interval_ms: START_INTERVAL_MS,
        }
    }
}
