//! Falling-block puzzle simulation core.
//!
//! A deterministic, synchronous game engine: the host delivers discrete
//! commands and periodic gravity ticks, and reads state back through
//! snapshots. The `protocol` module adds JSON relay messages so two engines
//! on different machines can mirror each other's games.

pub mod core;
pub mod protocol;
pub mod types;

// Re-export the main API surface
pub use crate::core::{
    Board, Engine, FixedShapes, GameSnapshot, Piece, PieceSnapshot, Score, ScoreSnapshot,
    SeededShapes, ShapeMatrix, ShapeSource,
};
pub use crate::protocol::RelayMessage;
pub use crate::types::{Command, GameConfig, RotationDirection, ShapeKind};
