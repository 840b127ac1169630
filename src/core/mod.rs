//! Core module - pure game logic with no external I/O
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or timers; the hosting
//! application drives it with commands and ticks.

pub mod board;
pub mod engine;
pub mod matrix;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;

// Re-export commonly used types
pub use board::Board;
pub use engine::Engine;
pub use matrix::ShapeMatrix;
pub use rng::{FixedShapes, SeededShapes, ShapeSource, SimpleRng};
pub use scoring::{clear_multiplier, Score};
pub use snapshot::{GameSnapshot, PieceSnapshot, ScoreSnapshot};
pub use tetromino::{starting_matrix, Piece};
