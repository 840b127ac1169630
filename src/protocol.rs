//! Protocol module - JSON relay messages for two-player mode
//!
//! One message per line of JSON, tagged by a `type` field. The relay flow:
//! each peer sends `ready_up` with its chosen seed; whoever relays last wins
//! and broadcasts `start_game`, after which both engines start from that seed
//! and draw identical piece sequences. During play each peer streams its
//! board, pieces, and score so the opponent can render a mirror view.

use serde::{Deserialize, Serialize};

use crate::core::snapshot::{PieceSnapshot, ScoreSnapshot};

/// A relay message between two peers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayMessage {
    /// Announce readiness with a proposed seed
    ReadyUp { seed: u32 },
    /// Start both games from the agreed seed
    StartGame { seed: u32 },
    /// Full board grid, rows x cols, 0 = empty
    Board { cells: Vec<Vec<u8>> },
    /// The sender's falling piece
    ActivePiece { piece: PieceSnapshot },
    /// The sender's pending piece
    NextPiece { piece: PieceSnapshot },
    /// The sender's score counters
    Score { score: ScoreSnapshot },
    /// Whether the sender's game has ended
    GameStatus { game_over: bool },
}

/// Encode a message as a single JSON line (no trailing newline)
pub fn encode(message: &RelayMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}

/// Decode one JSON line into a message
pub fn decode(json: &str) -> Result<RelayMessage, serde_json::Error> {
    serde_json::from_str(json)
}
