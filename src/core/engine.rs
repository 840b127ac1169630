//! Engine module - the game state machine
//!
//! Ties together board, pieces, shape source, and scoring. The engine is the
//! sole owner of all game state and the only place pieces are mutated.
//! Everything is synchronous: the hosting application delivers discrete
//! commands and a periodic `tick` at the engine's current interval; nothing
//! here blocks or schedules.

use crate::core::board::Board;
use crate::core::rng::{SeededShapes, ShapeSource};
use crate::core::scoring::Score;
use crate::core::snapshot::{GameSnapshot, PieceSnapshot, ScoreSnapshot};
use crate::core::tetromino::Piece;
use crate::types::{Command, GameConfig, RotationDirection, KICK_OFFSETS, SPAWN_Y};

/// One game session
#[derive(Debug)]
pub struct Engine {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    score: Score,
    paused: bool,
    game_over: bool,
    /// Current gravity interval; only ever shrinks within one game
    interval_ms: u64,
    seed: u32,
    shapes: Box<dyn ShapeSource>,
}

impl Engine {
    /// Create an engine with the given configuration. No piece exists until
    /// `start` is called.
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_width, config.board_height),
            active: None,
            next: None,
            score: Score::new(),
            paused: false,
            game_over: false,
            interval_ms: config.start_interval_ms,
            seed: 0,
            shapes: Box::new(SeededShapes::new(1)),
            config,
        }
    }

    /// Start a fresh game. Peers started from the same seed draw identical
    /// piece sequences.
    pub fn start(&mut self, seed: u32) {
        self.seed = seed;
        self.shapes = Box::new(SeededShapes::new(seed));
        self.reset();
    }

    /// Start a fresh game with a custom shape source (scripted sequences in
    /// tests, alternative generators)
    pub fn start_with_source(&mut self, shapes: Box<dyn ShapeSource>) {
        self.shapes = shapes;
        self.reset();
    }

    fn reset(&mut self) {
        self.board = Board::new(self.config.board_width, self.config.board_height);
        self.score = Score::new();
        self.paused = false;
        self.game_over = false;
        self.interval_ms = self.config.start_interval_ms;
        self.active = None;
        self.next = Some(self.draw_piece());
        self.spawn();
    }

    fn draw_piece(&mut self) -> Piece {
        Piece::new(self.shapes.next_shape(), self.config.spawn_x, SPAWN_Y)
    }

    /// Promote the pending piece to active and draw a new pending one. A
    /// collision at the spawn position is the sole loss condition.
    fn spawn(&mut self) {
        let Some(next) = self.next.take() else {
            return;
        };
        self.active = Some(next);
        if self.board.has_collision(&next, 0, 0) {
            self.game_over = true;
            return;
        }
        self.next = Some(self.draw_piece());
    }

    /// One gravity step. Moves the active piece down if legal; otherwise
    /// locks it, clears rows, updates score/level/speed, and spawns the next
    /// piece. No-op while paused, after game over, or before `start`.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        if self.board.is_move_legal(&piece, 0, 1) {
            self.active = Some(Piece {
                y: piece.y + 1,
                ..piece
            });
        } else {
            self.lock_and_advance(piece);
        }
        true
    }

    fn lock_and_advance(&mut self, piece: Piece) {
        self.board.lock_piece(&piece);
        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score.apply_clear(cleared);
            if self.score.maybe_level_up() {
                // 10% faster gravity per level
                self.interval_ms = self.interval_ms * 9 / 10;
            }
        }
        self.spawn();
    }

    /// Apply a discrete command. Returns whether it changed anything.
    ///
    /// Gating lives here, not in the caller: while paused only TogglePause
    /// and Restart get through, and after game over only Restart does.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.game_over && command != Command::Restart {
            return false;
        }
        if self.paused && !matches!(command, Command::TogglePause | Command::Restart) {
            return false;
        }
        match command {
            Command::MoveLeft => self.shift(-1),
            Command::MoveRight => self.shift(1),
            Command::Rotate(direction) => self.rotate(direction),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::TogglePause => {
                self.paused = !self.paused;
                true
            }
            Command::Restart => {
                self.restart();
                true
            }
        }
    }

    fn shift(&mut self, dx: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if !self.board.is_move_legal(&piece, dx, 0) {
            return false;
        }
        self.active = Some(Piece {
            x: piece.x + dx,
            ..piece
        });
        true
    }

    /// Rotate with wall-kick correction: offsets are tried in the fixed order
    /// [0, +1, -1, +2, -2] and the first legal one is applied together with
    /// the rotation. If all five fail the piece is left untouched.
    fn rotate(&mut self, direction: RotationDirection) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        for kick in KICK_OFFSETS {
            if self.board.would_collide_on_turn(&piece, direction, kick) {
                continue;
            }
            let matrix = match direction {
                RotationDirection::Clockwise => piece.matrix.rotate_cw(),
                RotationDirection::CounterClockwise => piece.matrix.rotate_ccw(),
            };
            self.active = Some(Piece {
                x: piece.x + kick,
                matrix,
                ..piece
            });
            return true;
        }
        false
    }

    /// One downward attempt; reports whether the piece moved
    pub fn soft_drop(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if !self.board.is_move_legal(&piece, 0, 1) {
            return false;
        }
        self.active = Some(Piece {
            y: piece.y + 1,
            ..piece
        });
        true
    }

    /// Drop until the piece rests. Does not lock: the next tick finds the
    /// downward move illegal and locks, exactly like a natural landing.
    pub fn hard_drop(&mut self) -> bool {
        let mut moved = false;
        while self.soft_drop() {
            moved = true;
        }
        moved
    }

    /// Where the active piece would land if hard-dropped now. Derived copy
    /// for rendering; never touches engine state.
    pub fn ghost_piece(&self) -> Option<Piece> {
        let mut ghost = self.active?;
        while self.board.is_move_legal(&ghost, 0, 1) {
            ghost.y += 1;
        }
        Some(ghost)
    }

    fn restart(&mut self) {
        self.start(self.seed);
    }

    pub fn started(&self) -> bool {
        self.active.is_some()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn score(&self) -> Score {
        self.score
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Freeze the complete read model
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_grid(),
            active: self.active.as_ref().map(PieceSnapshot::from),
            next: self.next.as_ref().map(PieceSnapshot::from),
            ghost: self.ghost_piece().as_ref().map(PieceSnapshot::from),
            score: ScoreSnapshot::from(&self.score),
            paused: self.paused,
            game_over: self.game_over,
            interval_ms: self.interval_ms,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::FixedShapes;
    use crate::types::ShapeKind;

    fn engine_with(sequence: Vec<ShapeKind>) -> Engine {
        let mut engine = Engine::new(GameConfig::default());
        engine.start_with_source(Box::new(FixedShapes::new(sequence)));
        engine
    }

    /// Fill the given rows completely except for one column
    fn fill_rows_except(engine: &mut Engine, rows: std::ops::Range<i8>, gap_x: i8) {
        let width = engine.board().width() as i8;
        for y in rows {
            for x in 0..width {
                if x != gap_x {
                    engine.board_mut().set(x, y, 1);
                }
            }
        }
    }

    #[test]
    fn test_tetris_clear_levels_up_and_speeds_gravity() {
        let mut engine = engine_with(vec![ShapeKind::I]);

        // Two tetrises (8 rows), then a double (10 rows total)
        for round in 0..3 {
            let (rows, expected_cleared) = if round < 2 { (12..16, 4) } else { (14..16, 2) };
            fill_rows_except(&mut engine, rows, 6);

            // Vertical I over the gap column, straight down
            assert!(engine.apply(Command::Rotate(RotationDirection::Clockwise)));
            assert!(engine.apply(Command::HardDrop));
            let rows_before = engine.score().rows();
            assert!(engine.tick());
            assert_eq!(engine.score().rows(), rows_before + expected_cleared);
        }

        assert_eq!(engine.score().rows(), 10);
        // 1200 + 1200 + 100, all at level 0 multipliers
        assert_eq!(engine.score().points(), 2500);
        assert_eq!(engine.score().level(), 1);
        assert_eq!(engine.interval_ms(), 630);
    }

    #[test]
    fn test_spawn_collision_is_game_over() {
        let mut engine = engine_with(vec![ShapeKind::O]);

        // Block the spawn cells, then lock the current piece at the bottom
        engine.board_mut().set(4, 0, 1);
        engine.board_mut().set(5, 0, 1);
        engine.apply(Command::HardDrop);
        engine.tick();

        assert!(engine.game_over());
        assert!(!engine.tick());
        assert!(!engine.apply(Command::MoveLeft));

        // Restart is still allowed and produces a playable game
        assert!(engine.apply(Command::Restart));
        assert!(!engine.game_over());
        assert_eq!(engine.board().to_grid(), Board::new(10, 16).to_grid());
    }

    #[test]
    fn test_rotation_rejected_when_every_kick_fails() {
        let mut engine = engine_with(vec![ShapeKind::I]);

        // Vertical I flush against the left wall
        assert!(engine.apply(Command::Rotate(RotationDirection::Clockwise)));
        for _ in 0..6 {
            engine.apply(Command::MoveLeft);
        }
        let piece = engine.active().unwrap();
        assert_eq!(piece.cells()[0], (0, 0));

        // The only in-bounds kick (+2) lands on this cell
        engine.board_mut().set(3, 2, 1);
        assert!(!engine.apply(Command::Rotate(RotationDirection::Clockwise)));
        assert_eq!(engine.active().unwrap(), piece);
    }

    #[test]
    fn test_hard_drop_locks_on_next_tick() {
        let mut engine = engine_with(vec![ShapeKind::O, ShapeKind::T]);

        assert!(engine.apply(Command::HardDrop));
        // Still the same piece, resting on the floor
        assert_eq!(engine.active().unwrap().kind(), ShapeKind::O);
        assert_eq!(engine.active().unwrap().y(), 14);

        assert!(engine.tick());
        assert_eq!(engine.active().unwrap().kind(), ShapeKind::T);
        assert_eq!(engine.board().get(4, 14), Some(ShapeKind::O.number()));
        assert_eq!(engine.board().get(5, 15), Some(ShapeKind::O.number()));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut engine = engine_with(vec![ShapeKind::T, ShapeKind::S]);
        engine.apply(Command::MoveRight);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.board.len(), 16);
        assert_eq!(snapshot.board[0].len(), 10);
        let active = snapshot.active.unwrap();
        assert_eq!(active.kind, ShapeKind::T);
        assert_eq!(active.x, 5);
        assert_eq!(snapshot.next.unwrap().kind, ShapeKind::S);
        assert_eq!(snapshot.ghost.unwrap().kind, ShapeKind::T);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.interval_ms, 700);
    }
}
