//! Scoring module - points and level as a pure function of cleared rows
//!
//! Classic table: 1 row = 40, 2 = 100, 3 = 300, 4 or more = 1200, each scaled
//! by (level + 1). The level goes up once per 10 cumulative cleared rows.

use crate::types::{CLEAR_MULTIPLIERS, ROWS_PER_LEVEL};

/// The per-clear-count points multiplier (before level scaling)
pub fn clear_multiplier(rows: u8) -> u32 {
    let idx = (rows as usize).min(CLEAR_MULTIPLIERS.len() - 1);
    CLEAR_MULTIPLIERS[idx]
}

/// Score and level state for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    points: u32,
    level: u32,
    rows: u32,
    /// Rows accumulated toward the next level-up; drained 10 at a time
    rows_toward_level: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total rows cleared this game
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Account for a clear of `rows` rows. No-op on zero.
    pub fn apply_clear(&mut self, rows: u8) {
        if rows == 0 {
            return;
        }
        self.points += clear_multiplier(rows) * (self.level + 1);
        self.rows += rows as u32;
        self.rows_toward_level += rows as u32;
    }

    /// Consume 10 accumulated rows for one level-up if available.
    /// At most one level per call; callers invoke this once per lock event.
    pub fn maybe_level_up(&mut self) -> bool {
        if self.rows_toward_level < ROWS_PER_LEVEL {
            return false;
        }
        self.rows_toward_level -= ROWS_PER_LEVEL;
        self.level += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        assert_eq!(clear_multiplier(0), 0);
        assert_eq!(clear_multiplier(1), 40);
        assert_eq!(clear_multiplier(2), 100);
        assert_eq!(clear_multiplier(3), 300);
        assert_eq!(clear_multiplier(4), 1200);
        // Anything above 4 uses the tetris multiplier
        assert_eq!(clear_multiplier(5), 1200);
    }

    #[test]
    fn test_points_scale_with_level() {
        let mut score = Score::new();
        score.apply_clear(1);
        assert_eq!(score.points(), 40);

        // Force level 1 and clear again: multiplier x2
        for _ in 0..9 {
            score.apply_clear(1);
        }
        assert!(score.maybe_level_up());
        score.apply_clear(1);
        assert_eq!(score.points(), 40 * 10 + 40 * 2);
    }

    #[test]
    fn test_zero_clear_is_noop() {
        let mut score = Score::new();
        score.apply_clear(0);
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_level_up_at_ten_rows() {
        let mut score = Score::new();
        for i in 0..10 {
            assert!(!score.maybe_level_up(), "leveled early at {i} rows");
            score.apply_clear(1);
        }
        assert_eq!(score.rows(), 10);
        assert!(score.maybe_level_up());
        assert_eq!(score.level(), 1);
        assert!(!score.maybe_level_up());
    }

    #[test]
    fn test_level_up_one_per_call() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.apply_clear(4);
        }
        // 20 rows pending: two level-ups, but only one per call
        assert!(score.maybe_level_up());
        assert_eq!(score.level(), 1);
        assert!(score.maybe_level_up());
        assert_eq!(score.level(), 2);
        assert!(!score.maybe_level_up());
    }

    #[test]
    fn test_tetris_points() {
        let mut score = Score::new();
        score.apply_clear(4);
        assert_eq!(score.points(), 1200);
        assert_eq!(score.rows(), 4);
    }
}
