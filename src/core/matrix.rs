//! Shape matrix module - the rotatable occupancy grid of a piece
//!
//! A matrix is a small rectangular grid of cells, each empty (0) or occupied
//! (non-zero). Rotation is a pure transform: it returns a new matrix with
//! transposed dimensions and never touches the input. Uses flat array storage.

/// Maximum matrix dimension (the I piece uses a 4x4 grid)
pub const MAX_DIM: usize = 4;

/// A rectangular cell grid, at most 4x4, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [u8; MAX_DIM * MAX_DIM],
}

impl ShapeMatrix {
    /// Build a matrix from fixed-size rows
    pub fn from_rows<const R: usize, const C: usize>(rows: [[u8; C]; R]) -> Self {
        assert!(R >= 1 && R <= MAX_DIM && C >= 1 && C <= MAX_DIM);
        let mut cells = [0u8; MAX_DIM * MAX_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells[r * C + c] = value;
            }
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    /// Build a matrix from a nested-array grid (snapshot decoding).
    /// Returns None for empty, ragged, or oversized grids.
    pub fn from_grid(grid: &[Vec<u8>]) -> Option<Self> {
        let rows = grid.len();
        if rows == 0 || rows > MAX_DIM {
            return None;
        }
        let cols = grid[0].len();
        if cols == 0 || cols > MAX_DIM {
            return None;
        }
        let mut cells = [0u8; MAX_DIM * MAX_DIM];
        for (r, row) in grid.iter().enumerate() {
            if row.len() != cols {
                return None;
            }
            for (c, &value) in row.iter().enumerate() {
                cells[r * cols + c] = value;
            }
        }
        Some(Self {
            rows: rows as u8,
            cols: cols as u8,
            cells,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell value at (row, col)
    pub fn get(&self, row: u8, col: u8) -> u8 {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// Iterate (row, col) pairs of occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).filter_map(move |c| (self.get(r, c) != 0).then_some((r, c)))
        })
    }

    /// 90-degree clockwise rotation: an RxC grid becomes CxR with
    /// new[r][c] = old[R-1-c][r]
    pub fn rotate_cw(&self) -> Self {
        let mut cells = [0u8; MAX_DIM * MAX_DIM];
        let (new_rows, new_cols) = (self.cols, self.rows);
        for r in 0..new_rows {
            for c in 0..new_cols {
                cells[r as usize * new_cols as usize + c as usize] =
                    self.get(self.rows - 1 - c, r);
            }
        }
        Self {
            rows: new_rows,
            cols: new_cols,
            cells,
        }
    }

    /// 90-degree counter-clockwise rotation, the inverse of `rotate_cw`:
    /// new[r][c] = old[c][C-1-r]
    pub fn rotate_ccw(&self) -> Self {
        let mut cells = [0u8; MAX_DIM * MAX_DIM];
        let (new_rows, new_cols) = (self.cols, self.rows);
        for r in 0..new_rows {
            for c in 0..new_cols {
                cells[r as usize * new_cols as usize + c as usize] =
                    self.get(c, self.cols - 1 - r);
            }
        }
        Self {
            rows: new_rows,
            cols: new_cols,
            cells,
        }
    }

    /// Convert to a nested-array grid (snapshot encoding)
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| self.get(r, c)).collect())
            .collect()
    }
}
