//! Grid geometry: positions, sizes, the per-level sizing policy, and
//! toroidal cursor movement.

use serde::{Deserialize, Serialize};

/// Cards on the first level.
const BASE_CARDS: usize = 4;

/// Cards added per level.
const CARDS_PER_LEVEL: usize = 2;

/// Largest grid ever dealt (4x6).
pub const MAX_CARDS: usize = 24;

/// A cell address, 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one cell, wrapping around the edges of `size`.
    ///
    /// Moving up from row 0 lands on the last row, and so on for every
    /// direction. `size` must be non-empty.
    #[must_use]
    pub fn step(self, direction: Direction, size: GridSize) -> Self {
        let Self { row, col } = self;
        match direction {
            Direction::Up => Self::new((row + size.rows - 1) % size.rows, col),
            Direction::Down => Self::new((row + 1) % size.rows, col),
            Direction::Left => Self::new(row, (col + size.cols - 1) % size.cols),
            Direction::Right => Self::new(row, (col + 1) % size.cols),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Cursor movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells.
    #[must_use]
    pub const fn cells(self) -> usize {
        self.rows * self.cols
    }

    /// Number of pairs a full deal places.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.cells() / 2
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub const fn index_of(self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Position of a row-major index.
    #[must_use]
    pub const fn position_of(self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// Grid dealt at `level` (levels start at 1).
    ///
    /// Two cards are added per level, capped at [`MAX_CARDS`]:
    ///
    /// | cards  | grid          |
    /// |--------|---------------|
    /// | <= 6   | 2 x cards/2   |
    /// | <= 8   | 2 x 4         |
    /// | <= 12  | 3 x 4         |
    /// | <= 16  | 4 x 4         |
    /// | <= 20  | 4 x 5         |
    /// | else   | 4 x 6         |
    ///
    /// Level 0 is treated as level 1.
    #[must_use]
    pub fn for_level(level: u32) -> Self {
        let extra = (level.max(1) - 1) as usize;
        let total = extra
            .saturating_mul(CARDS_PER_LEVEL)
            .saturating_add(BASE_CARDS)
            .min(MAX_CARDS);

        match total {
            0..=6 => Self::new(2, total / 2),
            7..=8 => Self::new(2, 4),
            9..=12 => Self::new(3, 4),
            13..=16 => Self::new(4, 4),
            17..=20 => Self::new(4, 5),
            _ => Self::new(4, 6),
        }
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
