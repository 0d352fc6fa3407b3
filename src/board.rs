//! Immutable sliding-puzzle board.
//!
//! A board of dimension `n` holds the values `0..n*n` exactly once in a flat
//! row-major array, where 0 is the blank. The goal layout is `1..n*n-1` in
//! ascending order with the blank in the bottom-right cell.

use std::fmt;

use rand::Rng;

use crate::error::BoardError;

/// Row and column offsets of the cells the blank can swap with:
/// left, right, up, down.
const SLIDES: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// One configuration of an `n x n` sliding puzzle.
///
/// Boards never change after construction; every derived board (neighbor or
/// twin) is a fresh copy, so boards can be shared freely between search nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Box<[u32]>,
}

impl Board {
    /// Builds a board from a square grid of rows, copying the values.
    ///
    /// Fails if the grid is empty, ragged or not square, or if its values are
    /// not exactly `0..n*n`.
    pub fn new<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(BoardError::Empty);
        }

        let mut tiles = Vec::with_capacity(dimension * dimension);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != dimension {
                return Err(BoardError::NotSquare {
                    row,
                    len: cells.len(),
                    dimension,
                });
            }
            tiles.extend_from_slice(cells);
        }

        Self::from_tiles(dimension, tiles)
    }

    /// Builds a board from `dimension * dimension` values in row-major order.
    pub(crate) fn from_tiles(dimension: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if dimension == 0 {
            return Err(BoardError::Empty);
        }
        debug_assert_eq!(tiles.len(), dimension * dimension);

        let max = (dimension * dimension - 1) as u32;
        let mut seen = vec![false; tiles.len()];
        for &value in &tiles {
            if value > max {
                return Err(BoardError::TileOutOfRange { value, max });
            }
            if std::mem::replace(&mut seen[value as usize], true) {
                return Err(BoardError::DuplicateTile { value });
            }
        }

        Ok(Self {
            dimension,
            tiles: tiles.into_boxed_slice(),
        })
    }

    /// Returns the solved board of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    pub fn goal(dimension: usize) -> Self {
        assert!(dimension > 0, "board dimension must be positive");
        let cells = dimension * dimension;
        Self {
            dimension,
            tiles: (0..cells).map(|index| goal_value(index, cells)).collect(),
        }
    }

    /// Board dimension `n`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Value at `(row, col)`; 0 is the blank.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.dimension + col]
    }

    /// All values in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Position `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        let index = self
            .tiles
            .iter()
            .position(|&value| value == 0)
            .unwrap_or_default();
        (index / self.dimension, index % self.dimension)
    }

    /// Number of tiles out of place. The blank is not counted.
    pub fn hamming(&self) -> u32 {
        let cells = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &value)| value != 0 && value != goal_value(index, cells))
            .count() as u32
    }

    /// Sum of the row and column distances of every tile to its goal cell.
    pub fn manhattan(&self) -> u32 {
        let dim = self.dimension;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(index, &value)| {
                let target = value as usize - 1;
                (index / dim).abs_diff(target / dim) + (index % dim).abs_diff(target % dim)
            })
            .sum::<usize>() as u32
    }

    /// True if every cell holds its goal value.
    pub fn is_goal(&self) -> bool {
        let cells = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &value)| value == goal_value(index, cells))
    }

    /// Boards reachable by sliding one tile into the blank.
    ///
    /// Yields two boards in a corner, three on an edge and four in the interior.
    pub fn neighbors(&self) -> Vec<Board> {
        let (row, col) = self.blank();
        let blank = row * self.dimension + col;

        SLIDES
            .iter()
            .filter_map(|&(d_row, d_col)| {
                let next_row = row.checked_add_signed(d_row)?;
                let next_col = col.checked_add_signed(d_col)?;
                if next_row >= self.dimension || next_col >= self.dimension {
                    return None;
                }
                Some(self.swapped(blank, next_row * self.dimension + next_col))
            })
            .collect()
    }

    /// A board with two distinct, randomly chosen tiles exchanged.
    ///
    /// Exchanging two tiles flips the permutation parity, so exactly one of a
    /// board and its twin can reach the goal. Returns `None` for a 1x1 board,
    /// which holds no tiles at all.
    pub fn twin<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Board> {
        if self.dimension < 2 {
            return None;
        }

        let first = self.random_tile(rng, None);
        let second = self.random_tile(rng, Some(first));
        Some(self.swapped(first, second))
    }

    /// Samples cell indices until one holds a tile other than `exclude`.
    fn random_tile<R: Rng + ?Sized>(&self, rng: &mut R, exclude: Option<usize>) -> usize {
        loop {
            let index = rng.gen_range(0..self.tiles.len());
            if self.tiles[index] != 0 && Some(index) != exclude {
                return index;
            }
        }
    }

    /// Copy of this board with the cells at `a` and `b` exchanged.
    fn swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Board {
            dimension: self.dimension,
            tiles,
        }
    }
}

/// Goal value of the cell at `index` on a board with `cells` cells.
#[inline(always)]
fn goal_value(index: usize, cells: usize) -> u32 {
    if index + 1 == cells {
        0
    } else {
        index as u32 + 1
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.tiles.chunks(self.dimension) {
            for value in row {
                write!(f, "{:2} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
