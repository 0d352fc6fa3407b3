//! Error types for board construction, input parsing and bounded search.

use std::io;

/// Reasons a grid cannot be turned into a [`Board`](crate::board::Board).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },
    #[error("tile {value} is outside 0..={max}")]
    TileOutOfRange { value: u32, max: u32 },
    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u32 },
}

/// Failures while reading a puzzle description.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("input does not start with a board dimension")]
    MissingDimension,
    #[error("invalid token: {token:?}")]
    InvalidToken { token: String },
    #[error("expected {expected} tiles, found {found}")]
    MissingTiles { expected: usize, found: usize },
    #[error("{count} unexpected tokens after the last tile")]
    TrailingTokens { count: usize },
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// Failures of a search run with limits configured.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("search generated more than {limit} nodes")]
    NodeLimit { limit: usize },
}
