//! Reading puzzles from text.
//!
//! Format: whitespace-separated integers, first the dimension `n`, then the
//! `n * n` cell values in row-major order with 0 for the blank:
//!
//! ```text
//! 3
//!  0  1  3
//!  4  2  5
//!  7  8  6
//! ```

use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::error::InputError;

/// Reads and parses a puzzle file.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board, InputError> {
    let text = fs::read_to_string(path)?;
    parse_board(&text)
}

/// Parses a puzzle description into a validated board.
pub fn parse_board(text: &str) -> Result<Board, InputError> {
    let mut tokens = text.split_whitespace();

    let dimension: usize = parse_token(tokens.next().ok_or(InputError::MissingDimension)?)?;
    let expected = dimension * dimension;

    let tiles = tokens
        .by_ref()
        .take(expected)
        .map(parse_token)
        .collect::<Result<Vec<u32>, _>>()?;
    if tiles.len() < expected {
        return Err(InputError::MissingTiles {
            expected,
            found: tiles.len(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(InputError::TrailingTokens { count: trailing });
    }

    Ok(Board::from_tiles(dimension, tiles)?)
}

fn parse_token<T: std::str::FromStr>(token: &str) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidToken {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_parse_reference_puzzle() {
        let board = parse_board("3\n 8  1  3\n 4  0  2\n 7  6  5\n").unwrap();
        assert_eq!(board, Board::new(&[[8u32, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap());
    }

    #[test]
    fn test_layout_is_free_form() {
        let board = parse_board("2 1 2\n\n3 0").unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(matches!(parse_board(""), Err(InputError::MissingDimension)));
        assert!(matches!(
            parse_board("2 1 x 3 0"),
            Err(InputError::InvalidToken { token }) if token == "x"
        ));
        assert!(matches!(
            parse_board("3 1 2 3"),
            Err(InputError::MissingTiles { expected: 9, found: 3 })
        ));
        assert!(matches!(
            parse_board("2 1 2 3 0 7"),
            Err(InputError::TrailingTokens { count: 1 })
        ));
        assert!(matches!(
            parse_board("2 1 2 3 3"),
            Err(InputError::Board(BoardError::DuplicateTile { value: 3 }))
        ));
        assert!(matches!(
            parse_board("0"),
            Err(InputError::Board(BoardError::Empty))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = read_board("does/not/exist.txt");
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
