//! Plain-text output for solver results and twin listings.

use rand::Rng;

use crate::board::Board;
use crate::solver::Solver;

/// Formats a solver result: the move count and every board on the path, or
/// a one-line notice for unsolvable boards.
pub fn format_report(solver: &Solver) -> String {
    let Some(path) = solver.solution() else {
        return "board not solvable\n".to_string();
    };

    let mut output = String::new();
    output.push_str(&format!("problem solved in {} steps\n", path.len() - 1));
    output.push_str("------------PATH------------\n");
    for board in path {
        output.push_str(&format!("{}\n", board));
    }
    output.push_str("board is solvable\n");
    output
}

/// Lists `count` randomly drawn twins of `board`, each under a `twin: i` header.
pub fn format_twins<R: Rng + ?Sized>(board: &Board, count: usize, rng: &mut R) -> String {
    let mut output = String::new();
    for i in 0..count {
        let Some(twin) = board.twin(rng) else {
            output.push_str("NO TWIN!\n");
            break;
        };
        output.push_str(&format!("twin: {}\n{}\n", i, twin));
    }
    output
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_report_for_one_move() {
        let board = Board::new(&[[1u32, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        insta::assert_snapshot!(format_report(&Solver::new(&board)));
    }

    #[test]
    fn test_report_for_unsolvable_board() {
        let board = Board::new(&[[1u32, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
        assert_eq!(format_report(&Solver::new(&board)), "board not solvable\n");
    }

    #[test]
    fn test_twins_listing() {
        let board = Board::new(&[[8u32, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap();
        let output = format_twins(&board, 3, &mut StdRng::seed_from_u64(9));
        let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("twin:")).collect();
        assert_eq!(headers, ["twin: 0", "twin: 1", "twin: 2"]);
        // header, dimension, three rows, blank separator per twin
        assert_eq!(output.lines().count(), 3 * 6);
    }

    #[test]
    fn test_single_cell_board_has_no_twins() {
        let board = Board::new(&[[0u32]]).unwrap();
        let output = format_twins(&board, 5, &mut StdRng::seed_from_u64(0));
        assert_eq!(output, "NO TWIN!\n");
    }
}
