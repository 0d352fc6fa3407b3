//! Sliding Puzzle Solver
//!
//! Reads an n x n sliding puzzle from a file and prints the shortest sequence
//! of boards leading to the solved configuration, or reports that the board
//! cannot be solved.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::{input, report, SearchConfig, Solver};

/// Solves sliding-tile puzzles optimally with A*.
#[derive(Parser, Debug)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
struct Cli {
    /// Puzzle file to solve when no subcommand is given.
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a puzzle and print the path to the goal.
    Solve {
        /// Puzzle file: the dimension followed by the cell values, 0 for the blank.
        input: PathBuf,
        /// Seed for choosing the twin board.
        #[arg(long)]
        seed: Option<u64>,
        /// Abort after generating this many search nodes.
        #[arg(long)]
        max_nodes: Option<usize>,
        /// Skip boards that were already expanded.
        #[arg(long)]
        closed_set: bool,
    },
    /// Print randomly drawn twins of a puzzle.
    Twins {
        /// Puzzle file: the dimension followed by the cell values, 0 for the blank.
        input: PathBuf,
        /// Number of twins to print.
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// Seed for choosing the swapped tiles.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve {
            input,
            seed,
            max_nodes,
            closed_set,
        }) => {
            let config = SearchConfig {
                max_nodes,
                closed_set,
            };
            run_solver(&input, seed, config)
        }
        Some(Command::Twins { input, count, seed }) => run_twins(&input, count, seed),
        None => match cli.input {
            // default: solve with the reference settings
            Some(input) => run_solver(&input, None, SearchConfig::default()),
            None => anyhow::bail!("no puzzle file given"),
        },
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Solves the puzzle in `path` and prints the report.
fn run_solver(path: &Path, seed: Option<u64>, config: SearchConfig) -> anyhow::Result<()> {
    let board = input::read_board(path)
        .with_context(|| format!("failed to read puzzle from {}", path.display()))?;
    info!(
        "loaded {n}x{n} puzzle from {}",
        path.display(),
        n = board.dimension()
    );

    let solver = Solver::with_config(&board, &config, &mut seeded_rng(seed))?;
    let stats = solver.stats();
    info!("expanded {} nodes, generated {}", stats.expanded, stats.generated);

    print!("{}", report::format_report(&solver));
    Ok(())
}

/// Prints `count` twins of the puzzle in `path`.
fn run_twins(path: &Path, count: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let board = input::read_board(path)
        .with_context(|| format!("failed to read puzzle from {}", path.display()))?;

    let mut rng = seeded_rng(seed);
    print!("{}", report::format_twins(&board, count, &mut rng));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_solve_arguments() {
        let cli = Cli::try_parse_from([
            "npuzzle",
            "solve",
            "puzzle04.txt",
            "--seed",
            "7",
            "--closed-set",
        ])
        .unwrap();
        assert_eq!(cli.input, None);
        match cli.command {
            Some(Command::Solve {
                input,
                seed,
                max_nodes,
                closed_set,
            }) => {
                assert_eq!(input, PathBuf::from("puzzle04.txt"));
                assert_eq!(seed, Some(7));
                assert_eq!(max_nodes, None);
                assert!(closed_set);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_twins_defaults_to_a_thousand() {
        let cli = Cli::try_parse_from(["npuzzle", "twins", "puzzle04.txt"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Twins { count: 1000, .. })));
    }

    #[test]
    fn test_bare_input_solves() {
        let cli = Cli::try_parse_from(["npuzzle", "puzzle04.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("puzzle04.txt")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_bare_input_rejects_trailing_subcommand() {
        assert!(Cli::try_parse_from(["npuzzle", "puzzle04.txt", "solve", "other.txt"]).is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["npuzzle", "solve"]).is_err());
    }
}
