//! A* solver for the sliding puzzle.
//!
//! Two searches run in lock-step: one from the initial board and one from its
//! twin (the same board with two tiles exchanged). Exactly one of the two can
//! reach the goal, so whichever side extracts a goal board first decides
//! solvability without a separate parity computation.
//!
//! Key points:
//! - Nodes live in a per-side arena and point at their parent by index
//! - Queues never update entries in place; duplicate boards are tolerated
//! - A neighbor equal to the parent's board is never enqueued
//! - Optional closed set skips boards that were already expanded

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::convert::Infallible;
use std::iter;

use log::{debug, trace};
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::error::SolveError;

/// Index of a node within its side's arena.
type NodeId = usize;

/// Min-queue entry: `moves + manhattan`, then `moves + hamming`, then
/// insertion order so equal keys pop first-in first-out.
type QueueEntry = Reverse<(u32, u32, NodeId)>;

/// Tuning knobs for a search run.
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Upper bound on the number of nodes generated across both sides.
    pub max_nodes: Option<usize>,
    /// Skip boards that were already expanded on the same side.
    pub closed_set: bool,
}

/// Node counts accumulated over both sides of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off a queue and expanded into their neighbors.
    pub expanded: usize,
    /// Nodes created, including both roots.
    pub generated: usize,
}

/// A board in the search tree together with its path cost and cached heuristics.
struct SearchNode {
    board: Board,
    parent: Option<NodeId>,
    moves: u32,
    manhattan: u32,
    hamming: u32,
}

/// Result of one turn on a single side.
enum Step {
    Goal(NodeId),
    Expanded,
    Exhausted,
}

/// One A* search: the node arena plus its priority queue.
struct Search {
    nodes: Vec<SearchNode>,
    queue: BinaryHeap<QueueEntry>,
    closed: Option<FxHashSet<Board>>,
    expanded: usize,
}

impl Search {
    fn new(root: Board, closed_set: bool) -> Self {
        let mut search = Self {
            nodes: Vec::new(),
            queue: BinaryHeap::new(),
            closed: closed_set.then(FxHashSet::default),
            expanded: 0,
        };
        search.push(root, None, 0);
        search
    }

    fn push(&mut self, board: Board, parent: Option<NodeId>, moves: u32) {
        let id = self.nodes.len();
        let manhattan = board.manhattan();
        let hamming = board.hamming();
        self.queue.push(Reverse((moves + manhattan, moves + hamming, id)));
        self.nodes.push(SearchNode {
            board,
            parent,
            moves,
            manhattan,
            hamming,
        });
    }

    /// Extracts the best node and either reports it as the goal or expands it.
    fn step(&mut self) -> Step {
        let id = loop {
            let Some(Reverse((_, _, id))) = self.queue.pop() else {
                return Step::Exhausted;
            };
            if let Some(closed) = &mut self.closed {
                if !closed.insert(self.nodes[id].board.clone()) {
                    continue;
                }
            }
            break id;
        };

        let node = &self.nodes[id];
        if node.board.is_goal() {
            return Step::Goal(id);
        }

        trace!(
            "expanding node {} (moves {}, manhattan {}, hamming {})",
            id,
            node.moves,
            node.manhattan,
            node.hamming
        );

        // never step straight back onto the parent's board
        let parent_board = node.parent.map(|parent| &self.nodes[parent].board);
        let children: Vec<Board> = node
            .board
            .neighbors()
            .into_iter()
            .filter(|neighbor| Some(neighbor) != parent_board)
            .collect();
        let moves = node.moves + 1;

        for child in children {
            self.push(child, Some(id), moves);
        }
        self.expanded += 1;
        Step::Expanded
    }

    /// Boards from the root to `last`, inclusive.
    fn path_to(&self, last: NodeId) -> Vec<Board> {
        let mut path: Vec<Board> = iter::successors(Some(last), |&id| self.nodes[id].parent)
            .map(|id| self.nodes[id].board.clone())
            .collect();
        path.reverse();
        path
    }
}

/// How a run ended.
enum Outcome {
    /// The original side extracted the goal at this node.
    Solved(NodeId),
    /// The twin side reached its goal, or the original side ran dry.
    Unsolvable,
}

/// The original and twin searches plus whose turn it is.
struct DualSearch {
    original: Search,
    /// `None` only for boards without a twin (1x1), which are already solved.
    twin: Option<Search>,
    twin_turn: bool,
}

impl DualSearch {
    fn start<R: Rng + ?Sized>(initial: &Board, config: &SearchConfig, rng: &mut R) -> Self {
        debug!(
            "searching {n}x{n} board (manhattan {}, hamming {})",
            initial.manhattan(),
            initial.hamming(),
            n = initial.dimension()
        );
        let twin = initial
            .twin(rng)
            .map(|twin| Search::new(twin, config.closed_set));

        Self {
            original: Search::new(initial.clone(), config.closed_set),
            twin,
            twin_turn: false,
        }
    }

    /// Plays one turn and flips to the other side. Returns the outcome once
    /// a side halts the run.
    fn turn(&mut self) -> Option<Outcome> {
        if self.twin_turn {
            self.twin_turn = false;
            let twin = self.twin.as_mut()?;
            return match twin.step() {
                Step::Goal(_) => {
                    debug!("twin search reached the goal first");
                    Some(Outcome::Unsolvable)
                }
                // an exhausted twin leaves the original side searching alone
                Step::Exhausted | Step::Expanded => None,
            };
        }

        self.twin_turn = self.twin.is_some();
        match self.original.step() {
            Step::Goal(id) => {
                debug!("original search reached the goal first");
                Some(Outcome::Solved(id))
            }
            Step::Exhausted => {
                debug!("original search exhausted its reachable boards");
                Some(Outcome::Unsolvable)
            }
            Step::Expanded => None,
        }
    }

    fn stats(&self) -> SearchStats {
        iter::once(&self.original)
            .chain(self.twin.as_ref())
            .fold(SearchStats::default(), |stats, search| SearchStats {
                expanded: stats.expanded + search.expanded,
                generated: stats.generated + search.nodes.len(),
            })
    }

    /// Plays turns until a side halts, handing the running totals to `limit`
    /// after every turn that did not.
    fn run<E>(
        mut self,
        mut limit: impl FnMut(SearchStats) -> Result<(), E>,
    ) -> Result<Solver, E> {
        loop {
            if let Some(outcome) = self.turn() {
                return Ok(self.finish(outcome));
            }
            limit(self.stats())?;
        }
    }

    fn finish(self, outcome: Outcome) -> Solver {
        let stats = self.stats();
        debug!(
            "search finished: {} nodes expanded, {} generated",
            stats.expanded, stats.generated
        );
        let solution = match outcome {
            Outcome::Solved(id) => Some(self.original.path_to(id)),
            Outcome::Unsolvable => None,
        };
        Solver { solution, stats }
    }
}

/// Result of solving one board: solvability, minimum move count and the
/// optimal path.
#[derive(Clone, Debug)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    /// Solves `initial` to completion with no node limit, using the thread RNG
    /// to pick the twin.
    pub fn new(initial: &Board) -> Self {
        let mut rng = rand::thread_rng();
        DualSearch::start(initial, &SearchConfig::default(), &mut rng)
            .run(|_| Ok::<(), Infallible>(()))
            .unwrap_or_else(|never| match never {})
    }

    /// Solves `initial` under `config`, drawing the twin from `rng`.
    ///
    /// Fails only when `config.max_nodes` is exceeded before either side
    /// reaches its goal.
    pub fn with_config<R: Rng + ?Sized>(
        initial: &Board,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<Self, SolveError> {
        DualSearch::start(initial, config, rng).run(|stats| match config.max_nodes {
            Some(limit) if stats.generated > limit => {
                debug!("node limit of {} exceeded", limit);
                Err(SolveError::NodeLimit { limit })
            }
            _ => Ok(()),
        })
    }

    /// True if the initial board can reach the goal.
    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of moves to reach the goal, or `None` if unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards from the initial board to the goal, or `None` if unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// Node counts of the finished run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
