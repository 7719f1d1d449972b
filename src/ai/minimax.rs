use crate::config::SearchConfig;
use crate::game::{Board, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Score of a position where the engine's side has a winning line. Forced
/// wins are depth-independent: winning in two plies and winning in six
/// compare equal, and both dominate any heuristic score.
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// Score of a position where the opponent has a winning line. The magnitude
/// deliberately differs from [`WIN_SCORE`]; both sit far outside the
/// heuristic's range, so the asymmetry never competes with non-terminal
/// scores.
pub const LOSS_SCORE: i64 = -10_000_000_000_000;

/// Minimax agent with alpha-beta pruning and a fixed search depth.
///
/// The search is fully deterministic: legal columns are explored in
/// ascending order and the first column to reach the best score is kept, so
/// repeated calls on the same position always return the same move.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    /// Create an agent searching `depth` plies with the default
    /// [`WindowHeuristic`].
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        assert!(depth >= 1, "search depth must be at least one ply");
        MinimaxAgent { depth, heuristic }
    }

    /// Create an agent from a validated [`SearchConfig`].
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.depth)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Choose a column for `side` to play on `board`.
    ///
    /// This is the sole entry point for automated play. The board is not
    /// mutated; the caller applies the returned move with
    /// [`Board::drop_height`] and [`Board::place`]. Calling on a finished
    /// game is a contract violation (the caller must check for game over
    /// first) and panics.
    pub fn choose_move(&self, board: &Board, side: Player) -> usize {
        assert!(
            !board.is_terminal(),
            "choose_move called on a finished game"
        );
        let (column, _) = self.minimax(board, side, self.depth, i64::MIN, i64::MAX, true);
        column.expect("non-terminal board with depth >= 1 yields a column")
    }

    /// Choose a column by searching each root move on its own rayon task.
    ///
    /// Every root child gets a full alpha-beta window, so its score is the
    /// exact minimax value, and the first maximum in column order is kept;
    /// the chosen column and score are therefore identical to
    /// [`MinimaxAgent::choose_move`].
    #[cfg(feature = "parallel")]
    pub fn choose_move_parallel(&self, board: &Board, side: Player) -> usize {
        use rayon::prelude::*;

        assert!(
            !board.is_terminal(),
            "choose_move_parallel called on a finished game"
        );
        let scored: Vec<(usize, i64)> = board
            .legal_moves()
            .par_iter()
            .map(|&col| {
                let row = board.drop_height(col).expect("legal column is open");
                let mut child = board.clone();
                child.place(row, col, side.to_cell());
                let (_, score) =
                    self.minimax(&child, side, self.depth - 1, i64::MIN, i64::MAX, false);
                (col, score)
            })
            .collect();

        let mut best = scored[0];
        for &(col, score) in &scored[1..] {
            if score > best.1 {
                best = (col, score);
            }
        }
        best.0
    }

    /// Recursive minimax over hypothetical boards.
    ///
    /// `engine_side` is the side the agent is playing for and stays fixed
    /// down the whole tree; `maximizing` flips each ply. Terminal positions
    /// score [`WIN_SCORE`], [`LOSS_SCORE`], or 0 for a drawn full board.
    /// Depth-zero leaves are evaluated from `engine_side`'s perspective
    /// regardless of which role is maximizing at that node, preserving the
    /// reference engine's behavior.
    fn minimax(
        &self,
        board: &Board,
        engine_side: Player,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        if board.is_terminal() {
            return if board.has_win(engine_side.to_cell()) {
                (None, WIN_SCORE)
            } else if board.has_win(engine_side.other().to_cell()) {
                (None, LOSS_SCORE)
            } else {
                (None, 0)
            };
        }
        if depth == 0 {
            return (None, self.heuristic.evaluate(board, engine_side));
        }

        let legal = board.legal_moves();
        // Seeding with the first legal column makes ties deterministic.
        let mut best_column = legal[0];

        if maximizing {
            let mut best = i64::MIN;
            for &col in &legal {
                let row = board.drop_height(col).expect("legal column is open");
                let mut child = board.clone();
                child.place(row, col, engine_side.to_cell());
                let (_, score) =
                    self.minimax(&child, engine_side, depth - 1, alpha, beta, false);
                if score > best {
                    best = score;
                    best_column = col;
                }
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            (Some(best_column), best)
        } else {
            let mut best = i64::MAX;
            for &col in &legal {
                let row = board.drop_height(col).expect("legal column is open");
                let mut child = board.clone();
                child.place(row, col, engine_side.other().to_cell());
                let (_, score) =
                    self.minimax(&child, engine_side, depth - 1, alpha, beta, true);
                if score < best {
                    best = score;
                    best_column = col;
                }
                beta = beta.min(best);
                if alpha >= beta {
                    break;
                }
            }
            (Some(best_column), best)
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, board: &Board, side: Player) -> usize {
        self.choose_move(board, side)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MinimaxAgent::new(self.depth))
    }
}
