use crate::game::{Board, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// One-ply baseline: tries every open column and keeps the placement the
/// heuristic scores highest, with no lookahead. Ties resolve to the lowest
/// column, like the full search.
pub struct GreedyAgent {
    heuristic: Box<dyn Heuristic>,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        GreedyAgent { heuristic }
    }

    fn best_drop(&self, board: &Board, side: Player) -> usize {
        let legal = board.legal_moves();
        assert!(!legal.is_empty(), "no legal moves available");

        let mut best_column = legal[0];
        let mut best_score = i64::MIN;
        for &col in &legal {
            let row = board.drop_height(col).expect("legal column is open");
            let mut child = board.clone();
            child.place(row, col, side.to_cell());
            let score = self.heuristic.evaluate(&child, side);
            if score > best_score {
                best_score = score;
                best_column = col;
            }
        }
        best_column
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, board: &Board, side: Player) -> usize {
        self.best_drop(board, side)
    }

    fn name(&self) -> &str {
        "Greedy"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(GreedyAgent::new())
    }
}
