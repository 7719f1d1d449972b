use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from the legal columns. Useful
/// as a baseline opponent; never used inside the search itself.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board, _side: Player) -> usize {
        let legal = board.legal_moves();
        assert!(!legal.is_empty(), "no legal moves available");
        let idx = self.rng.random_range(0..legal.len());
        legal[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(RandomAgent::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_selects_legal_column() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        for _ in 0..board.rows() {
            board.drop_piece(2, Cell::Red).unwrap();
            board.drop_piece(5, Cell::Yellow).unwrap();
        }
        let legal = board.legal_moves();
        for _ in 0..100 {
            let col = agent.select_action(&board, Player::Red);
            assert!(legal.contains(&col), "column {col} is not legal");
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
