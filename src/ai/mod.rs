//! Move-selecting agents: the minimax search engine with alpha-beta pruning,
//! the window heuristic it evaluates horizon leaves with, and baseline agents
//! for comparison games.

mod agent;
mod greedy;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{MinimaxAgent, LOSS_SCORE, WIN_SCORE};
pub use random::RandomAgent;
