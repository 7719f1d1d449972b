use crate::game::{Board, Player};

/// Common interface for move-selecting agents.
pub trait Agent {
    /// Select a column for `side` to play on `board`.
    ///
    /// Implementations must not mutate the board; the caller applies the
    /// returned move. Called only while the game is still in progress.
    fn select_action(&mut self, board: &Board, side: Player) -> usize;

    /// The agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
