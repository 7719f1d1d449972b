use crate::game::{Board, Cell, Player};

/// Heuristic scoring of a non-terminal position from one side's perspective.
///
/// Used only where the search horizon is reached before the game ends;
/// terminal positions are scored by the search itself.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Per-piece bonus for occupying the center column, which joins more
/// potential lines than any other.
const CENTER_BONUS: i64 = 3;

/// A complete line in one window. Robustness only: search detects terminal
/// boards before the evaluator ever sees them.
const WINDOW_WIN: i64 = 100;

/// One move away from completing a line.
const WINDOW_NEAR_WIN: i64 = 5;

/// Two own pieces building toward a line.
const WINDOW_BUILDING: i64 = 2;

/// The opponent one move away from completing a line. Weighted below
/// [`WINDOW_NEAR_WIN`], giving a mild defensive bias while prioritizing
/// the engine's own offense.
const WINDOW_THREAT: i64 = -4;

/// The reference window heuristic: every `win_length`-cell line segment on
/// the board is scored independently and summed, plus a bonus for center
/// column occupancy.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_counts(own: usize, opp: usize, empty: usize, n: usize) -> i64 {
        if own == n {
            WINDOW_WIN
        } else if own + 1 == n && empty == 1 {
            WINDOW_NEAR_WIN
        } else if own + 2 == n && empty == 2 {
            WINDOW_BUILDING
        } else if opp + 1 == n && empty == 1 {
            WINDOW_THREAT
        } else {
            0
        }
    }

    /// Score the window starting at (`row`, `col`) and stepping by
    /// (`dr`, `dc`). The caller guarantees the window stays on the board.
    fn window_score(
        board: &Board,
        own: Cell,
        opp: Cell,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> i64 {
        let n = board.win_length();
        let mut own_count = 0;
        let mut opp_count = 0;
        let mut empty = 0;
        for i in 0..n {
            let r = (row as isize + dr * i as isize) as usize;
            let c = (col as isize + dc * i as isize) as usize;
            match board.get(r, c) {
                cell if cell == own => own_count += 1,
                cell if cell == opp => opp_count += 1,
                _ => empty += 1,
            }
        }
        Self::score_counts(own_count, opp_count, empty, n)
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own = player.to_cell();
        let opp = player.other().to_cell();
        let rows = board.rows();
        let cols = board.cols();
        let n = board.win_length();
        let mut score = 0;

        // Center column control.
        let center = cols / 2;
        for row in 0..rows {
            if board.get(row, center) == own {
                score += CENTER_BONUS;
            }
        }

        let h_starts = (cols + 1).saturating_sub(n);
        let v_starts = (rows + 1).saturating_sub(n);

        // Horizontal
        for row in 0..rows {
            for col in 0..h_starts {
                score += Self::window_score(board, own, opp, row, col, 0, 1);
            }
        }

        // Vertical
        for col in 0..cols {
            for row in 0..v_starts {
                score += Self::window_score(board, own, opp, row, col, 1, 0);
            }
        }

        // Diagonal, rising left to right
        for row in 0..v_starts {
            for col in 0..h_starts {
                score += Self::window_score(board, own, opp, row, col, 1, 1);
            }
        }

        // Diagonal, falling left to right
        for row in (n - 1)..rows {
            for col in 0..h_starts {
                score += Self::window_score(board, own, opp, row, col, -1, 1);
            }
        }

        score
    }
}
