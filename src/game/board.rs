use crate::config::BoardConfig;
use crate::error::MoveError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A gravity-constrained Connect Four board.
///
/// Row 0 is the bottom row: the occupied cells of every column form a
/// contiguous run starting at row 0, so a column is open exactly when its
/// topmost row is empty. The board is a plain value with no identity beyond
/// its cells; search clones it for every hypothetical branch and never
/// touches the caller's copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the standard 6x7 grid and win length 4.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_WIN_LENGTH)
    }

    /// Create an empty board with custom dimensions and win length.
    ///
    /// Dimensions must be non-zero and the winning line must fit on the
    /// board. User-supplied values should go through
    /// [`crate::config::EngineConfig::validate`] first; violating the bounds
    /// here is a programming error.
    pub fn with_size(rows: usize, cols: usize, win_length: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        assert!(
            win_length >= 2 && (win_length <= rows || win_length <= cols),
            "win length must fit on the board"
        );
        Board {
            rows,
            cols,
            win_length,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Create an empty board from a validated [`BoardConfig`].
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::with_size(config.rows, config.cols, config.win_length)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Get the cell at a position. Row 0 is the bottom row.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// True iff a piece can still be dropped into `col`.
    pub fn is_open(&self, col: usize) -> bool {
        col < self.cols && self.get(self.rows - 1, col) == Cell::Empty
    }

    /// The row a piece dropped into `col` would land in: the lowest empty
    /// row of the column.
    pub fn drop_height(&self, col: usize) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn(col));
        }
        for row in 0..self.rows {
            if self.get(row, col) == Cell::Empty {
                return Ok(row);
            }
        }
        Err(MoveError::ColumnFull(col))
    }

    /// Set the cell at a position.
    ///
    /// The caller supplies a row already validated by
    /// [`Board::drop_height`]; placing anywhere else breaks the gravity
    /// invariant.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }

    /// Drop a piece into a column, returning the row where it landed.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        let row = self.drop_height(col)?;
        self.place(row, col, cell);
        Ok(row)
    }

    /// Open columns in ascending order.
    ///
    /// The ordering is part of the engine's contract: when search scores
    /// tie, the lowest-numbered column wins.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_open(col)).collect()
    }

    /// True iff `cell` has `win_length` consecutive pieces anywhere on the
    /// board, along any of the four directions.
    ///
    /// This is the win predicate for both sides, applied to the live board
    /// by the UI and to every hypothetical board by the search.
    pub fn has_win(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }
        let n = self.win_length;
        let h_starts = (self.cols + 1).saturating_sub(n);
        let v_starts = (self.rows + 1).saturating_sub(n);

        // Horizontal
        for row in 0..self.rows {
            for col in 0..h_starts {
                if (0..n).all(|i| self.get(row, col + i) == cell) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..self.cols {
            for row in 0..v_starts {
                if (0..n).all(|i| self.get(row + i, col) == cell) {
                    return true;
                }
            }
        }

        // Diagonal, rising left to right
        for row in 0..v_starts {
            for col in 0..h_starts {
                if (0..n).all(|i| self.get(row + i, col + i) == cell) {
                    return true;
                }
            }
        }

        // Diagonal, falling left to right
        for row in (n - 1)..self.rows {
            for col in 0..h_starts {
                if (0..n).all(|i| self.get(row - i, col + i) == cell) {
                    return true;
                }
            }
        }

        false
    }

    /// True iff no column is open.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_open(col))
    }

    /// True iff the game is over: either side has a winning line, or the
    /// board is full.
    pub fn is_terminal(&self) -> bool {
        self.has_win(Cell::Red) || self.has_win(Cell::Yellow) || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(!board.is_full());
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_legal_moves_on_empty_board() {
        let board = Board::new();
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_piece_lands_at_bottom() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Cell::Red);

        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Cell::Yellow);
    }

    #[test]
    fn test_drop_height_matches_place() {
        let mut board = Board::new();
        for drops in 0..board.rows() {
            let row = board.drop_height(5).unwrap();
            assert_eq!(row, drops);
            board.place(row, 5, Cell::Red);
        }
        assert_eq!(board.drop_height(5), Err(MoveError::ColumnFull(5)));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..board.rows() {
            board.drop_piece(0, Cell::Red).unwrap();
        }
        assert!(!board.is_open(0));
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(MoveError::ColumnFull(0)));
        assert!(!board.legal_moves().contains(&0));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.drop_height(99), Err(MoveError::InvalidColumn(99)));
        assert!(!board.is_open(7));
    }

    #[test]
    fn test_gravity_invariant_holds_after_drops() {
        let mut board = Board::new();
        let sequence = [3, 3, 2, 6, 6, 6, 0, 3, 1, 5, 3, 3, 3];
        for (i, &col) in sequence.iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
            board.drop_piece(col, cell).unwrap();
        }
        // No gaps: in every column, an occupied cell never sits above an
        // empty one.
        for col in 0..board.cols() {
            let mut seen_empty = false;
            for row in 0..board.rows() {
                if board.get(row, col) == Cell::Empty {
                    seen_empty = true;
                } else {
                    assert!(!seen_empty, "floating piece at ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..board.cols() {
            for _ in 0..board.rows() {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 2..6 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(board.has_win(Cell::Red));
        assert!(!board.has_win(Cell::Yellow));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(board.has_win(Cell::Yellow));
        assert!(!board.has_win(Cell::Red));
    }

    #[test]
    fn test_rising_diagonal_win() {
        let mut board = Board::new();
        // Red at (0,0), (1,1), (2,2), (3,3) with yellow filler beneath.
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.has_win(Cell::Red));
        assert!(!board.has_win(Cell::Yellow));
    }

    #[test]
    fn test_falling_diagonal_win() {
        let mut board = Board::new();
        // Red at (0,6), (1,5), (2,4), (3,3).
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.has_win(Cell::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.has_win(Cell::Red));
        assert!(!board.is_terminal());

        // Blocked three is still not a win.
        board.drop_piece(3, Cell::Yellow).unwrap();
        assert!(!board.has_win(Cell::Red));
    }

    #[test]
    fn test_empty_never_wins() {
        let board = Board::new();
        assert!(!board.has_win(Cell::Empty));
    }

    #[test]
    fn test_custom_size_board() {
        let mut board = Board::with_size(4, 5, 3);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 5);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4]);

        // Three in a row wins on a win-length-3 board.
        for col in 1..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(board.has_win(Cell::Red));
    }

    #[test]
    #[should_panic(expected = "win length must fit")]
    fn test_rejects_unwinnable_dimensions() {
        Board::with_size(2, 3, 4);
    }
}
