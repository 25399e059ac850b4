use super::board::Board;
use super::types::{GameStatus, Turn};
use super::win_detector::check_win;

/// The whole game: the board plus whose turn it is. A `GameState` is a
/// copyable value; `apply_move` never mutates its input, it returns the
/// successor state. The hosting UI owns the single current instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Turn,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::X,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        if let Some(mark) = check_win(&self.board) {
            return GameStatus::Won(mark);
        }
        if self.board.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    /// A move is legal while the game is in progress and the target cell
    /// exists and is empty. Moves onto a concluded board are illegal.
    pub fn is_legal_move(&self, index: usize) -> bool {
        self.board.is_empty_at(index) && self.status() == GameStatus::InProgress
    }

    /// Pure transition function. Legal moves place the current turn's mark
    /// and flip the turn; illegal moves are silent no-ops that return the
    /// state unchanged.
    pub fn apply_move(&self, index: usize) -> GameState {
        if !self.is_legal_move(index) {
            return *self;
        }

        GameState {
            board: self.board.with_mark(index, self.turn.mark()),
            turn: self.turn.other(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Mark;

    fn play(moves: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &index in moves {
            state = state.apply_move(index);
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Turn::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.board().available_moves().len(), 9);
    }

    #[test]
    fn test_moves_alternate_marks() {
        let state = play(&[0, 1]);
        assert_eq!(state.board().mark_at(0), Some(Mark::X));
        assert_eq!(state.board().mark_at(1), Some(Mark::O));
        assert_eq!(state.turn(), Turn::X);
    }

    #[test]
    fn test_occupied_cell_is_a_no_op() {
        let state = play(&[0]);
        let after = state.apply_move(0);

        assert_eq!(after, state);
        assert_eq!(after.turn(), Turn::O);
    }

    #[test]
    fn test_out_of_range_index_is_a_no_op() {
        let state = GameState::new();
        assert_eq!(state.apply_move(9), state);
        assert_eq!(state.apply_move(usize::MAX), state);
    }

    #[test]
    fn test_mark_counts_never_diverge_by_more_than_one() {
        let mut state = GameState::new();
        for index in [4, 0, 1, 7, 6, 2, 5, 3, 8] {
            state = state.apply_move(index);
            let x_count = state.board().count(Mark::X);
            let o_count = state.board().count(Mark::O);
            assert!(x_count == o_count || x_count == o_count + 1);
        }
    }

    #[test]
    fn test_diagonal_win_is_detected() {
        let state = play(&[0, 1, 4, 2, 8]);
        assert_eq!(state.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_no_moves_after_a_win() {
        let won = play(&[0, 3, 1, 4, 2]);
        assert_eq!(won.status(), GameStatus::Won(Mark::X));

        for index in won.board().available_moves() {
            assert_eq!(won.apply_move(index), won);
        }
    }

    #[test]
    fn test_full_board_without_a_line_is_a_draw() {
        // X,O,X / X,O,O / O,X,X
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(state.board().is_full());
        assert_eq!(state.status(), GameStatus::Draw);
    }
}
