mod board;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use game_state::GameState;
pub use types::{GameStatus, Mark, MoveIntent, Turn};
pub use win_detector::{WIN_LINES, WinningLine, check_win, winning_line};
