pub mod config;
pub mod game;
pub mod logger;

pub use game::{
    Board, CELL_COUNT, GameState, GameStatus, Mark, MoveIntent, Turn, WIN_LINES, WinningLine,
    check_win, winning_line,
};
