#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn label(&self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// Which mark the next accepted move places. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    X,
    O,
}

impl Turn {
    pub fn mark(&self) -> Mark {
        match self {
            Turn::X => Mark::X,
            Turn::O => Mark::O,
        }
    }

    pub fn other(&self) -> Turn {
        match self {
            Turn::X => Turn::O,
            Turn::O => Turn::X,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Turn::X => "X",
            Turn::O => "O",
        }
    }
}

/// Derived from the board on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// A user-originated request to place the current mark at `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveIntent {
    pub index: usize,
}

impl MoveIntent {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}
