use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// The 3x3 board as 9 cells in row-major order: rows {0,1,2}, {3,4,5},
/// {6,7,8}. A `Board` is a plain value; mutation happens only by building
/// a new one via `with_mark`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    #[cfg(test)]
    pub fn from_marks(marks: [Mark; CELL_COUNT]) -> Self {
        Self { cells: marks }
    }

    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.mark_at(index) == Some(Mark::Empty)
    }

    /// Returns a copy with `index` set to `mark`. `index` must be in range;
    /// callers validate through `GameState::apply_move`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[index] = mark;
        Self { cells }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    #[cfg(test)]
    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    #[cfg(test)]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl std::ops::Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Mark {
        &self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), CELL_COUNT);
        for index in 0..CELL_COUNT {
            assert_eq!(board.mark_at(index), Some(Mark::Empty));
        }
    }

    #[test]
    fn test_with_mark_does_not_touch_the_original() {
        let board = Board::new();
        let marked = board.with_mark(4, Mark::X);

        assert_eq!(board.mark_at(4), Some(Mark::Empty));
        assert_eq!(marked.mark_at(4), Some(Mark::X));
    }

    #[test]
    fn test_mark_at_out_of_range_is_none() {
        let board = Board::new();
        assert_eq!(board.mark_at(CELL_COUNT), None);
        assert!(!board.is_empty_at(CELL_COUNT));
    }

    #[test]
    fn test_available_moves_skips_occupied_cells() {
        let board = Board::new().with_mark(0, Mark::X).with_mark(8, Mark::O);
        let moves = board.available_moves();

        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&0));
        assert!(!moves.contains(&8));
    }

    #[test]
    fn test_is_full_and_count() {
        let board = Board::from_marks([
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ]);

        assert!(board.is_full());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
        assert_eq!(board.count(Mark::Empty), 0);
    }
}
