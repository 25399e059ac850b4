use common::{CELL_COUNT, GameState, GameStatus, MoveIntent, winning_line};
use eframe::egui;

/// Pure projection of a `GameState` into what the UI shows: one display
/// value per cell plus the status line. Projecting the same state twice
/// yields the same model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardViewModel {
    pub cells: [&'static str; CELL_COUNT],
    pub status: String,
}

impl BoardViewModel {
    pub fn from_state(state: &GameState) -> Self {
        let mut cells = [""; CELL_COUNT];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = state.board()[index].label();
        }

        let status = match state.status() {
            GameStatus::Won(mark) => format!("Winner: {}", mark.label()),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", state.turn().label()),
        };

        Self { cells, status }
    }
}

/// Paints the grid and translates clicks into move intents. The view never
/// reaches back into the controller: `show` hands the intent to the caller
/// and the caller decides what to do with it.
pub struct BoardView {
    last_hover: Option<usize>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    const GRID_SIZE: usize = 3;
    const CELL_SIZE: f32 = 110.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    /// Renders the status line and the 3x3 board from `state`. Returns the
    /// intent for the clicked cell when that cell is a legal target.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<MoveIntent> {
        let model = BoardViewModel::from_state(state);

        ui.heading(&model.status);
        ui.separator();

        let board_size = Self::CELL_SIZE * Self::GRID_SIZE as f32;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=Self::GRID_SIZE {
            let x = rect.left() + i as f32 * Self::CELL_SIZE;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );

            let y = rect.top() + i as f32 * Self::CELL_SIZE;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for (index, display) in model.cells.iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, index);
            match *display {
                "X" => Self::draw_x(painter, cell_rect),
                "O" => Self::draw_o(painter, cell_rect),
                _ => {}
            }
        }

        if state.status() != GameStatus::InProgress {
            self.last_hover = None;

            if let Some(line) = winning_line(state.board()) {
                let start = Self::cell_rect(rect, line.cells[0]).center();
                let end = Self::cell_rect(rect, line.cells[2]).center();
                painter.line_segment(
                    [start, end],
                    egui::Stroke::new(
                        6.0,
                        egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200),
                    ),
                );
            }

            return None;
        }

        if let Some(hover_pos) = response.hover_pos() {
            match Self::index_at(rect, hover_pos) {
                Some(index) if state.is_legal_move(index) => {
                    painter.rect_filled(
                        Self::cell_rect(rect, index),
                        0.0,
                        egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                    );
                    self.last_hover = Some(index);
                }
                _ => self.last_hover = None,
            }
        } else {
            self.last_hover = None;
        }

        if response.clicked()
            && let Some(index) = self.last_hover
        {
            return Some(MoveIntent::new(index));
        }

        None
    }

    fn cell_rect(board_rect: egui::Rect, index: usize) -> egui::Rect {
        let col = index % Self::GRID_SIZE;
        let row = index / Self::GRID_SIZE;

        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * Self::CELL_SIZE,
                board_rect.top() + row as f32 * Self::CELL_SIZE,
            ),
            egui::vec2(Self::CELL_SIZE, Self::CELL_SIZE),
        )
    }

    fn index_at(board_rect: egui::Rect, pos: egui::Pos2) -> Option<usize> {
        let col = ((pos.x - board_rect.left()) / Self::CELL_SIZE) as usize;
        let row = ((pos.y - board_rect.top()) / Self::CELL_SIZE) as usize;

        if col < Self::GRID_SIZE && row < Self::GRID_SIZE {
            Some(row * Self::GRID_SIZE + col)
        } else {
            None
        }
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let center = rect.center();
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(center, radius, stroke);
    }
}
