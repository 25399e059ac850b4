mod board_view;

pub use board_view::{BoardView, BoardViewModel};

use common::{GameState, GameStatus, MoveIntent};
use eframe::egui;

/// Owns the single current `GameState`. The view emits move intents; this
/// controller applies them, replacing the state with the reducer's result.
pub struct GameApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

impl GameApp {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::new(),
        }
    }

    fn handle_intent(&mut self, intent: MoveIntent) {
        let next = self.state.apply_move(intent.index);
        if next == self.state {
            // Illegal attempt: nothing changes and nothing is reported.
            return;
        }

        common::log!("{} placed at {}", self.state.turn().label(), intent.index);
        self.state = next;

        match self.state.status() {
            GameStatus::Won(mark) => common::log!("Game over: {} won", mark.label()),
            GameStatus::Draw => common::log!("Game over: draw"),
            GameStatus::InProgress => {}
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let intent = self.board_view.show(ui, &self.state);
                if let Some(intent) = intent {
                    self.handle_intent(intent);
                }

                if self.state.status() != GameStatus::InProgress {
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        common::log!("Starting a new game");
                        self.state = GameState::new();
                        self.board_view = BoardView::new();
                    }
                }
            });
        });
    }
}
