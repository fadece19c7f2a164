use common::log;
use common::tictactoe::{ClickOutcome, GameController, RoundOutcome};
use eframe::egui;

use super::board_painter::BoardPainter;
use crate::colors;

pub struct TicTacToeApp {
    controller: GameController,
}

impl TicTacToeApp {
    pub fn new(controller: GameController) -> Self {
        Self { controller }
    }

    fn log_click(&self, outcome: ClickOutcome) {
        match outcome {
            ClickOutcome::Placed {
                position,
                mark,
                outcome,
            } => {
                log!("{} placed at ({}, {})", mark.symbol(), position.row, position.col);
                match outcome {
                    RoundOutcome::XWon | RoundOutcome::OWon => {
                        log!("Round over: {} wins", mark.symbol());
                    }
                    RoundOutcome::Tie => log!("Round over: tie"),
                    RoundOutcome::InProgress => {}
                }
            }
            ClickOutcome::RoundStarted => {
                let scoreboard = self.controller.scoreboard();
                log!(
                    "New round (X {}, O {}, ties {})",
                    scoreboard.x_wins,
                    scoreboard.o_wins,
                    scoreboard.ties
                );
            }
            ClickOutcome::Ignored => {}
        }
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        let (width, height) = self.controller.layout().window_size();
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(width as f32, height as f32),
            egui::Sense::click(),
        );

        if response.clicked()
            && let Some(pointer) = response.interact_pointer_pos()
        {
            let local = pointer - rect.min;
            let outcome = self
                .controller
                .handle_click(local.x.round() as i32, local.y.round() as i32);
            self.log_click(outcome);
        }

        let painter = ui.painter_at(rect);
        let board_painter = BoardPainter::new(&painter, rect.min);
        board_painter.paint_all(&self.controller.render_instructions());

        let layout = self.controller.layout();
        if let Some(line) = self.controller.winning_line() {
            board_painter.paint_winning_line(layout, line);
        }

        if !self.controller.outcome().is_over()
            && let Some(hover) = response.hover_pos()
        {
            let local = hover - rect.min;
            if let Some(position) = layout.cell_at(local.x.round() as i32, local.y.round() as i32)
                && self.controller.board_snapshot().is_empty_at(position)
            {
                board_painter.paint_hover(layout.cell_rect(position));
            }
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors::WINDOW_BACKGROUND))
            .show(ctx, |ui| self.render(ui));
    }
}

impl Drop for TicTacToeApp {
    fn drop(&mut self) {
        log!(
            "Shutting down after {} rounds",
            self.controller.scoreboard().rounds_played()
        );
    }
}
