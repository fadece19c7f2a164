use common::tictactoe::{BoardLayout, DrawInstruction, Mark, Rect, Scoreboard, Sprite, WinningLine};
use eframe::egui;

use crate::colors;

const LINE_WIDTH: f32 = 2.0;

pub fn to_screen_rect(origin: egui::Pos2, rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(rect.x as f32, rect.y as f32),
        egui::vec2(rect.w as f32, rect.h as f32),
    )
}

pub fn score_text(scoreboard: &Scoreboard) -> String {
    format!(
        "X {}  ·  O {}  ·  Ties {}",
        scoreboard.x_wins, scoreboard.o_wins, scoreboard.ties
    )
}

/// Paints core draw instructions with egui primitives, offset by the canvas
/// origin.
pub struct BoardPainter<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> BoardPainter<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    pub fn paint_all(&self, instructions: &[DrawInstruction]) {
        for instruction in instructions {
            self.paint(instruction);
        }
    }

    pub fn paint(&self, instruction: &DrawInstruction) {
        let rect = to_screen_rect(self.origin, instruction.rect);
        match instruction.sprite {
            Sprite::BoardBackground => self.draw_board_background(rect),
            Sprite::PanelBackground => {
                self.painter.rect_filled(rect, 0.0, colors::PANEL_BACKGROUND);
            }
            Sprite::Token(Mark::X) => self.draw_x(rect),
            Sprite::Token(Mark::O) => self.draw_o(rect),
            Sprite::Token(Mark::Empty) => {}
            Sprite::TurnBanner => self.draw_banner(rect, "Your turn:"),
            Sprite::RoundEndBanner => self.draw_round_end_banner(rect),
            Sprite::TieIllustration => self.draw_cat(rect),
            Sprite::PlayButton => self.draw_play_button(rect),
            Sprite::Score(scoreboard) => {
                self.painter.text(
                    rect.left_center(),
                    egui::Align2::LEFT_CENTER,
                    score_text(&scoreboard),
                    egui::FontId::proportional(14.0),
                    colors::PANEL_TEXT,
                );
            }
        }
    }

    pub fn paint_hover(&self, cell: Rect) {
        self.painter
            .rect_filled(to_screen_rect(self.origin, cell), 0.0, colors::HOVER);
    }

    pub fn paint_winning_line(&self, layout: &BoardLayout, line: WinningLine) {
        let start = to_screen_rect(self.origin, layout.cell_rect(line[0])).center();
        let end = to_screen_rect(self.origin, layout.cell_rect(line[2])).center();
        self.painter
            .line_segment([start, end], egui::Stroke::new(6.0, colors::WINNING_LINE));
    }

    fn draw_board_background(&self, rect: egui::Rect) {
        self.painter.rect_filled(rect, 0.0, colors::BOARD_BACKGROUND);

        let stroke = egui::Stroke::new(LINE_WIDTH, colors::GRID_LINE);
        let third_w = rect.width() / 3.0;
        let third_h = rect.height() / 3.0;
        for i in 1..3 {
            let x = rect.left() + i as f32 * third_w;
            self.painter
                .line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
            let y = rect.top() + i as f32 * third_h;
            self.painter
                .line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        }
    }

    fn draw_banner(&self, rect: egui::Rect, text: &str) {
        self.painter.text(
            egui::pos2(rect.left() + 16.0, rect.top() + 32.0),
            egui::Align2::LEFT_CENTER,
            text,
            egui::FontId::proportional(28.0),
            colors::PANEL_TEXT,
        );
    }

    fn draw_round_end_banner(&self, rect: egui::Rect) {
        self.painter.text(
            egui::pos2(rect.left() + 72.0, rect.top() + 32.0),
            egui::Align2::LEFT_CENTER,
            "Round over!",
            egui::FontId::proportional(28.0),
            colors::PANEL_TEXT,
        );
    }

    fn draw_x(&self, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new((rect.width() * 0.04).max(3.0), colors::MARK_X);

        self.painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        self.painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new((rect.width() * 0.04).max(3.0), colors::MARK_O);

        self.painter.circle_stroke(rect.center(), radius, stroke);
    }

    // A cat's game gets a cat.
    fn draw_cat(&self, rect: egui::Rect) {
        let size = rect.width().min(rect.height());
        let center = rect.center() + egui::vec2(0.0, size * 0.08);
        let head = size * 0.36;
        let features = egui::Stroke::new((size * 0.02).max(1.0), colors::CAT_FEATURES);

        for side in [-1.0_f32, 1.0] {
            let ear = vec![
                center + egui::vec2(side * head * 0.85, -head * 0.35),
                center + egui::vec2(side * head * 0.75, -head * 1.35),
                center + egui::vec2(side * head * 0.2, -head * 0.85),
            ];
            self.painter
                .add(egui::Shape::convex_polygon(ear, colors::CAT_FUR, egui::Stroke::NONE));
        }
        self.painter.circle_filled(center, head, colors::CAT_FUR);

        for side in [-1.0_f32, 1.0] {
            let eye = center + egui::vec2(side * head * 0.4, -head * 0.15);
            self.painter
                .circle_filled(eye, head * 0.1, colors::CAT_FEATURES);

            for tilt in [-0.15_f32, 0.15] {
                self.painter.line_segment(
                    [
                        center + egui::vec2(side * head * 0.3, head * 0.3),
                        center + egui::vec2(side * head * 1.1, head * (0.3 + tilt)),
                    ],
                    features,
                );
            }
        }
        self.painter
            .circle_filled(center + egui::vec2(0.0, head * 0.2), head * 0.07, colors::CAT_FEATURES);
    }

    fn draw_play_button(&self, rect: egui::Rect) {
        self.painter.rect_filled(rect, 6.0, colors::PLAY_BUTTON);
        self.painter.rect_stroke(
            rect,
            6.0,
            egui::Stroke::new(1.0, colors::PANEL_TEXT),
            egui::StrokeKind::Inside,
        );
        self.painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Play",
            egui::FontId::proportional(18.0),
            colors::PANEL_TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_rect_offsets_by_origin() {
        let rect = to_screen_rect(egui::pos2(10.0, 20.0), Rect::new(5, 5, 130, 130));
        assert_eq!(rect.min, egui::pos2(15.0, 25.0));
        assert_eq!(rect.size(), egui::vec2(130.0, 130.0));
    }

    #[test]
    fn test_score_text() {
        let scoreboard = Scoreboard {
            x_wins: 2,
            o_wins: 1,
            ties: 3,
        };
        assert_eq!(score_text(&scoreboard), "X 2  ·  O 1  ·  Ties 3");
    }
}
