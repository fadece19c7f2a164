use super::board::BOARD_SIZE;
use super::types::Position;

pub const STATUS_TOKEN_SIZE: i32 = 44;
pub const PLAY_BUTTON_WIDTH: i32 = 81;
pub const PLAY_BUTTON_HEIGHT: i32 = 36;

/// Pixel rectangle with an inclusive hit test on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSettings {
    pub board_margin: i32,
    pub cell_size: i32,
    pub panel_height: i32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            board_margin: 5,
            cell_size: 130,
            panel_height: 150,
        }
    }
}

/// Static screen layout: the board square on top, the status panel below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    window_width: i32,
    window_height: i32,
    board: Rect,
    cells: [[Rect; BOARD_SIZE]; BOARD_SIZE],
    panel: Rect,
    turn_token: Rect,
    round_end_token: Rect,
    play_button: Rect,
    tie_illustration: Rect,
    score_line: Rect,
}

impl BoardLayout {
    pub fn new(settings: LayoutSettings) -> Self {
        let margin = settings.board_margin;
        let cell = settings.cell_size;
        let board_size = cell * BOARD_SIZE as i32;

        let window_width = board_size + margin * 2;
        let panel_y = board_size + margin * 2;
        let window_height = panel_y + settings.panel_height;

        let mut cells = [[Rect::new(0, 0, 0, 0); BOARD_SIZE]; BOARD_SIZE];
        for (row, rects) in cells.iter_mut().enumerate() {
            for (col, rect) in rects.iter_mut().enumerate() {
                *rect = Rect::new(
                    margin + col as i32 * cell,
                    margin + row as i32 * cell,
                    cell,
                    cell,
                );
            }
        }

        Self {
            window_width,
            window_height,
            board: Rect::new(margin, margin, board_size, board_size),
            cells,
            panel: Rect::new(0, panel_y, window_width, settings.panel_height),
            turn_token: Rect::new(
                window_width - 100,
                panel_y + 10,
                STATUS_TOKEN_SIZE,
                STATUS_TOKEN_SIZE,
            ),
            round_end_token: Rect::new(16, panel_y + 10, STATUS_TOKEN_SIZE, STATUS_TOKEN_SIZE),
            play_button: Rect::new(
                window_width - 104,
                panel_y + 83,
                PLAY_BUTTON_WIDTH,
                PLAY_BUTTON_HEIGHT,
            ),
            tie_illustration: Rect::new(
                margin + 50,
                margin + 50,
                board_size - 90,
                board_size - 90,
            ),
            score_line: Rect::new(
                16,
                panel_y + settings.panel_height - 34,
                window_width - 140,
                24,
            ),
        }
    }

    /// Board cell under the pointer, scanning row-major so a shared edge
    /// belongs to the cell it closes.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<Position> {
        if !self.board.contains(px, py) {
            return None;
        }

        for (row, rects) in self.cells.iter().enumerate() {
            for (col, rect) in rects.iter().enumerate() {
                if rect.contains(px, py) {
                    return Some(Position::new(row, col));
                }
            }
        }
        None
    }

    pub fn cell_rect(&self, position: Position) -> Rect {
        self.cells[position.row][position.col]
    }

    pub fn window_size(&self) -> (i32, i32) {
        (self.window_width, self.window_height)
    }

    pub fn board(&self) -> Rect {
        self.board
    }

    pub fn panel(&self) -> Rect {
        self.panel
    }

    pub fn turn_token(&self) -> Rect {
        self.turn_token
    }

    pub fn round_end_token(&self) -> Rect {
        self.round_end_token
    }

    pub fn play_button(&self) -> Rect {
        self.play_button
    }

    pub fn tie_illustration(&self) -> Rect {
        self.tie_illustration
    }

    pub fn score_line(&self) -> Rect {
        self.score_line
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(LayoutSettings::default())
    }
}
