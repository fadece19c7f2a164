mod board;
mod controller;
mod layout;
mod render;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use controller::{ClickOutcome, GameController};
pub use layout::{BoardLayout, LayoutSettings, Rect};
pub use render::{DrawInstruction, Sprite, build_instructions};
pub use types::{Mark, Phase, Position, RoundOutcome, Scoreboard, Turn, WinningLine};
pub use win_detector::{LINES, check_win, find_winning_line};
