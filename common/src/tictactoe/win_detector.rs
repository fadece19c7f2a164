use super::board::Board;
use super::types::{Mark, Position, WinningLine};

const fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

pub const LINES: [WinningLine; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

/// Looks for a completed line of `mark` only; the opponent is never checked.
pub fn find_winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .find(|line| line.iter().all(|&position| board.get(position) == mark))
        .copied()
}

pub fn check_win(board: &Board, mark: Mark) -> bool {
    find_winning_line(board, mark).is_some()
}
