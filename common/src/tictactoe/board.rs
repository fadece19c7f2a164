use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

/// Row-major 3x3 grid of marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub(crate) fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position) == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, Mark)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, marks)| {
            marks
                .iter()
                .enumerate()
                .map(move |(col, &mark)| (Position::new(row, col), mark))
        })
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }
}
