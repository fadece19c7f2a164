use super::board::{BOARD_SIZE, Board};
use super::layout::{BoardLayout, Rect};
use super::render::{DrawInstruction, build_instructions};
use super::types::{Mark, Phase, Position, RoundOutcome, Scoreboard, Turn, WinningLine};
use super::win_detector::find_winning_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Placed {
        position: Position,
        mark: Mark,
        outcome: RoundOutcome,
    },
    RoundStarted,
    Ignored,
}

/// Owns one two-player session: the board, whose turn it is and how the
/// current round stands. Performs no I/O.
#[derive(Debug, Clone)]
pub struct GameController {
    layout: BoardLayout,
    board: Board,
    turn: Turn,
    outcome: RoundOutcome,
    winning_line: Option<WinningLine>,
    scoreboard: Scoreboard,
}

impl GameController {
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            board: Board::new(),
            turn: Turn::XToMove,
            outcome: RoundOutcome::InProgress,
            winning_line: None,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn handle_click(&mut self, x: i32, y: i32) -> ClickOutcome {
        if self.outcome.is_over() {
            if self.layout.play_button().contains(x, y) {
                self.start_new_round();
                return ClickOutcome::RoundStarted;
            }
            return ClickOutcome::Ignored;
        }

        let Some(position) = self.layout.cell_at(x, y) else {
            return ClickOutcome::Ignored;
        };

        if !self.board.is_empty_at(position) {
            return ClickOutcome::Ignored;
        }

        let mark = self.turn.mark();
        let outcome = self.place_mark(position);
        ClickOutcome::Placed {
            position,
            mark,
            outcome,
        }
    }

    /// Places the current turn's mark. Ignored once the round is over, off
    /// the board, or when the cell is taken; either way the resulting
    /// outcome is returned.
    pub fn place_mark(&mut self, position: Position) -> RoundOutcome {
        if self.outcome.is_over()
            || position.row >= BOARD_SIZE
            || position.col >= BOARD_SIZE
            || !self.board.is_empty_at(position)
        {
            return self.outcome;
        }

        let mark = self.turn.mark();
        self.board.set(position, mark);

        if let Some(line) = find_winning_line(&self.board, mark) {
            self.winning_line = Some(line);
            self.outcome = RoundOutcome::won_by(mark).unwrap_or(RoundOutcome::InProgress);
        } else if self.board.is_full() {
            self.outcome = RoundOutcome::Tie;
        } else {
            self.turn = self.turn.next();
        }

        self.scoreboard.record(self.outcome);
        self.outcome
    }

    pub fn start_new_round(&mut self) {
        if !self.outcome.is_over() {
            return;
        }

        self.board.clear();
        self.turn = Turn::XToMove;
        self.outcome = RoundOutcome::InProgress;
        self.winning_line = None;
    }

    pub fn current_phase(&self) -> Phase {
        match self.outcome {
            RoundOutcome::InProgress => Phase::AwaitingMove {
                mark: self.turn.mark(),
            },
            RoundOutcome::XWon => Phase::Won { mark: Mark::X },
            RoundOutcome::OWon => Phase::Won { mark: Mark::O },
            RoundOutcome::Tie => Phase::Tie,
        }
    }

    pub fn board_snapshot(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn play_button(&self) -> Option<Rect> {
        if self.current_phase().is_round_end() {
            Some(self.layout.play_button())
        } else {
            None
        }
    }

    pub fn render_instructions(&self) -> Vec<DrawInstruction> {
        build_instructions(
            &self.layout,
            &self.board,
            self.current_phase(),
            self.scoreboard,
        )
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(BoardLayout::default())
    }
}
