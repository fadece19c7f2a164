#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => " ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    XToMove,
    OToMove,
}

impl Turn {
    pub fn mark(&self) -> Mark {
        match self {
            Turn::XToMove => Mark::X,
            Turn::OToMove => Mark::O,
        }
    }

    pub fn next(&self) -> Turn {
        match self {
            Turn::XToMove => Turn::OToMove,
            Turn::OToMove => Turn::XToMove,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    XWon,
    OWon,
    Tie,
}

impl RoundOutcome {
    pub fn won_by(mark: Mark) -> Option<RoundOutcome> {
        match mark {
            Mark::X => Some(RoundOutcome::XWon),
            Mark::O => Some(RoundOutcome::OWon),
            Mark::Empty => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != RoundOutcome::InProgress
    }
}

/// What the status panel should show for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove { mark: Mark },
    Won { mark: Mark },
    Tie,
}

impl Phase {
    pub fn is_round_end(&self) -> bool {
        !matches!(self, Phase::AwaitingMove { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

pub type WinningLine = [Position; 3];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn rounds_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    pub(crate) fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::XWon => self.x_wins += 1,
            RoundOutcome::OWon => self.o_wins += 1,
            RoundOutcome::Tie => self.ties += 1,
            RoundOutcome::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_alternates() {
        assert_eq!(Turn::XToMove.next(), Turn::OToMove);
        assert_eq!(Turn::OToMove.next(), Turn::XToMove);
        assert_eq!(Turn::XToMove.mark(), Mark::X);
        assert_eq!(Turn::OToMove.mark(), Mark::O);
    }

    #[test]
    fn test_won_by_matches_mark() {
        assert_eq!(RoundOutcome::won_by(Mark::X), Some(RoundOutcome::XWon));
        assert_eq!(RoundOutcome::won_by(Mark::O), Some(RoundOutcome::OWon));
        assert_eq!(RoundOutcome::won_by(Mark::Empty), None);
    }

    #[test]
    fn test_scoreboard_ignores_in_progress() {
        let mut scoreboard = Scoreboard::default();
        scoreboard.record(RoundOutcome::InProgress);
        scoreboard.record(RoundOutcome::XWon);
        scoreboard.record(RoundOutcome::Tie);
        assert_eq!(scoreboard.x_wins, 1);
        assert_eq!(scoreboard.o_wins, 0);
        assert_eq!(scoreboard.ties, 1);
        assert_eq!(scoreboard.rounds_played(), 2);
    }
}
