use super::board::Board;
use super::layout::{BoardLayout, Rect};
use super::types::{Mark, Phase, Scoreboard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    BoardBackground,
    PanelBackground,
    Token(Mark),
    TurnBanner,
    RoundEndBanner,
    TieIllustration,
    PlayButton,
    Score(Scoreboard),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawInstruction {
    pub sprite: Sprite,
    pub rect: Rect,
}

impl DrawInstruction {
    fn new(sprite: Sprite, rect: Rect) -> Self {
        Self { sprite, rect }
    }
}

/// Back-to-front draw list for one frame.
pub fn build_instructions(
    layout: &BoardLayout,
    board: &Board,
    phase: Phase,
    scoreboard: Scoreboard,
) -> Vec<DrawInstruction> {
    let mut instructions = vec![
        DrawInstruction::new(Sprite::BoardBackground, layout.board()),
        DrawInstruction::new(Sprite::PanelBackground, layout.panel()),
    ];

    instructions.extend(
        board
            .cells()
            .filter(|&(_, mark)| mark != Mark::Empty)
            .map(|(position, mark)| {
                DrawInstruction::new(Sprite::Token(mark), layout.cell_rect(position))
            }),
    );

    match phase {
        Phase::AwaitingMove { mark } => {
            instructions.push(DrawInstruction::new(Sprite::TurnBanner, layout.panel()));
            instructions.push(DrawInstruction::new(Sprite::Token(mark), layout.turn_token()));
        }
        Phase::Won { mark } => {
            instructions.push(DrawInstruction::new(Sprite::RoundEndBanner, layout.panel()));
            instructions.push(DrawInstruction::new(
                Sprite::Token(mark),
                layout.round_end_token(),
            ));
        }
        Phase::Tie => {
            instructions.push(DrawInstruction::new(Sprite::RoundEndBanner, layout.panel()));
            instructions.push(DrawInstruction::new(
                Sprite::TieIllustration,
                layout.round_end_token(),
            ));
            instructions.push(DrawInstruction::new(
                Sprite::TieIllustration,
                layout.tie_illustration(),
            ));
        }
    }

    if phase.is_round_end() {
        instructions.push(DrawInstruction::new(Sprite::PlayButton, layout.play_button()));
    }

    instructions.push(DrawInstruction::new(Sprite::Score(scoreboard), layout.score_line()));

    instructions
}
