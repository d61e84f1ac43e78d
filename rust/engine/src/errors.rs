use thiserror::Error;

use crate::player::PlayerId;
use crate::rules::Bid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid count: {count} (must be between 1 and {total})")]
    InvalidCount { count: u32, total: u32 },
    #[error("Invalid face: {face} (must be between 1 and 6)")]
    InvalidFace { face: u8 },
    #[error("Bid {proposed} does not beat the current bid {current}")]
    NotAnEscalation { proposed: Bid, current: Bid },
    #[error("Illegal challenge: {0}")]
    IllegalChallenge(String),
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("Player {0} has no dice left")]
    PlayerEliminated(PlayerId),
    #[error("Game is already over")]
    GameOver,
    #[error("Engine misuse: {0}")]
    EngineMisuse(String),
}

impl GameError {
    /// Rule violations leave every piece of state untouched, so the same
    /// player may simply try again. Anything else is an orchestration bug.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidCount { .. }
                | GameError::InvalidFace { .. }
                | GameError::NotAnEscalation { .. }
                | GameError::IllegalChallenge(_)
                | GameError::NotPlayersTurn { .. }
        )
    }
}
