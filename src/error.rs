//! Error type shared by the engine and the session registry.

use thiserror::Error;

use crate::cards::Card;
use crate::core::Seat;
use crate::session::SessionId;

/// Everything that can go wrong while driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("card {0} is not in hand")]
    CardNotInHand(Card),

    #[error("not your turn: {expected} to act, got {actual}")]
    NotYourTurn { expected: Seat, actual: Seat },

    #[error("game has already ended")]
    GameAlreadyEnded,

    #[error("invalid card: {0}")]
    InvalidCard(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    #[error("session limit of {0} reached")]
    TooManySessions(usize),

    #[error("checkpoint: {0}")]
    Checkpoint(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
