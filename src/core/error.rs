//! Error types.
//!
//! Play irregularities (bad index, covered card, full queue) are reward
//! signals and never surface here. Errors are reserved for an inconsistent
//! configuration and for driving an episode past its end.

use thiserror::Error;

use super::state::GameStatus;

/// Configuration rejected at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The typed multiset does not fill the stacks and board exactly.
    #[error(
        "deck partition mismatch: {copies_per_type} copies x {card_types} types = {deck} cards, \
         but 2 stacks x {stack_size} + board {board_size} = {slots} slots"
    )]
    DeckPartition {
        card_types: usize,
        copies_per_type: usize,
        stack_size: usize,
        board_size: usize,
        deck: usize,
        slots: usize,
    },

    #[error("card_types must be at least 1")]
    NoCardTypes,

    #[error("card_types {card_types} exceeds the 255 type labels a card can carry")]
    TooManyTypes { card_types: usize },

    #[error("copies_per_type must be at least 1")]
    NoCopies,

    /// A queue shorter than three can never hold a match.
    #[error("queue_capacity {capacity} is too small to hold a match of three")]
    QueueTooSmall { capacity: usize },

    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Environment lifecycle errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("episode already finished ({status:?}); call reset() first")]
    EpisodeFinished { status: GameStatus },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
