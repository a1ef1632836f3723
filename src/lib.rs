//! # sheep-env
//!
//! A single-player tile-matching puzzle exposed as a reinforcement-learning
//! environment.
//!
//! Cards of `T` types (15 copies each) are dealt onto two flat stacks and a
//! layered board where cards partially cover cards in the layer below. The
//! agent clicks uncovered cards into a selection queue; three cards of the
//! same type in the queue are eliminated. Eliminating every card wins, and
//! filling the queue loses.
//!
//! ## Design Principles
//!
//! 1. **One owner**: every card lives in a single `Deck` arena and covering
//!    links are indices into it, so the covering graph has no cycles of
//!    ownership.
//!
//! 2. **Explicit state**: `GameState` is a plain value passed to free rule
//!    functions (`board::update_coverage`, `rules::select`).
//!
//! 3. **Replayable**: all randomness flows through a seeded `GameRng` whose
//!    position can be saved and restored.
//!
//! ## Modules
//!
//! - `core`: cards, deck arena, session state, RNG, configuration, errors
//! - `board`: deck generation and the covering state machine
//! - `rules`: selection and three-of-a-kind resolution
//! - `nn`: fixed-shape observation encoding
//! - `env`: the `SheepEnv` step/reset controller
//! - `protocol`: JSON boundary for an external click-prediction service
//! - `python`: PyO3 bindings (feature `python`)

pub mod board;
pub mod core;
pub mod env;
pub mod nn;
pub mod protocol;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Area, Card, CardIdx, CardState, ConfigError, Deck, EnvConfig, EnvError, GameRng, GameRngState,
    GameState, GameStatus, RewardTable,
};

pub use crate::board::{update_coverage, CardGraphGenerator};

pub use crate::rules::{select, StepKind};

pub use crate::nn::{EncodedState, EncoderConfig, Observation, ObservationEncoder};

pub use crate::env::{SheepEnv, StepOutcome};

pub use crate::protocol::{
    predict, ClickPolicy, FirstClickable, NodeRef, NodeView, PredictRequest, PredictResponse,
    ProtocolError, RandomClickable,
};
