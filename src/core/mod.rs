//! Core types: cards, the deck arena, session state, RNG, configuration.
//!
//! Everything here is plain data. The rules that move cards between
//! states live in `board` and `rules`.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod rng;
pub mod state;

pub use card::{Area, Card, CardIdx, CardState, Covering};
pub use config::{EnvConfig, RewardTable};
pub use deck::Deck;
pub use error::{ConfigError, EnvError};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, GameStatus};
