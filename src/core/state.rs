//! Mutable session state for one game.
//!
//! `GameState` is the explicit context that the generator fills and the
//! rule functions (`board::update_coverage`, `rules::select`) mutate.
//! Nothing about a game lives outside it.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardIdx};
use super::deck::Deck;

/// Episode status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameState {
    /// Every card of the game, eliminated ones included.
    pub deck: Deck,

    /// Selected cards awaiting a match, grouped by type.
    pub queue: Vec<CardIdx>,

    /// Undo/remove counters. Observation fields only; no action changes them.
    pub undo_count: u32,
    pub remove_count: u32,

    /// Actions taken this episode, rejected ones included.
    pub steps: u32,

    pub status: GameStatus,
}

impl GameState {
    /// Start a fresh game on the given deck.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            ..Self::default()
        }
    }

    /// Cards currently in the selection queue, in queue order.
    pub fn queued_cards(&self) -> impl Iterator<Item = &Card> {
        self.queue.iter().filter_map(|&idx| self.deck.get(idx))
    }

    /// Types currently in the queue, in queue order.
    #[must_use]
    pub fn queue_types(&self) -> Vec<u8> {
        self.queued_cards().map(|c| c.card_type).collect()
    }
}
