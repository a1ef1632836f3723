//! Fixed-shape observation encoding.
//!
//! An observation is four buffers, always computed from the live state:
//!
//! - `global`: `[cards, queue length, undo count, remove count, max undo,
//!   max remove, remaining per type...]`, length `6 + T`
//! - `cards`: one row per card, `card_rows x card_features`
//! - `queue`: normalized type of each queue slot, `queue_slots` long
//! - `mask`: 1 where the card at that index is clickable, `mask_len` long
//!
//! The default window keeps the classic 80-row matrix, 80-entry mask and
//! 30-slot queue, so only the first 80 cards of the deck are visible (the
//! two stacks and the lowest board layers). `EncoderConfig::full_deck`
//! widens the matrix and mask to every card.

use serde::{Deserialize, Serialize};

use crate::core::{Card, EnvConfig, GameState};

use super::tensor::EncodedState;

/// Entries of `global` before the per-type counts.
pub const GLOBAL_HEADER_LEN: usize = 6;

/// Populated features at the start of each card row.
pub const CARD_FEATURES_USED: usize = 6;

/// Buffer sizes and normalization constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Cards represented in the matrix.
    pub card_rows: usize,
    /// Width of each card row; entries past the first six stay zero.
    pub card_features: usize,
    pub queue_slots: usize,
    /// Cards represented in the action mask.
    pub mask_len: usize,
    /// Divisor for depth.
    pub depth_scale: f32,
    /// Divisor for covering-set size.
    pub covering_scale: f32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            card_rows: 80,
            card_features: 80,
            queue_slots: 30,
            mask_len: 80,
            depth_scale: 15.0,
            covering_scale: 4.0,
        }
    }
}

impl EncoderConfig {
    /// Window wide enough for every card of the deck.
    pub fn full_deck(config: &EnvConfig) -> Self {
        Self {
            card_rows: config.deck_size(),
            mask_len: config.deck_size(),
            ..Self::default()
        }
    }

    /// Set the card row width (never below the populated features).
    #[must_use]
    pub fn with_card_features(mut self, width: usize) -> Self {
        self.card_features = width.max(CARD_FEATURES_USED);
        self
    }

    /// Set the number of queue slots.
    #[must_use]
    pub fn with_queue_slots(mut self, slots: usize) -> Self {
        self.queue_slots = slots;
        self
    }
}

/// The four agent-visible buffers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub global: EncodedState,
    pub cards: EncodedState,
    pub queue: EncodedState,
    pub mask: Vec<u8>,
}

impl Observation {
    /// Number of actions the mask marks as valid.
    #[must_use]
    pub fn valid_actions(&self) -> usize {
        self.mask.iter().filter(|&&m| m == 1).count()
    }
}

/// Projects a game state into fixed-size buffers.
#[derive(Clone, Debug)]
pub struct ObservationEncoder {
    config: EncoderConfig,
    card_types: usize,
    max_undo: u32,
    max_remove: u32,
    container_width: f32,
    container_height: f32,
}

impl ObservationEncoder {
    /// Create an encoder for the given environment.
    ///
    /// Card rows narrower than the populated features are widened.
    pub fn new(env: &EnvConfig, mut config: EncoderConfig) -> Self {
        config.card_features = config.card_features.max(CARD_FEATURES_USED);
        Self {
            config,
            card_types: env.card_types,
            max_undo: env.max_undo,
            max_remove: env.max_remove,
            container_width: env.container_width,
            container_height: env.container_height,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Length of the global vector, `6 + T`.
    #[must_use]
    pub fn global_len(&self) -> usize {
        GLOBAL_HEADER_LEN + self.card_types
    }

    /// Shapes of `global`, `cards`, `queue` and `mask`, in that order.
    #[must_use]
    pub fn shapes(&self) -> [Vec<usize>; 4] {
        [
            vec![self.global_len()],
            vec![self.config.card_rows, self.config.card_features],
            vec![self.config.queue_slots],
            vec![self.config.mask_len],
        ]
    }

    /// Encode the current state.
    pub fn encode(&self, state: &GameState) -> Observation {
        Observation {
            global: self.encode_global(state),
            cards: self.encode_cards(state),
            queue: self.encode_queue(state),
            mask: self.encode_mask(state),
        }
    }

    fn encode_global(&self, state: &GameState) -> EncodedState {
        let mut tensor = Vec::with_capacity(self.global_len());
        tensor.extend_from_slice(&[
            state.deck.len() as f32,
            state.queue.len() as f32,
            state.undo_count as f32,
            state.remove_count as f32,
            self.max_undo as f32,
            self.max_remove as f32,
        ]);
        tensor.extend(
            state
                .deck
                .remaining_by_type(self.card_types)
                .into_iter()
                .map(|n| n as f32),
        );
        EncodedState {
            tensor,
            shape: vec![self.global_len()],
        }
    }

    fn encode_cards(&self, state: &GameState) -> EncodedState {
        let width = self.config.card_features;
        let mut out = EncodedState::zeros(vec![self.config.card_rows, width]);

        let cards = state.deck.cards().iter().take(self.config.card_rows);
        for (row, card) in cards.enumerate() {
            let features = self.card_features(card);
            for (col, value) in features.into_iter().take(width).enumerate() {
                out.set(row * width + col, value);
            }
        }
        out
    }

    /// Normalized features of one card.
    #[must_use]
    pub fn card_features(&self, card: &Card) -> [f32; CARD_FEATURES_USED] {
        [
            self.normalized_type(card.card_type),
            card.state.ordinal() as f32 / 3.0,
            card.depth as f32 / self.config.depth_scale,
            card.top / self.container_height,
            card.left / self.container_width,
            card.covering.len() as f32 / self.config.covering_scale,
        ]
    }

    fn encode_queue(&self, state: &GameState) -> EncodedState {
        let mut out = EncodedState::zeros(vec![self.config.queue_slots]);
        let queued = state.queued_cards().take(self.config.queue_slots);
        for (slot, card) in queued.enumerate() {
            out.set(slot, self.normalized_type(card.card_type));
        }
        out
    }

    fn encode_mask(&self, state: &GameState) -> Vec<u8> {
        let mut mask = vec![0u8; self.config.mask_len];
        for (slot, card) in mask.iter_mut().zip(state.deck.cards()) {
            *slot = u8::from(card.is_clickable());
        }
        mask
    }

    fn normalized_type(&self, card_type: u8) -> f32 {
        card_type as f32 / self.card_types as f32
    }
}
