//! Deck layout generation.
//!
//! A deck is dealt in two steps:
//!
//! 1. `deal_types` builds the multiset of `copies_per_type` labels for each
//!    type `1..=T` and shuffles it.
//! 2. `layout` splits the labels into the board, the left stack and the
//!    right stack, places board cards in square layers, and links each
//!    board card to the cards of the next layer that overlap it.
//!
//! Layer `k` (1-based) is a `k x k` grid holding between `k²/2` and `k²`
//! cards. Each layer is shifted half a card up and left relative to the
//! one below, which gives the pyramid look and makes each cell overlap up
//! to four cells of the previous layer.

use tracing::debug;

use crate::core::{Area, Card, CardIdx, ConfigError, Deck, EnvConfig, GameRng};

/// Vertical offset of the board and stacks below the container middle.
const BOARD_DROP: f32 = 100.0;

/// Left stack margin and the right stack inset from the container edge.
const LEFT_STACK_X: f32 = 50.0;
const RIGHT_STACK_INSET: f32 = 90.0;

/// Horizontal fan-out between consecutive stack cards.
const STACK_SPACING: f32 = 2.0;

/// Builds decks for one configuration.
#[derive(Clone, Debug)]
pub struct CardGraphGenerator {
    config: EnvConfig,
}

impl CardGraphGenerator {
    /// Create a generator, rejecting inconsistent configurations.
    pub fn new(config: &EnvConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
        })
    }

    /// Deal and lay out a full deck.
    pub fn generate(&self, rng: &mut GameRng) -> Deck {
        let types = self.deal_types(rng);
        self.layout(&types, rng)
    }

    /// Shuffled multiset of type labels, `copies_per_type` of each.
    pub fn deal_types(&self, rng: &mut GameRng) -> Vec<u8> {
        let mut types: Vec<u8> = (0..self.config.copies_per_type)
            .flat_map(|_| 1..=self.config.card_types as u8)
            .collect();
        rng.shuffle(&mut types);
        types
    }

    /// Lay out the given labels.
    ///
    /// The first `board_size` labels go to the board, the next `stack_size`
    /// to the left stack and the rest to the right stack. Cards are stored
    /// left stack first, then right stack, then the board layer by layer.
    /// Extra labels are ignored; missing ones shorten the last area.
    pub fn layout(&self, types: &[u8], rng: &mut GameRng) -> Deck {
        let board_end = self.config.board_size.min(types.len());
        let left_end = (board_end + self.config.stack_size).min(types.len());
        let right_end = (left_end + self.config.stack_size).min(types.len());

        let mut cards = Vec::with_capacity(right_end);
        self.push_stack(&mut cards, Area::LeftStack, &types[board_end..left_end]);
        self.push_stack(&mut cards, Area::RightStack, &types[left_end..right_end]);

        let layers = self.plan_layers(board_end, rng);
        self.push_board(&mut cards, &types[..board_end], &layers, rng);

        debug!(
            cards = cards.len(),
            layers = layers.len(),
            seed = rng.seed(),
            "generated deck"
        );
        Deck::from_cards(cards)
    }

    /// Card counts per board layer.
    ///
    /// Layer `k` draws uniformly from `k²/2..=k²`, clamped to what is left.
    /// Generation stops as soon as every board card has a layer, so the
    /// last layer may be partial.
    pub fn plan_layers(&self, board_cards: usize, rng: &mut GameRng) -> Vec<usize> {
        let mut layers = Vec::new();
        let mut remaining = board_cards;
        let mut side = 1usize;

        while remaining > 0 {
            let capacity = side * side;
            let count = rng.gen_range_inclusive(capacity / 2, capacity).min(remaining);
            layers.push(count);
            remaining -= count;
            side += 1;
        }

        layers
    }

    fn push_stack(&self, cards: &mut Vec<Card>, area: Area, types: &[u8]) {
        let (prefix, base_left) = match area {
            Area::RightStack => ("stack-right", self.config.container_width - RIGHT_STACK_INSET),
            _ => ("stack-left", LEFT_STACK_X),
        };
        let top = self.config.container_height / 2.0 + BOARD_DROP;

        for (i, &card_type) in types.iter().enumerate() {
            let left = base_left + i as f32 * STACK_SPACING;
            let id = format!("{}-{}", prefix, i);
            cards.push(Card::stack(id, card_type, area, i as u32, top, left));
        }
    }

    fn push_board(&self, cards: &mut Vec<Card>, types: &[u8], layers: &[usize], rng: &mut GameRng) {
        let size = self.config.card_size;
        let center_left = self.config.container_width / 2.0;
        let center_top = self.config.container_height / 2.0 + BOARD_DROP;

        let mut labels = types.iter().copied();
        let mut previous: Vec<CardIdx> = Vec::new();

        for (depth, &count) in layers.iter().enumerate() {
            let side = depth + 1;
            let mut used = vec![false; side * side];
            let mut placed = Vec::with_capacity(count);
            let shift = size / 2.0 * depth as f32;

            for card_type in labels.by_ref().take(count) {
                let cell = loop {
                    let cell = rng.gen_range_usize(0..side * side);
                    if !used[cell] {
                        break cell;
                    }
                };
                used[cell] = true;

                let row = cell / side;
                let column = if depth == 0 { 0 } else { cell % side };
                let top = center_top + size * row as f32 - shift;
                let left = center_left + size * column as f32 - shift;

                let card = Card::board(
                    format!("{}-{}", depth, cell),
                    card_type,
                    depth as u32,
                    row as u32,
                    column as u32,
                    top,
                    left,
                );

                let idx = CardIdx::from(cards.len());
                for &below in &previous {
                    let covered = &mut cards[below.index()];
                    if covered.overlaps(&card, size) {
                        covered.covering.push(idx);
                    }
                }

                cards.push(card);
                placed.push(idx);
            }

            previous = placed;
        }
    }
}
