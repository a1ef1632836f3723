//! The deck arena.
//!
//! `Deck` owns every card of one game. Cards are never removed: eliminated
//! cards stay in place, so a `CardIdx` stays valid for the whole episode.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Area, Card, CardIdx, CardState};

/// Arena of cards with id lookup.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
    by_id: FxHashMap<String, CardIdx>,
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

impl Deck {
    /// Build a deck from an explicit layout.
    ///
    /// Covering references must point into `cards`. If two cards share an
    /// id, `find` resolves to the later one.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let by_id = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id.clone(), CardIdx::from(i)))
            .collect();
        Self { cards, by_id }
    }

    /// Number of cards, eliminated ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by arena position.
    #[must_use]
    pub fn get(&self, idx: CardIdx) -> Option<&Card> {
        self.cards.get(idx.index())
    }

    /// Get a card mutably.
    pub fn get_mut(&mut self, idx: CardIdx) -> Option<&mut Card> {
        self.cards.get_mut(idx.index())
    }

    /// All cards in generation order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Iterate `(index, card)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardIdx, &Card)> {
        self.cards.iter().enumerate().map(|(i, c)| (CardIdx::from(i), c))
    }

    /// Resolve a card id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<CardIdx> {
        self.by_id.get(id).copied()
    }

    /// Number of board layers (highest board depth + 1).
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.area == Area::Board)
            .map(|c| c.depth as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// Cards not yet eliminated, per type `1..=card_types`.
    ///
    /// Entry `t - 1` holds the count for type `t`. Types outside the range
    /// are ignored.
    #[must_use]
    pub fn remaining_by_type(&self, card_types: usize) -> Vec<u32> {
        let mut counts = vec![0u32; card_types];
        for card in self.cards.iter().filter(|c| !c.state.is_eliminated()) {
            let slot = (card.card_type as usize)
                .checked_sub(1)
                .and_then(|t| counts.get_mut(t));
            if let Some(slot) = slot {
                *slot += 1;
            }
        }
        counts
    }

    /// Indices of all clickable cards.
    #[must_use]
    pub fn clickable(&self) -> Vec<CardIdx> {
        self.iter()
            .filter(|(_, c)| c.is_clickable())
            .map(|(i, _)| i)
            .collect()
    }

    /// Count cards in the given state.
    #[must_use]
    pub fn count_in(&self, state: CardState) -> usize {
        self.cards.iter().filter(|c| c.state == state).count()
    }

    /// True when every card has been eliminated.
    #[must_use]
    pub fn all_eliminated(&self) -> bool {
        self.cards.iter().all(|c| c.state.is_eliminated())
    }
}
