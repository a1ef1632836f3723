//! Clickability from covering references.
//!
//! A card that is `Covered` or `Clickable` becomes `Clickable` exactly when
//! every card in its covering set is `Eliminated`; otherwise it is
//! `Covered`. Selected and eliminated cards are never touched.
//!
//! Because covering cards can only move toward `Eliminated`, a clickable
//! card never reverts to covered in a real game, so repeated updates keep
//! card states monotonic.

use crate::core::{CardState, Deck};

/// Recompute clickability for the whole deck.
///
/// Idempotent. Returns the number of cards that became clickable.
pub fn update_coverage(deck: &mut Deck) -> usize {
    let eliminated: Vec<bool> = deck.cards().iter().map(|c| c.state.is_eliminated()).collect();

    let mut opened = 0;
    for card in deck.cards_mut() {
        if !matches!(card.state, CardState::Covered | CardState::Clickable) {
            continue;
        }

        // A reference outside the deck never clears.
        let free = card
            .covering
            .iter()
            .all(|idx| eliminated.get(idx.index()).copied().unwrap_or(false));

        let next = if free { CardState::Clickable } else { CardState::Covered };
        if next == CardState::Clickable && card.state == CardState::Covered {
            opened += 1;
        }
        card.state = next;
    }

    opened
}
