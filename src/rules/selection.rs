//! Selecting a card into the queue and resolving three-of-a-kind.
//!
//! The queue keeps cards of the same type next to each other. A selected
//! card whose type already appears twice completes a run of three, and the
//! whole run is eliminated at once.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CardIdx, CardState, GameState, RewardTable};

/// What a single action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Action index outside the deck.
    InvalidIndex,
    /// Targeted card was not clickable.
    NotClickable,
    /// Queue was already full; nothing changed.
    QueueFull,
    /// Card joined the queue without a match.
    Inserted,
    /// Card completed a three-of-a-kind; three cards were eliminated.
    Matched,
}

impl StepKind {
    /// Base reward for this kind of action.
    #[must_use]
    pub fn reward(self, rewards: &RewardTable) -> f32 {
        match self {
            StepKind::InvalidIndex => rewards.invalid_index,
            StepKind::NotClickable => rewards.not_clickable,
            StepKind::QueueFull => rewards.queue_full,
            StepKind::Inserted => rewards.insert,
            StepKind::Matched => rewards.match_three,
        }
    }

    /// True when the action changed the game.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, StepKind::Inserted | StepKind::Matched)
    }
}

/// Select a clickable card.
///
/// Rejects with `QueueFull` when the queue already holds `capacity`
/// entries. Otherwise the card is marked `Selected` and either completes a
/// match (net queue change -2) or is grouped next to its type (+1).
/// A missing or non-clickable card yields `NotClickable` and changes
/// nothing.
pub fn select(state: &mut GameState, idx: CardIdx, capacity: usize) -> StepKind {
    let card_type = match state.deck.get(idx) {
        Some(card) if card.is_clickable() => card.card_type,
        _ => return StepKind::NotClickable,
    };

    if state.queue.len() >= capacity {
        trace!(card = %idx, queue = state.queue.len(), "queue full, select rejected");
        return StepKind::QueueFull;
    }

    set_state(state, idx, CardState::Selected);

    let same_type: Vec<usize> = state
        .queue
        .iter()
        .enumerate()
        .filter(|(_, queued)| {
            state
                .deck
                .get(**queued)
                .is_some_and(|c| c.card_type == card_type)
        })
        .map(|(pos, _)| pos)
        .collect();

    if let [first, second] = same_type[..] {
        let run = [state.queue[first], state.queue[second], idx];
        state.queue.insert(second + 1, idx);
        state.queue.retain(|queued| !run.contains(queued));
        for &card in &run {
            set_state(state, card, CardState::Eliminated);
        }

        trace!(card = %idx, card_type, queue = state.queue.len(), "matched three");
        return StepKind::Matched;
    }

    let position = same_type.first().copied().unwrap_or(state.queue.len());
    state.queue.insert(position, idx);

    trace!(card = %idx, card_type, position, "inserted into queue");
    StepKind::Inserted
}

fn set_state(state: &mut GameState, idx: CardIdx, next: CardState) {
    if let Some(card) = state.deck.get_mut(idx) {
        card.state = next;
    }
}
