//! Cards: identity, lifecycle state and covering references.
//!
//! Every card in a game is addressed by a `CardIdx`, its position in the
//! deck arena. Covering references are stored as indices rather than
//! pointers, so the covering DAG has a single owner.
//!
//! ```
//! use sheep_env::core::CardState;
//!
//! assert!(CardState::Eliminated > CardState::Selected);
//! assert!(CardState::Selected > CardState::Clickable);
//! assert!(CardState::Clickable > CardState::Covered);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of a card in the deck arena.
///
/// Also the action index that selects the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIdx(pub u32);

impl CardIdx {
    /// Get the arena position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for CardIdx {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for CardIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card lifecycle state.
///
/// Declaration order is the ordinal order; states only move forward
/// during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardState {
    Covered,
    Clickable,
    Selected,
    Eliminated,
}

impl CardState {
    /// Ordinal value (0..=3).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// True once the card has left play.
    #[must_use]
    pub const fn is_eliminated(self) -> bool {
        matches!(self, CardState::Eliminated)
    }
}

/// Which area of the table a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    LeftStack,
    RightStack,
    Board,
}

impl Area {
    /// Stacks are flat reserves outside the covering DAG.
    #[must_use]
    pub const fn is_stack(self) -> bool {
        matches!(self, Area::LeftStack | Area::RightStack)
    }
}

/// Covering references. Board cards are covered by at most a handful of
/// neighbours in the next layer.
pub type Covering = SmallVec<[CardIdx; 4]>;

/// A single card on the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Stable id, e.g. `stack-left-3` or `2-7` (layer-cell).
    pub id: String,

    /// Card type in `1..=T`.
    pub card_type: u8,

    pub area: Area,

    /// Layer index on the board (0 = baseline); position within a stack.
    pub depth: u32,

    /// Grid position within the layer.
    pub row: u32,
    pub column: u32,

    /// Pixel position, used for overlap tests and display.
    pub top: f32,
    pub left: f32,

    pub state: CardState,

    /// Cards sitting on top of this one.
    pub covering: Covering,
}

impl Card {
    /// Create a stack card. Stack cards are never covered.
    pub fn stack(
        id: impl Into<String>,
        card_type: u8,
        area: Area,
        depth: u32,
        top: f32,
        left: f32,
    ) -> Self {
        Self {
            id: id.into(),
            card_type,
            area,
            depth,
            row: 0,
            column: 0,
            top,
            left,
            state: CardState::Clickable,
            covering: Covering::new(),
        }
    }

    /// Create a board card; it starts covered until the coverage pass runs.
    pub fn board(
        id: impl Into<String>,
        card_type: u8,
        depth: u32,
        row: u32,
        column: u32,
        top: f32,
        left: f32,
    ) -> Self {
        Self {
            id: id.into(),
            card_type,
            area: Area::Board,
            depth,
            row,
            column,
            top,
            left,
            state: CardState::Covered,
            covering: Covering::new(),
        }
    }

    /// Check whether this card can be selected right now.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.state == CardState::Clickable
    }

    /// Check whether the two cards overlap within `size` in both axes.
    #[must_use]
    pub fn overlaps(&self, other: &Card, size: f32) -> bool {
        (self.top - other.top).abs() <= size && (self.left - other.left).abs() <= size
    }
}
