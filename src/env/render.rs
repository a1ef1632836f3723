//! Plain-text dump of a game, for debugging.

use crate::core::CardState;

use super::controller::SheepEnv;

impl SheepEnv {
    /// Totals, counters, the selection queue and every clickable card.
    #[must_use]
    pub fn render(&self) -> String {
        let state = self.state();
        let config = self.config();

        let mut lines = vec![
            format!("=== Game State ({:?}) ===", state.status),
            format!("Total cards: {}", state.deck.len()),
            format!("Eliminated: {}", state.deck.count_in(CardState::Eliminated)),
            format!("Selected cards: {}/{}", state.queue.len(), config.queue_capacity),
            format!("Undo count: {}/{}", state.undo_count, config.max_undo),
            format!("Remove count: {}/{}", state.remove_count, config.max_remove),
            String::new(),
            "Queue:".to_string(),
        ];
        lines.extend(state.queue_types().into_iter().map(|t| format!("  Type {}", t)));

        lines.push(String::new());
        lines.push("Clickable cards:".to_string());
        lines.extend(
            state
                .deck
                .iter()
                .filter(|(_, c)| c.is_clickable())
                .map(|(idx, card)| {
                    format!(
                        "  [{}] {} Type {} at ({}, {})",
                        idx.index(),
                        card.id,
                        card.card_type,
                        card.left,
                        card.top
                    )
                }),
        );

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
