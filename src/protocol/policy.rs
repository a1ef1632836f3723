//! Click policies.
//!
//! A `ClickPolicy` looks at the exported nodes and names the one to click.
//! The collaborator's stock behaviour is `FirstClickable`; a learned model
//! plugs in behind the same trait.

use crate::core::GameRng;

use super::node::NodeView;

/// Chooses which node to click.
pub trait ClickPolicy {
    /// Position in `nodes` of the node to click, or `None` when nothing can
    /// be clicked.
    fn choose(&mut self, nodes: &[NodeView]) -> Option<usize>;
}

/// Picks the first clickable node in list order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstClickable;

impl ClickPolicy for FirstClickable {
    fn choose(&mut self, nodes: &[NodeView]) -> Option<usize> {
        nodes.iter().position(|n| n.can_click)
    }
}

/// Picks uniformly among clickable nodes.
#[derive(Clone, Debug)]
pub struct RandomClickable {
    rng: GameRng,
}

impl RandomClickable {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl ClickPolicy for RandomClickable {
    fn choose(&mut self, nodes: &[NodeView]) -> Option<usize> {
        let clickable: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.can_click)
            .map(|(i, _)| i)
            .collect();
        self.rng.choose(&clickable).copied()
    }
}
