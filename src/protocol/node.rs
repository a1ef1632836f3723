//! Wire types for the click-prediction collaborator.
//!
//! The collaborator receives the table as a list of nodes and answers with
//! the node it wants clicked:
//!
//! ```json
//! {"nodes": [{"id": "stack-left-0", "type": 3, "canClick": true}]}
//! {"node": {"id": "stack-left-0", "type": 3}}
//! ```
//!
//! Only `id`, `type` and `canClick` are required on incoming nodes.

use serde::{Deserialize, Serialize};

use crate::core::Card;

/// One card as seen by the collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: u8,
    #[serde(default)]
    pub can_click: bool,
    /// State ordinal, 0 (covered) to 3 (eliminated).
    #[serde(default)]
    pub state: u8,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub left: f32,
}

impl From<&Card> for NodeView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            node_type: card.card_type,
            can_click: card.is_clickable(),
            state: card.state.ordinal(),
            depth: card.depth,
            top: card.top,
            left: card.left,
        }
    }
}

/// Body of a prediction request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub nodes: Vec<NodeView>,
}

/// The node a policy picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: u8,
}

impl From<&NodeView> for NodeRef {
    fn from(view: &NodeView) -> Self {
        Self {
            id: view.id.clone(),
            node_type: view.node_type,
        }
    }
}

/// Body of a successful prediction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub node: NodeRef,
}
