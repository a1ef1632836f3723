//! JSON boundary for an external click-prediction service.
//!
//! - `node`: `NodeView` and the request/response bodies
//! - `policy`: `ClickPolicy` and the stock policies
//!
//! `predict` is the whole request handler minus the HTTP server: it parses a
//! body, asks a policy, and maps failures to a status code and error body.

pub mod node;
pub mod policy;

use serde_json::json;
use thiserror::Error;
use tracing::debug;

pub use node::{NodeRef, NodeView, PredictRequest, PredictResponse};
pub use policy::{ClickPolicy, FirstClickable, RandomClickable};

/// Failures of a prediction request.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The body was not a valid request.
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    /// No node in the request can be clicked.
    #[error("No clickable nodes available")]
    NoClickable,
}

impl ProtocolError {
    /// HTTP status for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ProtocolError::Malformed(_) => 500,
            ProtocolError::NoClickable => 404,
        }
    }

    /// JSON error body, `{"error": "<message>"}`.
    #[must_use]
    pub fn body(&self) -> String {
        json!({ "error": self.to_string() }).to_string()
    }
}

/// Answer a prediction request with the node `policy` picks.
pub fn predict<P: ClickPolicy + ?Sized>(
    body: &str,
    policy: &mut P,
) -> Result<PredictResponse, ProtocolError> {
    let request: PredictRequest = serde_json::from_str(body)?;

    let picked = policy
        .choose(&request.nodes)
        .and_then(|i| request.nodes.get(i))
        .ok_or(ProtocolError::NoClickable)?;

    debug!(id = %picked.id, nodes = request.nodes.len(), "predicted click");
    Ok(PredictResponse {
        node: NodeRef::from(picked),
    })
}

/// `predict`, serialized: the response body on success.
pub fn predict_json<P: ClickPolicy + ?Sized>(
    body: &str,
    policy: &mut P,
) -> Result<String, ProtocolError> {
    let response = predict(body, policy)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_first_clickable() {
        let body = r#"{"nodes": [
            {"id": "0-0", "type": 4, "canClick": false},
            {"id": "stack-left-0", "type": 7, "canClick": true}
        ]}"#;
        let response = predict(body, &mut FirstClickable).unwrap();
        assert_eq!(response.node.id, "stack-left-0");
        assert_eq!(response.node.node_type, 7);
    }

    #[test]
    fn test_no_clickable_is_404() {
        let err = predict(r#"{"nodes": []}"#, &mut FirstClickable).unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.body(), r#"{"error":"No clickable nodes available"}"#);
    }

    #[test]
    fn test_missing_nodes_means_empty() {
        let err = predict("{}", &mut FirstClickable).unwrap_err();
        assert!(matches!(err, ProtocolError::NoClickable));
    }

    #[test]
    fn test_malformed_is_500() {
        let err = predict("not json", &mut FirstClickable).unwrap_err();
        assert_eq!(err.status_code(), 500);
        let body: serde_json::Value = serde_json::from_str(&err.body()).unwrap();
        assert!(body["error"].is_string());
    }

    #[test]
    fn test_response_uses_wire_names() {
        let body = r#"{"nodes": [{"id": "1-2", "type": 3, "canClick": true}]}"#;
        let json = predict_json(body, &mut FirstClickable).unwrap();
        assert_eq!(json, r#"{"node":{"id":"1-2","type":3}}"#);
    }
}
