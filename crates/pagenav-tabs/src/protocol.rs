#![forbid(unsafe_code)]

//! Wire format of tab requests.
//!
//! Requests are JSON objects tagged by `action`:
//!
//! ```text
//! {"action":"moveTab","direction":"next"}
//! {"action":"moveTab","direction":"prev"}
//! {"action":"closeTab"}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TabError;

/// Which neighbour to activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabDirection {
    /// The tab to the right, wrapping to the first.
    Next,
    /// The tab to the left, wrapping to the last.
    Prev,
}

/// A tab-level command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum TabRequest {
    /// Activate a neighbouring tab.
    MoveTab {
        /// Neighbour to activate.
        direction: TabDirection,
    },
    /// Close the active tab.
    CloseTab,
}

impl TabRequest {
    /// Encode as a JSON object.
    pub fn to_json(&self) -> Result<String, TabError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON object. Unknown actions and directions are rejected.
    pub fn from_json(text: &str) -> Result<Self, TabError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_exact_wire_shape() {
        let next = TabRequest::MoveTab {
            direction: TabDirection::Next,
        };
        assert_eq!(next.to_json().unwrap(), r#"{"action":"moveTab","direction":"next"}"#);
        let prev = TabRequest::MoveTab {
            direction: TabDirection::Prev,
        };
        assert_eq!(prev.to_json().unwrap(), r#"{"action":"moveTab","direction":"prev"}"#);
        assert_eq!(TabRequest::CloseTab.to_json().unwrap(), r#"{"action":"closeTab"}"#);
    }

    #[test]
    fn decodes_with_extra_whitespace_and_field_order() {
        let req = TabRequest::from_json(r#"{ "direction": "prev", "action": "moveTab" }"#).unwrap();
        assert_eq!(
            req,
            TabRequest::MoveTab {
                direction: TabDirection::Prev
            }
        );
    }

    #[test]
    fn rejects_unknown_action_and_direction() {
        assert!(matches!(
            TabRequest::from_json(r#"{"action":"reloadTab"}"#),
            Err(TabError::Malformed(_))
        ));
        assert!(matches!(
            TabRequest::from_json(r#"{"action":"moveTab","direction":"up"}"#),
            Err(TabError::Malformed(_))
        ));
        assert!(matches!(
            TabRequest::from_json(r#"{"action":"moveTab"}"#),
            Err(TabError::Malformed(_))
        ));
        assert!(matches!(TabRequest::from_json("not json"), Err(TabError::Malformed(_))));
    }
}
