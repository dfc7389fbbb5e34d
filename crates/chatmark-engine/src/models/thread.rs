use std::fmt;

use serde::{Deserialize, Serialize};

use super::message_node::{MessageNode, NodeRef};

/// Non-fatal notes about input that was dropped or degraded during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// A block before the first message marker was discarded.
    DroppedLeadingBlock { block: usize },
    /// A `[time:…]` tag did not hold a valid `HH:MM`; the clock was used instead.
    InvalidTime { node: usize, value: String },
    /// Two nodes share an id; only `kept` is reachable through reply lookup.
    DuplicateId {
        id: String,
        kept: usize,
        shadowed: usize,
    },
    /// A `[reply:…]` tag named an id that no node carries.
    UnresolvedReply { node: usize, target: String },
    /// A `[reply:…]` tag resolved to the node carrying it.
    SelfReply { node: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DroppedLeadingBlock { block } => {
                write!(f, "block {block}: dropped, no message marker before it")
            }
            Diagnostic::InvalidTime { node, value } => {
                write!(f, "node {node}: invalid time {value:?}, using current time")
            }
            Diagnostic::DuplicateId { id, kept, shadowed } => write!(
                f,
                "duplicate id {id:?}: node {kept} is used for replies, node {shadowed} is shadowed"
            ),
            Diagnostic::UnresolvedReply { node, target } => {
                write!(f, "node {node}: reply target {target:?} not found")
            }
            Diagnostic::SelfReply { node } => write!(f, "node {node}: reply points at itself"),
        }
    }
}

/// The result of parsing: nodes in input order plus diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub nodes: Vec<MessageNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl Thread {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageNode> {
        self.nodes.iter()
    }

    pub fn get(&self, node: NodeRef) -> Option<&MessageNode> {
        self.nodes.get(node.index())
    }

    /// The node a reply quotes, if `node` is a reply within this thread.
    pub fn reply_target(&self, node: &MessageNode) -> Option<&MessageNode> {
        node.reply_to().and_then(|r| self.get(r))
    }
}

impl<'a> IntoIterator for &'a Thread {
    type Item = &'a MessageNode;
    type IntoIter = std::slice::Iter<'a, MessageNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
