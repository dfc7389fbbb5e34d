use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::{raw_block::InlineRun, time::ClockTime};

/// Who sent a message. Encoded as `0` (outgoing) and `1` (incoming).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Outgoing,
    Incoming,
}

impl Sender {
    pub fn code(self) -> u8 {
        match self {
            Sender::Outgoing => 0,
            Sender::Incoming => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sender::Outgoing => "outgoing",
            Sender::Incoming => "incoming",
        }
    }
}

impl TryFrom<u8> for Sender {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Sender::Outgoing),
            1 => Ok(Sender::Incoming),
            code => Err(ModelError::InvalidSender { code }),
        }
    }
}

/// Position of a node inside the [`Thread`](super::Thread) it was parsed into.
///
/// This is a non-owning reference: it is only meaningful for the thread that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeRef(pub usize);

impl NodeRef {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Message,
    Reply,
    DateDivider,
}

/// What a node is, with the data only that role carries.
///
/// Every message has a sender and a time; a divider has neither. A message
/// with a resolved `reply_to` is a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "kebab-case")]
pub enum Role {
    Message {
        sender: Sender,
        time: ClockTime,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reply_to: Option<NodeRef>,
    },
    DateDivider,
}

/// A parsed unit of output: a message, a reply, or a date divider.
///
/// Nodes are immutable snapshots of one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageNode {
    #[serde(flatten)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: Vec<InlineRun>,
}

impl MessageNode {
    pub fn kind(&self) -> NodeKind {
        match self.role {
            Role::Message {
                reply_to: Some(_), ..
            } => NodeKind::Reply,
            Role::Message { .. } => NodeKind::Message,
            Role::DateDivider => NodeKind::DateDivider,
        }
    }

    pub fn sender(&self) -> Option<Sender> {
        match self.role {
            Role::Message { sender, .. } => Some(sender),
            Role::DateDivider => None,
        }
    }

    pub fn time(&self) -> Option<ClockTime> {
        match self.role {
            Role::Message { time, .. } => Some(time),
            Role::DateDivider => None,
        }
    }

    pub fn reply_to(&self) -> Option<NodeRef> {
        match self.role {
            Role::Message { reply_to, .. } => reply_to,
            Role::DateDivider => None,
        }
    }

    /// Concatenated text of the content runs.
    pub fn text(&self) -> String {
        self.content.iter().map(|r| r.text.as_str()).collect()
    }
}
