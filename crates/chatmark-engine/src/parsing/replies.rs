//! Passes 2 and 3: the id index and reply resolution.

use std::collections::HashMap;

use crate::models::{Diagnostic, MessageNode, NodeRef, Role};

use super::{inline::MetaTag, options::DuplicateIdPolicy, tags::TagTable};

/// Pass 2: `id → position` over the nodes of one parse.
#[derive(Debug, Default)]
pub struct IdIndex {
    by_id: HashMap<String, usize>,
}

impl IdIndex {
    /// Scans nodes in order. When an id repeats, `policy` picks the node that
    /// stays reachable and the other one is reported.
    pub fn build(
        nodes: &[MessageNode],
        policy: DuplicateIdPolicy,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let mut by_id: HashMap<String, usize> = HashMap::new();

        for (pos, node) in nodes.iter().enumerate() {
            let Some(id) = node.id.as_deref() else {
                continue;
            };
            let Some(&previous) = by_id.get(id) else {
                by_id.insert(id.to_string(), pos);
                continue;
            };

            let (kept, shadowed) = match policy {
                DuplicateIdPolicy::LastWins => (pos, previous),
                DuplicateIdPolicy::FirstWins => (previous, pos),
            };
            let diagnostic = Diagnostic::DuplicateId {
                id: id.to_string(),
                kept,
                shadowed,
            };
            log::debug!("{diagnostic}");
            diagnostics.push(diagnostic);
            by_id.insert(id.to_string(), kept);
        }

        Self { by_id }
    }

    pub fn lookup(&self, id: &str) -> Option<NodeRef> {
        self.by_id.get(id).copied().map(NodeRef)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Pass 3: turns messages whose `reply` tag names a known id into replies.
///
/// `tables` is the side-table from pass 1, one entry per node. Unknown ids and
/// self references leave the node a plain message.
pub fn resolve_replies(
    nodes: &mut [MessageNode],
    tables: &[TagTable],
    index: &IdIndex,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for (pos, (node, tags)) in nodes.iter_mut().zip(tables).enumerate() {
        let Some(target) = tags.get(MetaTag::REPLY) else {
            continue;
        };
        let Role::Message { reply_to, .. } = &mut node.role else {
            log::debug!("node {pos}: reply tag on a date divider ignored");
            continue;
        };

        let diagnostic = match index.lookup(target) {
            Some(found) if found.index() != pos => {
                *reply_to = Some(found);
                continue;
            }
            Some(_) => Diagnostic::SelfReply { node: pos },
            None => Diagnostic::UnresolvedReply {
                node: pos,
                target: target.to_string(),
            },
        };
        log::debug!("{diagnostic}");
        diagnostics.push(diagnostic);
    }
}
