use crate::{
    models::{InlineRun, StyleFlags},
    parsing::text::merge_adjacent,
};

use super::types::InlineNode;

/// Converts a styled tree into flag-set runs.
///
/// Each text leaf becomes a run carrying the union of the styles of its
/// ancestors; neighbouring runs with the same flags are merged. `src` is the
/// text the nodes' spans point into.
pub fn flatten_runs(src: &str, nodes: &[InlineNode]) -> Vec<InlineRun> {
    let mut out = vec![];
    collect(src, nodes, StyleFlags::PLAIN, &mut out);
    merge_adjacent(out)
}

fn collect(src: &str, nodes: &[InlineNode], flags: StyleFlags, out: &mut Vec<InlineRun>) {
    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push(InlineRun::styled(sp.slice(src), flags)),
            InlineNode::Styled {
                style, children, ..
            } => collect(src, children, flags.with(*style), out),
        }
    }
}
