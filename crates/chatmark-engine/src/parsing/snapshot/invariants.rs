use crate::{
    models::{NodeKind, Thread},
    parsing::{inline::InlineNode, tags::find_tags, text::Span},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Every reply target is a different node of the same thread
/// - Dividers carry neither sender nor time
/// - No content run is empty
/// - Content holds no complete tag and is trimmed at both ends
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(thread: &Thread) {
    let n = thread.len();
    for (pos, node) in thread.iter().enumerate() {
        if let Some(target) = node.reply_to() {
            assert!(
                target.index() < n,
                "reply target out of bounds: node {pos} -> {} (thread len: {n})",
                target.index()
            );
            assert_ne!(target.index(), pos, "node {pos} replies to itself");
        }
        if node.kind() == NodeKind::DateDivider {
            assert!(
                node.sender().is_none() && node.time().is_none(),
                "divider {pos} carries message data"
            );
        } else {
            assert!(node.sender().is_some(), "message {pos} has no sender");
        }

        assert!(
            node.content.iter().all(|r| !r.is_empty()),
            "node {pos} has an empty run: {:?}",
            node.content
        );

        let text = node.text();
        assert!(
            find_tags(&text).is_empty(),
            "node {pos} still holds a tag: {text:?}"
        );
        assert_eq!(text.trim(), text, "node {pos} content is not trimmed");
    }
}

/// Validates tokenizer output for `src`.
///
/// Asserts that:
/// - Top-level nodes tile `src` exactly, in order
/// - Each styled node's inner span sits one marker inside its full span
/// - A styled node's text opens and closes with its own marker
/// - Children tile their parent's inner span
pub fn check_inline(src: &str, nodes: &[InlineNode]) {
    check_tiling(src, Span::new(0, src.len()), nodes);
}

fn check_tiling(src: &str, parent: Span, nodes: &[InlineNode]) {
    let mut pos = parent.start;
    for node in nodes {
        let span = node.span();
        assert!(
            parent.contains(span),
            "node span {span:?} escapes parent {parent:?}"
        );
        assert_eq!(span.start, pos, "gap or overlap before {span:?}");
        pos = span.end;

        if let InlineNode::Styled {
            style,
            full,
            inner,
            children,
        } = node
        {
            assert_eq!(
                (inner.start, inner.end),
                (full.start + 1, full.end - 1),
                "inner span {inner:?} is not one marker inside {full:?}"
            );
            let text = node.text(src).as_bytes();
            assert!(
                text.first() == Some(&style.marker()) && text.last() == Some(&style.marker()),
                "styled node {full:?} is not delimited by {style:?} markers"
            );
            check_tiling(src, *inner, children);
        }
    }
    assert_eq!(pos, parent.end, "nodes stop short of {parent:?}");
}
