use crate::parsing::text::Span;

use super::{cursor::Cursor, types::InlineNode};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the source where `s` begins (for absolute span positions)
/// - `s`: The string content to parse
///
/// # Algorithm
/// Scans left to right. On a style marker, searches forward for the next
/// occurrence of the same marker; if found, the enclosed text is parsed
/// recursively and wrapped in that style, otherwise the marker is literal.
/// The scan position always advances, so unmatched markers never consume input.
///
/// # Raw Zones
/// Metadata tags (`[key:value]`) and bare URLs are skipped as literal text,
/// both by the main scan and by the forward search for a closing marker.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between styled
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if cur.skip_raw_zone() {
            continue;
        }
        if let Some(node) = try_parse_styled(&mut cur) {
            let span = node.span();
            flush_text(&mut out, text_start, span.start);
            text_start = span.end;
            out.push(node);
            continue;
        }
        cur.step();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a styled construct starting at the current position.
///
/// Returns `None` if not at a marker or if the marker has no partner.
/// The cursor only moves on success.
fn try_parse_styled(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let style = cur.marker()?;
    let close = cur.find_closing(style.marker())?;

    let start = cur.pos();
    let inner_local = cur.i + 1;
    let inner = Span {
        start: cur.base + inner_local,
        end: cur.base + close,
    };
    let children = parse_inline(inner.start, &cur.s[inner_local..close]);
    cur.jump_to(close + 1);

    Some(InlineNode::Styled {
        style,
        full: Span {
            start,
            end: cur.pos(),
        },
        inner,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::Style;
    use pretty_assertions::assert_eq;

    fn text(start: usize, end: usize) -> InlineNode {
        InlineNode::Text(Span { start, end })
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![text(0, 11)]);
    }

    #[test]
    fn parse_empty_text() {
        assert!(parse_inline(0, "").is_empty());
    }

    #[test]
    fn parse_strong() {
        let nodes = parse_inline(0, "*bold*");
        assert_eq!(
            nodes,
            vec![InlineNode::Styled {
                style: Style::Strong,
                full: Span { start: 0, end: 6 },
                inner: Span { start: 1, end: 5 },
                children: vec![text(1, 5)],
            }]
        );
    }

    #[test]
    fn parse_nested_styles() {
        let src = "*bold _nested_ text*";
        let nodes = parse_inline(0, src);
        assert_eq!(nodes.len(), 1);
        let InlineNode::Styled {
            style, children, ..
        } = &nodes[0]
        else {
            panic!("expected Styled");
        };
        assert_eq!(*style, Style::Strong);
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].text(src), "bold ");
        match &children[1] {
            InlineNode::Styled {
                style: Style::Emphasis,
                inner,
                ..
            } => assert_eq!(inner.slice(src), "nested"),
            other => panic!("expected Emphasis, got {other:?}"),
        }
        assert_eq!(children[2].text(src), " text");
    }

    #[test]
    fn spans_are_absolute_with_base() {
        let nodes = parse_inline(100, "a~b~");
        assert_eq!(nodes[0], text(100, 101));
        assert_eq!(nodes[1].span(), Span { start: 101, end: 104 });
    }

    #[test]
    fn unmatched_marker_is_literal() {
        let nodes = parse_inline(0, "5 * 3 and _stray");
        assert_eq!(nodes, vec![text(0, 16)]);
    }

    #[test]
    fn unmatched_marker_does_not_block_later_pairs() {
        let src = "_a *b* c";
        let nodes = parse_inline(0, src);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].text(src), "_a ");
        assert!(matches!(
            nodes[1],
            InlineNode::Styled {
                style: Style::Strong,
                ..
            }
        ));
        assert_eq!(nodes[2].text(src), " c");
    }

    #[test]
    fn code_content_is_tokenized_recursively() {
        let nodes = parse_inline(0, "`*x*`");
        let InlineNode::Styled {
            style: Style::Code,
            children,
            ..
        } = &nodes[0]
        else {
            panic!("expected Code");
        };
        assert!(matches!(
            children[0],
            InlineNode::Styled {
                style: Style::Strong,
                ..
            }
        ));
    }

    #[test]
    fn tag_is_a_raw_zone() {
        let src = "hi [id:a_b] there";
        assert_eq!(parse_inline(0, src), vec![text(0, src.len())]);
    }

    #[test]
    fn closing_search_skips_tags() {
        // The `_` inside the tag must not close the emphasis.
        let src = "_hi [id:a_b]";
        assert_eq!(parse_inline(0, src), vec![text(0, src.len())]);

        let src = "_hi [id:a_b]_";
        let nodes = parse_inline(0, src);
        assert_eq!(nodes.len(), 1);
        assert!(matches!(
            nodes[0],
            InlineNode::Styled {
                style: Style::Emphasis,
                ..
            }
        ));
    }

    #[test]
    fn unterminated_tag_is_not_a_raw_zone() {
        let src = "[id:a_b_";
        let nodes = parse_inline(0, src);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text(src), "[id:a");
        assert_eq!(nodes[1].text(src), "_b_");
    }

    #[test]
    fn url_is_a_raw_zone() {
        let src = "see https://a.io/x_y_z";
        assert_eq!(parse_inline(0, src), vec![text(0, src.len())]);
    }

    #[test]
    fn url_inside_style_keeps_its_markers() {
        let src = "*see https://a.io/a_b_c*";
        let nodes = parse_inline(0, src);
        assert_eq!(nodes.len(), 1);
        let InlineNode::Styled {
            style: Style::Strong,
            children,
            ..
        } = &nodes[0]
        else {
            panic!("expected Strong");
        };
        assert_eq!(children, &vec![text(1, src.len() - 1)]);
    }

    #[test]
    fn empty_pair_has_no_children() {
        let nodes = parse_inline(0, "**");
        assert_eq!(
            nodes,
            vec![InlineNode::Styled {
                style: Style::Strong,
                full: Span { start: 0, end: 2 },
                inner: Span { start: 1, end: 1 },
                children: vec![],
            }]
        );
    }

    #[test]
    fn multibyte_text_keeps_char_boundaries() {
        let src = "é*ü*ß";
        let nodes = parse_inline(0, src);
        assert_eq!(nodes[0].text(src), "é");
        assert_eq!(nodes[1].text(src), "*ü*");
        assert_eq!(nodes[2].text(src), "ß");
    }

    #[test]
    fn long_marker_runs_terminate() {
        let src = "*".repeat(10_001);
        let nodes = parse_inline(0, &src);
        // 5000 empty pairs followed by one literal marker
        assert_eq!(nodes.len(), 5_001);
        assert_eq!(nodes[5_000], text(10_000, 10_001));
    }
}
