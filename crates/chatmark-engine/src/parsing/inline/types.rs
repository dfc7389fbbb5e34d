use crate::parsing::text::Span;

use super::kinds::Style;

/// A parsed inline node with byte spans into the source text.
///
/// All variants store spans rather than text, enabling lossless round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text that isn't part of a style construct, including unmatched markers
    /// and metadata tags.
    Text(Span),
    /// A marker pair and everything between.
    Styled {
        style: Style,
        /// Full span including both markers.
        full: Span,
        /// Span between the markers.
        inner: Span,
        /// Inner content, tokenized recursively.
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Styled { full, .. } => *full,
        }
    }

    /// Source text covered by this node, markers included.
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        self.span().slice(src)
    }
}
