use crate::{
    models::RawBlock,
    parsing::text::{Span, flatten},
};

use super::open::{BlockOpen, try_open};

/// Classification of a single block containing only local facts.
///
/// This is the first step of pass 1: each block is classified independently
/// without reference to surrounding blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// What the block opens; `None` for a continuation.
    pub opener: Option<BlockOpen>,
    /// Span of the opener prefix in the flattened block text, to be stripped.
    pub prefix: Span,
}

/// Classifies raw blocks by their leading directive.
pub struct MarkerClassifier;

impl MarkerClassifier {
    /// Classifies a block into a [`LineClass`].
    ///
    /// The directive is looked for at the start of the flattened text, so a
    /// marker split across runs (or preceded by empty runs) is still found.
    pub fn classify(&self, block: &RawBlock) -> LineClass {
        let text = flatten(&block.runs);
        match try_open(&text) {
            Some((opener, len)) => LineClass {
                opener: Some(opener),
                prefix: Span::new(0, len),
            },
            None => LineClass {
                opener: None,
                prefix: Span::new(0, 0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InlineRun, Sender};

    #[test]
    fn classify_marker_in_separate_run() {
        let block = RawBlock::new(vec![InlineRun::plain(">"), InlineRun::plain("Hello")]);
        let lc = MarkerClassifier.classify(&block);
        assert_eq!(
            lc.opener,
            Some(BlockOpen::Message {
                sender: Sender::Outgoing
            })
        );
        assert_eq!(lc.prefix, Span::new(0, 1));
    }

    #[test]
    fn classify_skips_empty_leading_runs() {
        let block = RawBlock::new(vec![InlineRun::plain(""), InlineRun::plain("< hi")]);
        let lc = MarkerClassifier.classify(&block);
        assert_eq!(
            lc.opener,
            Some(BlockOpen::Message {
                sender: Sender::Incoming
            })
        );
        assert_eq!(lc.prefix, Span::new(0, 2));
    }

    #[test]
    fn classify_continuation() {
        let lc = MarkerClassifier.classify(&RawBlock::plain("world"));
        assert_eq!(lc.opener, None);
        assert!(lc.prefix.is_empty());
    }

    #[test]
    fn classify_empty_block() {
        let lc = MarkerClassifier.classify(&RawBlock::default());
        assert_eq!(lc.opener, None);
    }
}
