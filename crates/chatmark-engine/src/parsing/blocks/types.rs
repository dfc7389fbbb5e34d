use crate::models::InlineRun;

use super::open::BlockOpen;

/// A node under construction in pass 1: an opener block plus any merged
/// continuation blocks. Tags are still embedded in `runs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftNode {
    pub opener: BlockOpen,
    /// Index of the opener block in the input sequence.
    pub block: usize,
    /// Content with the opener prefix stripped.
    pub runs: Vec<InlineRun>,
}

/// Output of the block builder.
#[derive(Debug, Default)]
pub struct BuiltBlocks {
    pub drafts: Vec<DraftNode>,
    /// Indices of leading blocks dropped before the first opener.
    pub dropped: Vec<usize>,
}
