use crate::{
    models::{InlineRun, RawBlock},
    parsing::text::cut_spans,
};

use super::{
    classify::LineClass,
    types::{BuiltBlocks, DraftNode},
};

/// Pass 1 state machine: opens a draft on every opener block and merges
/// continuation blocks into the open draft.
pub struct ThreadBuilder {
    current: Option<DraftNode>,
    out: Vec<DraftNode>,
    dropped: Vec<usize>,
    next_block: usize,
}

impl ThreadBuilder {
    pub fn new() -> Self {
        Self {
            current: None,
            out: vec![],
            dropped: vec![],
            next_block: 0,
        }
    }

    pub fn push(&mut self, block: &RawBlock, c: &LineClass) {
        let index = self.next_block;
        self.next_block += 1;

        match c.opener {
            Some(opener) => {
                self.flush_draft();
                self.current = Some(DraftNode {
                    opener,
                    block: index,
                    runs: cut_spans(&block.runs, &[c.prefix]),
                });
            }
            None => self.extend_draft(index, block),
        }
    }

    pub fn finish(mut self) -> BuiltBlocks {
        // EOF flush
        self.flush_draft();
        BuiltBlocks {
            drafts: self.out,
            dropped: self.dropped,
        }
    }

    fn extend_draft(&mut self, index: usize, block: &RawBlock) {
        match self.current.as_mut() {
            Some(draft) => {
                draft.runs.push(InlineRun::newline());
                draft.runs.extend(block.runs.iter().cloned());
            }
            None => {
                log::debug!("dropping leading block {index}: no message marker yet");
                self.dropped.push(index);
            }
        }
    }

    fn flush_draft(&mut self) {
        if let Some(draft) = self.current.take() {
            self.out.push(draft);
        }
    }
}

impl Default for ThreadBuilder {
    fn default() -> Self {
        Self::new()
    }
}
