//! # Chat Parsing
//!
//! Turns an ordered list of [`RawBlock`]s into a [`Thread`] in three passes
//! over fresh sequences:
//!
//! 1. **Classify and merge** (`blocks`, `tags`): opener blocks start drafts,
//!    continuation blocks are merged in, then each draft's tags are extracted
//!    into a side-table and its time is resolved
//! 2. **Identity index** (`replies::IdIndex`): `id → position`
//! 3. **Reply resolution** (`replies::resolve_replies`): `reply` tags that
//!    name a known id turn messages into replies
//!
//! Parsing never fails. Degraded input is reported as [`Diagnostic`]s on the
//! thread and through the `log` facade.

pub mod blocks;
pub mod inline;
pub mod options;
pub mod replies;
pub mod snapshot;
pub mod tags;
pub mod text;

#[cfg(test)]
mod tests;

use crate::{
    clock::{Clock, SystemClock},
    models::{ClockTime, Diagnostic, MessageNode, RawBlock, Role, Thread},
};

use blocks::{BlockOpen, MarkerClassifier, ThreadBuilder};
use inline::MetaTag;
use replies::{IdIndex, resolve_replies};
use tags::{TagTable, extract_tags};

pub use options::{DuplicateIdPolicy, ParseOptions};

/// Parses blocks with default options, reading the local clock for nodes
/// without a valid time.
pub fn parse(blocks: &[RawBlock]) -> Thread {
    parse_thread(blocks, &ParseOptions::default(), &SystemClock)
}

/// Parses blocks into a thread. The clock is read once per message that
/// lacks a valid `[time:…]` tag.
pub fn parse_thread(blocks: &[RawBlock], options: &ParseOptions, clock: &dyn Clock) -> Thread {
    let mut diagnostics = vec![];

    // Pass 1
    let classifier = MarkerClassifier;
    let mut builder = ThreadBuilder::new();
    for block in blocks {
        let lc = classifier.classify(block);
        builder.push(block, &lc);
    }
    let built = builder.finish();

    diagnostics.extend(
        built
            .dropped
            .iter()
            .map(|&block| Diagnostic::DroppedLeadingBlock { block }),
    );

    let mut nodes = Vec::with_capacity(built.drafts.len());
    let mut tables: Vec<TagTable> = Vec::with_capacity(built.drafts.len());
    for (pos, draft) in built.drafts.into_iter().enumerate() {
        let extracted = extract_tags(&draft.runs);
        let role = match draft.opener {
            BlockOpen::Message { sender } => {
                let raw_time = extracted.tags.get(MetaTag::TIME);
                Role::Message {
                    sender,
                    time: resolve_time(pos, raw_time, clock, &mut diagnostics),
                    reply_to: None,
                }
            }
            BlockOpen::DateDivider => Role::DateDivider,
        };
        nodes.push(MessageNode {
            role,
            id: extracted.tags.get(MetaTag::ID).map(str::to_string),
            content: extracted.runs,
        });
        tables.push(extracted.tags);
    }

    // Pass 2
    let index = IdIndex::build(&nodes, options.duplicate_ids, &mut diagnostics);

    // Pass 3
    resolve_replies(&mut nodes, &tables, &index, &mut diagnostics);

    Thread { nodes, diagnostics }
}

fn resolve_time(
    node: usize,
    raw: Option<&str>,
    clock: &dyn Clock,
    diagnostics: &mut Vec<Diagnostic>,
) -> ClockTime {
    let Some(value) = raw else {
        return clock.now();
    };
    match value.parse::<ClockTime>() {
        Ok(time) => time,
        Err(e) => {
            log::debug!("node {node}: {e}");
            diagnostics.push(Diagnostic::InvalidTime {
                node,
                value: value.to_string(),
            });
            clock.now()
        }
    }
}

/// Splits marked-up text into one [`RawBlock`] per line.
pub fn blocks_from_text(text: &str) -> Vec<RawBlock> {
    text.lines().map(RawBlock::from_marked).collect()
}
