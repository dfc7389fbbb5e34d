use crate::models::Sender;

use super::kinds::{DateDirective, SenderMarker};

/// What a block opens, if it is not a continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    Message { sender: Sender },
    DateDivider,
}

/// Detects a block opener at the start of the flattened block text.
///
/// Returns the opener and the byte length of the prefix to strip
/// (directive plus following whitespace).
pub fn try_open(text: &str) -> Option<(BlockOpen, usize)> {
    if let Some((sender, len)) = SenderMarker::strip_prefix(text) {
        return Some((BlockOpen::Message { sender }, len));
    }
    if let Some(len) = DateDirective::strip_prefix(text) {
        return Some((BlockOpen::DateDivider, len));
    }
    None
}
