use std::ops::Range;

use super::kinds::{BareUrl, MetaTag, Style};

/// Scan position over one region of chat text.
///
/// Indices are local to `s`; `base` is where `s` starts in the outermost
/// source, so nested regions still report absolute spans. The raw zones of
/// the region (metadata tags and bare URLs) are located once, up front, and
/// the scan steps over each of them whole.
pub struct Cursor<'a> {
    pub s: &'a str,
    pub base: usize,
    pub i: usize,
    /// Local index of the last `]`; no tag can start after it.
    last_close: Option<usize>,
    urls: Vec<Range<usize>>,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self {
            s,
            base,
            i: 0,
            last_close: s.bytes().rposition(|b| b == MetaTag::CLOSE),
            urls: BareUrl::find_all(s),
        }
    }

    /// Absolute position in the outermost source.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Style whose marker is under the cursor.
    pub fn marker(&self) -> Option<Style> {
        Style::from_marker(*self.s.as_bytes().get(self.i)?)
    }

    /// Moves past a tag or URL starting under the cursor. Returns false, and
    /// stays put, when none starts here.
    pub fn skip_raw_zone(&mut self) -> bool {
        match self.raw_zone_len(self.i) {
            Some(len) => {
                self.i += len;
                true
            }
            None => false,
        }
    }

    /// Moves past one byte of literal text.
    pub fn step(&mut self) {
        self.i += 1;
    }

    /// Moves to local index `i`.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i;
    }

    /// Local index of the next `marker` after the cursor. Markers inside raw
    /// zones do not count.
    pub fn find_closing(&self, marker: u8) -> Option<usize> {
        let b = self.s.as_bytes();
        let mut j = self.i + 1;
        while j < b.len() {
            if b[j] == marker {
                return Some(j);
            }
            j += self.raw_zone_len(j).unwrap_or(1);
        }
        None
    }

    fn raw_zone_len(&self, i: usize) -> Option<usize> {
        let b = self.s.as_bytes();
        if b.get(i) == Some(&MetaTag::OPEN) {
            return match self.last_close {
                Some(close) if close > i => MetaTag::match_len(&b[i..]),
                _ => None,
            };
        }
        let k = self.urls.binary_search_by_key(&i, |url| url.start).ok()?;
        Some(self.urls[k].len())
    }
}
