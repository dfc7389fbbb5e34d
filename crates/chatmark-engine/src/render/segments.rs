use crate::parsing::inline::BareUrl;

/// A piece of run text: either plain text or a bare URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment<'a> {
    Text(&'a str),
    Url(&'a str),
}

/// Splits text into plain segments and `http`/`https` URLs, using the same
/// URL boundaries the tokenizer treats as raw zones.
pub fn split_urls(text: &str) -> Vec<TextSegment<'_>> {
    let mut segments = Vec::new();
    let mut current_pos = 0;

    for url in BareUrl::find_all(text) {
        if current_pos < url.start {
            segments.push(TextSegment::Text(&text[current_pos..url.start]));
        }
        current_pos = url.end;
        segments.push(TextSegment::Url(&text[url]));
    }

    if current_pos < text.len() {
        segments.push(TextSegment::Text(&text[current_pos..]));
    }

    segments
}
