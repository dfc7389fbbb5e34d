use std::{ops::Range, sync::OnceLock};

use regex::Regex;

/// Bare `http`/`https` URL.
///
/// URLs are raw zones for the style tokenizer, like [`MetaTag`](super::MetaTag):
/// `https://a.io/x_y_z` keeps its underscores and renders as one link.
/// Sentence punctuation and style markers at the end are not part of the URL,
/// so `*see https://a.io*` still closes the strong run.
pub struct BareUrl;

impl BareUrl {
    /// Byte ranges of the URLs in `text`, in order.
    pub fn find_all(text: &str) -> Vec<Range<usize>> {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let url_regex = URL_REGEX
            .get_or_init(|| Regex::new(r"https?://[^\s<>\[\]]+").expect("Invalid URL regex"));

        url_regex
            .find_iter(text)
            .filter_map(|m| {
                let url = m.as_str().trim_end_matches(Self::is_trailing);
                // Nothing but a scheme left: not a link
                if url.ends_with("//") {
                    return None;
                }
                Some(m.start()..m.start() + url.len())
            })
            .collect()
    }

    fn is_trailing(c: char) -> bool {
        matches!(
            c,
            '.' | ',' | ':' | ';' | '!' | '?' | ')' | ']' | '}' | '"' | '\''
                | '*' | '_' | '~' | '`'
        )
    }
}
