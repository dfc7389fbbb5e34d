use std::{collections::BTreeMap, sync::OnceLock};

use regex::Regex;

use crate::models::InlineRun;

use super::text::{Span, cut_spans, flatten, trim_runs};

/// A `[key:value]` tag found in a node's flattened text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
    /// Span of the whole tag, brackets included.
    pub span: Span,
}

/// Finds every metadata tag in `text`, left to right, non-overlapping.
pub fn find_tags(text: &str) -> Vec<Tag> {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let tag_regex = TAG_REGEX
        .get_or_init(|| Regex::new(r"\[([A-Za-z0-9_]+):([^\]]+)\]").expect("Invalid tag regex"));

    tag_regex
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            Some(Tag {
                key: caps[1].to_string(),
                value: caps[2].to_string(),
                span: Span::new(full.start(), full.end()),
            })
        })
        .collect()
}

/// Transient per-node tag values. Exists only between pass 1 and pass 3.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable(BTreeMap<String, String>);

impl TagTable {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Later values for the same key replace earlier ones.
    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Content with tags removed, plus the tags that were removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub runs: Vec<InlineRun>,
    pub tags: TagTable,
}

/// Removes all tags from the runs and trims the result.
///
/// Tags are matched on the flattened text, so a tag split across runs is
/// still found. Styling of the text around the tags is kept.
pub fn extract_tags(runs: &[InlineRun]) -> Extracted {
    let text = flatten(runs);
    let found = find_tags(&text);
    let cuts: Vec<Span> = found.iter().map(|t| t.span).collect();

    let mut tags = TagTable::default();
    for tag in found {
        tags.insert(tag.key, tag.value);
    }

    Extracted {
        runs: trim_runs(cut_spans(runs, &cuts)),
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StyleFlags;
    use crate::parsing::inline::{MetaTag, Style};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn finds_multiple_tags() {
        let tags = find_tags("Hi [id:1] [time:09:30]");
        assert_eq!(
            tags,
            vec![
                Tag {
                    key: "id".into(),
                    value: "1".into(),
                    span: Span::new(3, 9),
                },
                Tag {
                    key: "time".into(),
                    value: "09:30".into(),
                    span: Span::new(10, 22),
                },
            ]
        );
    }

    #[rstest]
    #[case("[id:1]")]
    #[case("[id:]")]
    #[case("[id:1")]
    #[case("[a-b:c]")]
    #[case("[:x]")]
    #[case("[reply:msg_1] tail")]
    #[case("[k:a[b]")]
    #[case("[k:multi word value]")]
    fn regex_agrees_with_tokenizer_raw_zone(#[case] input: &str) {
        let by_regex = find_tags(input)
            .first()
            .filter(|t| t.span.start == 0)
            .map(|t| t.span.len());
        assert_eq!(by_regex, MetaTag::match_len(input.as_bytes()));
    }

    #[test]
    fn extracts_and_trims() {
        let out = extract_tags(&[InlineRun::plain("Hi [id:1] [time:09:30]")]);
        assert_eq!(out.runs, vec![InlineRun::plain("Hi")]);
        assert_eq!(out.tags.get("id"), Some("1"));
        assert_eq!(out.tags.get("time"), Some("09:30"));
        assert_eq!(out.tags.get("reply"), None);
    }

    #[test]
    fn tag_split_across_runs_is_found() {
        let bold = StyleFlags::PLAIN.with(Style::Strong);
        let runs = vec![
            InlineRun::styled("Hey", bold),
            InlineRun::plain(" [re"),
            InlineRun::plain("ply:7]"),
        ];
        let out = extract_tags(&runs);
        assert_eq!(out.runs, vec![InlineRun::styled("Hey", bold)]);
        assert_eq!(out.tags.get("reply"), Some("7"));
    }

    #[test]
    fn styling_around_tags_survives() {
        let italic = StyleFlags::PLAIN.with(Style::Emphasis);
        let runs = vec![
            InlineRun::plain("[id:x] "),
            InlineRun::styled("soft", italic),
            InlineRun::plain(" voice"),
        ];
        let out = extract_tags(&runs);
        assert_eq!(
            out.runs,
            vec![
                InlineRun::styled("soft", italic),
                InlineRun::plain(" voice")
            ]
        );
    }

    #[test]
    fn unterminated_tag_is_left_alone() {
        let out = extract_tags(&[InlineRun::plain("Hi [id:1")]);
        assert_eq!(out.runs, vec![InlineRun::plain("Hi [id:1")]);
        assert!(out.tags.is_empty());
    }

    #[test]
    fn unknown_keys_are_kept_in_table() {
        let out = extract_tags(&[InlineRun::plain("Hi [mood:happy]")]);
        assert_eq!(out.runs, vec![InlineRun::plain("Hi")]);
        assert_eq!(out.tags.get("mood"), Some("happy"));
        assert_eq!(out.tags.len(), 1);
    }

    #[test]
    fn repeated_key_last_value_wins() {
        let out = extract_tags(&[InlineRun::plain("x [id:a] [id:b]")]);
        assert_eq!(out.tags.get("id"), Some("b"));
    }

    #[test]
    fn tags_in_continuation_lines_are_found() {
        let runs = vec![
            InlineRun::plain("Hello"),
            InlineRun::newline(),
            InlineRun::plain("world [id:w]"),
        ];
        let out = extract_tags(&runs);
        assert_eq!(
            out.runs,
            vec![
                InlineRun::plain("Hello"),
                InlineRun::newline(),
                InlineRun::plain("world"),
            ]
        );
        assert_eq!(out.tags.get("id"), Some("w"));
    }
}
