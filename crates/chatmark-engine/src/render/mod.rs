//! # HTML Serializer
//!
//! Renders parsed nodes as chat-bubble markup. Text is escaped before any
//! element is added, so the output is safe to embed as document content.
//!
//! ## Modules
//!
//! - **`templates`**: class names and element names per node kind and style
//! - **`segments`**: bare URL detection for autolinking

pub mod segments;
pub mod templates;

use serde::{Deserialize, Serialize};

use crate::{
    models::{InlineRun, MessageNode, RawBlock, Role, Thread},
    parsing::inline::{InlineNode, Style, tokenize},
};

use segments::{TextSegment, split_urls};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Append the `HH:MM` badge to messages.
    pub time_badge: bool,
    /// Show the quoted target above a reply. When off, replies render as
    /// plain messages.
    pub reply_preview: bool,
    /// Turn bare `http(s)://` URLs into links.
    pub autolink: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            time_badge: true,
            reply_preview: true,
            autolink: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders every node of the thread, in order, with no separator.
    pub fn serialize_thread(&self, thread: &Thread) -> String {
        thread.iter().map(|node| self.serialize(thread, node)).collect()
    }

    /// Renders one node. `thread` is the thread the node was parsed into and
    /// is used to look up reply targets.
    pub fn serialize(&self, thread: &Thread, node: &MessageNode) -> String {
        let content = self.serialize_runs(&node.content);
        match node.role {
            Role::DateDivider => format!(
                r#"<div class="{}"><span>{content}</span></div>"#,
                templates::DATE_DIVIDER_CLASS
            ),
            Role::Message { sender, time, .. } => {
                let preview = match thread.reply_target(node) {
                    Some(target) if self.options.reply_preview => format!(
                        r#"<div class="{}">{}</div>"#,
                        templates::REPLY_PREVIEW_CLASS,
                        self.serialize_runs(&target.content)
                    ),
                    _ => String::new(),
                };
                let badge = if self.options.time_badge {
                    format!(
                        r#"<span class="{}">{time}</span>"#,
                        templates::MESSAGE_TIME_CLASS
                    )
                } else {
                    String::new()
                };
                format!(
                    r#"<div style="align-self:{}" class="{} {}">{preview}<p>{content}</p>{badge}</div>"#,
                    templates::alignment(sender),
                    templates::MESSAGE_CONTAINER_CLASS,
                    templates::sender_class(sender),
                )
            }
        }
    }

    /// Renders runs concatenated, with no wrapper element.
    pub fn serialize_runs(&self, runs: &[InlineRun]) -> String {
        runs.iter().map(|run| self.serialize_inline(run)).collect()
    }

    /// Renders one run: escaped text wrapped in one element per flag, bold
    /// innermost and code outermost.
    pub fn serialize_inline(&self, run: &InlineRun) -> String {
        if run.is_empty() {
            return String::new();
        }
        let mut html = self.render_text(&run.text);
        for style in Style::ALL {
            if run.flags.has(style) {
                html = wrap(style, &html);
            }
        }
        html
    }

    /// Tokenizes marked-up text and renders the styled tree as nested
    /// elements, following the marker nesting of the source.
    pub fn render_marked(&self, text: &str) -> String {
        let mut out = String::new();
        self.render_nodes(text, &tokenize(text), &mut out);
        out
    }

    fn render_nodes(&self, src: &str, nodes: &[InlineNode], out: &mut String) {
        for node in nodes {
            match node {
                InlineNode::Text(sp) => out.push_str(&self.render_text(sp.slice(src))),
                InlineNode::Styled {
                    style, children, ..
                } => {
                    let mut inner = String::new();
                    self.render_nodes(src, children, &mut inner);
                    out.push_str(&wrap(*style, &inner));
                }
            }
        }
    }

    fn render_text(&self, text: &str) -> String {
        if !self.options.autolink {
            return escape(text);
        }
        split_urls(text)
            .into_iter()
            .map(|segment| match segment {
                TextSegment::Text(t) => escape(t),
                TextSegment::Url(href) => {
                    let href = escape(href);
                    format!(r#"<a href="{href}">{href}</a>"#)
                }
            })
            .collect()
    }
}

fn wrap(style: Style, inner: &str) -> String {
    let tag = templates::wrapper(style);
    format!("<{tag}>{inner}</{tag}>")
}

fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).replace('\n', templates::LINE_BREAK)
}

/// Renders a single block of marked-up text with default options.
///
/// Markers nest as written: `*a _b_*` renders `<em>` inside `<strong>`.
pub fn render_marked(text: &str) -> String {
    HtmlRenderer::new().render_marked(text)
}

/// Renders the runs of a block the way a message body renders them.
pub fn render_block(block: &RawBlock) -> String {
    HtmlRenderer::new().serialize_runs(&block.runs)
}
