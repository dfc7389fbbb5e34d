pub mod clock;
pub mod error;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ModelError;
pub use models::{
    ClockTime, Diagnostic, InlineRun, MessageNode, NodeKind, NodeRef, RawBlock, Role, Sender,
    StyleFlags, Thread,
};
pub use parsing::{DuplicateIdPolicy, ParseOptions, blocks_from_text, parse, parse_thread};
pub use render::{HtmlRenderer, RenderOptions, render_block, render_marked};

/// Parse chat markup text (one block per line) and render it to HTML,
/// using the local wall clock for missing timestamps.
pub fn chat_to_html(text: &str) -> String {
    let thread = parse(&blocks_from_text(text));
    HtmlRenderer::new().serialize_thread(&thread)
}
