//! # Inline Style Tokenizer
//!
//! Cursor-based tokenizer for the four single-character style markers, shared
//! by input recognition ([`RawBlock::from_marked`](crate::models::RawBlock::from_marked))
//! and output rendering ([`render_marked`](crate::render::render_marked)).
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Styled)
//! - **`kinds`**: `Style`, `MetaTag` and `BareUrl`, which own their delimiters
//! - **`cursor`**: `Cursor`, the scan position over one region and its raw zones
//! - **`parser`**: `parse_inline()` main entry point
//! - **`flatten`**: `flatten_runs()` turning the styled tree into flag runs
//!
//! ## Raw Zones
//!
//! Metadata tags and bare URLs are raw zones: `_hi [id:a_b]` keeps both
//! underscores literal, because the `_` inside the tag cannot close the
//! emphasis, and `https://a.io/x_y_z` stays one piece of text.
//!
//! ## Cost
//!
//! Markers of one kind never nest (the inner text of `*…*` holds no `*`), so
//! nesting depth is bounded by the number of styles, and each region sees at
//! most one failed forward search per style. Tokenizing is linear in the input
//! for this fixed marker set.

pub mod cursor;
pub mod flatten;
pub mod kinds;
pub mod parser;
pub mod types;

pub use flatten::flatten_runs;
pub use kinds::{BareUrl, MetaTag, Style};
pub use parser::parse_inline;
pub use types::InlineNode;

/// Tokenizes a whole string; spans are relative to `text`.
pub fn tokenize(text: &str) -> Vec<InlineNode> {
    parse_inline(0, text)
}
