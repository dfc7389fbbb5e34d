//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Style`**: `*` strong, `_` emphasis, `~` strikethrough, `` ` `` code
//! - **`MetaTag`**: `[key:value]`, a raw zone that suppresses style parsing
//! - **`BareUrl`**: `http(s)://…`, likewise a raw zone
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod bare_url;
pub mod meta_tag;
pub mod style;

pub use bare_url::BareUrl;
pub use meta_tag::MetaTag;
pub use style::Style;
