//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed [`Thread`](crate::models::Thread) to a
//!   stable text outline for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (reply targets in
//!   range and never self, content trimmed and tag-free, no empty runs, inline
//!   spans tiling their parents)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is defined by fixture threads and their snapshots rather
//! than a separate formal grammar. Snapshots show node kinds, senders, times,
//! ids, reply targets, styled runs and diagnostics.

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_inline as inline_invariants};
pub use normalize::{Snap, normalize};
