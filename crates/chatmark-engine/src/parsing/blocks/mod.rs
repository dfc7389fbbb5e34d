//! # Block Classification and Merging (pass 1)
//!
//! ## Steps
//!
//! 1. **Block Classification** (`classify`): each raw block is classified into
//!    a `LineClass` from its leading text alone (sender marker, date
//!    directive, or continuation)
//!
//! 2. **Draft Construction** (`builder`): a `ThreadBuilder` opens a
//!    `DraftNode` per opener block, merges continuation blocks into the open
//!    draft, and drops blocks seen before the first opener
//!
//! ## Modules
//!
//! - **`types`**: `DraftNode`, `BuiltBlocks`
//! - **`kinds`**: directive types with owned delimiters (SenderMarker, DateDirective)
//! - **`classify`**: `MarkerClassifier` produces a `LineClass` for each block
//! - **`open`**: `try_open` dispatch for detecting block openers
//! - **`builder`**: `ThreadBuilder` state machine for draft construction

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::ThreadBuilder;
pub use classify::{LineClass, MarkerClassifier};
pub use open::BlockOpen;
pub use types::{BuiltBlocks, DraftNode};
