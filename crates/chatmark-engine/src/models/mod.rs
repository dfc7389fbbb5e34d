pub mod message_node;
pub mod raw_block;
pub mod thread;
pub mod time;

pub use message_node::{MessageNode, NodeKind, NodeRef, Role, Sender};
pub use raw_block::{InlineRun, RawBlock, StyleFlags};
pub use thread::{Diagnostic, Thread};
pub use time::ClockTime;
