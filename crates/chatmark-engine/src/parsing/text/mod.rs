pub mod runs;
pub mod span;

pub use runs::{cut_spans, flatten, merge_adjacent, trim_runs};
pub use span::Span;
