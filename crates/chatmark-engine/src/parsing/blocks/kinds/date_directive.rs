/// The `::date` directive opening a date divider.
pub struct DateDirective;

impl DateDirective {
    pub const DIRECTIVE: &'static str = "::date";

    /// Strips the directive and the whitespace after it, returning the byte
    /// offset where the divider's label begins.
    pub fn strip_prefix(s: &str) -> Option<usize> {
        let rest = s.strip_prefix(Self::DIRECTIVE)?;
        Some(s.len() - rest.trim_start().len())
    }
}
