/// A byte range `[start, end)` into a source string.
///
/// Tokenizer nodes store spans rather than copied text, so slicing the source
/// with any span reproduces the exact authored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The text this span covers. Out-of-range spans yield `""`.
    pub fn slice(self, src: &str) -> &str {
        src.get(self.start..self.end).unwrap_or("")
    }

    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 5).len(), 3);
        assert!(Span::new(4, 4).is_empty());
        assert!(Span::new(5, 2).is_empty());
    }

    #[test]
    fn slice_reproduces_source() {
        let src = "hello world";
        assert_eq!(Span::new(6, 11).slice(src), "world");
        assert_eq!(Span::new(6, 40).slice(src), "");
    }

    #[test]
    fn containment() {
        assert!(Span::new(0, 10).contains(Span::new(2, 4)));
        assert!(!Span::new(3, 10).contains(Span::new(2, 4)));
    }
}
