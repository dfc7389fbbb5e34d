/// The four inline styles, each owning its single-byte delimiter.
///
/// The same marker opens and closes a style: `*strong*`, `_emphasis_`,
/// `~strikethrough~`, `` `code` ``.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Strong,
    Emphasis,
    Strikethrough,
    Code,
}

impl Style {
    /// Wrapping order used when rendering a run: the first entry is applied
    /// first and ends up innermost.
    pub const ALL: [Style; 4] = [
        Style::Strong,
        Style::Emphasis,
        Style::Strikethrough,
        Style::Code,
    ];

    pub const fn marker(self) -> u8 {
        match self {
            Style::Strong => b'*',
            Style::Emphasis => b'_',
            Style::Strikethrough => b'~',
            Style::Code => b'`',
        }
    }

    pub fn from_marker(b: u8) -> Option<Style> {
        Style::ALL.into_iter().find(|s| s.marker() == b)
    }
}
