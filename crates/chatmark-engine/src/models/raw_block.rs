use serde::{Deserialize, Serialize};

use crate::parsing::inline::{self, Style};

/// Style flags carried by an [`InlineRun`].
///
/// The flags are independent; any combination is valid. Nesting only appears
/// when a run is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleFlags {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub code: bool,
}

impl StyleFlags {
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        strikethrough: false,
        code: false,
    };

    /// Returns a copy with the flag for `style` set.
    #[must_use]
    pub fn with(mut self, style: Style) -> Self {
        match style {
            Style::Strong => self.bold = true,
            Style::Emphasis => self.italic = true,
            Style::Strikethrough => self.strikethrough = true,
            Style::Code => self.code = true,
        }
        self
    }

    /// Whether the flag for `style` is set.
    pub fn has(self, style: Style) -> bool {
        match style {
            Style::Strong => self.bold,
            Style::Emphasis => self.italic,
            Style::Strikethrough => self.strikethrough,
            Style::Code => self.code,
        }
    }

    pub fn is_plain(self) -> bool {
        self == Self::PLAIN
    }
}

/// Atomic styled text. A run never contains other runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRun {
    pub text: String,
    #[serde(flatten)]
    pub flags: StyleFlags,
}

impl InlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, StyleFlags::PLAIN)
    }

    pub fn styled(text: impl Into<String>, flags: StyleFlags) -> Self {
        Self {
            text: text.into(),
            flags,
        }
    }

    /// The separator inserted between a node and a merged continuation block.
    pub fn newline() -> Self {
        Self::plain("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One authored paragraph/line of input, as handed over by the editing surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBlock {
    pub runs: Vec<InlineRun>,
}

impl RawBlock {
    pub fn new(runs: Vec<InlineRun>) -> Self {
        Self { runs }
    }

    /// A block holding a single unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![InlineRun::plain(text)])
    }

    /// Builds a block from plain text carrying `*`, `_`, `~` and `` ` `` style
    /// markers. Matched markers become style flags; unmatched ones stay literal.
    pub fn from_marked(text: &str) -> Self {
        let nodes = inline::tokenize(text);
        Self::new(inline::flatten_runs(text, &nodes))
    }

    /// The concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl From<Vec<InlineRun>> for RawBlock {
    fn from(runs: Vec<InlineRun>) -> Self {
        Self::new(runs)
    }
}
