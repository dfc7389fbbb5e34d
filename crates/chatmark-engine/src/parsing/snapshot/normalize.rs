use std::fmt;

use crate::models::{Diagnostic, InlineRun, MessageNode, NodeKind, Thread};

/// Stable outline of a parsed thread, one line per node and per run.
///
/// ```text
/// #1 reply incoming 12:00 id=b -> #0
///   [b] "bold"
///   "\n"
/// ```
pub struct Snap {
    pub nodes: Vec<NodeSnap>,
    pub diagnostics: Vec<String>,
}

pub struct NodeSnap {
    pub header: String,
    pub runs: Vec<String>,
}

pub fn normalize(thread: &Thread) -> Snap {
    let nodes = thread
        .iter()
        .enumerate()
        .map(|(pos, node)| NodeSnap {
            header: header(pos, node),
            runs: node.content.iter().map(run).collect(),
        })
        .collect();

    Snap {
        nodes,
        diagnostics: thread.diagnostics.iter().map(Diagnostic::to_string).collect(),
    }
}

fn header(pos: usize, node: &MessageNode) -> String {
    let mut out = format!("#{pos}");
    out.push_str(match node.kind() {
        NodeKind::Message => " message",
        NodeKind::Reply => " reply",
        NodeKind::DateDivider => " date-divider",
    });
    if let Some(sender) = node.sender() {
        out.push_str(&format!(" {}", sender.as_str()));
    }
    if let Some(time) = node.time() {
        out.push_str(&format!(" {time}"));
    }
    if let Some(id) = &node.id {
        out.push_str(&format!(" id={id}"));
    }
    if let Some(target) = node.reply_to() {
        out.push_str(&format!(" -> #{}", target.index()));
    }
    out
}

fn run(r: &InlineRun) -> String {
    let f = r.flags;
    let flags: String = [
        (f.bold, 'b'),
        (f.italic, 'i'),
        (f.strikethrough, 's'),
        (f.code, 'c'),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .map(|(_, c)| *c)
    .collect();

    if flags.is_empty() {
        format!("{:?}", r.text)
    } else {
        format!("[{flags}] {:?}", r.text)
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}", node.header)?;
            for run in &node.runs {
                writeln!(f, "  {run}")?;
            }
        }
        if !self.diagnostics.is_empty() {
            writeln!(f, "diagnostics:")?;
            for d in &self.diagnostics {
                writeln!(f, "  {d}")?;
            }
        }
        Ok(())
    }
}
