//! Text operations over run sequences, addressed by byte offsets into the
//! flattened text (the concatenation of all run texts).

use crate::models::InlineRun;

use super::span::Span;

/// Concatenates the text of all runs.
pub fn flatten(runs: &[InlineRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

/// Removes `cuts` (spans over the flattened text) from the runs, keeping each
/// surviving fragment's flags. Runs that end up empty are dropped.
///
/// `cuts` must lie on char boundaries of the flattened text.
pub fn cut_spans(runs: &[InlineRun], cuts: &[Span]) -> Vec<InlineRun> {
    let mut out = Vec::with_capacity(runs.len());
    let mut offset = 0usize;

    for run in runs {
        let run_span = Span::new(offset, offset + run.text.len());
        offset = run_span.end;

        let mut kept = String::with_capacity(run.text.len());
        let mut pos = run_span.start;
        for cut in cuts {
            let start = cut.start.max(run_span.start);
            let end = cut.end.min(run_span.end);
            if start >= end || end <= pos {
                continue;
            }
            if start > pos {
                kept.push_str(&run.text[pos - run_span.start..start - run_span.start]);
            }
            pos = end;
        }
        if pos < run_span.end {
            kept.push_str(&run.text[pos - run_span.start..]);
        }

        if !kept.is_empty() {
            out.push(InlineRun::styled(kept, run.flags));
        }
    }
    out
}

/// Trims whitespace from the start of the first run and the end of the last
/// run, as if the flattened text had been trimmed. Empty runs are dropped.
pub fn trim_runs(runs: Vec<InlineRun>) -> Vec<InlineRun> {
    let mut runs: Vec<InlineRun> = runs.into_iter().filter(|r| !r.is_empty()).collect();

    while let Some(first) = runs.first_mut() {
        let trimmed = first.text.trim_start();
        if trimmed.is_empty() {
            runs.remove(0);
            continue;
        }
        if trimmed.len() != first.text.len() {
            first.text = trimmed.to_string();
        }
        break;
    }

    while let Some(last) = runs.last_mut() {
        let trimmed = last.text.trim_end();
        if trimmed.is_empty() {
            runs.pop();
            continue;
        }
        if trimmed.len() != last.text.len() {
            last.text = trimmed.to_string();
        }
        break;
    }

    runs
}

/// Merges neighbouring runs that carry identical flags and drops empty runs.
pub fn merge_adjacent(runs: Vec<InlineRun>) -> Vec<InlineRun> {
    let mut out: Vec<InlineRun> = Vec::with_capacity(runs.len());
    for run in runs.into_iter().filter(|r| !r.is_empty()) {
        match out.last_mut() {
            Some(prev) if prev.flags == run.flags => prev.text.push_str(&run.text),
            _ => out.push(run),
        }
    }
    out
}
