// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat(exchanges: usize) -> String {
    let mut content = String::new();
    for i in 0..exchanges {
        if i % 50 == 0 {
            content.push_str(&format!("::date Day {}\n", i / 50));
        }
        content.push_str(&format!(
            ">Message *{i}* with _some_ ~styling~ and `code` [id:m{i}] [time:09:30]\n"
        ));
        content.push_str("a continuation line https://example.com/page\n");
        content.push_str(&format!("<Reply to {i} [reply:m{i}]\n"));
    }
    content
}

/// One marker of each kind that never closes, followed by plain text.
#[allow(dead_code)]
pub fn generate_unmatched_markers(len: usize) -> String {
    format!("*_~`{}", "a".repeat(len))
}

/// Densely packed marker pairs of every kind.
#[allow(dead_code)]
pub fn generate_marker_pairs(len: usize) -> String {
    "*_~`".repeat(len / 4)
}
