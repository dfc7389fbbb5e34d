//! Integration tests for the parsing module.
//!
//! Uses snapshot testing with a plain-text thread outline for readability.
//! Fixtures (.chat) and snapshots (.snap) are co-located in `fixtures/`.
//! Fixtures are parsed with a fixed 12:00 clock.

use pretty_assertions::assert_eq;

use crate::{
    clock::FixedClock,
    models::{ClockTime, InlineRun, NodeKind, RawBlock, Sender},
    parsing::{ParseOptions, blocks_from_text, inline::tokenize, parse_thread, snapshot},
};

fn noon() -> FixedClock {
    FixedClock(ClockTime::new(12, 0).unwrap())
}

// Fixture-based snapshot tests

#[test]
fn fixture_basic() {
    assert_fixture("basic");
}

#[test]
fn fixture_continuations_and_noise() {
    assert_fixture("continuations_and_noise");
}

#[test]
fn fixture_replies() {
    assert_fixture("replies");
}

#[test]
fn fixture_styles_and_raw_zones() {
    assert_fixture("styles_and_raw_zones");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let chat = std::fs::read_to_string(format!("{fixtures_dir}/{name}.chat")).unwrap();

    for line in chat.lines() {
        snapshot::inline_invariants(line, &tokenize(line));
    }

    let thread = parse_thread(&blocks_from_text(&chat), &ParseOptions::default(), &noon());
    snapshot::invariants(&thread);

    let snap = snapshot::normalize(&thread);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap.to_string());
    });
}

// Invariant tests

/// Parsing the same input twice with the same clock gives the same thread.
#[test]
fn parse_is_idempotent() {
    let blocks = blocks_from_text(">a [id:1]\n<b [reply:1]\nmore\n::date Jan 1");
    let first = parse_thread(&blocks, &ParseOptions::default(), &noon());
    let second = parse_thread(&blocks, &ParseOptions::default(), &noon());
    assert_eq!(first, second);
}

/// Blocks are consumed read-only; the caller's input is unchanged.
#[test]
fn input_blocks_untouched() {
    let blocks = vec![RawBlock::plain(">Hi [id:1]"), RawBlock::plain("tail")];
    let before = blocks.clone();
    parse_thread(&blocks, &ParseOptions::default(), &noon());
    assert_eq!(blocks, before);
}

/// A marker alone in its own run still opens a node.
#[test]
fn marker_in_own_run() {
    let blocks = vec![RawBlock::new(vec![
        InlineRun::plain(">"),
        InlineRun::plain("Hello"),
    ])];
    let thread = parse_thread(&blocks, &ParseOptions::default(), &noon());
    assert_eq!(thread.len(), 1);
    assert_eq!(thread.nodes[0].sender(), Some(Sender::Outgoing));
    assert_eq!(thread.nodes[0].text(), "Hello");
}

/// The clock is only read for messages without a valid time.
#[test]
fn valid_time_ignores_clock() {
    let thread = parse_thread(
        &blocks_from_text(">Hi [time:23:59]"),
        &ParseOptions::default(),
        &noon(),
    );
    assert_eq!(thread.nodes[0].time().unwrap().to_string(), "23:59");
    assert!(thread.diagnostics.is_empty());
}

/// Dividers become neither replies nor carriers of sender or time.
#[test]
fn divider_has_no_message_data() {
    let thread = parse_thread(
        &blocks_from_text("::date Jan 1 [time:10:00]"),
        &ParseOptions::default(),
        &noon(),
    );
    let node = &thread.nodes[0];
    assert_eq!(node.kind(), NodeKind::DateDivider);
    assert_eq!(node.sender(), None);
    assert_eq!(node.time(), None);
    assert_eq!(node.text(), "Jan 1");
}

/// All-noise input produces an empty thread.
#[test]
fn noise_only() {
    let thread = parse_thread(
        &blocks_from_text("no marker\nstill none"),
        &ParseOptions::default(),
        &noon(),
    );
    assert!(thread.is_empty());
    assert_eq!(thread.diagnostics.len(), 2);
}

/// Tokenizer spans stay lossless on awkward marker mixes.
#[test]
fn inline_spans_tile_input() {
    for src in [
        "",
        "*",
        "**",
        "*a _b* c_",
        "`x [id:a_b]` _y_",
        "[k:*]*bold*",
        "~a *b _c `d` e_ f* g~",
        "é*ü*ß",
        "_see https://a.io/x_y_",
        "*https://a.io*_b_",
    ] {
        snapshot::inline_invariants(src, &tokenize(src));
    }
}

/// Empty input produces an empty thread with no diagnostics.
#[test]
fn empty_input() {
    let thread = parse_thread(&[], &ParseOptions::default(), &noon());
    assert!(thread.is_empty());
    assert!(thread.diagnostics.is_empty());
}
