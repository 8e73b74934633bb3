//! Fuzz target for the Lua highlighter.
//!
//! Highlighting must accept any string without panicking, and the tokens it
//! produces must tile the input without overlap.

#![no_main]

use libfuzzer_sys::fuzz_target;
use luahl::highlight::{LuaHighlighter, spans};
use std::sync::OnceLock;

fn highlighter() -> &'static LuaHighlighter {
    static HIGHLIGHTER: OnceLock<LuaHighlighter> = OnceLock::new();
    HIGHLIGHTER.get_or_init(LuaHighlighter::lua)
}

fuzz_target!(|data: &str| {
    let highlighter = highlighter();
    let tokens = highlighter.tokenize(data);

    let mut last_end = 0usize;
    for token in &tokens {
        assert!(token.start >= last_end && token.start < token.end);
        last_end = token.end;
    }
    let joined: String = spans(data, &tokens).map(|span| span.text).collect();
    assert_eq!(joined, data);

    let _ = highlighter.highlight_if_lua(data);
});
