//! E2E tests for the highlighting pipeline: fixture files through tokenizing,
//! rendering and the code block collaborator.
//!
//! Run with:
//!   cargo test --test `highlight_e2e` -- --nocapture

use luahl::highlight::{
    Category, CodeBlock, LUA_LANGUAGE_CLASS, LuaHighlighter, Token, highlight_blocks, spans,
};
use tracing::{Level, debug, info, span};

const CONFIG_LUA: &str = include_str!("fixtures/config.lua");
const EVENTS_LUA: &str = include_str!("fixtures/events.lua");
const QUERY_SQL: &str = include_str!("fixtures/query.sql");

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

fn assert_tokens_well_formed(tokens: &[Token], len: usize) {
    let mut last_end = 0usize;
    for token in tokens {
        assert!(token.start < token.end, "token has invalid span");
        assert!(token.end <= len, "token exceeds source length");
        assert!(token.start >= last_end, "token overlaps previous token");
        last_end = token.end;
    }
}

/// Drop tags and decode entities, recovering the text content of markup.
fn text_content(html: &str) -> String {
    let mut stripped = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn texts_of(source: &str, tokens: &[Token], category: Category) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| token.category == category)
        .map(|token| token.text(source).to_string())
        .collect()
}

#[test]
fn e2e_config_script() {
    init_logging();
    let span = span!(Level::INFO, "e2e_config_script");
    let _enter = span.enter();

    let highlighter = LuaHighlighter::lua();
    assert!(highlighter.looks_like_lua(CONFIG_LUA));

    let tokens = highlighter.tokenize(CONFIG_LUA);
    info!(token_count = tokens.len(), "config script tokenized");
    assert_tokens_well_formed(&tokens, CONFIG_LUA.len());

    let joined: String = spans(CONFIG_LUA, &tokens).map(|span| span.text).collect();
    assert_eq!(joined, CONFIG_LUA);

    let roots = texts_of(CONFIG_LUA, &tokens, Category::TableRoot);
    assert_eq!(roots.len(), CONFIG_LUA.matches("Config").count());

    let strings = texts_of(CONFIG_LUA, &tokens, Category::String);
    debug!(?strings, "string literals");
    assert!(strings.contains(&r#""My \"Test\" Server""#.to_string()));
    assert!(strings.contains(&"'Police'".to_string()));

    let numbers = texts_of(CONFIG_LUA, &tokens, Category::Number);
    assert_eq!(numbers, vec!["32", "0.5", "4", "2"]);

    let booleans = texts_of(CONFIG_LUA, &tokens, Category::Boolean);
    assert_eq!(booleans, vec!["false", "true", "false"]);

    let comments = texts_of(CONFIG_LUA, &tokens, Category::Comment);
    assert_eq!(comments, vec!["-- Server configuration"]);

    let accessed = texts_of(CONFIG_LUA, &tokens, Category::TableAccess);
    assert!(accessed.contains(&"MaxPlayers".to_string()));
    assert!(accessed.contains(&"IsStaff".to_string()));
    assert!(accessed.contains(&"player".to_string()));
    assert!(accessed.contains(&"group".to_string()));
}

#[test]
fn e2e_event_script_builtins() {
    init_logging();
    let highlighter = LuaHighlighter::lua();
    let tokens = highlighter.tokenize(EVENTS_LUA);
    assert_tokens_well_formed(&tokens, EVENTS_LUA.len());

    let builtins = texts_of(EVENTS_LUA, &tokens, Category::Builtin);
    debug!(?builtins, "builtin calls");
    for name in ["assert", "type", "pairs", "pcall", "print", "tostring"] {
        assert!(builtins.iter().any(|b| b == name), "missing builtin {name}");
    }

    let keywords = texts_of(EVENTS_LUA, &tokens, Category::Keyword);
    // "function" occurs once as a keyword and twice inside strings.
    assert_eq!(keywords.iter().filter(|k| *k == "function").count(), 1);
    assert!(keywords.iter().any(|k| k == "not"));
    assert!(keywords.iter().any(|k| k == "in"));
}

#[test]
fn e2e_markup_preserves_text() {
    init_logging();
    let highlighter = LuaHighlighter::lua();
    for source in [CONFIG_LUA, EVENTS_LUA, "if a < b and c > d then x = a & b end"] {
        let html = highlighter.highlight(source);
        assert_eq!(text_content(&html), source);
    }
}

#[test]
fn e2e_code_blocks_on_a_page() {
    init_logging();
    let highlighter = LuaHighlighter::lua();
    let mut blocks = vec![
        CodeBlock::new(CONFIG_LUA),
        CodeBlock::new(QUERY_SQL),
        CodeBlock::new(EVENTS_LUA),
    ];

    let highlighted = highlight_blocks(&highlighter, &mut blocks);
    info!(highlighted, "page processed");
    assert_eq!(highlighted, 2);

    assert!(blocks[0].has_class(LUA_LANGUAGE_CLASS));
    assert!(blocks[2].has_class(LUA_LANGUAGE_CLASS));

    let sql = &blocks[1];
    assert!(sql.markup().is_none());
    assert!(!sql.has_class(LUA_LANGUAGE_CLASS));
    assert!(!sql.rendered().contains("<span"));
}
