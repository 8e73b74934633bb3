//! Lua snippet highlighter.
//!
//! Classification runs as a fixed sequence of passes over the original text.
//! Every pass claims byte ranges in a [`ClaimSet`] and only searches the gaps
//! left by earlier passes, so categories assigned first take precedence:
//!
//! 1. comments, 2. strings, 3. numbers, 4. booleans, 5. table roots,
//! 6. keywords, 7. builtin functions, 8. operators, 9. punctuation,
//! 10. dotted table access.
//!
//! Strings and comments never span lines. Long brackets (`[[ ]]`, `--[[ ]]`)
//! are not recognized; `--[[` reads as a line comment.

use once_cell::sync::Lazy;
use regex::Regex;

use super::claims::ClaimSet;
use super::config::HighlightConfig;
use super::render::HtmlRenderer;
use super::token::{Category, Token};
use crate::error::Result;

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"--[^\r\n]*").unwrap());

static STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:\\[^\r\n]|[^"\\\r\n])*"|'(?:\\[^\r\n]|[^'\\\r\n])*'"#).unwrap()
});

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]+\.?[0-9]*\b").unwrap());

static OPERATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[=+\-*/%<>~!&|]+").unwrap());

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[{}\[\]();,]").unwrap());

static TABLE_ACCESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z0-9_]+)\.([A-Za-z0-9_]+)").unwrap());

fn word_pattern(words: &[String]) -> Result<Option<Regex>> {
    if words.is_empty() {
        return Ok(None);
    }
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Some(Regex::new(&format!(r"\b(?:{alternation})\b"))?))
}

/// Claim every match of `pattern` that lies inside an unclaimed gap.
fn claim_in_gaps(claims: &mut ClaimSet, source: &str, category: Category, pattern: &Regex) {
    for gap in claims.gaps(source.len()) {
        // Cutting the haystack at the gap end keeps matches inside the gap
        // while the text before the gap still informs `\b`.
        let haystack = &source[..gap.end];
        let mut pos = gap.start;
        while pos < gap.end {
            let Some(found) = pattern.find_at(haystack, pos) else {
                break;
            };
            if found.is_empty() {
                pos = next_char_boundary(source, found.end());
                continue;
            }
            claims.claim(category, found.range());
            pos = found.end();
        }
    }
}

fn next_char_boundary(source: &str, pos: usize) -> usize {
    source[pos..]
        .chars()
        .next()
        .map_or(source.len(), |c| pos + c.len_utf8())
}

/// Claim `left.right` paths: each still-unclaimed side becomes a table
/// access identifier and the dot becomes punctuation. Sides an earlier pass
/// classified keep their category. Chains such as `a.b.c` are followed.
fn claim_table_access(claims: &mut ClaimSet, source: &str) {
    let mut pos = 0usize;
    while pos < source.len() {
        let Some(caps) = TABLE_ACCESS.captures_at(source, pos) else {
            break;
        };
        let (Some(left), Some(right)) = (caps.get(1), caps.get(2)) else {
            break;
        };
        pos = right.start();

        let dot = left.end()..right.start();
        if !claims.is_free(dot.clone()) {
            continue;
        }
        if claims.is_free(left.range()) {
            claims.claim(Category::TableAccess, left.range());
        }
        claims.claim(Category::Punctuation, dot);
        if claims.is_free(right.range()) {
            claims.claim(Category::TableAccess, right.range());
        }
    }
}

/// Highlighter for Lua-like configuration snippets.
///
/// Built once from a [`HighlightConfig`] and shared read-only; each call
/// keeps its working state local.
#[derive(Clone, Debug)]
pub struct LuaHighlighter {
    config: HighlightConfig,
    word_patterns: Vec<(Category, Regex)>,
    renderer: HtmlRenderer,
}

impl LuaHighlighter {
    /// Build a highlighter, validating the config and compiling word lists.
    pub fn new(config: HighlightConfig) -> Result<Self> {
        config.validate()?;
        let mut word_patterns = Vec::new();
        for category in Category::ALL {
            if let Some(words) = config.words_for(category) {
                if let Some(pattern) = word_pattern(words)? {
                    word_patterns.push((category, pattern));
                }
            }
        }
        let renderer = HtmlRenderer::new(config.classes().clone());
        Ok(Self {
            config,
            word_patterns,
            renderer,
        })
    }

    /// Highlighter for the built-in Lua configuration.
    #[must_use]
    pub fn lua() -> Self {
        Self::new(HighlightConfig::lua()).expect("built-in config is valid")
    }

    #[must_use]
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }

    /// Detection gate: true if `text` contains any detection marker.
    ///
    /// A substring heuristic, not a grammar check.
    #[must_use]
    pub fn looks_like_lua(&self, text: &str) -> bool {
        self.config
            .detection_markers()
            .iter()
            .any(|marker| text.contains(marker.as_str()))
    }

    fn pattern_for(&self, category: Category) -> Option<&Regex> {
        match category {
            Category::Comment => Some(&*COMMENT),
            Category::String => Some(&*STRING),
            Category::Number => Some(&*NUMBER),
            Category::Operator => Some(&*OPERATOR),
            Category::Punctuation => Some(&*PUNCTUATION),
            Category::Boolean | Category::TableRoot | Category::Keyword | Category::Builtin => self
                .word_patterns
                .iter()
                .find(|(kind, _)| *kind == category)
                .map(|(_, pattern)| pattern),
            Category::TableAccess => None,
        }
    }

    /// Classify `source` into sorted, non-overlapping tokens.
    #[must_use]
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let enabled = self.config.enabled();
        let mut claims = ClaimSet::new();
        for category in Category::ALL {
            if !enabled.includes(category) {
                continue;
            }
            if category == Category::TableAccess {
                claim_table_access(&mut claims, source);
            } else if let Some(pattern) = self.pattern_for(category) {
                claim_in_gaps(&mut claims, source, category, pattern);
            }
        }
        claims.into_tokens()
    }

    /// Highlight `source` unconditionally, returning rendered markup.
    #[must_use]
    pub fn highlight(&self, source: &str) -> String {
        let tokens = self.tokenize(source);
        self.renderer.render(source, &tokens)
    }

    /// Highlight `source` only if it passes the detection gate.
    #[must_use]
    pub fn highlight_if_lua(&self, source: &str) -> Option<String> {
        self.looks_like_lua(source).then(|| self.highlight(source))
    }
}

impl Default for LuaHighlighter {
    fn default() -> Self {
        Self::lua()
    }
}
