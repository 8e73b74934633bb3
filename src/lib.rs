//! `luahl` - Lua snippet highlighting for documentation pages
//!
//! Classifies Lua-like configuration code into a fixed set of lexical
//! categories and renders it as class-tagged HTML spans.

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow highlight::HighlightConfig etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod error;
pub mod event;
pub mod highlight;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use highlight::{
    Category, CategorySet, ClassMap, CodeBlock, CodeContainer, HighlightConfig, HtmlRenderer,
    LuaHighlighter, Token, TokenSpan, highlight_blocks,
};
