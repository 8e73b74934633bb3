//! Lua syntax highlighting and markup rendering.

pub mod claims;
pub mod config;
pub mod container;
pub mod lua;
pub mod render;
pub mod theme;
pub mod token;


pub use claims::ClaimSet;
pub use config::{CategorySet, HighlightConfig};
pub use container::{CodeBlock, CodeContainer, LUA_LANGUAGE_CLASS, highlight_blocks};
pub use lua::LuaHighlighter;
pub use render::{HtmlRenderer, escape_html};
pub use theme::ClassMap;
pub use token::{Category, Token, TokenSpan, spans};
