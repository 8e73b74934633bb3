//! Code containers: the page elements that hold code text.

use super::lua::LuaHighlighter;
use super::render::escape_html;
use crate::event::{LogLevel, emit_log};

/// Class added to a container once its content is highlighted as Lua.
pub const LUA_LANGUAGE_CLASS: &str = "lua";

/// A rendering collaborator holding one block of code.
pub trait CodeContainer {
    /// Plain text content of the block.
    fn text(&self) -> &str;

    /// Replace the block content with rendered markup.
    fn set_markup(&mut self, markup: String);

    /// Tag the block (or its wrapper) with a class.
    fn add_class(&mut self, _class: &str) {}
}

/// In-memory code block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeBlock {
    text: String,
    markup: Option<String>,
    classes: Vec<String>,
}

impl CodeBlock {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: None,
            classes: Vec::new(),
        }
    }

    /// Markup written by the highlighter, if any.
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Content as it would be rendered: the markup if highlighted, else the
    /// escaped text.
    #[must_use]
    pub fn rendered(&self) -> String {
        self.markup
            .clone()
            .unwrap_or_else(|| escape_html(&self.text))
    }
}

impl CodeContainer for CodeBlock {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_markup(&mut self, markup: String) {
        self.markup = Some(markup);
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}

/// Highlight every block that passes the detection gate.
///
/// Blocks are independent; the rest are left untouched. Returns the number of
/// blocks highlighted.
pub fn highlight_blocks<C: CodeContainer>(highlighter: &LuaHighlighter, blocks: &mut [C]) -> usize {
    let mut highlighted = 0usize;
    for (index, block) in blocks.iter_mut().enumerate() {
        let Some(markup) = highlighter.highlight_if_lua(block.text()) else {
            emit_log(
                LogLevel::Debug,
                &format!("code block {index}: no Lua markers, left as is"),
            );
            continue;
        };
        emit_log(
            LogLevel::Debug,
            &format!("code block {index}: highlighted {} bytes", block.text().len()),
        );
        block.set_markup(markup);
        block.add_class(LUA_LANGUAGE_CLASS);
        highlighted += 1;
    }
    highlighted
}
