//! HTML rendering of classified tokens.

use super::theme::ClassMap;
use super::token::{Token, spans};

/// Escape text for use in HTML element content or a quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Renders a token list as `<span class="...">` markup.
///
/// Tokens become sibling spans; text between tokens is emitted escaped and
/// otherwise unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlRenderer {
    classes: ClassMap,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(classes: ClassMap) -> Self {
        Self { classes }
    }

    #[must_use]
    pub fn classes(&self) -> &ClassMap {
        &self.classes
    }

    /// Render `source` with `tokens`, which must be sorted and non-overlapping.
    #[must_use]
    pub fn render(&self, source: &str, tokens: &[Token]) -> String {
        let mut out = String::with_capacity(source.len() + tokens.len() * 32);
        for span in spans(source, tokens) {
            match span.category {
                Some(category) => {
                    out.push_str("<span class=\"");
                    escape_into(&mut out, &self.classes.class_for(category));
                    out.push_str("\">");
                    escape_into(&mut out, span.text);
                    out.push_str("</span>");
                }
                None => escape_into(&mut out, span.text),
            }
        }
        out
    }
}
