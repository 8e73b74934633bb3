//! Token types for syntax highlighting.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::Error;

/// Lexical categories assigned by the highlighter.
///
/// The set is closed: renderers can rely on exactly these ten entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Comment,
    String,
    Number,
    Boolean,
    /// Reserved root table of a configuration script (`Config`).
    TableRoot,
    Keyword,
    /// Allow-listed standard library function.
    Builtin,
    Operator,
    Punctuation,
    /// Identifier on either side of a dotted table access.
    TableAccess,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 10;

    /// All categories in pass order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Comment,
        Category::String,
        Category::Number,
        Category::Boolean,
        Category::TableRoot,
        Category::Keyword,
        Category::Builtin,
        Category::Operator,
        Category::Punctuation,
        Category::TableAccess,
    ];

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Stable identifier emitted to renderers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Number => "number",
            Category::Boolean => "boolean",
            Category::TableRoot => "table-root",
            Category::Keyword => "keyword",
            Category::Builtin => "builtin",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::TableAccess => "table-access",
        }
    }

    /// Look up a category by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == name)
            .ok_or_else(|| Error::UnknownCategory(name.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// A classified byte range of the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[must_use]
    pub fn new(category: Category, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "token range must be start <= end");
        Self {
            category,
            start,
            end,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Source slice covered by this token.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }
}

/// A slice of source text, either classified or plain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSpan<'a> {
    pub category: Option<Category>,
    pub text: &'a str,
}

/// Walk `source` as an ordered sequence of spans: every token plus the
/// unclassified text between tokens.
///
/// `tokens` must be sorted and non-overlapping.
pub fn spans<'a>(source: &'a str, tokens: &'a [Token]) -> impl Iterator<Item = TokenSpan<'a>> {
    let mut out = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut cursor = 0usize;
    for token in tokens {
        if token.start > cursor {
            out.push(TokenSpan {
                category: None,
                text: &source[cursor..token.start],
            });
        }
        out.push(TokenSpan {
            category: Some(token.category),
            text: token.text(source),
        });
        cursor = token.end;
    }
    if cursor < source.len() {
        out.push(TokenSpan {
            category: None,
            text: &source[cursor..],
        });
    }
    out.into_iter()
}
