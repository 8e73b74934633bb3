//! Immutable highlighter configuration.
//!
//! A config is assembled with `with_*` builders, validated once when a
//! [`LuaHighlighter`](super::LuaHighlighter) is built from it, and never
//! mutated afterwards.

use bitflags::bitflags;

use super::theme::ClassMap;
use super::token::Category;
use crate::error::{Error, Result};

/// Lua reserved words.
pub const LUA_KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in", "local",
    "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Boolean literals, classified ahead of the keyword list.
pub const LUA_BOOLEANS: &[&str] = &["true", "false"];

/// Root table exposed by configuration scripts.
pub const CONFIG_TABLE_ROOTS: &[&str] = &["Config"];

/// Standard library functions that get the builtin category.
pub const LUA_BUILTINS: &[&str] = &[
    "print",
    "type",
    "tostring",
    "tonumber",
    "pairs",
    "ipairs",
    "next",
    "getmetatable",
    "setmetatable",
    "rawget",
    "rawset",
    "rawequal",
    "pcall",
    "xpcall",
    "error",
    "assert",
];

/// Substrings that make a code block count as Lua.
pub const LUA_DETECTION_MARKERS: &[&str] = &["Config", "function", "local", "--"];

bitflags! {
    /// Set of categories whose pass is enabled.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct CategorySet: u16 {
        const COMMENT      = 1 << 0;
        const STRING       = 1 << 1;
        const NUMBER       = 1 << 2;
        const BOOLEAN      = 1 << 3;
        const TABLE_ROOT   = 1 << 4;
        const KEYWORD      = 1 << 5;
        const BUILTIN      = 1 << 6;
        const OPERATOR     = 1 << 7;
        const PUNCTUATION  = 1 << 8;
        const TABLE_ACCESS = 1 << 9;
    }
}

impl CategorySet {
    /// Flag for a single category.
    #[must_use]
    pub const fn of(category: Category) -> Self {
        match category {
            Category::Comment => Self::COMMENT,
            Category::String => Self::STRING,
            Category::Number => Self::NUMBER,
            Category::Boolean => Self::BOOLEAN,
            Category::TableRoot => Self::TABLE_ROOT,
            Category::Keyword => Self::KEYWORD,
            Category::Builtin => Self::BUILTIN,
            Category::Operator => Self::OPERATOR,
            Category::Punctuation => Self::PUNCTUATION,
            Category::TableAccess => Self::TABLE_ACCESS,
        }
    }

    #[must_use]
    pub fn includes(self, category: Category) -> bool {
        self.contains(Self::of(category))
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, category| set | Self::of(category))
    }
}

/// Word lists, detection markers and class names for one highlighter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightConfig {
    keywords: Vec<String>,
    booleans: Vec<String>,
    table_roots: Vec<String>,
    builtins: Vec<String>,
    detection_markers: Vec<String>,
    enabled: CategorySet,
    classes: ClassMap,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

fn collect<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words.into_iter().map(Into::into).collect()
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

impl HighlightConfig {
    /// Built-in configuration for Lua configuration snippets.
    #[must_use]
    pub fn lua() -> Self {
        Self {
            keywords: owned(LUA_KEYWORDS),
            booleans: owned(LUA_BOOLEANS),
            table_roots: owned(CONFIG_TABLE_ROOTS),
            builtins: owned(LUA_BUILTINS),
            detection_markers: owned(LUA_DETECTION_MARKERS),
            enabled: CategorySet::all(),
            classes: ClassMap::lua(),
        }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = collect(words);
        self
    }

    #[must_use]
    pub fn with_booleans<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.booleans = collect(words);
        self
    }

    #[must_use]
    pub fn with_table_roots<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table_roots = collect(words);
        self
    }

    #[must_use]
    pub fn with_builtins<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builtins = collect(words);
        self
    }

    #[must_use]
    pub fn with_detection_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.detection_markers = collect(markers);
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: CategorySet) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_classes(mut self, classes: ClassMap) -> Self {
        self.classes = classes;
        self
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn booleans(&self) -> &[String] {
        &self.booleans
    }

    pub fn table_roots(&self) -> &[String] {
        &self.table_roots
    }

    pub fn builtins(&self) -> &[String] {
        &self.builtins
    }

    pub fn detection_markers(&self) -> &[String] {
        &self.detection_markers
    }

    #[must_use]
    pub fn enabled(&self) -> CategorySet {
        self.enabled
    }

    #[must_use]
    pub fn classes(&self) -> &ClassMap {
        &self.classes
    }

    /// Word list feeding the pass of a word-based category.
    #[must_use]
    pub fn words_for(&self, category: Category) -> Option<&[String]> {
        match category {
            Category::Boolean => Some(self.booleans.as_slice()),
            Category::TableRoot => Some(self.table_roots.as_slice()),
            Category::Keyword => Some(self.keywords.as_slice()),
            Category::Builtin => Some(self.builtins.as_slice()),
            _ => None,
        }
    }

    /// Check that every word list entry is an identifier and every marker is
    /// non-empty.
    pub fn validate(&self) -> Result<()> {
        let lists: [(&'static str, &[String]); 4] = [
            ("keyword", self.keywords.as_slice()),
            ("boolean", self.booleans.as_slice()),
            ("table root", self.table_roots.as_slice()),
            ("builtin", self.builtins.as_slice()),
        ];
        for (list, words) in lists {
            if let Some(word) = words.iter().find(|word| !is_identifier(word)) {
                return Err(Error::InvalidWord {
                    list,
                    word: word.clone(),
                });
            }
        }
        if self.detection_markers.iter().any(String::is_empty) {
            return Err(Error::EmptyMarker);
        }
        Ok(())
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::lua()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_is_valid() {
        let config = HighlightConfig::lua();
        assert!(config.validate().is_ok());
        assert_eq!(config.keywords().len(), 21);
        assert_eq!(config.builtins().len(), 16);
        assert_eq!(config.enabled(), CategorySet::all());
    }

    #[test]
    fn rejects_non_identifier_words() {
        let err = HighlightConfig::lua()
            .with_builtins(["print", "string.format"])
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidWord { list: "builtin", .. }));

        let err = HighlightConfig::lua()
            .with_keywords(["9lives"])
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidWord { list: "keyword", .. }));

        assert!(
            HighlightConfig::lua()
                .with_table_roots([""])
                .validate()
                .is_err()
        );
    }

    #[test]
    fn rejects_empty_marker() {
        let err = HighlightConfig::lua()
            .with_detection_markers(["local", ""])
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::EmptyMarker));
    }

    #[test]
    fn category_set_from_categories() {
        let set: CategorySet = [Category::Comment, Category::String].into_iter().collect();
        assert!(set.includes(Category::Comment));
        assert!(set.includes(Category::String));
        assert!(!set.includes(Category::Keyword));
        for category in Category::ALL {
            assert!(CategorySet::default().includes(category));
        }
    }

    #[test]
    fn word_lists_by_category() {
        let config = HighlightConfig::lua().with_table_roots(["Settings"]);
        assert_eq!(
            config.words_for(Category::TableRoot),
            Some(&["Settings".to_string()][..])
        );
        assert!(config.words_for(Category::Operator).is_none());
    }
}
