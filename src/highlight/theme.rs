use crate::highlight::token::Category;

/// Maps each category to the markup class a renderer wraps it in.
///
/// Styling lives in the page stylesheet; the map only decides class names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassMap {
    prefix: String,
    classes: [String; Category::COUNT],
}

impl ClassMap {
    /// Create a class map using the built-in suffixes and the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            classes: Category::ALL.map(|category| Self::builtin_suffix(category).to_string()),
        }
    }

    /// The classes used by documentation pages: `lua-comment`, `lua-string`, ...
    #[must_use]
    pub fn lua() -> Self {
        Self::new("lua-")
    }

    const fn builtin_suffix(category: Category) -> &'static str {
        match category {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Number => "number",
            Category::Boolean => "boolean",
            Category::TableRoot => "table",
            Category::Keyword => "keyword",
            Category::Builtin => "function",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::TableAccess => "variable",
        }
    }

    /// Class prefix shared by every entry.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Full class name for a category.
    #[must_use]
    pub fn class_for(&self, category: Category) -> String {
        format!("{}{}", self.prefix, self.classes[category.as_usize()])
    }

    /// Set the class suffix for a category.
    pub fn set_class(&mut self, category: Category, class: impl Into<String>) -> &mut Self {
        self.classes[category.as_usize()] = class.into();
        self
    }

    /// Builder-style class setter.
    #[must_use]
    pub fn with_class(mut self, category: Category, class: impl Into<String>) -> Self {
        self.set_class(category, class);
        self
    }

    /// Builder-style prefix setter.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Iterate `(category, class)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, String)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.class_for(category)))
    }
}

impl Default for ClassMap {
    fn default() -> Self {
        Self::lua()
    }
}
