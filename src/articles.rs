//! Built-in article list.
//!
//! These are the articles resolved when no `--articles` file is given. The
//! grouping comments are informational only; the list is processed in order.

/// Article URLs resolved by default, in processing order.
pub const DEFAULT_ARTICLES: &[&str] = &[
    // Writing 2025
    "https://www.asimov.press/p/arabidopsis",
    "https://www.asimov.press/p/broad-antivenom",
    "https://www.asimov.press/p/leeches",
    "https://www.asimov.press/p/food-futurism",
    "https://www.asimov.press/p/barcoding-brains",
    "https://longnow.org/ideas/pantone-02123/",
    // Writing 2024
    "https://worksinprogress.co/issue/animals-as-chemical-factories/",
    "https://www.asimov.press/p/rodent-welfare",
    "https://www.asimov.press/p/lessons-on-starting-a-magazine",
    // Fiction
    "https://press.asimov.com/articles/obit",
    "https://www.asimov.press/p/farma",
    "https://www.asimov.press/p/the-vector-zoo",
];

/// Owned copy of [`DEFAULT_ARTICLES`].
pub fn default_articles() -> Vec<String> {
    DEFAULT_ARTICLES.iter().map(|s| s.to_string()).collect()
}
