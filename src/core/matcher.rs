//! Record matching: glyph fast path, then AND over tokens of name-or-keyword containment.

use super::query::tokenize;
use super::record::EmojiRecord;

/// A committed query prepared for matching against many records.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    raw: &'a str,
    tokens: Vec<String>,
}

impl<'a> Query<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            tokens: tokenize(raw),
        }
    }

    pub fn raw(&self) -> &str {
        self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when the query places no constraint on results
    pub fn matches_everything(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Decide whether `record` belongs in the visible results.
    pub fn matches(&self, record: &EmojiRecord) -> bool {
        // Pasting the glyph itself matches directly, case and delimiters untouched
        if !self.raw.is_empty() && record.character.contains(self.raw) {
            return true;
        }

        if self.tokens.is_empty() {
            return true;
        }

        let name = record.name.to_lowercase();

        self.tokens.iter().all(|token| {
            name.contains(token.as_str())
                || record
                    .keywords
                    .iter()
                    .any(|k| keyword_contains(k, token))
        })
    }
}

/// Case-insensitive containment in a keyword, lowercasing only when needed.
fn keyword_contains(keyword: &str, token: &str) -> bool {
    let keyword = keyword.trim();
    if keyword.contains(token) {
        return true;
    }
    // Allocate only for keywords that lowercasing would change
    let folds = keyword.chars().any(|c| c.to_lowercase().ne(std::iter::once(c)));
    folds && keyword.to_lowercase().contains(token)
}

/// Convenience wrapper for a one-off check.
pub fn matches(raw_query: &str, record: &EmojiRecord) -> bool {
    Query::parse(raw_query).matches(record)
}
