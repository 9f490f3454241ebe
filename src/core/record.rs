//! Emoji records and the shared, immutable dataset they live in.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// Separator between code points of a composite emoji (`U+1F468_200D_1F4BB`).
pub const CODE_POINT_SEPARATOR: char = '_';

/// One emoji entry of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiRecord {
    /// The rendered glyph, possibly several code points long
    pub character: String,
    /// Code point identifier, composite values joined by `_`
    pub code_point: String,
    /// Human-readable label
    pub name: String,
    /// Search tags (CLDR annotations)
    pub keywords: Vec<String>,
}

impl EmojiRecord {
    pub fn new(character: &str, code_point: &str, name: &str, keywords: &[&str]) -> Self {
        Self {
            character: character.to_string(),
            code_point: code_point.to_string(),
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// First code point of a composite identifier, shown under the name in the grid
    pub fn primary_code_point(&self) -> &str {
        self.code_point
            .split(CODE_POINT_SEPARATOR)
            .next()
            .unwrap_or(&self.code_point)
    }

    /// Keywords as a comma-separated string
    pub fn keyword_list(&self) -> String {
        self.keywords.join(", ")
    }
}

/// The wire shape of the dataset document: `{ "emojis": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmojiDocument {
    pub emojis: Vec<EmojiRecord>,
}

/// Ordered, write-once sequence of records.
///
/// Cloning shares the underlying allocation, so identity comparison via
/// [`Dataset::same_as`] tells whether two handles come from the same load.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[EmojiRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<EmojiRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// True if both handles point to the same loaded sequence
    pub fn same_as(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }

    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Dataset {
    type Target = [EmojiRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<EmojiDocument> for Dataset {
    fn from(doc: EmojiDocument) -> Self {
        Self::new(doc.emojis)
    }
}
