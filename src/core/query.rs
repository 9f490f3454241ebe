//! Query normalization: raw search text to lowercase tokens.

/// Characters that separate search terms. Runs of them count as one split.
pub const DELIMITERS: &[char] = &[' ', ',', ';', '-', '_', '+', '|', '&', '.'];

/// Split a raw query into lowercase, non-empty tokens.
///
/// An empty result means "match everything" and is produced for empty,
/// whitespace-only and delimiter-only queries alike.
pub fn tokenize(query: &str) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    query
        .to_lowercase()
        .split(DELIMITERS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
