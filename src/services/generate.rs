//! Dataset generation from Unicode and CLDR sources.
//!
//! `emoji-test.txt` provides every fully-qualified emoji with its code points
//! and name; the CLDR English annotations provide the keyword lists. The two
//! are joined by glyph into the `{ "emojis": [...] }` document the loader reads.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{EmojiDocument, EmojiRecord};
use crate::error::{FinderError, FinderResult};

pub const EMOJI_TEST_URL: &str = "https://unicode.org/Public/emoji/latest/emoji-test.txt";
pub const CLDR_ANNOTATIONS_URL: &str =
    "https://raw.githubusercontent.com/unicode-org/cldr/main/common/annotations/en.xml";

// 1F600 ; fully-qualified # 😀 E1.0 grinning face
static EMOJI_TEST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-F ]+?)\s*;\s*fully-qualified\s*#\s*(\S+)\s+(?:E\d+\.\d+\s+)?(.+)$")
        .expect("static regex")
});

// <annotation cp="😀">face | grin</annotation>
static ANNOTATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<annotation cp="([^"]+)"(\s+type="tts")?>([^<]+)</annotation>"#)
        .expect("static regex")
});

/// Glyph, code point identifier and name of one emoji-test entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiTestEntry {
    pub character: String,
    pub code_point: String,
    pub name: String,
}

/// Fully-qualified entries of `emoji-test.txt`, in file order.
///
/// A glyph listed twice keeps its first position and takes the later values.
pub fn parse_emoji_test(text: &str) -> Vec<EmojiTestEntry> {
    let mut entries: Vec<EmojiTestEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for line in text.lines() {
        let Some(caps) = EMOJI_TEST_LINE.captures(line.trim()) else {
            continue;
        };

        let code_points: Vec<&str> = caps[1].split_whitespace().collect();
        if code_points.is_empty() {
            continue;
        }

        let entry = EmojiTestEntry {
            character: caps[2].to_string(),
            code_point: format!("U+{}", code_points.join("_")),
            name: caps[3].trim().to_string(),
        };

        match positions.get(&entry.character) {
            Some(&idx) => entries[idx] = entry,
            None => {
                positions.insert(entry.character.clone(), entries.len());
                entries.push(entry);
            }
        }
    }

    entries
}

/// Keyword lists per glyph from the CLDR annotations file.
pub fn parse_cldr_annotations(xml: &str) -> HashMap<String, Vec<String>> {
    let mut annotations: HashMap<String, Vec<String>> = HashMap::new();

    for caps in ANNOTATION_LINE.captures_iter(xml) {
        // Text-to-speech entries repeat the name, not keywords
        if caps.get(2).is_some() {
            continue;
        }

        let keywords = annotations.entry(unescape_xml(&caps[1])).or_default();
        keywords.extend(
            caps[3]
                .split('|')
                .map(|k| unescape_xml(k.trim()))
                .filter(|k| !k.is_empty()),
        );
    }

    annotations
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Join both sources into a dataset document.
pub fn build_document(emoji_test: &str, annotations_xml: &str) -> EmojiDocument {
    let mut annotations = parse_cldr_annotations(annotations_xml);

    let emojis = parse_emoji_test(emoji_test)
        .into_iter()
        .map(|entry| {
            let keywords = annotations.remove(&entry.character).unwrap_or_default();
            EmojiRecord {
                character: entry.character,
                code_point: entry.code_point,
                name: entry.name,
                keywords,
            }
        })
        .collect();

    EmojiDocument { emojis }
}

/// Download `emoji-test.txt` and the CLDR annotations.
pub async fn fetch_sources() -> FinderResult<(String, String)> {
    let client = reqwest::Client::new();
    let emoji_test = fetch_text(&client, EMOJI_TEST_URL).await?;
    let annotations = fetch_text(&client, CLDR_ANNOTATIONS_URL).await?;
    Ok((emoji_test, annotations))
}

async fn fetch_text(client: &reqwest::Client, url: &str) -> FinderResult<String> {
    tracing::info!(url, "Downloading");
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(text)
}

/// Download both sources and write the dataset document to `output`.
///
/// Returns the number of records written.
pub async fn generate(output: &Path) -> FinderResult<usize> {
    let (emoji_test, annotations) = fetch_sources().await?;
    let document = build_document(&emoji_test, &annotations);
    if document.emojis.is_empty() {
        return Err(FinderError::Generator(
            "No fully-qualified emoji found in emoji-test.txt".to_string(),
        ));
    }

    write_document(&document, output).await?;
    Ok(document.emojis.len())
}

/// Write `document` as pretty JSON, creating parent directories.
pub async fn write_document(document: &EmojiDocument, output: &Path) -> FinderResult<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(document)?;
    tokio::fs::write(output, json).await?;
    tracing::info!(path = %output.display(), count = document.emojis.len(), "Emoji data saved");
    Ok(())
}
