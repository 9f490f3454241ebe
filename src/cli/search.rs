//! `search` and `copy` commands.

use std::time::Duration;

use anyhow::Context;

use crate::config::Config;
use crate::core::{filter, EmojiRecord};
use crate::error::FinderResult;
use crate::services::clipboard::{copy_with_notice, ArboardClipboard};
use crate::services::loader::{DatasetLoader, DatasetSource};
use crate::services::notify::{DesktopNotifier, Notifier};

/// Prints confirmations to the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str, _duration: Duration) -> FinderResult<()> {
        println!("{}", message);
        Ok(())
    }
}

/// One line per record: glyph, primary code point, name, keywords.
pub fn format_row(record: &EmojiRecord) -> String {
    if record.keywords.is_empty() {
        format!("{}\t{}\t{}", record.character, record.primary_code_point(), record.name)
    } else {
        format!(
            "{}\t{}\t{}\t({})",
            record.character,
            record.primary_code_point(),
            record.name,
            record.keyword_list()
        )
    }
}

pub async fn run_search(
    source: &DatasetSource,
    query: &str,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let mut loader = DatasetLoader::new();
    let dataset = loader.load(source).await;
    let matches = filter(dataset, query);
    let shown: Vec<&EmojiRecord> = matches
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No emojis found matching your search.");
        return Ok(());
    }

    for record in shown {
        println!("{}", format_row(record));
    }
    Ok(())
}

pub async fn run_copy(
    source: &DatasetSource,
    query: &str,
    index: usize,
    config: &Config,
) -> anyhow::Result<()> {
    let mut loader = DatasetLoader::new();
    let dataset = loader.load(source).await;
    let matches = filter(dataset, query);

    let record = matches
        .get(index)
        .with_context(|| format!("No match #{} for {:?} ({} found)", index, query, matches.len()))?;

    let clipboard = ArboardClipboard::new().context("Clipboard not available")?;
    let mut notifier: Box<dyn Notifier> = if config.notifications.desktop {
        Box::new(DesktopNotifier::new("Unicode Finder"))
    } else {
        Box::new(TerminalNotifier)
    };

    copy_with_notice(
        &clipboard,
        notifier.as_mut(),
        &record.character,
        config.notifications.copied_duration(),
    )
    .context("Failed to copy")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row() {
        let record = EmojiRecord::new("👨‍💻", "U+1F468_200D_1F4BB", "man technologist", &["coder", "developer"]);
        assert_eq!(format_row(&record), "👨‍💻\tU+1F468\tman technologist\t(coder, developer)");

        let bare = EmojiRecord::new("🐢", "U+1F422", "turtle", &[]);
        assert_eq!(format_row(&bare), "🐢\tU+1F422\tturtle");
    }

    #[tokio::test]
    async fn test_search_bundled_runs() {
        run_search(&DatasetSource::Bundled, "dog", Some(1), true)
            .await
            .unwrap();
    }
}
