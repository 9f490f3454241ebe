//! `generate` command.

use std::path::PathBuf;

use anyhow::Context;

use crate::services::generate;
use crate::services::loader::default_dataset_path;

pub async fn run_generate(output: Option<PathBuf>) -> anyhow::Result<()> {
    let output = match output {
        Some(path) => path,
        None => default_dataset_path().context("Could not find data directory")?,
    };

    let count = generate::generate(&output)
        .await
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    println!("Emoji data has been saved to {} ({} emojis)", output.display(), count);
    Ok(())
}
