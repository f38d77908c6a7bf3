use std::path::Path;

use anyhow::{Context, Result};
use giongo_core::preprocess::{DefaultPreprocessor, Preprocessor};
use giongo_types::InputItem;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Read the word list, one item per line, starting at the 1-based `start_line`.
///
/// Earlier lines are skipped entirely so an interrupted run can be resumed.
pub async fn read_word_list(path: &Path, start_line: usize) -> Result<Vec<InputItem>> {
    let file = File::open(path)
        .await
        .with_context(|| format!("Failed to open word list {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();
    let preprocessor = DefaultPreprocessor;

    let mut items = Vec::new();
    let mut line_number = 0;
    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read word list {}", path.display()))?
    {
        line_number += 1;

        if line_number < start_line {
            tracing::debug!("Skipping {}", line);
            continue;
        }

        match preprocessor.process_line(&line) {
            Some(text) => items.push(InputItem::new(line_number, text)),
            None => tracing::debug!("Skipping blank line {line_number}"),
        }
    }

    tracing::info!(
        "Loaded {} items from {} (starting at line {start_line})",
        items.len(),
        path.display()
    );

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn write_list(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("giongo.txt");
        tokio::fs::write(&path, contents).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_reads_every_line_from_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_list(&dir, "わんわん\tワンワン\nにゃー\tニャー\n").await;

        let items = read_word_list(&path, 1).await.unwrap();

        assert_eq!(
            items,
            vec![
                InputItem::new(1, "わんわん\tワンワン"),
                InputItem::new(2, "にゃー\tニャー"),
            ]
        );
    }

    #[tokio::test]
    async fn test_skips_lines_before_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_list(&dir, "a\nb\nc\nd\n").await;

        let items = read_word_list(&path, 3).await.unwrap();

        assert_eq!(items, vec![InputItem::new(3, "c"), InputItem::new(4, "d")]);
    }

    #[tokio::test]
    async fn test_skips_blank_lines_and_carriage_returns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_list(&dir, "a\r\n\r\nb\r\n").await;

        let items = read_word_list(&path, 1).await.unwrap();

        assert_eq!(items, vec![InputItem::new(1, "a"), InputItem::new(3, "b")]);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_word_list(&dir.path().join("missing.txt"), 1).await;
        assert!(result.is_err());
    }
}
