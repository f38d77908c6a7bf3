use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Read every non-blank line of a generated deck
pub async fn read_deck_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .await
        .with_context(|| format!("Failed to open deck {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let mut deck = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read deck {}", path.display()))?
    {
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            deck.push(line.to_string());
        }
    }

    tracing::info!("Loaded {} deck lines from {}", deck.len(), path.display());

    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_deck_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.txt");
        tokio::fs::write(&path, "a;b;c;d\te\r\n\nf;g;h;i\tj\n")
            .await
            .unwrap();

        let lines = read_deck_lines(&path).await.unwrap();

        assert_eq!(lines, vec!["a;b;c;d\te", "f;g;h;i\tj"]);
    }
}
