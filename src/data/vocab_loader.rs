// ============================================================
// Layer 4 — Vocabulary Loader
// ============================================================
// Loads a vocabulary file into the domain Vocabulary type.
//
// File format: plain text, one token per line, and the line
// order defines the ids:
//   dog        → {"dog": 0, "cat": 1}
//   cat        → reversed: ["dog", "cat"]
//
// Only trailing whitespace is stripped from each line — a
// token is otherwise taken exactly as written, so vocabularies
// with leading-space markers survive loading unchanged.
//
// A missing file is a fatal error naming the path. It must
// never degrade into an empty vocabulary: every id produced
// downstream would silently become the unknown sentinel.
//
// Reference: Rust Book §9 (Error Handling), §12 (Reading Files)

use anyhow::{bail, Context, Result};
use std::{fs, path::Path};

use crate::domain::vocabulary::Vocabulary;

/// Load a vocabulary from a one-token-per-line file.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    if !path.exists() {
        bail!("Vocabulary file '{}' not found.", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read vocabulary file '{}'", path.display()))?;

    // Strip trailing whitespace/newlines only; line order = id order
    let tokens: Vec<String> = content
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();

    let vocab = Vocabulary::from_tokens(tokens);
    tracing::debug!("Loaded {} tokens from '{}'", vocab.len(), path.display());

    Ok(vocab)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_line_ordered_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab10.en");
        fs::write(&path, "_PAD\n_GO\n_EOS\n_UNK\ndog\ncat\n").unwrap();

        let vocab = load_vocabulary(&path).unwrap();
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.id("dog"), Some(4));
        assert_eq!(vocab.token(5), Some("cat"));
    }

    #[test]
    fn test_trailing_whitespace_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.en");
        fs::write(&path, "dog \t\ncat\r\n").unwrap();

        let vocab = load_vocabulary(&path).unwrap();
        assert_eq!(vocab.id("dog"), Some(0));
        assert_eq!(vocab.id("cat"), Some(1));
    }

    #[test]
    fn test_missing_file_is_fatal_not_empty() {
        let err = load_vocabulary(Path::new("/no/such/vocab.en")).unwrap_err();
        assert!(err.to_string().contains("/no/such/vocab.en"));
    }
}
