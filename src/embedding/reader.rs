// ============================================================
// Layer 5 — Embedding File Reader
// ============================================================
// Parses a pretrained embedding file in the word2vec text
// format:
//
//   142507 300              ← header: word count, dimension
//   the 0.418 0.24968 ...   ← token followed by 300 floats
//   , 0.013441 0.23682 ...
//
// Only the second header field matters here: the declared
// dimension must equal the dimension the model was configured
// with, otherwise the run fails immediately rather than
// training on silently truncated vectors.
//
// Each vector line must carry exactly `dim` float values;
// a malformed line is fatal with its line number.

use anyhow::{anyhow, ensure, Context, Result};
use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// A parsed embedding file: the dimension and one vector per token.
/// Duplicate tokens in the file keep the last vector seen.
#[derive(Debug, Clone)]
pub struct EmbeddingFile {
    /// Dimension of every vector (validated against the header)
    pub dim: usize,

    /// token -> pretrained vector, each of length `dim`
    pub vectors: HashMap<String, Vec<f32>>,
}

/// Read and validate a pretrained embedding file.
pub fn read_embedding_file(path: &Path, expected_dim: usize) -> Result<EmbeddingFile> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open embedding file '{}'", path.display()))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    // ── Header: "<count> <dimension>" ─────────────────────────────────────────
    let header = lines
        .next()
        .ok_or_else(|| anyhow!("Embedding file '{}' is empty", path.display()))?
        .with_context(|| format!("Cannot read header of '{}'", path.display()))?;

    let declared: usize = header
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| anyhow!("Malformed header {:?} in '{}'", header, path.display()))?
        .parse()
        .with_context(|| format!("Malformed header {:?} in '{}'", header, path.display()))?;

    ensure!(
        declared == expected_dim,
        "wrong embedding size in '{}': file declares {}, expected {}",
        path.display(),
        declared,
        expected_dim,
    );

    // ── Vector lines: "<token> <f32> x dim" ───────────────────────────────────
    let mut vectors = HashMap::new();

    for (index, line) in lines.enumerate() {
        // header is line 1, so the first vector line is line 2
        let lineno = index + 2;
        let line =
            line.with_context(|| format!("Cannot read line {} of '{}'", lineno, path.display()))?;

        let mut fields = line.split_whitespace();
        let token = match fields.next() {
            Some(token) => token.to_string(),
            None => continue, // blank line
        };

        let vector: Vec<f32> = fields
            .map(str::parse)
            .collect::<Result<_, _>>()
            .with_context(|| format!("Bad float on line {} of '{}'", lineno, path.display()))?;

        ensure!(
            vector.len() == expected_dim,
            "line {} of '{}' has {} values, expected {}",
            lineno,
            path.display(),
            vector.len(),
            expected_dim,
        );

        vectors.insert(token, vector);
    }

    tracing::debug!(
        "Read {} pretrained vectors of dimension {} from '{}'",
        vectors.len(),
        expected_dim,
        path.display(),
    );

    Ok(EmbeddingFile { dim: expected_dim, vectors })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parses_tokens_and_vectors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embeddings.fr");
        fs::write(&path, "2 3\nthe 0.5 -0.25 1.0\ncat 0.0 0.125 -1.5\n").unwrap();

        let emb = read_embedding_file(&path, 3).unwrap();
        assert_eq!(emb.dim, 3);
        assert_eq!(emb.vectors.len(), 2);
        assert_eq!(emb.vectors["the"], vec![0.5, -0.25, 1.0]);
        assert_eq!(emb.vectors["cat"], vec![0.0, 0.125, -1.5]);
    }

    #[test]
    fn test_dimension_mismatch_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embeddings.fr");
        fs::write(&path, "1 300\nthe 0.5\n").unwrap();

        let err = read_embedding_file(&path, 100).unwrap_err();
        assert!(err.to_string().contains("wrong embedding size"));
    }

    #[test]
    fn test_short_vector_line_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embeddings.fr");
        fs::write(&path, "1 3\nthe 0.5 -0.25\n").unwrap();

        let err = read_embedding_file(&path, 3).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embeddings.fr");
        fs::write(&path, "").unwrap();

        assert!(read_embedding_file(&path, 3).is_err());
    }
}
