// ============================================================
// Layer 4 — Corpus Tokenization
// ============================================================
// Streams a raw corpus file into its ids counterpart:
//
//   train.fr                    train.ids30000.fr
//     le chien dort        →      45 1093 2204
//     un chat .            →      50 3 7
//
// One output line per input line, ids space-joined, unknown
// tokens already substituted by the tokenizer. The file is
// processed line by line through buffered readers so corpora
// of tens of millions of sentences never sit in memory.
//
// An ids file that already exists is taken as up to date and
// skipped — preparation is re-runnable over a partially
// prepared data directory.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::data::tokenizer::sentence_to_ids;
use crate::domain::symbols::UNK_ID;
use crate::domain::vocabulary::Vocabulary;

/// Per-corpus counts gathered while tokenizing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusStats {
    /// Sentences processed (= lines written)
    pub lines: usize,

    /// Total tokens across all sentences
    pub tokens: usize,

    /// Tokens that mapped to the unknown sentinel
    pub unknown: usize,
}

impl CorpusStats {
    /// Fraction of tokens that fell out of the vocabulary
    pub fn oov_rate(&self) -> f64 {
        if self.tokens == 0 {
            0.0
        } else {
            self.unknown as f64 / self.tokens as f64
        }
    }
}

/// Tokenize `raw` into `ids`, one line of space-joined token ids
/// per sentence. Returns None when the ids file already exists.
pub fn corpus_to_ids(
    raw: &Path,
    ids: &Path,
    vocab: &Vocabulary,
) -> Result<Option<CorpusStats>> {
    if ids.exists() {
        tracing::info!("Ids file '{}' already exists, skipping", ids.display());
        return Ok(None);
    }

    tracing::info!("Tokenizing '{}' into '{}'", raw.display(), ids.display());

    let reader = BufReader::new(
        File::open(raw).with_context(|| format!("Cannot open corpus file '{}'", raw.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(ids).with_context(|| format!("Cannot create ids file '{}'", ids.display()))?,
    );

    let mut stats = CorpusStats::default();

    for line in reader.lines() {
        let sentence = line
            .with_context(|| format!("Cannot read line {} of '{}'", stats.lines + 1, raw.display()))?;

        let token_ids = sentence_to_ids(&sentence, vocab);
        stats.lines += 1;
        stats.tokens += token_ids.len();
        stats.unknown += token_ids.iter().filter(|&&id| id == UNK_ID).count();

        let rendered: Vec<String> = token_ids.iter().map(|id| id.to_string()).collect();
        writeln!(writer, "{}", rendered.join(" "))
            .with_context(|| format!("Cannot write to ids file '{}'", ids.display()))?;

        if stats.lines % 100_000 == 0 {
            tracing::info!("  tokenizing line {}", stats.lines);
        }
    }

    writer
        .flush()
        .with_context(|| format!("Cannot flush ids file '{}'", ids.display()))?;

    tracing::debug!(
        "Tokenized {} sentences, {} tokens ({} unknown)",
        stats.lines,
        stats.tokens,
        stats.unknown,
    );

    Ok(Some(stats))
}
