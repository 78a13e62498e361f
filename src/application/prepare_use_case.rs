// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preparation pipeline in order:
//
//   Step 1: Resolve the dataset file paths   (Layer 4 - data)
//   Step 2: Open the preparation report      (Layer 6 - infra)
//   Step 3: Tokenize source corpora          (Layer 4 - data)
//   Step 4: Tokenize target corpora          (Layer 4 - data)
//   Step 5: Align pretrained embeddings      (Layer 5 - embedding)
//
// Missing raw corpus files are skipped with a warning so a
// partially populated data directory (say, dev files arriving
// before train files) can still be prepared incrementally.
// Missing vocabulary files stay fatal: without the vocabulary
// every id written would be the unknown sentinel.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    corpus::corpus_to_ids,
    filenames::resolve_filenames,
    vocab_loader::load_vocabulary,
};
use crate::domain::vocabulary::Vocabulary;
use crate::embedding::aligner::load_default_embeddings;
use crate::infra::report::ReportLogger;

// ─── Preparation Configuration ───────────────────────────────────────────────
// Everything a preparation run needs to know.
// Serialisable so a run's settings can be recorded alongside
// its outputs if a driver wants to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub data_dir: String,
    pub src_ext: Vec<String>,
    pub trg_ext: String,
    pub src_vocab_size: usize,
    pub trg_vocab_size: usize,
    pub train_prefix: String,
    pub dev_prefix: String,
    pub multi_task: bool,
    pub embedding_prefix: Option<String>,
    pub embedding_size: usize,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            src_ext: vec!["fr".to_string()],
            trg_ext: "en".to_string(),
            src_vocab_size: 40000,
            trg_vocab_size: 40000,
            train_prefix: "train".to_string(),
            dev_prefix: "dev".to_string(),
            multi_task: false,
            embedding_prefix: None,
            embedding_size: 100,
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the full preparation pipeline.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    /// Create a new PrepareUseCase with the given configuration
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the full preparation pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Resolve every path the run will touch ─────────────────────
        let files = resolve_filenames(cfg);
        tracing::info!(
            "Preparing '{}': {} source language(s) -> '{}'",
            cfg.data_dir,
            cfg.src_ext.len(),
            cfg.trg_ext,
        );

        // ── Step 2: Open the preparation report ───────────────────────────────
        // The report records per-corpus stats and a snapshot of
        // the settings this run used
        let report = ReportLogger::new(&cfg.data_dir)?;
        report.save_config(cfg)?;

        // ── Step 3: Source corpora ────────────────────────────────────────────
        // Train and dev for one language share its vocabulary
        for (i, ext) in cfg.src_ext.iter().enumerate() {
            let vocab = load_vocabulary(&files.src_vocab[i])?;
            tracing::info!("Source '{}': vocabulary of {} tokens", ext, vocab.len());

            prepare_corpus(&files.src_train[i], &files.src_train_ids[i], &vocab, &report)?;
            prepare_corpus(&files.src_dev[i], &files.src_dev_ids[i], &vocab, &report)?;
        }

        // ── Step 4: Target corpora ────────────────────────────────────────────
        // One shared train file, or one per source in multi-task mode;
        // the dev file is always shared
        let trg_vocab = load_vocabulary(&files.trg_vocab)?;
        tracing::info!("Target '{}': vocabulary of {} tokens", cfg.trg_ext, trg_vocab.len());

        for (raw, ids) in files.trg_train.iter().zip(&files.trg_train_ids) {
            prepare_corpus(raw, ids, &trg_vocab, &report)?;
        }
        prepare_corpus(&files.trg_dev, &files.trg_dev_ids, &trg_vocab, &report)?;

        // ── Step 5: Pretrained embeddings (optional) ──────────────────────────
        // Skipped entirely unless an embedding prefix is configured;
        // languages without an embedding file are skipped one by one
        if let Some(tables) = load_default_embeddings(cfg, &files)? {
            let mut extensions: Vec<&str> = cfg.src_ext.iter().map(String::as_str).collect();
            extensions.push(&cfg.trg_ext);

            for (ext, table) in extensions.iter().zip(&tables) {
                match table {
                    Some(table) => {
                        let [rows, dim] = table.dims();
                        tracing::info!("Embeddings '{}': aligned [{}, {}]", ext, rows, dim);
                    }
                    None => tracing::info!("Embeddings '{}': none on disk", ext),
                }
            }
        }

        tracing::info!("Preparation report: '{}'", report.csv_path().display());
        Ok(())
    }
}

/// Tokenize one corpus file if it exists, and record its stats.
fn prepare_corpus(
    raw: &Path,
    ids: &Path,
    vocab: &Vocabulary,
    report: &ReportLogger,
) -> Result<()> {
    if !raw.exists() {
        tracing::warn!("Corpus file '{}' not found, skipping", raw.display());
        return Ok(());
    }

    if let Some(stats) = corpus_to_ids(raw, ids, vocab)? {
        let name = raw
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw.display().to_string());
        report.log(&name, &stats)?;

        tracing::info!(
            "  {}: {} sentences, {} tokens, oov_rate={:.4}",
            name,
            stats.lines,
            stats.tokens,
            stats.oov_rate(),
        );
    }

    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prepares_a_small_data_directory() {
        let dir = tempfile::tempdir().unwrap();

        fs::write(dir.path().join("vocab6.fr"), "_PAD\n_GO\n_EOS\n_UNK\nle\nchat\n").unwrap();
        fs::write(dir.path().join("vocab6.en"), "_PAD\n_GO\n_EOS\n_UNK\nthe\ncat\n").unwrap();
        fs::write(dir.path().join("train.fr"), "le chat\n").unwrap();
        fs::write(dir.path().join("train.en"), "the cat\n").unwrap();
        // no dev files: those are skipped with a warning

        let cfg = PrepareConfig {
            data_dir: dir.path().to_string_lossy().into_owned(),
            src_vocab_size: 6,
            trg_vocab_size: 6,
            ..PrepareConfig::default()
        };

        PrepareUseCase::new(cfg).execute().unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("train.ids6.fr")).unwrap(),
            "4 5\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("train.ids6.en")).unwrap(),
            "4 5\n"
        );

        // one report row per tokenized corpus
        let report = fs::read_to_string(dir.path().join("prep_report.csv")).unwrap();
        assert_eq!(report.lines().count(), 3);
    }

    #[test]
    fn test_missing_vocabulary_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PrepareConfig {
            data_dir: dir.path().to_string_lossy().into_owned(),
            ..PrepareConfig::default()
        };

        let err = PrepareUseCase::new(cfg).execute().unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
