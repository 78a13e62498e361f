// ============================================================
// Layer 4 — Filename Resolver
// ============================================================
// Computes every file path a preparation run touches from the
// data directory and the naming convention:
//
//   raw corpora    {prefix}.{ext}
//   ids corpora    {prefix}.ids{vocab_size}.{ext}
//   vocabularies   vocab{vocab_size}.{ext}
//   embeddings     {embedding_prefix}.{ext}
//
// Multi-task runs train one decoder per encoder, so the target
// train file splits into one {prefix}.{src_ext}.{trg_ext} per
// source extension instead of one shared {prefix}.{trg_ext}.
// Dev target files stay shared in both modes.
//
// Pure string construction: no I/O, and no check that any of
// the computed paths exist. Identical inputs always produce
// identical path sets.

use std::path::{Path, PathBuf};

use crate::application::prepare_use_case::PrepareConfig;
use crate::domain::files::DataFiles;

/// Resolve the full set of dataset file paths for a run.
pub fn resolve_filenames(cfg: &PrepareConfig) -> DataFiles {
    let dir = Path::new(&cfg.data_dir);
    let train = &cfg.train_prefix;
    let dev = &cfg.dev_prefix;

    // ── Source side: one file per source extension ────────────────────────────
    let src_train: Vec<PathBuf> = cfg
        .src_ext
        .iter()
        .map(|ext| corpus_path(dir, train, ext))
        .collect();

    let src_train_ids: Vec<PathBuf> = cfg
        .src_ext
        .iter()
        .map(|ext| ids_path(dir, train, cfg.src_vocab_size, ext))
        .collect();

    let src_dev: Vec<PathBuf> = cfg
        .src_ext
        .iter()
        .map(|ext| corpus_path(dir, dev, ext))
        .collect();

    let src_dev_ids: Vec<PathBuf> = cfg
        .src_ext
        .iter()
        .map(|ext| ids_path(dir, dev, cfg.src_vocab_size, ext))
        .collect();

    let src_vocab: Vec<PathBuf> = cfg
        .src_ext
        .iter()
        .map(|ext| vocab_path(dir, cfg.src_vocab_size, ext))
        .collect();

    // ── Target side ───────────────────────────────────────────────────────────
    // Multi-task: one target train file per source extension,
    // named {prefix}.{src_ext}.{trg_ext}. Otherwise one shared file.
    let (trg_train, trg_train_ids) = if cfg.multi_task {
        let train_files = cfg
            .src_ext
            .iter()
            .map(|ext| corpus_path(dir, train, &format!("{}.{}", ext, cfg.trg_ext)))
            .collect();
        let ids_files = cfg
            .src_ext
            .iter()
            .map(|ext| {
                ids_path(dir, train, cfg.trg_vocab_size, &format!("{}.{}", ext, cfg.trg_ext))
            })
            .collect();
        (train_files, ids_files)
    } else {
        (
            vec![corpus_path(dir, train, &cfg.trg_ext)],
            vec![ids_path(dir, train, cfg.trg_vocab_size, &cfg.trg_ext)],
        )
    };

    let trg_dev = corpus_path(dir, dev, &cfg.trg_ext);
    let trg_dev_ids = ids_path(dir, dev, cfg.trg_vocab_size, &cfg.trg_ext);
    let trg_vocab = vocab_path(dir, cfg.trg_vocab_size, &cfg.trg_ext);

    DataFiles {
        src_train,
        trg_train,
        src_dev,
        trg_dev,
        src_vocab,
        trg_vocab,
        src_train_ids,
        trg_train_ids,
        src_dev_ids,
        trg_dev_ids,
    }
}

/// Pretrained embedding file for one language: {prefix}.{ext}
pub fn embedding_path(data_dir: &Path, prefix: &str, ext: &str) -> PathBuf {
    data_dir.join(format!("{prefix}.{ext}"))
}

fn corpus_path(dir: &Path, prefix: &str, ext: &str) -> PathBuf {
    dir.join(format!("{prefix}.{ext}"))
}

fn ids_path(dir: &Path, prefix: &str, vocab_size: usize, ext: &str) -> PathBuf {
    dir.join(format!("{prefix}.ids{vocab_size}.{ext}"))
}

fn vocab_path(dir: &Path, vocab_size: usize, ext: &str) -> PathBuf {
    dir.join(format!("vocab{vocab_size}.{ext}"))
}
