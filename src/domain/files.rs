// ============================================================
// Layer 3 — Resolved Dataset Files
// ============================================================
// The fixed-field record of every file path a preparation run
// touches. All paths are computed up front by the resolver in
// the data layer; nothing here checks that the files exist.
//
// Source-side fields hold one entry per source extension (a
// multi-source setup trains one encoder per language). Target
// train files hold one shared entry, or one per source
// extension in the multi-task setting. Dev target files are
// always shared.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Every file path used by a preparation run, with explicit
/// named fields so call sites read like the naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFiles {
    /// Raw training corpora, one per source extension: {train}.{ext}
    pub src_train: Vec<PathBuf>,

    /// Raw target training corpora: {train}.{trg_ext}, or one
    /// {train}.{ext}.{trg_ext} per source extension when multi-task
    pub trg_train: Vec<PathBuf>,

    /// Raw dev corpora, one per source extension: {dev}.{ext}
    pub src_dev: Vec<PathBuf>,

    /// Raw target dev corpus (always shared): {dev}.{trg_ext}
    pub trg_dev: PathBuf,

    /// Vocabulary files, one per source extension: vocab{size}.{ext}
    pub src_vocab: Vec<PathBuf>,

    /// Target vocabulary file: vocab{size}.{trg_ext}
    pub trg_vocab: PathBuf,

    /// Tokenized training corpora: {train}.ids{size}.{ext}
    pub src_train_ids: Vec<PathBuf>,

    /// Tokenized target training corpora, mirroring trg_train
    pub trg_train_ids: Vec<PathBuf>,

    /// Tokenized dev corpora: {dev}.ids{size}.{ext}
    pub src_dev_ids: Vec<PathBuf>,

    /// Tokenized target dev corpus: {dev}.ids{size}.{trg_ext}
    pub trg_dev_ids: PathBuf,
}
