// ============================================================
// Layer 5 — Embedding Aligner
// ============================================================
// Reorders a pretrained embedding table to match a vocabulary's
// id order, so row i of the result is the vector for the token
// with id i. Tokens the embedding file does not cover get a
// random row drawn uniformly from [-√3, √3] — that range has
// variance 1, matching the typical normalisation of the
// pretrained vectors, so untrained rows start at the same scale.
//
// The aligned table is built as a flat row-major Vec<f32> and
// reshaped into a [vocab_len, dim] tensor, the same
// flatten-then-reshape route the rest of the stack uses for
// batched tensors.
//
// Per run there is one aligned table per language (source
// extensions first, then the target), with None marking
// languages that have no embedding file on disk.
//
// Reference: Burn Book §2 (Tensors)
//            rand crate documentation

use anyhow::Result;
use burn::prelude::*;
use rand::Rng;
use std::path::Path;

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::filenames::embedding_path;
use crate::data::vocab_loader::load_vocabulary;
use crate::domain::files::DataFiles;
use crate::domain::vocabulary::Vocabulary;
use crate::embedding::reader::{read_embedding_file, EmbeddingFile};

/// CPU backend for the preprocessing pass — alignment is a
/// one-shot transformation, not a training loop.
pub type PrepBackend = burn::backend::NdArray;

/// Align pretrained vectors to a vocabulary's id order.
///
/// Returns a flat row-major table of vocab.len() * emb.dim
/// values: row i is the pretrained vector for token i when the
/// file covers it, otherwise uniform random in [-√3, √3].
pub fn align_to_vocabulary(vocab: &Vocabulary, emb: &EmbeddingFile) -> Vec<f32> {
    let bound = 3.0_f32.sqrt();
    let mut rng = rand::thread_rng();
    let mut table = Vec::with_capacity(vocab.len() * emb.dim);

    // Rows are filled in id order over the reversed mapping, so
    // duplicate vocabulary lines get their token's vector too
    for token in vocab.tokens() {
        match emb.vectors.get(token) {
            Some(vector) => table.extend_from_slice(vector),
            None => table.extend((0..emb.dim).map(|_| rng.gen_range(-bound..bound))),
        }
    }

    table
}

/// Reshape a flat aligned table into a [rows, dim] tensor.
pub fn to_tensor<B: Backend>(
    table: Vec<f32>,
    rows: usize,
    dim: usize,
    device: &B::Device,
) -> Tensor<B, 2> {
    Tensor::<B, 1>::from_floats(table.as_slice(), device).reshape([rows, dim])
}

/// Load and align pretrained embeddings for every language of a
/// run: source extensions first, then the target extension.
///
/// Returns:
///   - Ok(None) when no embedding prefix is configured
///   - otherwise one entry per language, in extension order,
///     where None marks a language with no embedding file
pub fn load_embeddings<B: Backend>(
    cfg: &PrepareConfig,
    files: &DataFiles,
    device: &B::Device,
) -> Result<Option<Vec<Option<Tensor<B, 2>>>>> {
    let Some(prefix) = &cfg.embedding_prefix else {
        return Ok(None);
    };

    let data_dir = Path::new(&cfg.data_dir);

    // Languages in result order: sources then target
    let mut extensions: Vec<&str> = cfg.src_ext.iter().map(String::as_str).collect();
    extensions.push(&cfg.trg_ext);

    let mut vocab_paths: Vec<&std::path::PathBuf> = files.src_vocab.iter().collect();
    vocab_paths.push(&files.trg_vocab);

    let mut tables = Vec::with_capacity(extensions.len());

    for (ext, vocab_path) in extensions.iter().zip(vocab_paths) {
        let filename = embedding_path(data_dir, prefix, ext);

        // No embedding file for this language is a skip, not an error
        if !filename.is_file() {
            tracing::debug!("No pretrained embeddings at '{}', skipping", filename.display());
            tables.push(None);
            continue;
        }

        let emb = read_embedding_file(&filename, cfg.embedding_size)?;
        let vocab = load_vocabulary(vocab_path)?;

        let rows = vocab.len();
        let table = align_to_vocabulary(&vocab, &emb);
        tables.push(Some(to_tensor::<B>(table, rows, emb.dim, device)));

        tracing::info!(
            "Aligned embeddings for '{}': [{}, {}] ({} pretrained)",
            ext,
            rows,
            emb.dim,
            emb.vectors.len(),
        );
    }

    Ok(Some(tables))
}

/// load_embeddings on the default CPU backend, so callers above
/// this layer never name a Burn backend themselves.
pub fn load_default_embeddings(
    cfg: &PrepareConfig,
    files: &DataFiles,
) -> Result<Option<Vec<Option<Tensor<PrepBackend, 2>>>>> {
    let device = burn::backend::ndarray::NdArrayDevice::default();
    load_embeddings::<PrepBackend>(cfg, files, &device)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filenames::resolve_filenames;
    use std::collections::HashMap;
    use std::fs;

    type TestBackend = burn::backend::NdArray;

    fn vocab_of(tokens: &[&str]) -> Vocabulary {
        Vocabulary::from_tokens(tokens.iter().map(|t| t.to_string()).collect())
    }

    fn embedding_of(entries: &[(&str, &[f32])], dim: usize) -> EmbeddingFile {
        let vectors: HashMap<String, Vec<f32>> = entries
            .iter()
            .map(|(token, vector)| (token.to_string(), vector.to_vec()))
            .collect();
        EmbeddingFile { dim, vectors }
    }

    #[test]
    fn test_present_rows_are_copied_verbatim() {
        let vocab = vocab_of(&["_PAD", "the", "cat"]);
        let emb = embedding_of(&[("the", &[0.5, -0.25]), ("cat", &[1.0, 2.0])], 2);

        let table = align_to_vocabulary(&vocab, &emb);
        assert_eq!(table.len(), 3 * 2);
        assert_eq!(&table[2..4], &[0.5, -0.25]); // row 1 = "the"
        assert_eq!(&table[4..6], &[1.0, 2.0]); // row 2 = "cat"
    }

    #[test]
    fn test_absent_rows_stay_within_the_uniform_bound() {
        let vocab = vocab_of(&["_PAD", "_GO", "_EOS", "_UNK"]);
        let emb = embedding_of(&[], 8);

        let table = align_to_vocabulary(&vocab, &emb);
        let bound = 3.0_f32.sqrt();
        assert_eq!(table.len(), 4 * 8);
        assert!(table.iter().all(|v| v.abs() <= bound));
    }

    #[test]
    fn test_tensor_has_vocab_by_dim_shape() {
        let vocab = vocab_of(&["_PAD", "the", "cat"]);
        let emb = embedding_of(&[("the", &[0.5, -0.25])], 2);

        let table = align_to_vocabulary(&vocab, &emb);
        let device = Default::default();
        let tensor = to_tensor::<TestBackend>(table, vocab.len(), emb.dim, &device);
        assert_eq!(tensor.dims(), [3, 2]);
    }

    #[test]
    fn test_no_prefix_means_not_requested() {
        let cfg = PrepareConfig::default();
        let files = resolve_filenames(&cfg);
        let result = load_default_embeddings(&cfg, &files).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_languages_without_files_are_skipped_per_language() {
        let dir = tempfile::tempdir().unwrap();

        let cfg = PrepareConfig {
            data_dir: dir.path().to_string_lossy().into_owned(),
            src_ext: vec!["fr".to_string()],
            trg_ext: "en".to_string(),
            src_vocab_size: 4,
            trg_vocab_size: 4,
            embedding_prefix: Some("embeddings".to_string()),
            embedding_size: 2,
            ..PrepareConfig::default()
        };
        let files = resolve_filenames(&cfg);

        // French has a vocabulary and an embedding file; English has neither
        fs::write(dir.path().join("vocab4.fr"), "_PAD\n_GO\n_EOS\n_UNK\n").unwrap();
        fs::write(dir.path().join("embeddings.fr"), "1 2\n_UNK 0.5 0.5\n").unwrap();

        let tables = load_default_embeddings(&cfg, &files).unwrap().unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].as_ref().unwrap().dims(), [4, 2]);
        assert!(tables[1].is_none());
    }
}
