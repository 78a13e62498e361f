// ============================================================
// Layer 4 — Tokenizer
// ============================================================
// Converts between sentence strings and token-id sequences.
//
// Tokenization is whitespace splitting, nothing more: no
// lowercasing, no punctuation splitting. The corpus is expected
// to arrive already tokenized (one space between tokens), so
// "I have a dog ." with vocabulary ids {I: 4, have: 5, a: 6,
// dog: 7, .: 8} becomes [4, 5, 6, 7, 8].
//
// Tokens absent from the vocabulary map to the unknown
// sentinel; that substitution is silent and is not an error.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use crate::domain::symbols;
use crate::domain::vocabulary::Vocabulary;

/// Map a sentence to token ids, one id per whitespace-separated
/// token. Unknown tokens become UNK_ID.
pub fn sentence_to_ids(sentence: &str, vocab: &Vocabulary) -> Vec<u32> {
    sentence
        .split_whitespace()
        .map(|token| vocab.id_or_unk(token))
        .collect()
}

/// Map token ids back to a space-joined sentence.
/// Out-of-range ids render as the unknown symbol.
pub fn ids_to_sentence(ids: &[u32], vocab: &Vocabulary) -> String {
    ids.iter()
        .map(|&id| vocab.token(id).unwrap_or(symbols::UNK))
        .collect::<Vec<_>>()
        .join(" ")
}
