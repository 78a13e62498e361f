// ============================================================
// Layer 3 — Vocabulary Domain Type
// ============================================================
// An ordered, bijective mapping between token strings and
// integer ids. The id of a token is its zero-based line number
// in the vocabulary file it was loaded from:
//
//   file:           ids:
//     _PAD            {"_PAD": 0, "_GO": 1, "dog": 2, "cat": 3}
//     _GO             reversed: ["_PAD", "_GO", "dog", "cat"]
//     dog
//     cat
//
// Duplicate lines: the FIRST occurrence wins the lookup.
// A duplicate token keeps its slot in the id -> token list
// (indices stay line-ordered) but never wins token -> id.
// Every token that wins its lookup therefore round-trips:
// token(id(t)) == t.
//
// Reference: Rust Book §8 (HashMaps and Vectors)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::symbols::UNK_ID;

/// Ordered token <-> id mapping.
///
/// Construction happens in the data layer (from a vocabulary
/// file); this type only holds the two directions of the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// token -> id; first occurrence of a duplicate token wins
    token_to_id: HashMap<String, u32>,

    /// id -> token, in file line order (one entry per line)
    id_to_token: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from an ordered token list.
    /// Token ids are the positions in the list.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let mut token_to_id = HashMap::with_capacity(tokens.len());

        for (id, token) in tokens.iter().enumerate() {
            // or_insert keeps the first-seen id for duplicates
            token_to_id.entry(token.clone()).or_insert(id as u32);
        }

        Self { token_to_id, id_to_token: tokens }
    }

    /// Look up the id of a token. None if the token is unknown.
    pub fn id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    /// Look up the id of a token, substituting the unknown
    /// sentinel for tokens not in the vocabulary.
    pub fn id_or_unk(&self, token: &str) -> u32 {
        self.id(token).unwrap_or(UNK_ID)
    }

    /// Look up the token at an id. None if the id is out of range.
    pub fn token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }

    /// All tokens in id order (the reversed mapping).
    pub fn tokens(&self) -> &[String] {
        &self.id_to_token
    }

    /// Number of entries, counting duplicate lines.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symbols::{EOS_ID, GO_ID, PAD_ID, START_VOCAB, UNK_ID};

    fn vocab_of(tokens: &[&str]) -> Vocabulary {
        Vocabulary::from_tokens(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_ids_follow_line_order() {
        let v = vocab_of(&["dog", "cat"]);
        assert_eq!(v.id("dog"), Some(0));
        assert_eq!(v.id("cat"), Some(1));
        assert_eq!(v.token(1), Some("cat"));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_round_trip_for_every_unique_token() {
        let v = vocab_of(&["_PAD", "the", "quick", "fox"]);
        for token in v.tokens() {
            let id = v.id(token).unwrap();
            assert_eq!(v.token(id), Some(token.as_str()));
        }
    }

    #[test]
    fn test_reserved_symbols_take_the_low_ids() {
        // A vocabulary that starts with the reserved list assigns
        // them ids 0..=3, matching the fixed constants
        let v = vocab_of(&START_VOCAB);
        assert_eq!(v.id("_PAD"), Some(PAD_ID));
        assert_eq!(v.id("_GO"), Some(GO_ID));
        assert_eq!(v.id("_EOS"), Some(EOS_ID));
        assert_eq!(v.id("_UNK"), Some(UNK_ID));
    }

    #[test]
    fn test_duplicate_tokens_keep_first_seen_id() {
        let v = vocab_of(&["dog", "cat", "dog"]);
        // lookup resolves to the first line
        assert_eq!(v.id("dog"), Some(0));
        // the duplicate line still occupies its slot
        assert_eq!(v.token(2), Some("dog"));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_unknown_token_maps_to_unk_sentinel() {
        let v = vocab_of(&["dog"]);
        assert_eq!(v.id("zebra"), None);
        assert_eq!(v.id_or_unk("zebra"), UNK_ID);
    }

    #[test]
    fn test_out_of_range_id_has_no_token() {
        let v = vocab_of(&["dog"]);
        assert_eq!(v.token(99), None);
    }
}
