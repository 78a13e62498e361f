// ============================================================
// Layer 5 — Embedding Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one.
//
// What's in this layer:
//
//   reader.rs  — Parses word2vec-style text embedding files:
//                a "<count> <dimension>" header line, then one
//                "<token> <f32> ... <f32>" line per word.
//                Validates the declared dimension.
//
//   aligner.rs — Reorders the loaded vectors to a vocabulary's
//                id order, fills rows for missing tokens with
//                uniform random values, and converts each
//                aligned table to a Burn tensor of shape
//                [vocab_len, dim] on the CPU backend.
//
// Alignment runs once per language before training starts;
// there is no batching and no GPU involved.
//
// Reference: Mikolov et al. (2013) word2vec
//            Burn Book §2 (Tensors)

/// Pretrained embedding file parsing
pub mod reader;

/// Vocabulary alignment and tensor conversion
pub mod aligner;
