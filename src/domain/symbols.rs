// ============================================================
// Layer 3 — Reserved Vocabulary Symbols
// ============================================================
// Every vocabulary file produced by the upstream pipeline
// starts with the same four reserved tokens, so their ids are
// fixed process-wide:
//
//   0  _PAD  padding for batching sequences to equal length
//   1  _GO   sequence-start marker fed to the decoder
//   2  _EOS  sequence-end marker the decoder learns to emit
//   3  _UNK  substitute for any token absent from the vocabulary
//
// These are conventions, not something the loader enforces:
// a vocabulary file is taken exactly as written, and a file
// that does not start with the reserved tokens simply assigns
// other tokens to the low ids.
//
// Reference: Sutskever et al. (2014) Sequence to Sequence Learning

/// Padding token, id 0
pub const PAD: &str = "_PAD";

/// Sequence-start token, id 1
pub const GO: &str = "_GO";

/// Sequence-end token, id 2
pub const EOS: &str = "_EOS";

/// Unknown-token sentinel, id 3
pub const UNK: &str = "_UNK";

pub const PAD_ID: u32 = 0;
pub const GO_ID: u32 = 1;
pub const EOS_ID: u32 = 2;
pub const UNK_ID: u32 = 3;

/// The reserved tokens in id order. Vocabulary construction
/// upstream prepends exactly this list before the corpus tokens.
pub const START_VOCAB: [&str; 4] = [PAD, GO, EOS, UNK];
