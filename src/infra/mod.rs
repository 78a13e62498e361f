// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// External and cross-cutting concerns:
//
//   bleu.rs   — External BLEU scoring
//               Writes references to a temp file, pipes the
//               hypotheses into the scoring script's stdin,
//               and parses the score triple out of its stdout.
//               This is the only subprocess in the crate.
//
//   report.rs — Preparation report logging
//               Appends per-corpus statistics (lines, tokens,
//               unknown count, OOV rate) to a CSV file so a
//               run leaves a record of what it tokenized.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// External BLEU scoring script invocation
pub mod bleu;

/// Per-corpus preparation statistics CSV logger
pub mod report;
