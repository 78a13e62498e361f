// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - BleuScript implements Scorer via an external script
//   - A future native scorer could implement Scorer in-process
//   - The application layer only sees Scorer
//     and works with both without any changes
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::score::BleuScore;

// ─── Scorer ───────────────────────────────────────────────────────────────────
/// Any component that can score hypothesis translations against
/// reference translations.
///
/// Implementations:
///   - BleuScript → shells out to an external scoring script
///   - (future) a native BLEU implementation
pub trait Scorer {
    /// Score one hypothesis per reference, paired by position.
    /// Fatal on any failure of the underlying scorer.
    fn score(&self, hypotheses: &[String], references: &[String]) -> Result<BleuScore>;
}
