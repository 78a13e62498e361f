// ============================================================
// Layer 2 — ScoreUseCase
// ============================================================
// Reads a hypotheses file and a references file (one sentence
// per line each) and hands them to the scorer. The use case
// only sees the Scorer trait, so the external-script scorer
// could be swapped for a native one without touching this
// file.
//
// A line-count mismatch between the two files is worth a
// warning but not an abort: the scoring script applies its own
// pairing rules and reports accordingly.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::score::BleuScore;
use crate::domain::traits::Scorer;
use crate::infra::bleu::BleuScript;

/// Scores a hypotheses file against a references file with an
/// external BLEU script.
pub struct ScoreUseCase {
    script: PathBuf,
}

impl ScoreUseCase {
    /// Create a new ScoreUseCase for the given scoring script
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self { script: script.into() }
    }

    /// Read both files and run the scorer.
    pub fn execute(&self, hypotheses: &Path, references: &Path) -> Result<BleuScore> {
        let hypotheses = read_sentences(hypotheses)?;
        let references = read_sentences(references)?;

        if hypotheses.len() != references.len() {
            tracing::warn!(
                "{} hypotheses vs {} references",
                hypotheses.len(),
                references.len(),
            );
        }

        tracing::info!(
            "Scoring {} hypotheses with '{}'",
            hypotheses.len(),
            self.script.display(),
        );

        let scorer = BleuScript::new(&self.script);
        scorer.score(&hypotheses, &references)
    }
}

/// Read a one-sentence-per-line file into a Vec of sentences.
fn read_sentences(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read sentences from '{}'", path.display()))?;

    Ok(content.lines().map(|line| line.trim_end().to_string()).collect())
}
