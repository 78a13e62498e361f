use serde::{Deserialize, Serialize};
use std::fmt;

/// The three values parsed from a BLEU scoring run.
/// Sequence format in the script output:
///   BLEU = <score>, ... BP=<penalty>, ratio=<ratio>
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BleuScore {
    /// The BLEU score itself, 0-100
    pub score: f64,

    /// Brevity penalty, at most 1.0
    pub penalty: f64,

    /// Hypothesis / reference length ratio
    pub ratio: f64,
}

impl fmt::Display for BleuScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BLEU = {:.2} (BP={:.3}, ratio={:.3})",
            self.score, self.penalty, self.ratio
        )
    }
}
