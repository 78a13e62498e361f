// ============================================================
// Layer 6 — External BLEU Scorer
// ============================================================
// Scores translations by shelling out to a BLEU script
// (multi-bleu.perl or compatible). The calling convention:
//
//   1. references  → temp file, one per line, passed as the
//                    script's single positional argument
//   2. hypotheses  → newline-joined on the script's stdin
//   3. stdout      → one line matching
//                    "BLEU = <score>, ... BP=<bp>, ratio=<ratio>"
//
// Both failure modes are fatal with no retry: a script that
// cannot be spawned errors at the Command, and output that
// does not match the pattern errors at the parse.
//
// The temp file is persisted rather than deleted on drop —
// the script needs a stable path, and cleanup is left to the
// caller or the OS temp dir policy.
//
// Reference: Papineni et al. (2002) BLEU
//            Rust Book §12 (Working with Processes)

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};
use tempfile::NamedTempFile;

use crate::domain::score::BleuScore;
use crate::domain::traits::Scorer;

/// Scores hypotheses against references through an external
/// BLEU script.
pub struct BleuScript {
    /// Path to the scoring executable
    script: PathBuf,
}

impl BleuScript {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self { script: script.into() }
    }
}

impl Scorer for BleuScript {
    fn score(&self, hypotheses: &[String], references: &[String]) -> Result<BleuScore> {
        // ── Step 1: Write references to a temp file ───────────────────────────
        let mut tmp = NamedTempFile::new().context("Cannot create reference temp file")?;
        for reference in references {
            writeln!(tmp, "{reference}").context("Cannot write reference temp file")?;
        }
        tmp.flush().context("Cannot flush reference temp file")?;

        // keep() disarms delete-on-drop: the script reads the file
        // by path, and the file outlives this call
        let (_file, ref_path) = tmp.keep().context("Cannot persist reference temp file")?;
        tracing::debug!("References written to '{}'", ref_path.display());

        // ── Step 2: Run the script, hypotheses on stdin ───────────────────────
        let mut child = Command::new(&self.script)
            .arg(&ref_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Cannot run BLEU script '{}'", self.script.display()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(hypotheses.join("\n").as_bytes())
                .context("Cannot write hypotheses to BLEU script stdin")?;
            // stdin drops here, closing the pipe so the script sees EOF
        }

        let output = child
            .wait_with_output()
            .context("BLEU script did not run to completion")?;

        // ── Step 3: Parse the score triple out of stdout ──────────────────────
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_bleu_output(&stdout)
    }
}

/// Parse "BLEU = <score>, ... BP=<bp>, ratio=<ratio>" into the
/// score triple. Fatal when the text does not match.
pub fn parse_bleu_output(output: &str) -> Result<BleuScore> {
    let pattern = Regex::new(r"BLEU = ([^,]*),.*BP=([^,]*), ratio=([^,]*)")
        .context("Invalid BLEU output pattern")?;

    let captures = pattern
        .captures(output)
        .ok_or_else(|| anyhow!("Unexpected BLEU script output: {:?}", output.trim()))?;

    let score: f64 = captures[1]
        .trim()
        .parse()
        .with_context(|| format!("Bad BLEU score in {:?}", output.trim()))?;
    let penalty: f64 = captures[2]
        .trim()
        .parse()
        .with_context(|| format!("Bad brevity penalty in {:?}", output.trim()))?;
    let ratio: f64 = captures[3]
        .trim()
        .parse()
        .with_context(|| format!("Bad length ratio in {:?}", output.trim()))?;

    Ok(BleuScore { score, penalty, ratio })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_the_score_triple() {
        let bleu = parse_bleu_output("BLEU = 24.5, 100/100, BP=0.98, ratio=1.01").unwrap();
        assert_eq!(bleu.score, 24.5);
        assert_eq!(bleu.penalty, 0.98);
        assert_eq!(bleu.ratio, 1.01);
    }

    #[test]
    fn test_parses_multi_bleu_style_output() {
        // multi-bleu.perl puts the tail fields in parentheses and
        // follows ratio with more fields
        let line = "BLEU = 24.50, 67.1/40.2/26.5/17.8 (BP=1.000, ratio=1.023, hyp_len=48, ref_len=47)";
        let bleu = parse_bleu_output(line).unwrap();
        assert_eq!(bleu.score, 24.5);
        assert_eq!(bleu.penalty, 1.0);
        assert_eq!(bleu.ratio, 1.023);
    }

    #[test]
    fn test_unparseable_output_is_fatal() {
        assert!(parse_bleu_output("Segmentation fault").is_err());
        assert!(parse_bleu_output("").is_err());
    }

    #[test]
    fn test_missing_script_fails_at_spawn() {
        let scorer = BleuScript::new("/no/such/bleu-script");
        let err = scorer
            .score(&["a".to_string()], &["a".to_string()])
            .unwrap_err();
        assert!(err.to_string().contains("/no/such/bleu-script"));
    }

    #[cfg(unix)]
    #[test]
    fn test_scores_through_a_real_subprocess() {
        use std::os::unix::fs::PermissionsExt;

        // A stand-in scorer: consumes its inputs like the real
        // script, then prints a fixed score line
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-bleu.sh");
        std::fs::write(
            &script,
            "#!/bin/sh\ncat \"$1\" > /dev/null\ncat > /dev/null\n\
             echo 'BLEU = 24.5, 100/100, BP=0.98, ratio=1.01'\n",
        )
        .unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();

        let hypotheses = vec!["the cat sat".to_string()];
        let references = vec!["the cat sat".to_string()];

        let bleu = BleuScript::new(&script)
            .score(&hypotheses, &references)
            .unwrap();
        assert_eq!(bleu.score, 24.5);
        assert_eq!(bleu.penalty, 0.98);
        assert_eq!(bleu.ratio, 1.01);
    }
}
