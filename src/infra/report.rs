// ============================================================
// Layer 6 — Preparation Report
// ============================================================
// Records per-corpus statistics to a CSV file as preparation
// runs, one row per tokenized corpus:
//
//   file,lines,tokens,unknown,oov_rate
//   train.fr,2007723,44547286,612904,0.013758
//   dev.fr,3003,68038,1204,0.017696
//   ...
//
// How to read the report:
//   - oov_rate near zero → the vocabulary covers the corpus
//   - oov_rate above a few percent → the vocabulary is too
//     small or was built from a different corpus
//
// Output files: {data_dir}/prep_report.csv
//               {data_dir}/prep_config.json (the run's settings)
// Rows append across runs, so re-running after adding corpora
// extends the same report. The config snapshot is overwritten
// by each run.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::corpus::CorpusStats;

/// Appends per-corpus statistics to a CSV report file.
pub struct ReportLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl ReportLogger {
    /// Create a new ReportLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("prep_report.csv");

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "file,lines,tokens,unknown,oov_rate")?;
            tracing::debug!("Created preparation report: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one corpus's statistics as a new row.
    pub fn log(&self, file: &str, stats: &CorpusStats) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;

        writeln!(
            f,
            "{},{},{},{},{:.6}",
            file,
            stats.lines,
            stats.tokens,
            stats.unknown,
            stats.oov_rate(),
        )?;

        tracing::debug!(
            "Logged '{}': {} lines, {} tokens, oov_rate={:.4}",
            file,
            stats.lines,
            stats.tokens,
            stats.oov_rate(),
        );

        Ok(())
    }

    /// Record the configuration the run used, next to the CSV.
    ///
    /// serde_json::to_string_pretty adds indentation so the
    /// snapshot is readable alongside the report.
    pub fn save_config(&self, cfg: &PrepareConfig) -> Result<()> {
        let path = self.csv_path.with_file_name("prep_config.json");

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved preparation config to '{}'", path.display());
        Ok(())
    }

    /// Return the path to the report CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_once_and_appends_rows() {
        let dir = tempfile::tempdir().unwrap();

        let logger = ReportLogger::new(dir.path()).unwrap();
        let stats = CorpusStats { lines: 2, tokens: 8, unknown: 1 };
        logger.log("train.fr", &stats).unwrap();

        // a second logger over the same directory must not rewrite the header
        let logger = ReportLogger::new(dir.path()).unwrap();
        logger.log("dev.fr", &stats).unwrap();

        let content = fs::read_to_string(logger.csv_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "file,lines,tokens,unknown,oov_rate");
        assert_eq!(lines[1], "train.fr,2,8,1,0.125000");
        assert_eq!(lines[2], "dev.fr,2,8,1,0.125000");
    }

    #[test]
    fn test_saves_a_readable_config_snapshot() {
        let dir = tempfile::tempdir().unwrap();

        let logger = ReportLogger::new(dir.path()).unwrap();
        logger.save_config(&PrepareConfig::default()).unwrap();

        let json = fs::read_to_string(dir.path().join("prep_config.json")).unwrap();
        let cfg: PrepareConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.trg_ext, "en");
        assert_eq!(cfg.src_vocab_size, 40000);
    }
}
