// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `score`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::prepare_use_case::PrepareConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tokenize corpora into ids files and align pretrained embeddings
    Prepare(PrepareArgs),

    /// Score a hypotheses file against references with an external BLEU script
    Score(ScoreArgs),
}

/// All arguments for the `prepare` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Directory containing corpora, vocabularies, and embeddings
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Source language extensions, comma-separated (one encoder each)
    #[arg(long, value_delimiter = ',', default_value = "fr")]
    pub src_ext: Vec<String>,

    /// Target language extension
    #[arg(long, default_value = "en")]
    pub trg_ext: String,

    /// Source vocabulary size — selects vocab{size}.{ext} and
    /// names the .ids{size} output files
    #[arg(long, default_value_t = 40000)]
    pub src_vocab_size: usize,

    /// Target vocabulary size
    #[arg(long, default_value_t = 40000)]
    pub trg_vocab_size: usize,

    /// Filename prefix of the training corpora
    #[arg(long, default_value = "train")]
    pub train_prefix: String,

    /// Filename prefix of the dev corpora
    #[arg(long, default_value = "dev")]
    pub dev_prefix: String,

    /// One target train file per source extension
    /// ({prefix}.{src_ext}.{trg_ext}) instead of one shared file
    #[arg(long, default_value_t = false)]
    pub multi_task: bool,

    /// Pretrained embedding filename prefix ({prefix}.{ext});
    /// omit to skip embedding alignment entirely
    #[arg(long)]
    pub embedding_prefix: Option<String>,

    /// Expected embedding dimension — files declaring any other
    /// dimension are rejected
    #[arg(long, default_value_t = 100)]
    pub embedding_size: usize,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            data_dir: a.data_dir,
            src_ext: a.src_ext,
            trg_ext: a.trg_ext,
            src_vocab_size: a.src_vocab_size,
            trg_vocab_size: a.trg_vocab_size,
            train_prefix: a.train_prefix,
            dev_prefix: a.dev_prefix,
            multi_task: a.multi_task,
            embedding_prefix: a.embedding_prefix,
            embedding_size: a.embedding_size,
        }
    }
}

/// All arguments for the `score` command
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the BLEU scoring executable (multi-bleu.perl or compatible)
    #[arg(long)]
    pub bleu_script: String,

    /// File of hypothesis translations, one per line
    #[arg(long)]
    pub hypotheses: String,

    /// File of reference translations, one per line
    #[arg(long)]
    pub references: String,
}
