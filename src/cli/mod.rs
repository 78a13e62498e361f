// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — tokenizes corpora and aligns embeddings
//   2. `score`   — runs an external BLEU script on a hypothesis file
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PrepareArgs, ScoreArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "nmt-prep",
    version = "0.1.0",
    about = "Prepare parallel corpora for neural machine translation, then score translations."
)]
pub struct Cli {
    /// The subcommand to run (prepare or score)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        let Cli { command } = self;
        match command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Score(args) => Self::run_score(args),
        }
    }

    /// Handles the `prepare` subcommand.
    /// Converts CLI args into a PrepareConfig and hands off to Layer 2.
    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Starting preparation of data in: {}", args.data_dir);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = PrepareUseCase::new(args.into());
        use_case.execute()?;

        println!("Preparation complete.");
        Ok(())
    }

    /// Handles the `score` subcommand.
    /// Runs the external BLEU script and prints the score triple.
    fn run_score(args: ScoreArgs) -> Result<()> {
        use crate::application::score_use_case::ScoreUseCase;
        use std::path::Path;

        let use_case = ScoreUseCase::new(&args.bleu_script);
        let bleu = use_case.execute(
            Path::new(&args.hypotheses),
            Path::new(&args.references),
        )?;

        println!("{bleu}");
        Ok(())
    }
}
