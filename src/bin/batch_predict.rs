use anyhow::Context;
use clap::Parser;
use heart_risk::utils::{logger, validation::Validate};
use heart_risk::{AppConfig, BatchScorer, ClassifierHandle, RiskEngine, RiskError};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "batch-predict")]
#[command(about = "Score a CSV of patients with the heart-risk rules and model")]
struct Args {
    /// CSV with one patient per row; columns use the form field names
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the scored CSV (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model artifact, overrides [model] path from the config
    #[arg(long)]
    model: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(model) = &args.model {
        config.model.path = model.clone();
    }
    config.validate()?;

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Scoring patients from: {}", args.input.display());

    let engine = RiskEngine::new(ClassifierHandle::load(config.model_path()));
    let mut scorer = BatchScorer::new(engine);

    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open '{}'", args.input.display()))?;

    let result = match &args.output {
        Some(path) => {
            let output = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            scorer.score(input, BufWriter::new(output))
        }
        None => scorer.score(input, std::io::stdout().lock()),
    };

    match result {
        Ok(summary) => {
            eprintln!(
                "✅ Scored {} patients, {} flagged by the model",
                summary.rows, summary.model_risk
            );
            Ok(())
        }
        Err(e) => {
            report(&e);
            std::process::exit(e.severity().exit_code().max(1));
        }
    }
}

fn report(e: &RiskError) {
    tracing::error!(
        "❌ Batch scoring failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}
