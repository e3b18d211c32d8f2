//! CLI tool for classifying mail as spam or ham
//!
//! Trains an in-memory model from directories of labeled mail files, then
//! scores messages or single words against it. Nothing is persisted: every
//! invocation retrains.
//!
//! # Usage
//!
//! ```bash
//! # Score messages
//! spam-filter --spam corpus/spam --ham corpus/ham classify inbox/*.eml
//!
//! # Show the words behind each score
//! spam-filter --spam corpus/spam --ham corpus/ham classify --explain msg.eml
//!
//! # Score single words
//! spam-filter --spam corpus/spam --ham corpus/ham word free meeting
//!
//! # Training summary as JSON
//! spam-filter --spam corpus/spam --ham corpus/ham stats --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use spam_rs::bayes::WordScore;
use spam_rs::config::{Config, LoggingConfig};
use spam_rs::{corpus, message, Model};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "spam-filter")]
#[command(about = "Classify mail as spam or ham", long_about = None)]
struct Cli {
    /// Directory of spam messages to train on (repeatable)
    #[arg(long = "spam", value_name = "DIR")]
    spam: Vec<PathBuf>,

    /// Directory of ham messages to train on (repeatable)
    #[arg(long = "ham", value_name = "DIR")]
    ham: Vec<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score mail files
    Classify {
        /// Mail files to score
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Number of most interesting words to combine
        #[arg(short = 'n', long)]
        samples: Option<usize>,
        /// List the words each score was built from
        #[arg(long)]
        explain: bool,
        /// Print one JSON object per file
        #[arg(long)]
        json: bool,
    },
    /// Score single words
    Word {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
        /// Print one JSON object per word
        #[arg(long)]
        json: bool,
    },
    /// Show training statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct FileScore<'a> {
    file: String,
    spamicity: f64,
    is_spam: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<&'a [WordScore]>,
}

#[derive(Serialize)]
struct SingleWordScore<'a> {
    word: &'a str,
    spamicity: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
        config.validate()?;
    }

    init_logging(&config.logging)?;
    info!("Starting spam-filter");

    let mut model = Model::with_config(config.model.clone())?;
    corpus::train_from_dirs(&mut model, &cli.spam, &cli.ham)
        .await
        .context("Failed to load training corpus")?;

    match cli.command {
        Commands::Classify {
            files,
            samples,
            explain,
            json,
        } => {
            let n_samples = samples.unwrap_or(config.model.n_samples);

            for file in &files {
                let payload = message::read_file(file).await?;
                let verdict = model.classify_text_detailed(&payload, n_samples)?;

                if json {
                    let record = FileScore {
                        file: file.display().to_string(),
                        spamicity: verdict.spamicity,
                        is_spam: verdict.is_spam(),
                        words: explain.then_some(verdict.words.as_slice()),
                    };
                    println!("{}", serde_json::to_string(&record)?);
                    continue;
                }

                let label = if verdict.is_spam() { "spam" } else { "ham" };
                println!("{:<40} {:.6} {}", file.display(), verdict.spamicity, label);

                if explain {
                    for word in &verdict.words {
                        println!("    {:<30} {:.6}", format!("{:?}", word.word), word.spamicity);
                    }
                }
            }
        }
        Commands::Word { words, json } => {
            for word in &words {
                let spamicity = model.classify_word(word)?;
                if json {
                    let record = SingleWordScore { word, spamicity };
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    println!("{:<30} {:.6}", word, spamicity);
                }
            }
        }
        Commands::Stats { json } => {
            let stats = model.stats();
            if json {
                println!("{}", stats.to_json()?);
            } else {
                println!("Spam messages:   {}", stats.spam_learned);
                println!("Ham messages:    {}", stats.ham_learned);
                println!("Spam vocabulary: {}", stats.spam_vocabulary);
                println!("Ham vocabulary:  {}", stats.ham_vocabulary);
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let level: Level = logging
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", logging.level))?;

    // Results go to stdout, logs to stderr
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => tracing::subscriber::set_global_default(builder.json().finish()),
        "compact" => tracing::subscriber::set_global_default(builder.compact().finish()),
        _ => tracing::subscriber::set_global_default(builder.pretty().finish()),
    }
    .context("Failed to set tracing subscriber")
}
