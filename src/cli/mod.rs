//! CLI command definitions and handlers

mod init;
mod run;
mod score;

use crate::config::{AppConfig, ExecutionMode};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Parse and validate a batch interval in seconds (1-3600)
fn parse_batch_interval(s: &str) -> Result<u64, String> {
    let n: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("batch interval must be at least 1 second".to_string())
    } else if n > 3600 {
        Err("batch interval cannot exceed 3600 seconds".to_string())
    } else {
        Ok(n)
    }
}

fn parse_execution_mode(s: &str) -> Result<ExecutionMode, String> {
    s.parse().map_err(|e: crate::TweetmoodError| e.to_string())
}

/// Tweetmood - lexicon sentiment scoring for tweet streams
#[derive(Parser, Debug)]
#[command(name = "tweetmood")]
#[command(
    version,
    about = "Score a stream of tweets against positive/negative word lists and print the non-neutral ones",
    after_help = "\
Examples:
  tweetmood init                                   Write tweetmood.toml and starter lexicons
  tweetmood run tweets.jsonl                       Score JSON-lines tweets in 10s batches
  cat tweets.txt | tweetmood run --plain           Score plain text, one tweet per line
  tweetmood run - --format json --no-save          JSON records on stdout, no batch files
  tweetmood score \"What a wonderful day\"           Show every stage for one text"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Directory holding tweetmood.toml and resolving relative paths (default: current directory)
    #[arg(long, short = 'C', global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Lexicon directory (overrides [lexicon].root)
    #[arg(long, global = true)]
    pub lexicon_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream messages from a file or stdin and print non-neutral ones
    #[command(after_help = "\
Input is one message per line: JSON objects {\"text\": ..., \"lang\": ...}
by default, or raw text with --plain. Only messages in the configured
language (default: en) are scored.")]
    Run {
        /// Input file, or - for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Treat each line as raw text in the target language
        #[arg(long)]
        plain: bool,

        /// Output format: text or json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Seconds per micro-batch (1-3600)
        #[arg(long, value_parser = parse_batch_interval)]
        batch_interval: Option<u64>,

        /// Directory for saved batch files
        #[arg(long, short = 'o')]
        output_dir: Option<PathBuf>,

        /// Do not write batch files
        #[arg(long)]
        no_save: bool,

        /// Print score tags without ANSI colors
        #[arg(long)]
        no_color: bool,

        /// Worker pool: local-all-cores, local, local[*] or local[N]
        #[arg(long, value_parser = parse_execution_mode)]
        execution_mode: Option<ExecutionMode>,

        /// Application name shown in logs
        #[arg(long)]
        app_name: Option<String>,

        /// Target language tag
        #[arg(long)]
        language: Option<String>,
    },

    /// Show tokens, meaningful words, score and display line for one text
    Score {
        /// Text to score
        text: String,

        /// Print score tags without ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Write an example tweetmood.toml and the starter lexicons
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Config,

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => init::run(&cli.dir, cli.lexicon_dir.as_deref(), force),

        Commands::Version => {
            println!("tweetmood {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        Commands::Config => {
            let config = load_config(&cli.dir, cli.lexicon_dir.as_deref())?;
            print!("{}", config.to_toml()?);
            Ok(())
        }

        Commands::Score { text, no_color } => {
            let config = load_config(&cli.dir, cli.lexicon_dir.as_deref())?;
            score::run(&config, &text, no_color)
        }

        Commands::Run {
            input,
            plain,
            format,
            batch_interval,
            output_dir,
            no_save,
            no_color,
            execution_mode,
            app_name,
            language,
        } => {
            let mut config = load_config(&cli.dir, cli.lexicon_dir.as_deref())?;

            // CLI flags override file and environment
            if let Some(mode) = execution_mode {
                config.execution_mode = mode;
            }
            if let Some(name) = app_name {
                config.application_name = name;
            }
            if let Some(lang) = language {
                config.language = lang;
            }
            if let Some(secs) = batch_interval {
                config.batch_interval_secs = secs;
            }
            if let Some(dir) = output_dir {
                config.output.dir = dir.to_string_lossy().into_owned();
            }
            config.validate()?;

            run::run(
                &config,
                &input,
                run::RunOptions {
                    plain,
                    format: format.parse()?,
                    save: !no_save,
                    color: !no_color,
                },
            )
        }
    }
}

/// Load config from `dir`, resolve relative paths against it and apply
/// the global lexicon override.
fn load_config(dir: &Path, lexicon_dir: Option<&Path>) -> Result<AppConfig> {
    let mut config = AppConfig::load(dir)
        .with_context(|| format!("Invalid configuration in {}", dir.display()))?;

    if let Some(lexicon_dir) = lexicon_dir {
        config.lexicon.root = lexicon_dir.to_string_lossy().into_owned();
    } else {
        config.lexicon.root = resolve(dir, &config.lexicon.root);
    }
    config.output.dir = resolve(dir, &config.output.dir);
    Ok(config)
}

fn resolve(dir: &Path, path: &str) -> String {
    let p = Path::new(path);
    if p.is_absolute() {
        path.to_string()
    } else {
        dir.join(p).to_string_lossy().into_owned()
    }
}
