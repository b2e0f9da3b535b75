//! Init command - write a config file and starter lexicons

use crate::config::{AppConfig, TOML_CONFIG_FILE};
use crate::lexicon::{BUILTIN_NEGATIVE_WORDS, BUILTIN_POSITIVE_WORDS, BUILTIN_STOP_WORDS};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
///
/// Lexicons go to `lexicon_dir` when given (as passed, like every other
/// command treats `--lexicon-dir`), otherwise to `[lexicon].root` under
/// `path`. The generated config points at wherever they were written.
pub fn run(path: &Path, lexicon_dir: Option<&Path>, force: bool) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let dir = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    println!("\nInitializing tweetmood in {}\n", style(dir.display()).cyan());

    let mut defaults = AppConfig::default();
    let lexicon_dir = match lexicon_dir {
        Some(custom) => {
            std::fs::create_dir_all(custom)
                .with_context(|| format!("Failed to create {}", custom.display()))?;
            let custom = custom
                .canonicalize()
                .with_context(|| format!("Path does not exist: {}", custom.display()))?;
            defaults.lexicon.root = custom.to_string_lossy().into_owned();
            custom
        }
        None => dir.join(&defaults.lexicon.root),
    };

    let config = format!(
        "# Tweetmood configuration\n\
         # execution-mode: local-all-cores, local, local[*] or local[N]\n\n{}",
        defaults.to_toml()?
    );
    write_file(&dir.join(TOML_CONFIG_FILE), &config, force)?;

    std::fs::create_dir_all(&lexicon_dir)
        .with_context(|| format!("Failed to create {}", lexicon_dir.display()))?;
    write_file(&lexicon_dir.join(&defaults.lexicon.stop), BUILTIN_STOP_WORDS, force)?;
    write_file(
        &lexicon_dir.join(&defaults.lexicon.positive),
        BUILTIN_POSITIVE_WORDS,
        force,
    )?;
    write_file(
        &lexicon_dir.join(&defaults.lexicon.negative),
        BUILTIN_NEGATIVE_WORDS,
        force,
    )?;

    println!("\nNext steps:");
    println!(
        "  {} Edit the word lists",
        style(lexicon_dir.join("*.dat").display()).cyan()
    );
    println!(
        "  {} Score a stream",
        style("tweetmood run tweets.jsonl").cyan()
    );
    Ok(())
}

fn write_file(path: &Path, content: &str, force: bool) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if path.exists() && !force {
        println!("{} {} already exists", style("○").dim(), style(name).cyan());
        return Ok(());
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} Created {}", style("✓").green(), style(name).cyan());
    Ok(())
}
