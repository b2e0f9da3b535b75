//! Score command - show every pipeline stage for one text

use crate::config::AppConfig;
use crate::lexicon::Lexicons;
use crate::models::Polarity;
use crate::pipeline::Pipeline;
use anyhow::{Context, Result};
use console::style;

pub fn run(config: &AppConfig, text: &str, no_color: bool) -> Result<()> {
    let lexicons = Lexicons::load(&config.lexicon).context("Cannot score without lexicons")?;
    let mut pipeline = Pipeline::new(lexicons);
    if no_color {
        pipeline = pipeline.without_color();
    }

    let trace = pipeline.trace(text);
    println!("tokens:     {}", trace.tokens.join(" "));
    println!("meaningful: {}", trace.meaningful.join(" "));
    println!(
        "score:      {} ({})",
        trace.score,
        Polarity::of(trace.score)
    );
    match trace.display {
        Some(line) => println!("{}", line),
        None => {
            let reason = if trace.meaningful.is_empty() {
                "no meaningful words"
            } else {
                "neutral score"
            };
            println!("{}", style(format!("dropped: {}", reason)).dim());
        }
    }
    Ok(())
}
