//! Run command - score a message stream in micro-batches

use crate::config::AppConfig;
use crate::lexicon::Lexicons;
use crate::pipeline::Pipeline;
use crate::reporters::OutputFormat;
use crate::stream::{InputFormat, StreamRunner};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Flags of the run command that are not part of [`AppConfig`]
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub plain: bool,
    pub format: OutputFormat,
    pub save: bool,
    pub color: bool,
}

pub fn run(config: &AppConfig, input: &Path, options: RunOptions) -> Result<()> {
    // Lexicons are required before anything is read
    let lexicons = Lexicons::load(&config.lexicon).context("Cannot start without lexicons")?;

    let mut pipeline = Pipeline::new(lexicons);
    if !options.color {
        pipeline = pipeline.without_color();
    }

    let mut runner = StreamRunner::new(pipeline, config)
        .with_output_format(options.format)
        .with_input_format(if options.plain {
            InputFormat::Plain
        } else {
            InputFormat::JsonLines
        });
    if !options.save {
        runner = runner.without_save();
    }

    let reader = open_input(input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner.run(reader, &mut out)?;
    Ok(())
}

fn open_input(input: &Path) -> Result<Box<dyn BufRead + Send>> {
    if input.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(input)
        .with_context(|| format!("Failed to open input {}", input.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
