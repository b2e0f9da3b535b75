//! Local micro-batching stream runner
//!
//! # Architecture
//!
//! ```text
//!     ┌─────────────┐
//!     │   Reader    │  Single thread decodes input lines into messages
//!     └──────┬──────┘
//!            │ bounded channel (msg_tx → msg_rx)
//!            ▼
//!     ┌─────────────┐
//!     │   Batcher   │  Collects messages until the batch interval elapses
//!     └──────┬──────┘
//!            │ one batch at a time
//!            ▼
//!     ┌─────────────┐
//!     │ Worker pool │  rayon pool sized by the execution mode scores the batch
//!     └──────┬──────┘
//!            ▼
//!      stdout + batch file
//! ```
//!
//! The reader blocks when the channel is full, so a slow scorer throttles
//! the input. End of input flushes the last partial batch.

pub mod source;

pub use source::{read_messages, InputFormat, SourceStats};

use crate::config::AppConfig;
use crate::models::{BatchStats, Message};
use crate::pipeline::Pipeline;
use crate::reporters::{self, BatchWriter, OutputFormat};
use anyhow::{Context, Result};
use chrono::Utc;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use std::io::{BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Messages buffered between the reader and the batcher
const CHANNEL_CAPACITY: usize = 1024;

/// Totals for a whole stream run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub batches: usize,
    pub files_written: usize,
    pub messages: BatchStats,
    pub source: SourceStats,
}

/// Runs the pipeline over a line-oriented input in micro-batches.
pub struct StreamRunner {
    pipeline: Pipeline,
    language: String,
    batch_interval: Duration,
    workers: usize,
    app_name: String,
    input_format: InputFormat,
    output_format: OutputFormat,
    writer: Option<BatchWriter>,
}

impl StreamRunner {
    pub fn new(pipeline: Pipeline, config: &AppConfig) -> Self {
        Self {
            pipeline,
            language: config.language.clone(),
            batch_interval: config.batch_interval(),
            workers: config.execution_mode.workers(),
            app_name: config.application_name.clone(),
            input_format: InputFormat::default(),
            output_format: OutputFormat::default(),
            writer: Some(BatchWriter::new(&config.output)),
        }
    }

    pub fn with_input_format(mut self, format: InputFormat) -> Self {
        self.input_format = format;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Disable batch files; results only go to the output writer.
    pub fn without_save(mut self) -> Self {
        self.writer = None;
        self
    }

    /// Override the batch interval (used by tests to avoid long waits).
    pub fn with_batch_interval(mut self, interval: Duration) -> Self {
        self.batch_interval = interval;
        self
    }

    /// Consume `input` until it ends, printing each batch to `out`.
    pub fn run<R, W>(&self, input: R, out: &mut W) -> Result<StreamSummary>
    where
        R: BufRead + Send + 'static,
        W: Write,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("tweetmood-worker-{}", i))
            .build()?;

        info!(
            "{}: streaming with {} workers, {}s batches",
            self.app_name,
            self.workers,
            self.batch_interval.as_secs_f64()
        );

        let (msg_tx, msg_rx) = bounded::<Message>(CHANNEL_CAPACITY);
        let input_format = self.input_format;
        let default_lang = self.language.clone();

        // Reader thread: decodes lines and feeds the batcher
        let reader_handle = thread::spawn(move || {
            let stats = read_messages(input, input_format, &default_lang, |msg| {
                // Blocks when full; fails once the batcher is gone
                msg_tx.send(msg).is_ok()
            });
            drop(msg_tx);
            stats
        });

        let mut summary = StreamSummary::default();
        loop {
            let (batch, finished) = collect_batch(&msg_rx, self.batch_interval);
            if !batch.is_empty() {
                let (retained, stats) =
                    pool.install(|| self.pipeline.process_batch(&batch, &self.language));
                summary.batches += 1;
                summary.messages.absorb(&stats);
                debug!("Batch {}: {}", summary.batches, stats.summary());

                let rendered = reporters::report(&retained, self.output_format)?;
                out.write_all(rendered.as_bytes())
                    .context("Failed to write results")?;
                out.flush().context("Failed to write results")?;

                if let Some(writer) = &self.writer {
                    match writer.write(&retained, Utc::now()) {
                        Ok(Some(_)) => summary.files_written += 1,
                        Ok(None) => {}
                        Err(e) => warn!("Failed to save batch {}: {:#}", summary.batches, e),
                    }
                }
            }
            if finished {
                break;
            }
        }
        drop(msg_rx);

        summary.source = reader_handle.join().unwrap_or_else(|_| {
            warn!("Input reader thread panicked");
            SourceStats::default()
        });
        info!(
            "{}: {} batches, {}",
            self.app_name,
            summary.batches,
            summary.messages.summary()
        );
        Ok(summary)
    }
}

/// Receive messages until `interval` has elapsed or the channel closes.
///
/// Returns the batch and whether the input is exhausted.
fn collect_batch(rx: &Receiver<Message>, interval: Duration) -> (Vec<Message>, bool) {
    let deadline = Instant::now() + interval;
    let mut batch = Vec::new();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(msg) => batch.push(msg),
            Err(RecvTimeoutError::Timeout) => return (batch, false),
            Err(RecvTimeoutError::Disconnected) => return (batch, true),
        }
    }
}
