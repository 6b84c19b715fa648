//! Runs one codec job off the async runtime.
//!
//! The codec is synchronous, so a job runs on a blocking thread. Progress
//! reports cross back to the caller over an unbounded channel and are drained
//! on the caller's task until the job finishes.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::{Compressor, Decompressor, EngineConfig, Progress};
use crate::format::error::CodecError;
use crate::report::{JobReport, Operation};

#[derive(Debug, Clone)]
pub struct Job {
    pub operation: Operation,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Job {
    pub fn compress(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            operation: Operation::Compress,
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn decompress(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            operation: Operation::Decompress,
            input: input.into(),
            output: output.into(),
        }
    }

    /// Run on the current thread.
    pub fn execute<P: Progress + ?Sized>(
        &self,
        config: &EngineConfig,
        progress: &mut P,
    ) -> Result<JobReport, CodecError> {
        match self.operation {
            Operation::Compress => compress_file(&self.input, &self.output, config, progress),
            Operation::Decompress => decompress_file(&self.input, &self.output, config, progress),
        }
    }
}

pub fn compress_file<P: Progress + ?Sized>(
    input: &Path,
    output: &Path,
    config: &EngineConfig,
    progress: &mut P,
) -> Result<JobReport, CodecError> {
    let data = std::fs::read(input)?;
    let container = Compressor::new(config.clone()).compress(&data, progress)?;
    std::fs::write(output, &container)?;
    debug!("Wrote container {:?}", output);
    Ok(JobReport::new(Operation::Compress, data.len(), container.len()))
}

pub fn decompress_file<P: Progress + ?Sized>(
    input: &Path,
    output: &Path,
    config: &EngineConfig,
    progress: &mut P,
) -> Result<JobReport, CodecError> {
    let container = std::fs::read(input)?;
    let data = Decompressor::new(config.clone()).decompress(&container, progress)?;
    std::fs::write(output, &data)?;
    debug!("Wrote restored file {:?}", output);
    Ok(JobReport::new(Operation::Decompress, container.len(), data.len()))
}

/// Run `job` on a blocking thread, handing every progress report to
/// `on_progress` on the calling task.
pub async fn run_job<F>(job: Job, config: EngineConfig, mut on_progress: F) -> anyhow::Result<JobReport>
where
    F: FnMut(u8),
{
    info!("Starting {:?} job: {:?} -> {:?}", job.operation, job.input, job.output);

    let (tx, mut rx) = mpsc::unbounded_channel::<u8>();
    let description = format!("{:?} {:?}", job.operation, job.input);

    let handle = tokio::task::spawn_blocking(move || {
        let mut sink = |percent: u8| {
            // Receiver only goes away if the caller stopped listening
            let _ = tx.send(percent);
        };
        job.execute(&config, &mut sink)
    });

    while let Some(percent) = rx.recv().await {
        on_progress(percent);
    }

    let report = handle
        .await
        .context("codec worker panicked")?
        .with_context(|| format!("{} failed", description))?;

    info!(
        "Finished {:?} job: {} -> {} bytes",
        report.operation, report.input_bytes, report.output_bytes
    );
    Ok(report)
}
