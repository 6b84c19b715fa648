use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use huffpack::config::{HuffpackConfig, DEFAULT_CONFIG_FILE};
use huffpack::report::{InspectReport, JobReport, VerifyReport};
use huffpack::utils::io;
use huffpack::worker::{run_job, Job};

#[derive(Parser)]
#[command(name = "huffpack")]
#[command(about = "Static Huffman file compressor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Config file path")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Percent between progress updates (overrides config)")]
    pub progress_step: Option<u8>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress a file into a container
    Compress {
        input: PathBuf,
        #[arg(short, long, help = "Output path (default: INPUT.<extension>)")]
        output: Option<PathBuf>,
    },
    /// Restore a file from a container
    Decompress {
        input: PathBuf,
        #[arg(short, long, help = "Output path (default: INPUT without extension)")]
        output: Option<PathBuf>,
    },
    /// Compress and decompress in memory, then compare checksums
    Verify {
        input: PathBuf,
    },
    /// Show container header and code lengths
    Inspect {
        input: PathBuf,
    },
    /// Write a default config file
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: String,
    },
}

pub async fn run(cli: Cli, config: HuffpackConfig) -> Result<()> {
    let json = cli.json;

    match cli.command {
        Commands::Compress { input, output } => {
            let output = output.unwrap_or_else(|| compressed_path(&input, &config.extension));
            let report = run_with_progress(Job::compress(input, output.clone()), &config, json).await?;
            print_job(&report, &output, json)
        }
        Commands::Decompress { input, output } => {
            let output = output.unwrap_or_else(|| restored_path(&input, &config.extension));
            let report = run_with_progress(Job::decompress(input, output.clone()), &config, json).await?;
            print_job(&report, &output, json)
        }
        Commands::Verify { input } => {
            let data = io::read_all(&input)
                .await
                .with_context(|| format!("reading {:?}", input))?;
            let engine = config.engine();
            let report = tokio::task::spawn_blocking(move || VerifyReport::run(&data, &engine))
                .await
                .context("verify worker panicked")??;

            if json {
                print_json(&report)?;
            } else {
                println!("🔍 Verifying {:?}", input);
                println!("   Original:  {} bytes (crc32 {:08x})", report.original_bytes, report.original_crc32);
                println!("   Container: {} bytes", report.container_bytes);
                println!("   Restored:  crc32 {:08x}", report.restored_crc32);
                println!("{}", if report.matches { "✅ Round trip OK" } else { "❌ Round trip MISMATCH" });
            }

            if !report.matches {
                anyhow::bail!("round trip of {:?} did not reproduce the input", input);
            }
            Ok(())
        }
        Commands::Inspect { input } => {
            let data = io::read_all(&input)
                .await
                .with_context(|| format!("reading {:?}", input))?;
            let report = InspectReport::from_container(&data)
                .with_context(|| format!("parsing container {:?}", input))?;

            if json {
                print_json(&report)?;
            } else {
                println!("📦 Container {:?}", input);
                println!("   Tree:    {} bits, {} symbols", report.tree_bit_length, report.alphabet_size);
                println!("   Payload: {} bytes, {} bits, {} padding", report.payload_bytes, report.payload_bits, report.payload_padding);
                println!("   Longest code: {} bits", report.max_code_length);
                for (symbol, len) in &report.code_lengths {
                    println!("   {:#04x} {:>3}", symbol, len);
                }
            }
            Ok(())
        }
        Commands::GenerateConfig { output } => {
            let config = HuffpackConfig::default();
            config.save(&output)?;

            if json {
                println!("{}", serde_json::json!({"success": true, "config_file": output}));
            } else {
                println!("✅ Config written to {}", output);
            }
            Ok(())
        }
    }
}

async fn run_with_progress(job: Job, config: &HuffpackConfig, json: bool) -> Result<JobReport> {
    let show = config.show_progress && !json;
    run_job(job, config.engine(), |percent| {
        if show {
            eprint!("\rprogress: {:>3}%", percent);
            if percent == 100 {
                eprintln!();
            }
        }
    })
    .await
}

fn print_job(report: &JobReport, output: &Path, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }
    info!("Output written to {:?}", output);
    println!("✅ {:?} finished: {:?}", report.operation, output);
    println!("   Size before: {} B", report.input_bytes);
    println!("   Size after:  {} B ({:.1}%)", report.output_bytes, report.ratio * 100.0);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `file.txt` -> `file.txt.huff`
pub fn compressed_path(input: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// `file.txt.huff` -> `file.txt`; anything else gets `.out` appended.
pub fn restored_path(input: &Path, extension: &str) -> PathBuf {
    if input.extension().is_some_and(|e| e == extension) {
        input.with_extension("")
    } else {
        compressed_path(input, "out")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_paths() {
        assert_eq!(compressed_path(Path::new("a/b.txt"), "huff"), PathBuf::from("a/b.txt.huff"));
        assert_eq!(restored_path(Path::new("a/b.txt.huff"), "huff"), PathBuf::from("a/b.txt"));
        assert_eq!(restored_path(Path::new("a/b.bin"), "huff"), PathBuf::from("a/b.bin.out"));
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["huffpack", "compress", "in.txt", "--json", "-o", "x.huff"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Compress { input, output } => {
                assert_eq!(input, PathBuf::from("in.txt"));
                assert_eq!(output, Some(PathBuf::from("x.huff")));
            }
            _ => panic!("expected compress"),
        }
    }
}
