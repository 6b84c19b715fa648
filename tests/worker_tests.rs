use std::fs;

use huffpack::engine::{EngineConfig, NoProgress};
use huffpack::report::Operation;
use huffpack::worker::{compress_file, decompress_file, run_job, Job};
use huffpack::CodecError;
use tempfile::tempdir;

#[test]
fn file_round_trip_reports_sizes() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("input.txt");
    let packed = dir.path().join("input.txt.huff");
    let restored = dir.path().join("restored.txt");

    let text = "Hello, World! ".repeat(200);
    fs::write(&input, &text).expect("write input");

    let config = EngineConfig::default();
    let report = compress_file(&input, &packed, &config, &mut NoProgress).unwrap();
    assert_eq!(report.operation, Operation::Compress);
    assert_eq!(report.input_bytes, text.len() as u64);
    assert_eq!(report.output_bytes, fs::metadata(&packed).unwrap().len());
    assert!(report.ratio < 1.0);

    let report = decompress_file(&packed, &restored, &config, &mut NoProgress).unwrap();
    assert_eq!(report.operation, Operation::Decompress);
    assert_eq!(fs::read_to_string(&restored).unwrap(), text);
}

#[test]
fn empty_file_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("empty.txt");
    fs::write(&input, b"").expect("write input");

    let err = compress_file(&input, &dir.path().join("empty.huff"), &EngineConfig::default(), &mut NoProgress)
        .unwrap_err();
    assert!(matches!(err, CodecError::EmptyInput));
    assert!(!dir.path().join("empty.huff").exists());
}

#[tokio::test]
async fn job_runs_off_thread_and_streams_progress() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("data.bin");
    let packed = dir.path().join("data.bin.huff");
    let restored = dir.path().join("data.bin.out");

    let data: Vec<u8> = (0..20_000u32).map(|i| (i % 7) as u8 * 31).collect();
    fs::write(&input, &data).expect("write input");

    let mut seen = Vec::new();
    let report = run_job(Job::compress(&input, &packed), EngineConfig::default(), |p| seen.push(p))
        .await
        .unwrap();
    assert_eq!(report.input_bytes, data.len() as u64);
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(seen.last(), Some(&100));

    let mut seen = Vec::new();
    run_job(Job::decompress(&packed, &restored), EngineConfig::default(), |p| seen.push(p))
        .await
        .unwrap();
    assert_eq!(seen.last(), Some(&100));
    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[tokio::test]
async fn job_failure_surfaces_codec_error() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("broken.huff");
    fs::write(&input, [0u8, 0]).expect("write input");

    let err = run_job(
        Job::decompress(&input, dir.path().join("out")),
        EngineConfig::default(),
        |_| {},
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CodecError>(),
        Some(CodecError::TruncatedHeader)
    ));
}
