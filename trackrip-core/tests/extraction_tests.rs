// trackrip-core/tests/extraction_tests.rs
//
// Drives the extraction orchestrator against the mock ffmpeg spawner
// (feature "test-mocks") so no real ffmpeg binary is involved.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use trackrip_core::error::{CoreError, extract_start_error};
use trackrip_core::external::mocks::MockFfmpegSpawner;
use trackrip_core::extraction::{ExtractionRequest, Extractor};
use trackrip_core::streams::CodecType;

// Helper to create a dummy file with some content
fn create_dummy_file(dir: &Path, filename: &str) -> PathBuf {
    let file_path = dir.join(filename);
    let mut file = File::create(&file_path).expect("Failed to create dummy file");
    file.write_all(b"dummy content")
        .expect("Failed to write dummy content");
    file_path
}

fn request(source: &Path, index: u32, codec_type: CodecType) -> ExtractionRequest {
    ExtractionRequest {
        source_path: source.to_path_buf(),
        stream_index: index,
        codec_type,
    }
}

#[test]
fn test_extract_success_creates_new_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let source = create_dummy_file(dir.path(), "movie.mkv");

    let mock_spawner = MockFfmpegSpawner::new();
    mock_spawner.add_success_expectation("0:2", true);

    let extractor = Extractor::with_spawner(mock_spawner.clone());
    let expected = dir.path().join("movie-subtitle-2.srt");
    assert!(!expected.exists());

    let output = extractor.extract(&request(&source, 2, CodecType::Subtitle))?;

    assert_eq!(output, expected);
    assert!(output.exists());

    // Verify the copier invocation contract: overwrite disabled, one
    // stream-map selector, raw copy, output path last.
    let calls = mock_spawner.get_received_calls();
    assert_eq!(calls.len(), 1);
    let args = &calls[0];
    assert!(args.iter().any(|a| a == "-n"));
    let map_pos = args.iter().position(|a| a == "-map").unwrap();
    assert_eq!(args[map_pos + 1], "0:2");
    let codec_pos = args.iter().position(|a| a == "-c").unwrap();
    assert_eq!(args[codec_pos + 1], "copy");
    assert_eq!(args.last().unwrap(), &expected.to_string_lossy().into_owned());

    dir.close()?;
    Ok(())
}

#[test]
fn test_extract_twice_yields_two_distinct_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let source = create_dummy_file(dir.path(), "movie.mkv");

    let mock_spawner = MockFfmpegSpawner::new();
    mock_spawner.add_success_expectation("0:2", true);
    mock_spawner.add_success_expectation("0:2", true);

    let extractor = Extractor::with_spawner(mock_spawner);
    let req = request(&source, 2, CodecType::Subtitle);

    let first = extractor.extract(&req)?;
    let second = extractor.extract(&req)?;

    assert_eq!(first, dir.path().join("movie-subtitle-2.srt"));
    assert_eq!(second, dir.path().join("movie-subtitle-2-1.srt"));
    assert_ne!(first, second);
    assert!(first.exists());
    assert!(second.exists());

    dir.close()?;
    Ok(())
}

#[test]
fn test_extract_exit_error_carries_exact_code() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let source = create_dummy_file(dir.path(), "movie.mkv");

    let mock_spawner = MockFfmpegSpawner::new();
    mock_spawner.add_exit_error_expectation("0:9", 2);

    let extractor = Extractor::with_spawner(mock_spawner);
    let result = extractor.extract(&request(&source, 9, CodecType::Audio));

    match result {
        Err(CoreError::ExtractExit(status)) => assert_eq!(status.code(), Some(2)),
        other => panic!("Expected ExtractExit, got: {:?}", other),
    }

    // Nothing was written, so a later attempt starts from the same name.
    assert!(!dir.path().join("movie-audio-9.aac").exists());

    dir.close()?;
    Ok(())
}

#[test]
fn test_extract_spawn_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let source = create_dummy_file(dir.path(), "movie.mkv");

    let mock_spawner = MockFfmpegSpawner::new();
    mock_spawner.add_spawn_error_expectation("0:0", extract_start_error("mock spawn failure"));

    let extractor = Extractor::with_spawner(mock_spawner);
    let result = extractor.extract(&request(&source, 0, CodecType::Video));

    match result {
        Err(CoreError::ExtractStart(msg)) => assert!(msg.contains("mock spawn failure")),
        other => panic!("Expected ExtractStart, got: {:?}", other),
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_leftover_partial_file_counts_as_existing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let source = create_dummy_file(dir.path(), "movie.mkv");

    // Simulate a truncated output left behind by an earlier failed attempt.
    create_dummy_file(dir.path(), "movie-audio-1.aac");

    let mock_spawner = MockFfmpegSpawner::new();
    mock_spawner.add_success_expectation("0:1", true);

    let extractor = Extractor::with_spawner(mock_spawner);
    let output = extractor.extract(&request(&source, 1, CodecType::Audio))?;

    assert_eq!(output, dir.path().join("movie-audio-1-1.aac"));

    dir.close()?;
    Ok(())
}

#[test]
fn test_invalid_request_rejected_before_spawn() {
    let mock_spawner = MockFfmpegSpawner::new();
    let extractor = Extractor::with_spawner(mock_spawner.clone());

    let result = extractor.extract(&request(Path::new(""), 0, CodecType::Video));

    match result {
        Err(CoreError::InvalidRequest(_)) => {}
        other => panic!("Expected InvalidRequest, got: {:?}", other),
    }
    assert!(mock_spawner.get_received_calls().is_empty());
}
